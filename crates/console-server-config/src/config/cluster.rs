use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Information about the cluster, such as the public URLs of the API server and the console.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClusterInfo {
    pub console_base_address: String,
    pub console_base_path: String,
    #[serde(rename = "masterPublicURL")]
    pub master_public_url: String,
    pub control_plane_topology: ControlPlaneTopology,
    pub release_version: String,
    pub node_architectures: Vec<String>,
    pub node_operating_systems: Vec<String>,
    #[serde(rename = "copiedCSVsDisabled")]
    pub copied_csvs_disabled: bool,
}

/// Topology of the control plane. An unknown topology is rendered as an empty string.
#[derive(Clone, Copy, Debug, Default, Deserialize, Display, EnumString, Eq, PartialEq, Serialize)]
pub enum ControlPlaneTopology {
    #[default]
    #[serde(rename = "")]
    #[strum(serialize = "")]
    Unspecified,
    HighlyAvailable,
    SingleReplica,
    External,
}

/// Hosts of the monitoring stack the console talks to.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MonitoringInfo {
    pub alertmanager_user_workload_host: String,
    pub alertmanager_tenancy_host: String,
}
