//! Typed schema of the console server configuration document.
//!
//! The types in here are plain values without any validation. Use
//! [`ConfigBuilder`](crate::builder::ConfigBuilder) to resolve administrator input into a
//! [`Config`] and [`crate::yaml`] to render it.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use crate::config::{
    auth::{Auth, Providers, Session},
    catalog::{
        CatalogTypesState, DeveloperCatalogCategory, DeveloperCatalogCustomization,
        DeveloperCatalogSubcategory, DeveloperCatalogTypes,
    },
    cluster::{ClusterInfo, ControlPlaneTopology, MonitoringInfo},
    csp::DirectiveType,
    customization::{
        AddPage, Capability, CapabilityName, CapabilityState, CapabilityVisibility, Customization,
        ProjectAccess, QuickStarts,
    },
    list::{NonEmptyVec, OptionalList},
    perspective::{
        Perspective, PerspectiveState, PerspectiveVisibility, PinnedResourceReference,
        ResourceAttributesAccessReview,
    },
    proxy::{Proxy, ProxyService},
    serving::ServingInfo,
};

mod auth;
mod catalog;
mod cluster;
mod csp;
mod customization;
mod list;
mod perspective;
mod proxy;
mod serving;

pub const API_VERSION: &str = "console.openshift.io/v1";
pub const KIND: &str = "ConsoleConfig";

/// The top-level console server configuration.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub api_version: String,
    pub kind: String,
    pub serving_info: ServingInfo,
    pub cluster_info: ClusterInfo,
    pub auth: Auth,
    pub session: Session,
    pub customization: Customization,
    pub providers: Providers,
    pub monitoring_info: MonitoringInfo,
    /// Console plugin name to the base URL the plugin is served from.
    pub plugins: BTreeMap<String, String>,
    pub i18n_namespaces: Vec<String>,
    pub proxy: Proxy,
    pub content_security_policy: BTreeMap<DirectiveType, Vec<String>>,
    pub telemetry: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_version: API_VERSION.to_owned(),
            kind: KIND.to_owned(),
            serving_info: ServingInfo::default(),
            cluster_info: ClusterInfo::default(),
            auth: Auth::default(),
            session: Session::default(),
            customization: Customization::default(),
            providers: Providers::default(),
            monitoring_info: MonitoringInfo::default(),
            plugins: BTreeMap::new(),
            i18n_namespaces: Vec::new(),
            proxy: Proxy::default(),
            content_security_policy: BTreeMap::new(),
            telemetry: BTreeMap::new(),
        }
    }
}
