use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::config::{catalog::DeveloperCatalogCustomization, perspective::Perspective};

/// Branding and feature customization of the console.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Customization {
    pub branding: String,
    #[serde(rename = "documentationBaseURL")]
    pub documentation_base_url: String,
    pub custom_product_name: String,
    pub custom_logo_file: String,

    /// Categories and types shown in the developer catalog.
    pub developer_catalog: Option<DeveloperCatalogCustomization>,
    pub project_access: ProjectAccess,
    pub quick_starts: QuickStarts,
    /// Actions of the "Add" page in the developer perspective.
    pub add_page: AddPage,
    /// Perspectives users can pick in the perspective switcher.
    pub perspectives: Vec<Perspective>,
    pub capabilities: Vec<Capability>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectAccess {
    /// Cluster roles offered when granting access to a project.
    pub available_cluster_roles: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct QuickStarts {
    /// IDs of quick starts which are hidden.
    pub disabled: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddPage {
    /// IDs of actions which are not shown to users.
    pub disabled_actions: Vec<String>,
}

/// An optional console feature which can be toggled on or off.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Capability {
    pub name: CapabilityName,
    pub visibility: CapabilityVisibility,
}

#[derive(Clone, Copy, Debug, Deserialize, Display, EnumString, Eq, Hash, PartialEq, Serialize)]
pub enum CapabilityName {
    LightspeedButton,
    GettingStartedBanner,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CapabilityVisibility {
    pub state: CapabilityState,
}

#[derive(Clone, Copy, Debug, Deserialize, Display, EnumString, Eq, PartialEq, Serialize)]
pub enum CapabilityState {
    Enabled,
    Disabled,
}
