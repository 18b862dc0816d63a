use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::config::list::OptionalList;

/// Customization of the developer catalog.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DeveloperCatalogCustomization {
    /// Categories shown in the developer catalog. When unset, the console uses its built-in
    /// categories.
    pub categories: OptionalList<DeveloperCatalogCategory>,

    /// Enables or disables sub-catalog types. When omitted, all types are shown.
    pub types: DeveloperCatalogTypes,
}

/// A top-level developer catalog category.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DeveloperCatalogCategory {
    /// Identifier used for deep links. 1-32 URL safe characters (`A-Z`, `a-z`, `0-9`, `-`, `_`).
    pub id: String,
    /// Display label, 1-64 characters.
    pub label: String,
    /// A category shows every item sharing at least one tag with it.
    pub tags: Vec<String>,
    pub subcategories: Vec<DeveloperCatalogSubcategory>,
}

/// A child category. Shares the identifier, label and tag rules of [`DeveloperCatalogCategory`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DeveloperCatalogSubcategory {
    pub id: String,
    pub label: String,
    pub tags: Vec<String>,
}

/// Selects which sub-catalog types (e.g. `Devfile`, `HelmChart`, `BuilderImage`) are shown.
///
/// Only the list matching [`Self::state`] is meaningful. The other one is ignored.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct DeveloperCatalogTypes {
    pub state: Option<CatalogTypesState>,
    /// Types shown to users. A type missing from a non-empty list stays hidden until added.
    pub enabled: OptionalList<String>,
    /// Types hidden from users.
    pub disabled: OptionalList<String>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, EnumString, Eq, PartialEq, Serialize)]
pub enum CatalogTypesState {
    #[default]
    Enabled,
    Disabled,
}
