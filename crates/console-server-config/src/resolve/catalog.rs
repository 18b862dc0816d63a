use std::collections::HashSet;

use snafu::{ResultExt, Snafu, ensure};

use crate::{
    config::{
        CatalogTypesState, DeveloperCatalogCategory, DeveloperCatalogCustomization,
        DeveloperCatalogSubcategory, DeveloperCatalogTypes, OptionalList,
    },
    resolve::deduplicate,
    validation,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("invalid id of developer catalog category {id:?}"))]
    InvalidCategoryId { source: validation::Errors, id: String },

    #[snafu(display("invalid label of developer catalog category {id:?}"))]
    InvalidCategoryLabel { source: validation::Errors, id: String },

    #[snafu(display("developer catalog category {id:?} is defined more than once"))]
    DuplicateCategoryId { id: String },

    #[snafu(display(
        "developer catalog category {category:?} defines the subcategory {id:?} more than once"
    ))]
    DuplicateSubcategoryId { category: String, id: String },
}

/// The catalog types a user gets to see.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CatalogTypeVisibility {
    /// Every type is shown, no filtering takes place.
    All,

    /// No type is shown.
    Nothing,

    /// Exactly the listed types are shown.
    Only(Vec<String>),

    /// Every type except the listed ones is shown.
    ///
    /// Only the console knows the complete set of types, so the subtraction is left to it.
    AllExcept(Vec<String>),
}

/// Resolves which catalog types are visible.
///
/// Only the list selected by the state is considered, the other one is ignored. A missing state
/// behaves like [`CatalogTypesState::Enabled`].
pub fn resolve_types(types: &DeveloperCatalogTypes) -> CatalogTypeVisibility {
    match types.state.unwrap_or_default() {
        CatalogTypesState::Enabled => match &types.enabled {
            OptionalList::Unset => CatalogTypeVisibility::All,
            OptionalList::Empty => CatalogTypeVisibility::Nothing,
            OptionalList::NonEmpty(ids) => {
                CatalogTypeVisibility::Only(deduplicate(ids.iter().cloned()))
            }
        },
        CatalogTypesState::Disabled => match &types.disabled {
            OptionalList::Unset | OptionalList::Empty => CatalogTypeVisibility::Nothing,
            OptionalList::NonEmpty(ids) => {
                CatalogTypeVisibility::AllExcept(deduplicate(ids.iter().cloned()))
            }
        },
    }
}

/// Validates the developer catalog customization and normalizes it for the console.
///
/// The resolved types always carry an explicit state and only the list belonging to that state.
pub fn resolve_developer_catalog(
    catalog: DeveloperCatalogCustomization,
) -> Result<DeveloperCatalogCustomization> {
    let categories = catalog.categories.map_items(resolve_categories)?;

    Ok(DeveloperCatalogCustomization {
        categories,
        types: normalize_types(catalog.types),
    })
}

fn normalize_types(types: DeveloperCatalogTypes) -> DeveloperCatalogTypes {
    let state = types.state.unwrap_or_default();
    let (active, inactive) = match state {
        CatalogTypesState::Enabled => (types.enabled, types.disabled),
        CatalogTypesState::Disabled => (types.disabled, types.enabled),
    };

    if !inactive.is_unset() {
        tracing::debug!(%state, "ignoring the catalog type list which does not match the state");
    }

    let active = match active {
        OptionalList::NonEmpty(ids) => OptionalList::from_items(deduplicate(ids.into_vec())),
        other => other,
    };

    match state {
        CatalogTypesState::Enabled => DeveloperCatalogTypes {
            state: Some(state),
            enabled: active,
            disabled: OptionalList::Unset,
        },
        CatalogTypesState::Disabled => DeveloperCatalogTypes {
            state: Some(state),
            enabled: OptionalList::Unset,
            disabled: active,
        },
    }
}

fn resolve_categories(
    categories: Vec<DeveloperCatalogCategory>,
) -> Result<Vec<DeveloperCatalogCategory>> {
    let mut ids = HashSet::new();

    categories
        .into_iter()
        .map(|category| -> Result<DeveloperCatalogCategory> {
            validate_category_meta(&category.id, &category.label)?;
            ensure!(
                ids.insert(category.id.clone()),
                DuplicateCategoryIdSnafu { id: category.id }
            );

            let subcategories = resolve_subcategories(&category.id, category.subcategories)?;

            Ok(DeveloperCatalogCategory {
                id: category.id,
                label: category.label,
                tags: deduplicate(category.tags),
                subcategories,
            })
        })
        .collect()
}

fn resolve_subcategories(
    category: &str,
    subcategories: Vec<DeveloperCatalogSubcategory>,
) -> Result<Vec<DeveloperCatalogSubcategory>> {
    let mut ids = HashSet::new();

    subcategories
        .into_iter()
        .map(|subcategory| -> Result<DeveloperCatalogSubcategory> {
            validate_category_meta(&subcategory.id, &subcategory.label)?;
            ensure!(
                ids.insert(subcategory.id.clone()),
                DuplicateSubcategoryIdSnafu {
                    category,
                    id: subcategory.id
                }
            );

            Ok(DeveloperCatalogSubcategory {
                tags: deduplicate(subcategory.tags),
                ..subcategory
            })
        })
        .collect()
}

fn validate_category_meta(id: &str, label: &str) -> Result<()> {
    validation::is_catalog_category_id(id).context(InvalidCategoryIdSnafu { id })?;
    validation::is_catalog_category_label(label).context(InvalidCategoryLabelSnafu { id })
}
