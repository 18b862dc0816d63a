use std::collections::HashSet;

use snafu::{ResultExt, Snafu};
use tracing::instrument;

use crate::{
    access_review::AccessReviewer,
    config::{AddPage, Capability, Customization, ProjectAccess, QuickStarts},
    resolve::{ResolutionOptions, catalog, deduplicate, perspective},
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("invalid developer catalog customization"))]
    ResolveDeveloperCatalog { source: catalog::Error },

    #[snafu(display("failed to resolve the perspectives"))]
    ResolvePerspectives { source: perspective::Error },
}

/// Resolves every customization intent into the values handed to the console.
///
/// Sets of ids (disabled quick starts, disabled add page actions, available cluster roles) are
/// deduplicated in order, capabilities are deduplicated by name. Branding fields pass through.
#[instrument(skip_all)]
pub async fn resolve_customization<R>(
    customization: Customization,
    reviewer: &R,
    options: &ResolutionOptions,
) -> Result<Customization>
where
    R: AccessReviewer + ?Sized,
{
    let developer_catalog = customization
        .developer_catalog
        .map(catalog::resolve_developer_catalog)
        .transpose()
        .context(ResolveDeveloperCatalogSnafu)?;

    let perspectives =
        perspective::resolve_perspectives(customization.perspectives, reviewer, options)
            .await
            .context(ResolvePerspectivesSnafu)?;

    Ok(Customization {
        developer_catalog,
        project_access: ProjectAccess {
            available_cluster_roles: deduplicate(
                customization.project_access.available_cluster_roles,
            ),
        },
        quick_starts: QuickStarts {
            disabled: deduplicate(customization.quick_starts.disabled),
        },
        add_page: AddPage {
            disabled_actions: deduplicate(customization.add_page.disabled_actions),
        },
        perspectives,
        capabilities: deduplicate_capabilities(customization.capabilities),
        ..customization
    })
}

fn deduplicate_capabilities(capabilities: Vec<Capability>) -> Vec<Capability> {
    let mut names = HashSet::new();

    capabilities
        .into_iter()
        .filter(|capability| {
            let first = names.insert(capability.name);
            if !first {
                tracing::warn!(
                    capability.name = %capability.name,
                    "ignoring duplicate capability, the first definition wins"
                );
            }
            first
        })
        .collect()
}
