use k8s_openapi::api::authorization::v1::ResourceAttributes;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::config::list::OptionalList;

/// A perspective cluster admins want to show or hide in the perspective switcher.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Perspective {
    /// Identifier of the perspective, e.g. `dev` or `admin`. Unknown ids are ignored by the
    /// console.
    pub id: String,
    pub visibility: PerspectiveVisibility,
    /// Resources pinned to the navigation for users who did not pin resources themselves.
    pub pinned_resources: OptionalList<PinnedResourceReference>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PerspectiveVisibility {
    pub state: PerspectiveState,
    /// Only evaluated for [`PerspectiveState::AccessReview`].
    pub access_review: Option<ResourceAttributesAccessReview>,
}

impl PerspectiveVisibility {
    pub const fn enabled() -> Self {
        Self {
            state: PerspectiveState::Enabled,
            access_review: None,
        }
    }

    pub const fn disabled() -> Self {
        Self {
            state: PerspectiveState::Disabled,
            access_review: None,
        }
    }

    pub fn access_review(review: ResourceAttributesAccessReview) -> Self {
        Self {
            state: PerspectiveState::AccessReview,
            access_review: Some(review),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, EnumString, Eq, PartialEq, Serialize)]
pub enum PerspectiveState {
    #[default]
    Enabled,
    Disabled,
    AccessReview,
}

/// Permission checks deciding whether an [`PerspectiveState::AccessReview`] perspective is shown.
///
/// The perspective is shown when every `required` check is permitted and at least one `missing`
/// check is denied. An empty list does not restrict anything, but at least one of the lists has
/// to contain a check.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ResourceAttributesAccessReview {
    pub required: Vec<ResourceAttributes>,
    pub missing: Vec<ResourceAttributes>,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(default)]
pub struct PinnedResourceReference {
    pub group: String,
    pub version: String,
    pub resource: String,
}
