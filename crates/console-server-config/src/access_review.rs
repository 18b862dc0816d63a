//! The access-review oracle used to decide the visibility of access-review gated perspectives.
//!
//! The resolution engine only depends on [`AccessReviewer`]. Implementations are expected to be
//! idempotent and may be called concurrently, no ordering or batching between calls is assumed.
use async_trait::async_trait;
use k8s_openapi::api::authorization::v1::ResourceAttributes;
use snafu::Snafu;
use strum::Display;

#[cfg(feature = "kube")]
pub use crate::access_review::kube_reviewer::SubjectAccessReviewer;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[cfg(feature = "kube")]
    #[snafu(display("failed to create SubjectAccessReview"))]
    CreateSubjectAccessReview { source: kube::Error },

    #[snafu(display("the authorizer returned no status for the access review"))]
    MissingStatus,

    #[snafu(display("the authorizer failed to evaluate the access review: {message}"))]
    Evaluation { message: String },

    #[snafu(display("the access review backend is unavailable: {message}"))]
    Unavailable { message: String },

    #[snafu(display("failed to acquire an access review slot"))]
    AcquireSlot {
        source: tokio::sync::AcquireError,
    },
}

/// The answer to a single permission check.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum AccessDecision {
    Permitted,
    Denied,
}

impl From<bool> for AccessDecision {
    fn from(allowed: bool) -> Self {
        if allowed {
            Self::Permitted
        } else {
            Self::Denied
        }
    }
}

/// Answers whether the subject the configuration is rendered for satisfies a permission check.
//
// Dynamic dispatch in combination with async functions still requires the async-trait crate.
#[async_trait]
pub trait AccessReviewer: Send + Sync {
    /// Evaluates a single permission check.
    async fn review(&self, attributes: &ResourceAttributes) -> Result<AccessDecision>;
}

#[cfg(feature = "kube")]
mod kube_reviewer {
    use async_trait::async_trait;
    use k8s_openapi::{
        api::authorization::v1::{ResourceAttributes, SubjectAccessReview, SubjectAccessReviewSpec},
        apimachinery::pkg::apis::meta::v1::ObjectMeta,
    };
    use kube::{Api, Client, api::PostParams};
    use snafu::{OptionExt, ResultExt};
    use tracing::instrument;

    use super::{
        AccessDecision, AccessReviewer, CreateSubjectAccessReviewSnafu, EvaluationSnafu,
        MissingStatusSnafu, Result,
    };

    /// An [`AccessReviewer`] which asks the Kubernetes API server by creating a
    /// `SubjectAccessReview` for a fixed user and set of groups.
    #[derive(Clone)]
    pub struct SubjectAccessReviewer {
        client: Client,
        user: String,
        groups: Vec<String>,
    }

    impl SubjectAccessReviewer {
        pub fn new(client: Client, user: impl Into<String>, groups: Vec<String>) -> Self {
            Self {
                client,
                user: user.into(),
                groups,
            }
        }

        fn subject_access_review(&self, attributes: &ResourceAttributes) -> SubjectAccessReview {
            SubjectAccessReview {
                metadata: ObjectMeta::default(),
                spec: SubjectAccessReviewSpec {
                    resource_attributes: Some(attributes.clone()),
                    user: Some(self.user.clone()),
                    groups: (!self.groups.is_empty()).then(|| self.groups.clone()),
                    ..SubjectAccessReviewSpec::default()
                },
                status: None,
            }
        }
    }

    #[async_trait]
    impl AccessReviewer for SubjectAccessReviewer {
        #[instrument(skip(self), fields(user = %self.user))]
        async fn review(&self, attributes: &ResourceAttributes) -> Result<AccessDecision> {
            let api: Api<SubjectAccessReview> = Api::all(self.client.clone());
            let review = api
                .create(&PostParams::default(), &self.subject_access_review(attributes))
                .await
                .context(CreateSubjectAccessReviewSnafu)?;

            let status = review.status.context(MissingStatusSnafu)?;

            // An evaluation error does not necessarily prevent a decision, only fail if the
            // authorizer neither allowed nor explicitly denied the request.
            if !status.allowed && status.denied != Some(true) {
                if let Some(message) = status.evaluation_error.filter(|m| !m.is_empty()) {
                    return EvaluationSnafu { message }.fail();
                }
            }

            let decision = AccessDecision::from(status.allowed);
            tracing::debug!(%decision, "access review completed");
            Ok(decision)
        }
    }
}
