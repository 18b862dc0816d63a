use std::{collections::HashSet, time::Duration};

use async_trait::async_trait;
use futures::future;
use k8s_openapi::api::authorization::v1::ResourceAttributes;
use snafu::{ResultExt, Snafu};
use strum::Display;
use tokio::sync::Semaphore;
use tracing::instrument;

use crate::{
    access_review::{self, AccessDecision, AccessReviewer, AcquireSlotSnafu},
    config::{Perspective, PerspectiveState, PerspectiveVisibility},
    resolve::ResolutionOptions,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to review access for perspective {perspective:?}"))]
    AccessReview {
        source: access_review::Error,
        perspective: String,
    },

    #[snafu(display("access reviews of the perspectives did not finish within {timeout:?}"))]
    Timeout {
        source: tokio::time::error::Elapsed,
        timeout: Duration,
    },
}

/// Whether a perspective ends up in the perspective switcher.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl From<Visibility> for PerspectiveVisibility {
    fn from(visibility: Visibility) -> Self {
        match visibility {
            Visibility::Shown => Self::enabled(),
            Visibility::Hidden => Self::disabled(),
        }
    }
}

/// Resolves whether `perspective` is shown.
///
/// [`PerspectiveState::Enabled`] and [`PerspectiveState::Disabled`] never consult the `reviewer`.
/// An [`PerspectiveState::AccessReview`] perspective is shown iff every `required` check is
/// permitted and at least one `missing` check is denied, where an empty list is satisfied. A
/// perspective without any checks is hidden, as it can't tell apart who should see it.
///
/// The checks are issued concurrently. Any failing check fails the resolution, the outcome is
/// undetermined in that case.
#[instrument(skip_all, fields(perspective.id = %perspective.id))]
pub async fn resolve_visibility<R>(perspective: &Perspective, reviewer: &R) -> Result<Visibility>
where
    R: AccessReviewer + ?Sized,
{
    let visibility = &perspective.visibility;

    match visibility.state {
        PerspectiveState::Enabled | PerspectiveState::Disabled => {
            if visibility.access_review.is_some() {
                tracing::debug!(
                    state = %visibility.state,
                    "ignoring access review of perspective which does not use the AccessReview state"
                );
            }

            Ok(match visibility.state {
                PerspectiveState::Enabled => Visibility::Shown,
                _ => Visibility::Hidden,
            })
        }
        PerspectiveState::AccessReview => {
            let Some(review) = visibility
                .access_review
                .as_ref()
                .filter(|review| !(review.required.is_empty() && review.missing.is_empty()))
            else {
                tracing::warn!(
                    "perspective uses the AccessReview state without any required or missing checks, hiding it"
                );
                return Ok(Visibility::Hidden);
            };

            let (required, missing) = future::try_join(
                review_all(reviewer, &review.required),
                review_all(reviewer, &review.missing),
            )
            .await
            .context(AccessReviewSnafu {
                perspective: &perspective.id,
            })?;

            let required_satisfied = required
                .iter()
                .all(|decision| *decision == AccessDecision::Permitted);
            let missing_satisfied =
                review.missing.is_empty() || missing.contains(&AccessDecision::Denied);

            tracing::debug!(
                required_satisfied,
                missing_satisfied,
                "evaluated access review of perspective"
            );

            if required_satisfied && missing_satisfied {
                Ok(Visibility::Shown)
            } else {
                Ok(Visibility::Hidden)
            }
        }
    }
}

/// Resolves the visibility of every perspective and rewrites it to a terminal state.
///
/// Perspectives are deduplicated by id, the first definition wins. The resolved perspectives
/// carry either [`PerspectiveState::Enabled`] or [`PerspectiveState::Disabled`] and no access
/// review anymore. Pinned resources are kept as they are.
#[instrument(skip_all, fields(perspectives = perspectives.len()))]
pub async fn resolve_perspectives<R>(
    perspectives: Vec<Perspective>,
    reviewer: &R,
    options: &ResolutionOptions,
) -> Result<Vec<Perspective>>
where
    R: AccessReviewer + ?Sized,
{
    let perspectives = deduplicate_by_id(perspectives);
    let reviewer = ThrottledReviewer::new(reviewer, options.concurrency());

    let visibilities = future::try_join_all(
        perspectives
            .iter()
            .map(|perspective| resolve_visibility(perspective, &reviewer)),
    );

    let visibilities = match options.access_review_timeout {
        Some(timeout) => tokio::time::timeout(timeout, visibilities)
            .await
            .context(TimeoutSnafu { timeout })??,
        None => visibilities.await?,
    };

    Ok(perspectives
        .into_iter()
        .zip(visibilities)
        .map(|(perspective, visibility)| Perspective {
            visibility: visibility.into(),
            ..perspective
        })
        .collect())
}

fn deduplicate_by_id(perspectives: Vec<Perspective>) -> Vec<Perspective> {
    let mut ids = HashSet::new();

    perspectives
        .into_iter()
        .filter(|perspective| {
            let first = ids.insert(perspective.id.clone());
            if !first {
                tracing::warn!(
                    perspective.id = %perspective.id,
                    "ignoring duplicate perspective, the first definition wins"
                );
            }
            first
        })
        .collect()
}

async fn review_all<R>(
    reviewer: &R,
    checks: &[ResourceAttributes],
) -> access_review::Result<Vec<AccessDecision>>
where
    R: AccessReviewer + ?Sized,
{
    future::try_join_all(checks.iter().map(|attributes| reviewer.review(attributes))).await
}

/// Bounds the number of in-flight access reviews across all perspectives of one pass.
struct ThrottledReviewer<'a, R: ?Sized> {
    inner: &'a R,
    slots: Semaphore,
}

impl<'a, R: ?Sized> ThrottledReviewer<'a, R> {
    fn new(inner: &'a R, concurrency: usize) -> Self {
        Self {
            inner,
            slots: Semaphore::new(concurrency),
        }
    }
}

#[async_trait]
impl<'a, R> AccessReviewer for ThrottledReviewer<'a, R>
where
    R: AccessReviewer + ?Sized,
{
    async fn review(
        &self,
        attributes: &ResourceAttributes,
    ) -> access_review::Result<AccessDecision> {
        let _slot = self.slots.acquire().await.context(AcquireSlotSnafu)?;
        self.inner.review(attributes).await
    }
}
