//! The resolution engine turns administrator supplied customization intents into the values placed
//! into the [`Config`](crate::config::Config).
//!
//! Every resolution works on its own input only. The access-review oracle is the single external,
//! potentially blocking, dependency and is only consulted for access-review gated perspectives.
use std::{hash::Hash, time::Duration};

use indexmap::IndexSet;
use tokio::sync::Semaphore;

pub mod catalog;
pub mod customization;
pub mod perspective;
pub mod proxy;
pub mod serving;

pub const DEFAULT_MAX_CONCURRENT_ACCESS_REVIEWS: usize = 8;

/// Tunables of a resolution pass.
#[cfg_attr(feature = "clap", derive(clap::Args))]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolutionOptions {
    /// Maximum number of access reviews which are in flight at the same time.
    #[cfg_attr(
        feature = "clap",
        arg(long, env, default_value_t = DEFAULT_MAX_CONCURRENT_ACCESS_REVIEWS)
    )]
    pub max_concurrent_access_reviews: usize,

    /// Upper bound for evaluating all access-review gated perspectives, e.g. `30s`.
    ///
    /// Without a timeout, resolution waits for the access-review backend as long as it takes.
    #[cfg_attr(feature = "clap", arg(long, env, value_parser = humantime::parse_duration))]
    pub access_review_timeout: Option<Duration>,
}

impl Default for ResolutionOptions {
    fn default() -> Self {
        Self {
            max_concurrent_access_reviews: DEFAULT_MAX_CONCURRENT_ACCESS_REVIEWS,
            access_review_timeout: None,
        }
    }
}

impl ResolutionOptions {
    /// The concurrency limit, between one and the largest permit count of a [`Semaphore`].
    pub(crate) fn concurrency(&self) -> usize {
        self.max_concurrent_access_reviews.clamp(1, Semaphore::MAX_PERMITS)
    }
}

/// Removes duplicates from `items`, keeping the first occurrence of each item in place.
pub fn deduplicate<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    items
        .into_iter()
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
