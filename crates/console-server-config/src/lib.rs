//! Schema and effective-value resolution for the console server configuration.
//!
//! The console server reads a single YAML document at startup. This crate models that document
//! ([`config::Config`]), resolves administrator supplied customization intents into unambiguous
//! values ([`builder::ConfigBuilder`] and the [`resolve`] module) and renders the result while
//! honouring the per-field emission rules of the document ([`emission`], [`yaml`]).
//!
//! ## Crate Features
//!
//! - `default` enables `clap` and `kube`.
//! - `clap` derives [`clap::Args`] for [`resolve::ResolutionOptions`].
//! - `kube` enables [`access_review::SubjectAccessReviewer`], an [`access_review::AccessReviewer`]
//!   backed by the Kubernetes `SubjectAccessReview` API.

pub mod access_review;
pub mod builder;
pub mod config;
pub mod emission;
pub mod resolve;
pub mod validation;
pub mod yaml;

// External re-exports
pub use k8s_openapi;
#[cfg(feature = "kube")]
pub use kube;
