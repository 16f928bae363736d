//! Server functions called by the web client.
//!
//! Every read of verification data requires a signed-in session; only the
//! feature flags and the session lookup are public.

use dioxus::prelude::*;
use shared_types::FeatureFlags;

#[cfg(feature = "server")]
pub(crate) mod guard;

mod dashboard;
pub use dashboard::*;

mod session;
pub use session::*;

/// Feature flags for the client. Not sensitive, so no session needed.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}
