//! Guards against stale async results.
//!
//! A page that can fire the same load more than once (mount, refresh button,
//! a session change) takes a token before each request and only applies the
//! response if the token is still the latest one.

use dioxus::prelude::*;

/// Identifies one in-flight load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Monotonic counter handing out [`RequestToken`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    /// Start a new request. Every earlier token becomes stale.
    pub fn begin(&mut self) -> RequestToken {
        self.latest = self.latest.wrapping_add(1);
        RequestToken(self.latest)
    }

    /// True if no request has started since `token` was issued.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest == token.0
    }

    /// Make every outstanding token stale without starting a request,
    /// e.g. when the page is leaving or the user signs out.
    pub fn invalidate(&mut self) {
        self.latest = self.latest.wrapping_add(1);
    }
}

/// Component-scoped [`RequestGeneration`].
pub fn use_request_generation() -> Signal<RequestGeneration> {
    use_signal(RequestGeneration::default)
}
