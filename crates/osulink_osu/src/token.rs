//! Cached client-credentials token.

use std::time::{Duration, Instant};

/// Tokens are replaced this long before the server says they expire.
const REFRESH_MARGIN: Duration = Duration::from_secs(60);

/// A bearer token and the moment it stops being usable.
#[derive(Clone)]
pub(crate) struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

impl CachedToken {
    pub(crate) fn new(access_token: String, expires_in: Duration, now: Instant) -> Self {
        Self {
            access_token,
            expires_at: now + expires_in,
        }
    }

    pub(crate) fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Whether the token can still be sent at `now`.
    pub(crate) fn is_fresh(&self, now: Instant) -> bool {
        now + REFRESH_MARGIN < self.expires_at
    }
}

impl std::fmt::Debug for CachedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedToken")
            .field("access_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
