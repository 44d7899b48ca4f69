// SPDX-License-Identifier: MPL-2.0
//! Permission negotiation policy.
//!
//! Wraps a [`PermissionProvider`] with the query-then-prompt-at-most-once
//! rule: if the platform already reports a sufficient state, no prompt is
//! issued; otherwise exactly one prompt runs and its result is final for
//! the current call. Nothing is cached across calls, so a user who changes
//! system settings between exports is re-evaluated on the next call.

use std::sync::Arc;

use crate::application::port::PermissionProvider;
use crate::domain::AccessState;

/// Drives permission negotiation for one export call at a time.
pub struct PermissionNegotiator {
    provider: Arc<dyn PermissionProvider>,
}

impl PermissionNegotiator {
    /// Creates a negotiator over the given provider.
    #[must_use]
    pub fn new(provider: Arc<dyn PermissionProvider>) -> Self {
        Self { provider }
    }

    /// Resolves write access, prompting at most once.
    pub async fn ensure_write_access(&self) -> AccessState {
        let current = self.provider.current_status().await;
        if current.is_sufficient() {
            return current;
        }
        self.provider.request_access().await
    }
}
