// SPDX-License-Identifier: MPL-2.0
//! Permission port definition.
//!
//! This module defines the [`PermissionProvider`] trait for querying and
//! requesting gallery write access. Infrastructure adapters wrap the
//! platform's permission machinery; the negotiation policy (prompt at most
//! once per call) lives in the application layer, not here.
//!
//! # Design Notes
//!
//! - Both methods are async: a permission prompt is a user-facing
//!   suspension point of unbounded duration
//! - Implementations hold no negotiation state; a provider asked twice
//!   reports the platform's current view both times, so a user who changes
//!   system settings between export calls is re-evaluated correctly

use async_trait::async_trait;

use crate::domain::AccessState;

/// Port for platform permission status and prompting.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one provider instance serves
/// concurrent export calls, all of which only read the platform's
/// permission state.
#[async_trait]
pub trait PermissionProvider: Send + Sync {
    /// Returns the current grant state without prompting the user.
    async fn current_status(&self) -> AccessState;

    /// Issues one user-facing permission prompt and awaits its resolution.
    ///
    /// A dismissed or unanswerable prompt must map to
    /// [`AccessState::Unknown`], never hang the call.
    async fn request_access(&self) -> AccessState;
}
