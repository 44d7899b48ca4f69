// SPDX-License-Identifier: MPL-2.0
//! Permission provider adapters.
//!
//! Two adapters cover the permission port:
//!
//! - [`StaticPermissions`]: a fixed state, for platforms where writing into
//!   the gallery directory needs no grant (the desktop default) and for
//!   driving tests.
//! - [`ChannelPrompt`]: forwards a prompt request to the host shell over a
//!   channel and awaits a single reply. A dropped reply sender maps to
//!   [`AccessState::Unknown`], so a dismissed prompt can never hang an
//!   export call.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot, RwLock};

use crate::application::port::PermissionProvider;
use crate::domain::AccessState;

/// Provider with a fixed access state; never prompts anything.
pub struct StaticPermissions {
    state: AccessState,
}

impl StaticPermissions {
    /// Provider that always reports the given state.
    #[must_use]
    pub fn with_state(state: AccessState) -> Self {
        Self { state }
    }

    /// Provider that always grants access.
    #[must_use]
    pub fn granted() -> Self {
        Self::with_state(AccessState::Granted)
    }

    /// Provider that always denies access.
    #[must_use]
    pub fn denied() -> Self {
        Self::with_state(AccessState::Denied)
    }
}

#[async_trait]
impl PermissionProvider for StaticPermissions {
    async fn current_status(&self) -> AccessState {
        self.state
    }

    async fn request_access(&self) -> AccessState {
        self.state
    }
}

/// One prompt forwarded to the host shell.
pub struct PromptRequest {
    /// Channel the host answers the prompt on; dropping it counts as a
    /// dismissal.
    pub respond: oneshot::Sender<AccessState>,
}

/// Provider that forwards prompts to the host shell over a channel.
pub struct ChannelPrompt {
    status: RwLock<AccessState>,
    prompts: mpsc::Sender<PromptRequest>,
}

impl ChannelPrompt {
    /// Creates a provider with an undetermined initial status.
    #[must_use]
    pub fn new(prompts: mpsc::Sender<PromptRequest>) -> Self {
        Self::with_status(prompts, AccessState::Unknown)
    }

    /// Creates a provider with a known initial status.
    #[must_use]
    pub fn with_status(prompts: mpsc::Sender<PromptRequest>, status: AccessState) -> Self {
        Self {
            status: RwLock::new(status),
            prompts,
        }
    }

    /// Updates the cached status, e.g. after the host observes a change in
    /// system settings.
    pub async fn set_status(&self, state: AccessState) {
        *self.status.write().await = state;
    }
}

#[async_trait]
impl PermissionProvider for ChannelPrompt {
    async fn current_status(&self) -> AccessState {
        *self.status.read().await
    }

    async fn request_access(&self) -> AccessState {
        let (respond, reply) = oneshot::channel();
        if self.prompts.send(PromptRequest { respond }).await.is_err() {
            // Host shell is gone; nobody can grant anything.
            return AccessState::Unknown;
        }
        let state = reply.await.unwrap_or(AccessState::Unknown);
        *self.status.write().await = state;
        state
    }
}
