// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure export types with ZERO external dependencies.
//!
//! This module contains the value objects exchanged across the port
//! boundaries. It has no dependencies on external crates (except `std`) to
//! ensure testability and architectural purity.
//!
//! # Modules
//!
//! - [`access`]: Permission state ([`AccessState`](access::AccessState))
//! - [`export`]: Request and outcome types ([`ExportRequest`](export::ExportRequest),
//!   [`StagingHandle`](export::StagingHandle), [`ExportOutcome`](export::ExportOutcome))
//! - [`media`]: Media kind and MIME inference ([`MediaKind`](media::MediaKind))

pub mod access;
pub mod export;
pub mod media;

pub use access::AccessState;
pub use export::{ExportOutcome, ExportRequest, StagingHandle};
pub use media::MediaKind;
