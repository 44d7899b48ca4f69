// SPDX-License-Identifier: MPL-2.0
//! Application layer: orchestration of one export call.
//!
//! The coordinator drives the pipeline; the negotiator and staged writer
//! implement the permission and transfer steps against the port traits in
//! [`port`]. All per-call data is request-scoped; no component here holds
//! cross-call mutable state.

pub mod coordinator;
pub mod negotiator;
pub mod port;
pub mod writer;

pub use coordinator::ExportCoordinator;
pub use negotiator::PermissionNegotiator;
pub use writer::StagedWriter;
