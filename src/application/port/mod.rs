// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the abstract interfaces that infrastructure adapters
//! implement. The traits use only domain types, ensuring the application
//! layer remains independent of concrete stores.
//!
//! # Available Ports
//!
//! - [`permission`]: platform permission status and prompting
//! - [`store`]: the content-index-mediated gallery (two-phase pending write)
//! - [`library`]: the permissioned, transactional asset library
//!
//! # Design Notes
//!
//! - All traits are `Send + Sync`; one adapter instance serves concurrent
//!   export calls
//! - The permission and library ports are async (each models a single
//!   platform suspension point); the content index is synchronous because
//!   the byte copy is a blocking stream-to-stream transfer
//! - Methods return per-port error types; the staged writer maps them into
//!   the unified taxonomy

pub mod library;
pub mod permission;
pub mod store;

pub use library::{AssetId, LibraryError, VideoAssetLibrary};
pub use permission::PermissionProvider;
pub use store::{ContentIndex, IndexError, NewRecord, RecordId};
