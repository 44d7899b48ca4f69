// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined
//! in `application::port`, backed by the local filesystem and in-process
//! permission state.
//!
//! # Available Adapters
//!
//! - [`fs_index`]: directory-backed content index (implements [`ContentIndex`])
//! - [`fs_library`]: directory-backed transactional library (implements
//!   [`VideoAssetLibrary`])
//! - [`permission`]: fixed-state and prompt-forwarding permission providers
//!   (implement [`PermissionProvider`])
//!
//! [`ContentIndex`]: crate::application::port::ContentIndex
//! [`VideoAssetLibrary`]: crate::application::port::VideoAssetLibrary
//! [`PermissionProvider`]: crate::application::port::PermissionProvider

pub mod fs_index;
pub mod fs_library;
pub mod permission;

pub use fs_index::FsContentIndex;
pub use fs_library::FsAssetLibrary;
pub use permission::{ChannelPrompt, PromptRequest, StaticPermissions};
