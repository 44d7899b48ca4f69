// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! Single source of truth for the defaults used across the exporter.

/// Logical subfolder below the gallery root that exported videos land in.
///
/// Mirrors the platform convention of a per-app folder under the shared
/// Movies collection.
pub const DEFAULT_RELATIVE_PATH: &str = "Movies/GalleryExport";

/// Whether the indexed store stages records as pending before publishing.
///
/// Platform versions without scoped storage make records visible at insert
/// time; those set this to `false`.
pub const DEFAULT_SCOPED_STAGING: bool = true;
