// SPDX-License-Identifier: MPL-2.0
//! `gallery_export` stages locally produced video files into the user's
//! media gallery.
//!
//! It abstracts over two platform storage models: a content index requiring
//! a pending-then-finalize two-phase write, and a permissioned asset library
//! requiring a grant before any write. One `saveVideoToGallery` command in,
//! one success-or-failure outcome out.

#![doc(html_root_url = "https://docs.rs/gallery_export/0.3.0")]

pub mod application;
pub mod command;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::ExportCoordinator;
pub use domain::{ExportOutcome, ExportRequest, StagingHandle};
pub use error::{ExportError, Result};
