// SPDX-License-Identifier: MPL-2.0
//! Export orchestration.
//!
//! One coordinator instance serves the whole process; each `export` call is
//! fully independent and owns its request, staging handle, and streams. The
//! only process-wide state any call touches is the platform permission
//! status, which this layer reads through the negotiator.

use std::sync::Arc;

use crate::application::negotiator::PermissionNegotiator;
use crate::application::port::PermissionProvider;
use crate::application::writer::StagedWriter;
use crate::diagnostics::{DiagnosticsHandle, ExportEventKind};
use crate::domain::{ExportRequest, MediaKind, StagingHandle};
use crate::error::{ExportError, Result};

/// Orchestrates one export call end to end.
pub struct ExportCoordinator {
    negotiator: PermissionNegotiator,
    writer: StagedWriter,
    diagnostics: Option<DiagnosticsHandle>,
}

impl ExportCoordinator {
    /// Creates a coordinator with the given permission provider and writer.
    #[must_use]
    pub fn new(provider: Arc<dyn PermissionProvider>, writer: StagedWriter) -> Self {
        Self {
            negotiator: PermissionNegotiator::new(provider),
            writer,
            diagnostics: None,
        }
    }

    /// Attaches a diagnostics handle; lifecycle events are recorded through
    /// it without blocking the export path.
    #[must_use]
    pub fn with_diagnostics(mut self, handle: DiagnosticsHandle) -> Self {
        self.diagnostics = Some(handle);
        self
    }

    /// Exports one video into the gallery.
    ///
    /// Steps, in order: source existence check (before any permission
    /// prompt, so a missing file never prompts the user), MIME inference,
    /// permission negotiation, staged write. The first failing step's kind
    /// is returned unchanged.
    ///
    /// # Errors
    ///
    /// Any [`ExportError`] kind except `InvalidArgument`, which
    /// [`ExportRequest`] construction already rules out.
    pub async fn export(&self, request: &ExportRequest) -> Result<StagingHandle> {
        let kind = MediaKind::from_display_name(request.display_name());
        self.record(ExportEventKind::ExportStarted {
            display_name: request.display_name().to_string(),
            mime_type: kind.mime_type().to_string(),
        });

        let result = self.run(request, kind).await;
        match &result {
            Ok(handle) => self.record(ExportEventKind::ExportCompleted {
                reference: handle.reference().to_string(),
            }),
            Err(err) => self.record(ExportEventKind::ExportFailed {
                code: err.code().to_string(),
            }),
        }
        result
    }

    async fn run(&self, request: &ExportRequest, kind: MediaKind) -> Result<StagingHandle> {
        check_source(request)?;

        let state = self.negotiator.ensure_write_access().await;
        self.record(ExportEventKind::PermissionResolved {
            state: format!("{state:?}"),
            sufficient: state.is_sufficient(),
        });
        if !state.is_sufficient() {
            return Err(ExportError::PermissionDenied(format!(
                "gallery access not granted ({state:?})"
            )));
        }

        self.writer
            .write(request.source(), request.display_name(), kind)
            .await
    }

    fn record(&self, event: ExportEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.record(event);
        }
    }
}

/// Verifies the source references an existing regular file.
fn check_source(request: &ExportRequest) -> Result<()> {
    match std::fs::metadata(request.source()) {
        Ok(meta) if meta.is_file() => Ok(()),
        Ok(_) => Err(ExportError::NotFound(format!(
            "{}: not a regular file",
            request.source().display()
        ))),
        Err(_) => Err(ExportError::NotFound(
            request.source().display().to_string(),
        )),
    }
}
