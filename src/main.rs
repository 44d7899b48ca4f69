// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use gallery_export::application::writer::StagedWriter;
use gallery_export::command::{dispatch, Command};
use gallery_export::config::{self, Strategy};
use gallery_export::diagnostics::{default_report_filename, BufferCapacity, DiagnosticsCollector};
use gallery_export::infrastructure::{FsAssetLibrary, FsContentIndex, StaticPermissions};
use gallery_export::ExportCoordinator;

#[tokio::main]
async fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();

    let name: Option<String> = args.opt_value_from_str("--name").unwrap();
    let report: Option<PathBuf> = match args.opt_value_from_str("--report") {
        Ok(report) => report,
        // Bare `--report` falls back to the timestamped default name.
        Err(pico_args::Error::OptionWithoutAValue(_)) => {
            let _ = args.contains("--report");
            Some(PathBuf::from(default_report_filename()))
        }
        Err(err) => {
            eprintln!("bad arguments: {err}");
            return ExitCode::FAILURE;
        }
    };
    let use_library = args.contains("--library");
    let path = match args.finish().into_iter().next().and_then(|s| s.into_string().ok()) {
        Some(path) => path,
        None => {
            eprintln!("usage: gallery_export [--name NAME] [--library] [--report [FILE]] <path>");
            return ExitCode::FAILURE;
        }
    };

    let config = config::load().unwrap_or_default();
    let gallery_dir = config.resolved_gallery_dir();
    let strategy = if use_library {
        Strategy::AssetLibrary
    } else {
        config.resolved_strategy()
    };

    let writer = match strategy {
        Strategy::IndexedStore => {
            let index = FsContentIndex::new(&gallery_dir, config.resolved_scoped_staging());
            StagedWriter::indexed(Arc::new(index), config.resolved_relative_path())
        }
        Strategy::AssetLibrary => {
            let library = FsAssetLibrary::new(gallery_dir.join(config.resolved_relative_path()));
            StagedWriter::library(Arc::new(library))
        }
    };

    // The local gallery directory needs no grant on desktop.
    let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
    let coordinator = ExportCoordinator::new(Arc::new(StaticPermissions::granted()), writer)
        .with_diagnostics(collector.handle());

    let reply = dispatch(&coordinator, Command::SaveVideoToGallery { path, name }).await;

    if let Some(report_path) = report {
        if let Err(err) = collector.export_report(&report_path) {
            eprintln!("failed to write diagnostics report: {err}");
        }
    }

    match serde_json::to_string(&reply) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("failed to encode reply: {err}");
            return ExitCode::FAILURE;
        }
    }

    if reply.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
