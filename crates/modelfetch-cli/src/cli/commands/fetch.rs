//! `modelfetch fetch` – download missing assets and rewrite the manifest.

use anyhow::Result;
use modelfetch_core::config::FetchConfig;
use modelfetch_core::runner::{AssetStatus, ProgressEvent, RunReport, Runner};
use modelfetch_core::sources::{entries_from_config, SourceEntry};
use modelfetch_core::transport::CurlTransport;

use crate::cli::{EXIT_ITEM_FAILURES, EXIT_OK};

pub fn run_fetch(cfg: &FetchConfig) -> Result<i32> {
    let sources = entries_from_config(&cfg.sources);
    let transport = CurlTransport::new(cfg.timeout());
    let runner = Runner::from_config(&transport, cfg);

    let report = runner.run(&sources, |ev| match ev {
        ProgressEvent::Collision(c) => {
            let positions: Vec<String> = c.indices.iter().map(|i| format!("#{}", i + 1)).collect();
            println!(
                "warning: {} sources share the file name {} ({})",
                c.indices.len(),
                c.filename,
                positions.join(", ")
            );
        }
        ProgressEvent::Queued { total } => {
            println!("Starting download: {} models queued...", total);
        }
        ProgressEvent::Started { .. } => {}
        ProgressEvent::Finished {
            index,
            entry,
            status,
        } => println!("{}", finished_line(index, entry, status)),
        ProgressEvent::ManifestWritten { path, count } => {
            println!();
            println!("Manifest written to '{}' ({} entries)", path.display(), count);
        }
    })?;

    println!(
        "Done: {} models ready in '{}'",
        report.manifest.len(),
        report.save_dir.display()
    );
    if report.has_failures() {
        println!(
            "{} of {} sources failed",
            report.failed(),
            report.outcomes.len()
        );
    }
    Ok(exit_code(&report, cfg.strict))
}

/// Item failures only change the exit status in strict mode.
pub(crate) fn exit_code(report: &RunReport, strict: bool) -> i32 {
    if strict && report.has_failures() {
        EXIT_ITEM_FAILURES
    } else {
        EXIT_OK
    }
}

/// One console line for a resolved entry; `index` is 0-based.
pub(crate) fn finished_line(index: usize, entry: &SourceEntry, status: &AssetStatus) -> String {
    let n = index + 1;
    match status {
        AssetStatus::AlreadyPresent => format!("[{}] skipped {} (already exists)", n, entry.filename),
        AssetStatus::Downloaded { bytes } => {
            format!("[{}] downloaded {} ({} bytes)", n, entry.filename, bytes)
        }
        AssetStatus::FailedHttp { status } => {
            format!("[{}] error {}: {} link unavailable", n, status, entry.filename)
        }
        AssetStatus::FailedException { message } => {
            format!("[{}] failed {}: {}", n, entry.filename, message)
        }
    }
}
