use std::io::Write;

use examdata_fetch::{DownloadResult, Fetcher, FileName, HttpClient};

use crate::config::Config;
use crate::error::RunError;

/// Per-file outcomes of a [`run`], in the order they were attempted.
#[derive(Debug, Default)]
pub struct RunReport {
    outcomes: Vec<(FileName, DownloadResult)>,
}

impl RunReport {
    pub fn outcomes(&self) -> &[(FileName, DownloadResult)] { &self.outcomes }

    pub fn attempted(&self) -> usize { self.outcomes.len() }

    pub fn downloaded(&self) -> usize { self.outcomes.iter().filter(|(_, r)| r.is_success()).count() }

    pub fn skipped(&self) -> usize { self.attempted() - self.downloaded() }
}

/// Download every file in the configured catalog, one after another.
///
/// Only a failure to create the destination directory or to write the
/// transcript stops the run. Individual downloads that fail are reported
/// as skipped and the loop moves on.
pub async fn run<C: HttpClient>(
    config: &Config,
    client: C,
    out: &mut impl Write,
) -> Result<RunReport, RunError> {
    let dest_dir = config.get_dest_dir();
    examdata_fs::ensure_dir(dest_dir).map_err(RunError::CreateDir)?;

    writeln!(out, "Starting download... (destination: {})", dest_dir.display())?;
    tracing::info!(
        base_url = config.get_base_url(),
        dest_dir = %dest_dir.display(),
        files = config.get_catalog().len(),
        "starting run"
    );

    let fetcher = Fetcher::new(client, config.get_base_url(), dest_dir);
    let mut report = RunReport::default();

    for name in config.get_catalog().names() {
        let result = fetcher.fetch_one(&name).await;
        match &result {
            DownloadResult::Success { bytes } => writeln!(out, "[ok] {name} ({bytes} bytes)")?,
            DownloadResult::Skipped(reason) => writeln!(out, "[skip] {name} ({reason})")?,
        }
        report.outcomes.push((name, result));
    }

    writeln!(
        out,
        "\nAll done: {} downloaded, {} skipped. Check {}",
        report.downloaded(),
        report.skipped(),
        dest_dir.display()
    )?;
    tracing::info!(
        downloaded = report.downloaded(),
        skipped = report.skipped(),
        "run finished"
    );

    Ok(report)
}
