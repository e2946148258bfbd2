use crate::config::AppConfig;
use crate::error::Error;
use crate::model::RenameOutcome;
use crate::progress::BatchReporter;
use crate::renamer;
use crate::scanner;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// One batch request: the directory whose files get renamed and the base
/// name every target filename is built from.
#[derive(Debug, Clone)]
pub struct RenameRequest {
    pub directory: PathBuf,
    pub base_name: String,
}

pub struct RenameEngine {
    config: AppConfig,
}

#[derive(Debug)]
pub struct BatchResult {
    pub outcomes: Vec<RenameOutcome>,
    pub renamed: usize,
    pub failed: usize,
    pub scan_duration: Duration,
    pub rename_duration: Duration,
}

impl RenameEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run the full batch:
    /// 1. Scan the directory (regular files + creation timestamps)
    /// 2. Plan target names in creation-time order
    /// 3. Execute the renames sequentially, isolating per-file failures
    ///
    /// Each phase completes fully before the next begins. Only a
    /// directory-level access problem fails the batch; everything else is
    /// carried in the per-file outcomes.
    pub fn run(
        &self,
        request: &RenameRequest,
        reporter: &dyn BatchReporter,
    ) -> Result<BatchResult, Error> {
        info!("Scanning {}...", request.directory.display());
        reporter.on_scan_start();
        let scan_start = Instant::now();
        let files = scanner::scan_directory(&request.directory, &self.config.ignore_patterns)?;
        let scan_duration = scan_start.elapsed();
        reporter.on_scan_complete(files.len(), scan_duration.as_secs_f64());
        debug!(
            "Scan completed in {:.2}s — {} files",
            scan_duration.as_secs_f64(),
            files.len(),
        );

        let entries = renamer::plan(&files, &request.base_name);

        info!("Renaming {} files...", entries.len());
        reporter.on_rename_start(entries.len());
        let rename_start = Instant::now();
        let outcomes = renamer::execute(&request.directory, entries, reporter);
        let rename_duration = rename_start.elapsed();

        let renamed = outcomes.iter().filter(|o| o.succeeded).count();
        let failed = outcomes.len() - renamed;
        reporter.on_rename_complete(renamed, failed, rename_duration.as_secs_f64());
        debug!(
            "Rename completed in {:.2}s — {} renamed, {} failed",
            rename_duration.as_secs_f64(),
            renamed,
            failed,
        );

        Ok(BatchResult {
            outcomes,
            renamed,
            failed,
            scan_duration,
            rename_duration,
        })
    }
}
