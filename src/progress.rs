/// Trait for reporting batch progress.
///
/// The CLI implements this with indicatif; tests use [`SilentReporter`].
/// All methods have default no-op implementations.
pub trait BatchReporter: Send + Sync {
    fn on_scan_start(&self) {}
    fn on_scan_complete(&self, _files_found: usize, _duration_secs: f64) {}
    fn on_rename_start(&self, _total: usize) {}
    fn on_rename_progress(&self, _done: usize, _total: usize) {}
    fn on_rename_complete(&self, _renamed: usize, _failed: usize, _duration_secs: f64) {}
}

/// No-op reporter for silent operation.
pub struct SilentReporter;

impl BatchReporter for SilentReporter {}
