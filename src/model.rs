use std::time::SystemTime;

/// A regular file captured during the scan, with its creation timestamp.
///
/// `created` is the filesystem-reported creation time, falling back to the
/// last-modification time on filesystems that cannot report birth time. It
/// is the sole sort key for sequence assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampedFile {
    pub name: String,
    pub created: SystemTime,
}

/// One original → target mapping in a rename plan.
///
/// `sequence_index` runs 1..N in creation-time order. `target_name` is
/// `<base>_<index><ext>` where `<ext>` is taken verbatim from the original
/// name (leading dot included, empty if the name has none).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub original_name: String,
    pub target_name: String,
    pub sequence_index: usize,
}

/// Recorded result of attempting one rename. Outcomes are independent of
/// each other; a failed entry never aborts the rest of the batch.
#[derive(Debug, Clone)]
pub struct RenameOutcome {
    pub entry: PlanEntry,
    pub succeeded: bool,
    pub error_detail: Option<String>,
}
