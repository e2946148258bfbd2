use crate::model::{PlanEntry, RenameOutcome, TimestampedFile};
use crate::progress::BatchReporter;
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Build the rename plan: sort by creation time ascending and assign
/// sequence indices 1..N. The sort is stable, so files with identical
/// timestamps keep their input order. Pure — no filesystem access.
pub fn plan(files: &[TimestampedFile], base_name: &str) -> Vec<PlanEntry> {
    let mut sorted: Vec<&TimestampedFile> = files.iter().collect();
    sorted.sort_by_key(|file| file.created);

    sorted
        .iter()
        .enumerate()
        .map(|(i, file)| {
            let sequence_index = i + 1;
            let ext = file_extension(&file.name);
            PlanEntry {
                original_name: file.name.clone(),
                target_name: format!("{}_{}{}", base_name, sequence_index, ext),
                sequence_index,
            }
        })
        .collect()
}

/// Apply the plan sequentially, one rename at a time in plan order. A
/// failed entry is recorded in its outcome and the batch continues; target
/// collisions with unrelated pre-existing files are not pre-checked, the
/// OS rename semantics decide. Returns one outcome per entry, plan order.
pub fn execute(dir: &Path, plan: Vec<PlanEntry>, reporter: &dyn BatchReporter) -> Vec<RenameOutcome> {
    let total = plan.len();
    let mut outcomes = Vec::with_capacity(total);

    for (done, entry) in plan.into_iter().enumerate() {
        let from = dir.join(&entry.original_name);
        let to = dir.join(&entry.target_name);

        let outcome = match fs::rename(&from, &to) {
            Ok(()) => {
                info!("Renamed {} -> {}", entry.original_name, entry.target_name);
                RenameOutcome {
                    entry,
                    succeeded: true,
                    error_detail: None,
                }
            }
            Err(err) => {
                error!("Error renaming {}: {}", entry.original_name, err);
                RenameOutcome {
                    entry,
                    succeeded: false,
                    error_detail: Some(err.to_string()),
                }
            }
        };

        outcomes.push(outcome);
        reporter.on_rename_progress(done + 1, total);
    }

    outcomes
}

/// Extension including the leading dot, or `""` if the name has none.
/// A leading-dot name like `.bashrc` has no extension.
fn file_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) if i > 0 => &name[i..],
        _ => "",
    }
}
