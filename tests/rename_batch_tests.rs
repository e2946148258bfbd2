use std::fs;
use std::path::Path;
use std::thread::sleep;
use std::time::Duration;

use tempfile::tempdir;

use renum::model::PlanEntry;
use renum::{renamer, scanner};
use renum::{AppConfig, Error, RenameEngine, RenameRequest, SilentReporter};

fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn entry(original: &str, target: &str, index: usize) -> PlanEntry {
    PlanEntry {
        original_name: original.to_string(),
        target_name: target.to_string(),
        sequence_index: index,
    }
}

#[test]
fn test_run_renames_in_creation_order() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();

    // b.txt first, a.txt later — creation order must win over name order.
    // The sleep keeps the two timestamps apart even on coarse filesystems.
    fs::write(root.join("b.txt"), "first").unwrap();
    sleep(Duration::from_millis(400));
    fs::write(root.join("a.txt"), "second").unwrap();

    let engine = RenameEngine::new(AppConfig::default());
    let request = RenameRequest {
        directory: root.to_path_buf(),
        base_name: "img".to_string(),
    };
    let result = engine.run(&request, &SilentReporter).unwrap();

    assert_eq!(result.renamed, 2);
    assert_eq!(result.failed, 0);
    assert!(result.outcomes.iter().all(|o| o.succeeded));

    assert_eq!(list_names(root), vec!["img_1.txt", "img_2.txt"]);
    assert_eq!(fs::read_to_string(root.join("img_1.txt")).unwrap(), "first");
    assert_eq!(fs::read_to_string(root.join("img_2.txt")).unwrap(), "second");
}

#[test]
fn test_run_on_empty_directory() {
    let tmp = tempdir().unwrap();

    let engine = RenameEngine::new(AppConfig::default());
    let request = RenameRequest {
        directory: tmp.path().to_path_buf(),
        base_name: "img".to_string(),
    };
    let result = engine.run(&request, &SilentReporter).unwrap();

    assert!(result.outcomes.is_empty());
    assert_eq!(result.renamed, 0);
    assert_eq!(result.failed, 0);
}

#[test]
fn test_scan_excludes_subdirectories() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();

    fs::create_dir(root.join("nested")).unwrap();
    fs::write(root.join("nested").join("inner.txt"), "hidden").unwrap();
    fs::write(root.join("only.txt"), "visible").unwrap();

    let files = scanner::scan_directory(root, &[]).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "only.txt");
}

#[test]
fn test_scan_missing_directory_fails() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("does_not_exist");

    let result = scanner::scan_directory(&missing, &[]);
    assert!(matches!(result, Err(Error::DirectoryAccess { .. })));
}

#[test]
fn test_scan_is_idempotent() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();

    fs::write(root.join("one.txt"), "1").unwrap();
    fs::write(root.join("two.txt"), "2").unwrap();
    fs::write(root.join("three.txt"), "3").unwrap();

    let mut first = scanner::scan_directory(root, &[]).unwrap();
    let mut second = scanner::scan_directory(root, &[]).unwrap();

    // Order is unspecified; the sets must match.
    first.sort_by(|a, b| a.name.cmp(&b.name));
    second.sort_by(|a, b| a.name.cmp(&b.name));
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn test_scan_respects_ignore_patterns() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();

    fs::write(root.join("keep.txt"), "k").unwrap();
    fs::write(root.join("skip.tmp"), "s").unwrap();

    let files = scanner::scan_directory(root, &["*.tmp".to_string()]).unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "keep.txt");
}

#[test]
fn test_execute_continues_after_failure() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();

    fs::write(root.join("one.txt"), "1").unwrap();
    fs::write(root.join("three.txt"), "3").unwrap();

    // Middle entry refers to a file that no longer exists.
    let plan = vec![
        entry("one.txt", "n_1.txt", 1),
        entry("missing.txt", "n_2.txt", 2),
        entry("three.txt", "n_3.txt", 3),
    ];

    let outcomes = renamer::execute(root, plan, &SilentReporter);

    assert_eq!(outcomes.len(), 3);
    assert!(outcomes[0].succeeded);
    assert!(!outcomes[1].succeeded);
    assert!(outcomes[1].error_detail.is_some());
    assert!(outcomes[2].succeeded);

    assert!(root.join("n_1.txt").exists());
    assert!(root.join("n_3.txt").exists());
}

#[test]
fn test_execute_collision_with_occupied_target() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();

    fs::write(root.join("x.txt"), "x").unwrap();
    fs::write(root.join("y.txt"), "y").unwrap();
    // Occupy the first target path with a directory, which makes the
    // rename fail on every platform.
    fs::create_dir(root.join("img_1.txt")).unwrap();

    let plan = vec![
        entry("x.txt", "img_1.txt", 1),
        entry("y.txt", "img_2.txt", 2),
    ];

    let outcomes = renamer::execute(root, plan, &SilentReporter);

    assert!(!outcomes[0].succeeded);
    assert!(outcomes[0].error_detail.is_some());
    assert!(outcomes[1].succeeded);

    // The collided file keeps its original name; the other was renamed.
    assert!(root.join("x.txt").exists());
    assert!(root.join("img_2.txt").exists());
}

#[test]
fn test_symlinked_directory_is_excluded() {
    #[cfg(unix)]
    {
        let tmp = tempdir().unwrap();
        let root = tmp.path();

        fs::create_dir(root.join("real_dir")).unwrap();
        std::os::unix::fs::symlink(root.join("real_dir"), root.join("dir_link")).unwrap();
        fs::write(root.join("plain.txt"), "p").unwrap();

        let files = scanner::scan_directory(root, &[]).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "plain.txt");
    }
}
