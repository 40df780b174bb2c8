//! Tests for the config file watcher.

use super::*;
use std::path::PathBuf;

#[test]
fn watcher_new_with_nonexistent_path_succeeds() {
    let watcher = ConfigWatcher::new(PathBuf::from("/tmp/nonexistent_hover_test.toml"));
    assert!(watcher.is_ok());
}

#[test]
fn watcher_keeps_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "# test").unwrap();

    let watcher = ConfigWatcher::new(path.clone()).unwrap();
    assert_eq!(watcher.path(), path.as_path());
}
