//! Common test utilities and helpers
//!
//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Writes the three WikiText split files under `root/<dirname>` and returns
/// the corpus directory.
pub fn write_wikitext_fixture(
    root: &Path,
    dirname: &str,
    train: &[&str],
    valid: &[&str],
    test: &[&str],
) -> PathBuf {
    let dir = root.join(dirname);
    fs::create_dir_all(&dir).expect("Failed to create corpus dir");
    write_lines(&dir.join("wiki.train.tokens"), train);
    write_lines(&dir.join("wiki.valid.tokens"), valid);
    write_lines(&dir.join("wiki.test.tokens"), test);
    dir
}

/// Writes one shard file (one JSON document per line) at `dir/relative`,
/// creating intermediate directories.
pub fn write_shard(dir: &Path, relative: &str, docs: &[&str]) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create shard dir");
    }
    write_lines(&path, docs);
    path
}

fn write_lines(path: &Path, lines: &[&str]) {
    let mut content = lines.join("\n");
    if !lines.is_empty() {
        content.push('\n');
    }
    fs::write(path, content).expect("Failed to write fixture file");
}
