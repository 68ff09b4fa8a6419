//! Wiki Dump Loader Integration Tests
//!
//! Tests for the JSON-lines shard loader over fixture directories.

mod common;

use lmcorpora::{CorpusError, WikiTextKo};
use tempfile::tempdir;

#[test]
fn flattens_shards_in_sorted_filename_order() {
    let root = tempdir().expect("Failed to create temp dir");
    let dir = root.path().join("wikitext-ko");

    // Written out of order on purpose: processing must follow sorted path
    // strings, not creation or enumeration order.
    common::write_shard(&dir, "AB/wiki_01", &[r#"{"text":"s3"}"#]);
    common::write_shard(&dir, "AA/wiki_00", &[r#"{"text":"s1\ns2\n"}"#]);

    let corpus = WikiTextKo::new(root.path())
        .load()
        .expect("Failed to load fixture corpus");

    let samples: Vec<&str> = corpus.iter().collect();
    assert_eq!(samples, vec!["s1", "s2", "s3"]);
}

#[test]
fn empty_sentences_are_dropped() {
    let root = tempdir().expect("Failed to create temp dir");
    let dir = root.path().join("wikitext-ko");
    common::write_shard(&dir, "AA/wiki_00", &[r#"{"text":"\n\nfirst\n\nsecond"}"#]);

    let corpus = WikiTextKo::new(root.path())
        .load()
        .expect("Failed to load fixture corpus");

    assert_eq!(corpus.len(), 2);
    assert_eq!(&corpus[0], "first");
    assert_eq!(corpus.get(1), Some("second"));
}

#[test]
fn documents_within_a_shard_keep_their_order() {
    let root = tempdir().expect("Failed to create temp dir");
    let dir = root.path().join("wikitext-ko");
    common::write_shard(
        &dir,
        "AA/wiki_00",
        &[r#"{"text":"doc one"}"#, r#"{"text":"doc two"}"#],
    );

    let corpus = WikiTextKo::new(root.path())
        .load()
        .expect("Failed to load fixture corpus");

    let samples: Vec<&str> = corpus.iter().collect();
    assert_eq!(samples, vec!["doc one", "doc two"]);
}

#[test]
fn zero_shards_is_a_hard_error() {
    let root = tempdir().expect("Failed to create temp dir");
    std::fs::create_dir_all(root.path().join("wikitext-ko")).expect("Failed to create corpus dir");

    let err = WikiTextKo::new(root.path()).load().unwrap_err();
    assert!(matches!(err, CorpusError::DatasetEmpty { .. }));
}

#[test]
fn invalid_json_reports_shard_and_line() {
    let root = tempdir().expect("Failed to create temp dir");
    let dir = root.path().join("wikitext-ko");
    common::write_shard(&dir, "AA/wiki_00", &[r#"{"text":"fine"}"#, "not json"]);

    let err = WikiTextKo::new(root.path()).load().unwrap_err();
    match err {
        CorpusError::ShardJson { line, .. } => assert_eq!(line, 2),
        other => panic!("Expected ShardJson error, got {other}"),
    }
}

#[test]
fn loading_twice_is_idempotent() {
    let root = tempdir().expect("Failed to create temp dir");
    let dir = root.path().join("wikitext-ko");
    common::write_shard(&dir, "AA/wiki_00", &[r#"{"text":"s1\ns2"}"#]);

    let loader = WikiTextKo::new(root.path());
    let first = loader.load().expect("Failed to load fixture corpus");
    let second = loader.load().expect("Failed to load fixture corpus");
    assert_eq!(first, second);
}
