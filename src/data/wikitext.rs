// src/data/wikitext.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::data::corpus::SplitCorpus;
use crate::data::source::{CorpusDescriptor, CorpusSource};
use crate::error::{CorpusError, Result};

/// Split filenames shared by both WikiText sizes, in train/valid/test order.
const SPLIT_FILES: [&str; 3] = ["wiki.train.tokens", "wiki.valid.tokens", "wiki.test.tokens"];

pub const WIKITEXT2: CorpusDescriptor = CorpusDescriptor {
    name: "wikitext-2",
    url: "https://s3.amazonaws.com/research.metamind.io/wikitext/wikitext-2-v1.zip",
    dirname: "wikitext-2",
};

pub const WIKITEXT103: CorpusDescriptor = CorpusDescriptor {
    name: "wikitext-103",
    url: "https://s3.amazonaws.com/research.metamind.io/wikitext/wikitext-103-v1.zip",
    dirname: "wikitext-103",
};

/// Word-level WikiText corpus loader.
///
/// Both sizes ship the same three-file layout; one sample per line, with
/// surrounding whitespace stripped. Empty lines are skipped by default,
/// matching the published dataset's use for language modeling.
pub struct WikiText {
    descriptor: CorpusDescriptor,
    root: PathBuf,
    skip_empty: bool,
}

impl WikiText {
    /// WikiText-2 (small) loader rooted at `root`.
    pub fn wikitext2(root: impl AsRef<Path>) -> Self {
        Self::with_descriptor(WIKITEXT2, root)
    }

    /// WikiText-103 (large) loader rooted at `root`.
    pub fn wikitext103(root: impl AsRef<Path>) -> Self {
        Self::with_descriptor(WIKITEXT103, root)
    }

    fn with_descriptor(descriptor: CorpusDescriptor, root: impl AsRef<Path>) -> Self {
        Self {
            descriptor,
            root: root.as_ref().to_path_buf(),
            skip_empty: true,
        }
    }

    /// Keeps lines that are empty after trimming as empty samples.
    pub fn keep_empty(mut self) -> Self {
        self.skip_empty = false;
        self
    }

    /// Downloads the corpus if absent, then reads the three splits.
    pub fn load(&self) -> Result<SplitCorpus> {
        let dir = self.fetch(&self.root)?;

        let train = read_samples(&dir.join(SPLIT_FILES[0]), self.skip_empty)?;
        let valid = read_samples(&dir.join(SPLIT_FILES[1]), self.skip_empty)?;
        let test = read_samples(&dir.join(SPLIT_FILES[2]), self.skip_empty)?;

        info!(
            "Loaded {}: {} train / {} valid / {} test samples",
            self.descriptor.name,
            train.len(),
            valid.len(),
            test.len()
        );

        Ok(SplitCorpus::new(train, valid, test))
    }
}

impl CorpusSource for WikiText {
    fn descriptor(&self) -> &CorpusDescriptor {
        &self.descriptor
    }
}

/// One trimmed sample per line; optionally drops lines empty after trimming.
fn read_samples(path: &Path, skip_empty: bool) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| CorpusError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::with_capacity(1024 * 1024, file);

    let mut samples = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| CorpusError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let trimmed = line.trim();
        if skip_empty && trimmed.is_empty() {
            continue;
        }
        samples.push(trimmed.to_string());
    }
    Ok(samples)
}
