//! Commands Module
//!
//! All CLI subcommand implementations.

pub mod export;
pub mod fetch;
pub mod head;
pub mod info;

use clap::ValueEnum;
use std::path::Path;

use lmcorpora::{FlatCorpus, Result, SplitCorpus, WikiText, WikiTextKo};

/// Corpus selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CorpusKind {
    Wikitext2,
    Wikitext103,
    Wikitextko,
}

impl CorpusKind {
    pub fn label(self) -> &'static str {
        match self {
            CorpusKind::Wikitext2 => "wikitext-2",
            CorpusKind::Wikitext103 => "wikitext-103",
            CorpusKind::Wikitextko => "wikitext-ko",
        }
    }
}

/// Split selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SplitKind {
    Train,
    Valid,
    Test,
}

impl SplitKind {
    pub fn index(self) -> usize {
        match self {
            SplitKind::Train => 0,
            SplitKind::Valid => 1,
            SplitKind::Test => 2,
        }
    }

    pub fn label(self) -> &'static str {
        lmcorpora::SPLIT_NAMES[self.index()]
    }
}

/// A loaded corpus of either shape.
pub enum LoadedCorpus {
    Split(SplitCorpus),
    Flat(FlatCorpus),
}

impl LoadedCorpus {
    pub fn total_samples(&self) -> usize {
        match self {
            LoadedCorpus::Split(corpus) => corpus.total_samples(),
            LoadedCorpus::Flat(corpus) => corpus.len(),
        }
    }

    /// Samples of one split, or the flat sequence (which has no splits).
    pub fn samples(&self, split: SplitKind) -> &[String] {
        match self {
            LoadedCorpus::Split(corpus) => &corpus[split.index()],
            LoadedCorpus::Flat(corpus) => corpus.samples(),
        }
    }
}

pub fn load(kind: CorpusKind, root: &Path) -> Result<LoadedCorpus> {
    match kind {
        CorpusKind::Wikitext2 => Ok(LoadedCorpus::Split(WikiText::wikitext2(root).load()?)),
        CorpusKind::Wikitext103 => Ok(LoadedCorpus::Split(WikiText::wikitext103(root).load()?)),
        CorpusKind::Wikitextko => Ok(LoadedCorpus::Flat(WikiTextKo::new(root).load()?)),
    }
}
