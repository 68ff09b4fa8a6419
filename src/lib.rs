//! lmcorpora: corpus loaders for language-modeling pipelines
//!
//! Each loader downloads its corpus on first use, reads the raw text files
//! and exposes the samples as immutable in-memory sequences.

pub mod data;
pub mod error;
pub mod utils;

// Main re-exports
pub use data::{
    CorpusDescriptor, CorpusSource, ExtractorConfig, FlatCorpus, SplitCorpus, WikiText,
    WikiTextKo, SPLIT_NAMES, WIKITEXT103, WIKITEXT2, WIKITEXT_KO,
};
pub use error::{CorpusError, Result};
