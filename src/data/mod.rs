// src/data/mod.rs

mod corpus;
mod download;
mod source;
mod wikidump;
mod wikitext;

pub use corpus::{FlatCorpus, SplitCorpus, SPLIT_NAMES};

pub use download::{download_to, unpack_archive, url_filename};

pub use source::{CorpusDescriptor, CorpusSource};

pub use wikitext::{WikiText, WIKITEXT103, WIKITEXT2};

pub use wikidump::{ExtractorConfig, WikiTextKo, WIKITEXT_KO};
