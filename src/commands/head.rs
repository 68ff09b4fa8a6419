//! Head Command
//!
//! Prints the first samples of a corpus split.

use std::path::Path;

use lmcorpora::Result;

use crate::commands::{load, CorpusKind, LoadedCorpus, SplitKind};

pub fn execute(corpus: CorpusKind, split: SplitKind, count: usize, root: &Path) -> Result<()> {
    let loaded = load(corpus, root)?;

    match &loaded {
        LoadedCorpus::Split(_) => {
            println!("# {} / {} (first {})", corpus.label(), split.label(), count)
        }
        LoadedCorpus::Flat(_) => println!("# {} (first {})", corpus.label(), count),
    }

    for sample in loaded.samples(split).iter().take(count) {
        println!("{}", sample);
    }

    Ok(())
}
