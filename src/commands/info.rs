//! Info Command
//!
//! Shows split and sample counts for a corpus.

use std::path::Path;
use std::time::Instant;

use lmcorpora::utils::{format_bytes, format_number};
use lmcorpora::{Result, SPLIT_NAMES};

use crate::commands::{load, CorpusKind, LoadedCorpus};

pub fn execute(corpus: CorpusKind, root: &Path) -> Result<()> {
    println!("═══════════════════════════════════════════════════════════");
    println!("  📊 Corpus Info: {}", corpus.label());
    println!("═══════════════════════════════════════════════════════════");
    println!("  Root: {:?}", root);
    println!();

    let start = Instant::now();
    let loaded = load(corpus, root)?;

    match &loaded {
        LoadedCorpus::Split(split_corpus) => {
            println!("  Splits: {}", split_corpus.len());
            for (name, samples) in SPLIT_NAMES.iter().zip(split_corpus.iter()) {
                let bytes: usize = samples.iter().map(|s| s.len()).sum();
                println!(
                    "    {:<6} {:>10} samples  {:>10}",
                    name,
                    format_number(samples.len()),
                    format_bytes(bytes)
                );
            }
        }
        LoadedCorpus::Flat(flat_corpus) => {
            let bytes: usize = flat_corpus.iter().map(|s| s.len()).sum();
            println!("  Splits: none (flat corpus)");
            println!(
                "    {:>10} sentences  {:>10}",
                format_number(flat_corpus.len()),
                format_bytes(bytes)
            );
        }
    }

    println!();
    println!("═══════════════════════════════════════════════════════════");
    println!(
        "  ✅ Total samples: {}",
        format_number(loaded.total_samples())
    );
    println!("  Time: {:.1}s", start.elapsed().as_secs_f64());
    println!("═══════════════════════════════════════════════════════════");

    Ok(())
}
