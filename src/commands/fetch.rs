//! Fetch Command
//!
//! Downloads and prepares a corpus without loading it.

use std::path::Path;
use std::time::Instant;

use lmcorpora::{CorpusSource, Result, WikiText, WikiTextKo};

use crate::commands::CorpusKind;

pub fn execute(corpus: CorpusKind, root: &Path) -> Result<()> {
    println!("═══════════════════════════════════════════════════════════");
    println!("  📥 Fetching {}", corpus.label());
    println!("═══════════════════════════════════════════════════════════");
    println!("  Root: {:?}", root);
    println!();

    let start = Instant::now();

    let dir = match corpus {
        CorpusKind::Wikitext2 => WikiText::wikitext2(root).fetch(root)?,
        CorpusKind::Wikitext103 => WikiText::wikitext103(root).fetch(root)?,
        CorpusKind::Wikitextko => WikiTextKo::new(root).fetch(root)?,
    };

    println!();
    println!("═══════════════════════════════════════════════════════════");
    println!("  ✅ Corpus ready!");
    println!("  Directory: {:?}", dir);
    println!("  Time: {:.1}s", start.elapsed().as_secs_f64());
    println!("═══════════════════════════════════════════════════════════");

    Ok(())
}
