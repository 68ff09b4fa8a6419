//! Export Command
//!
//! Writes corpus samples to a text file, one per line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use lmcorpora::utils::{format_bytes, format_number};
use lmcorpora::{CorpusError, Result};

use crate::commands::{load, CorpusKind, LoadedCorpus, SplitKind};

pub fn execute(
    corpus: CorpusKind,
    split: Option<SplitKind>,
    output: &Path,
    root: &Path,
) -> Result<()> {
    println!("═══════════════════════════════════════════════════════════");
    println!("  📤 Exporting {}", corpus.label());
    println!("═══════════════════════════════════════════════════════════");
    println!("  Output: {:?}", output);
    println!();

    let start = Instant::now();
    let loaded = load(corpus, root)?;

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output).map_err(|e| CorpusError::FileWrite {
        path: output.to_path_buf(),
        source: e,
    })?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);

    let mut written = 0usize;
    let mut bytes = 0usize;

    match (&loaded, split) {
        // A chosen split, or every split in order when none is given.
        (LoadedCorpus::Split(split_corpus), Some(split)) => {
            write_samples(
                &mut writer,
                output,
                &split_corpus[split.index()],
                &mut written,
                &mut bytes,
            )?;
        }
        (LoadedCorpus::Split(split_corpus), None) => {
            for samples in split_corpus.iter() {
                write_samples(&mut writer, output, samples, &mut written, &mut bytes)?;
            }
        }
        // Flat corpora have no splits to choose from.
        (LoadedCorpus::Flat(flat_corpus), _) => {
            write_samples(
                &mut writer,
                output,
                flat_corpus.samples(),
                &mut written,
                &mut bytes,
            )?;
        }
    }

    writer.flush().map_err(|e| CorpusError::FileWrite {
        path: output.to_path_buf(),
        source: e,
    })?;

    println!("═══════════════════════════════════════════════════════════");
    println!("  ✅ Export done!");
    println!("  Samples: {}", format_number(written));
    println!("  Bytes: {}", format_bytes(bytes));
    println!("  Time: {:.1}s", start.elapsed().as_secs_f64());
    println!("═══════════════════════════════════════════════════════════");

    Ok(())
}

fn write_samples(
    writer: &mut BufWriter<File>,
    output: &Path,
    samples: &[String],
    written: &mut usize,
    bytes: &mut usize,
) -> Result<()> {
    for sample in samples {
        writeln!(writer, "{}", sample).map_err(|e| CorpusError::FileWrite {
            path: output.to_path_buf(),
            source: e,
        })?;
        *written += 1;
        *bytes += sample.len() + 1;
    }
    Ok(())
}
