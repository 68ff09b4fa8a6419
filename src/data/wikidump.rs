// src/data/wikidump.rs

use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

use crate::data::corpus::FlatCorpus;
use crate::data::download::download_to;
use crate::data::source::{CorpusDescriptor, CorpusSource};
use crate::error::{CorpusError, Result};

pub const WIKITEXT_KO: CorpusDescriptor = CorpusDescriptor {
    name: "wikitext-ko",
    url: "https://dumps.wikimedia.org/kowiki/latest/kowiki-latest-pages-articles.xml.bz2",
    dirname: "wikitext-ko",
};

/// WikiExtractor turns a Wikipedia XML dump into JSON-lines shard files.
/// https://github.com/attardi/wikiextractor
const WIKIEXTRACTOR_URL: &str =
    "https://raw.githubusercontent.com/attardi/wikiextractor/master/WikiExtractor.py";

/// Shard filename prefix produced by WikiExtractor.
const SHARD_PREFIX: &str = "wiki_";

/// How the extraction script is invoked.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Python interpreter used to run WikiExtractor.
    pub python: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            python: "python".to_string(),
        }
    }
}

/// Korean Wikipedia corpus loader.
///
/// The dump is downloaded compressed and handed to WikiExtractor, which
/// writes `wiki_*` shard files (one JSON document per line) under the
/// corpus directory. Loading flattens every document's newline-separated
/// sentences into a single ordered sequence.
pub struct WikiTextKo {
    descriptor: CorpusDescriptor,
    root: PathBuf,
    extractor: ExtractorConfig,
}

impl WikiTextKo {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_extractor(root, ExtractorConfig::default())
    }

    pub fn with_extractor(root: impl AsRef<Path>, extractor: ExtractorConfig) -> Self {
        Self {
            descriptor: WIKITEXT_KO,
            root: root.as_ref().to_path_buf(),
            extractor,
        }
    }

    /// Downloads and extracts the dump if absent, then reads every shard in
    /// sorted filename order.
    pub fn load(&self) -> Result<FlatCorpus> {
        let dir = self.fetch(&self.root)?;

        let shards = collect_shards(&dir)?;
        if shards.is_empty() {
            return Err(CorpusError::DatasetEmpty { path: dir });
        }

        let mut samples = Vec::new();
        for shard in &shards {
            read_shard(shard, &mut samples)?;
        }

        info!(
            "Loaded {}: {} sentences from {} shards",
            self.descriptor.name,
            samples.len(),
            shards.len()
        );

        Ok(FlatCorpus::new(samples))
    }
}

impl CorpusSource for WikiTextKo {
    fn descriptor(&self) -> &CorpusDescriptor {
        &self.descriptor
    }

    /// Dump-backed override of the default archive fetch: the dump and the
    /// extraction script are downloaded, then the script converts the dump
    /// into shard files under the corpus directory.
    fn fetch(&self, root: &Path) -> Result<PathBuf> {
        let dir = self.descriptor.local_dir(root);
        if dir.exists() {
            return Ok(dir);
        }

        let dump = download_to(self.descriptor.url, root)?;
        let script = download_to(WIKIEXTRACTOR_URL, root)?;
        run_extractor(&self.extractor, &script, &dump, &dir)?;

        Ok(dir)
    }
}

/// Runs `python WikiExtractor.py -o <dir> --json <dump>`, blocking until the
/// process exits. A non-zero exit status is a hard error; otherwise a failed
/// extraction would surface later as a mysteriously empty corpus.
fn run_extractor(
    config: &ExtractorConfig,
    script: &Path,
    dump: &Path,
    out_dir: &Path,
) -> Result<()> {
    info!(
        "Extracting {} -> {}",
        dump.display(),
        out_dir.display()
    );

    let status = Command::new(&config.python)
        .arg(script)
        .arg("-o")
        .arg(out_dir)
        .arg("--json")
        .arg(dump)
        .status()
        .map_err(|e| CorpusError::ExtractorSpawn {
            command: config.python.clone(),
            source: e,
        })?;

    if !status.success() {
        return Err(CorpusError::ExtractorFailed { status });
    }
    Ok(())
}

/// One WikiExtractor document; only the text body matters here.
#[derive(Deserialize)]
struct ShardDoc {
    text: String,
}

/// Recursively collects `wiki_*` shard files under `dir`, sorted by full
/// path string so processing order never depends on filesystem enumeration.
fn collect_shards(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut shards = Vec::new();
    collect_into(dir, &mut shards)?;
    shards.sort_by(|a, b| a.to_string_lossy().cmp(&b.to_string_lossy()));
    Ok(shards)
}

fn collect_into(dir: &Path, shards: &mut Vec<PathBuf>) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| CorpusError::FileRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            collect_into(&path, shards)?;
        } else if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(SHARD_PREFIX))
        {
            shards.push(path);
        }
    }
    Ok(())
}

/// Reads one shard: each line is a JSON document whose `text` field splits
/// on newlines into sentences; empty sentences are dropped.
fn read_shard(path: &Path, samples: &mut Vec<String>) -> Result<()> {
    let file = File::open(path).map_err(|e| CorpusError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::with_capacity(1024 * 1024, file);

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| CorpusError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let doc: ShardDoc =
            serde_json::from_str(&line).map_err(|e| CorpusError::ShardJson {
                path: path.to_path_buf(),
                line: idx + 1,
                source: e,
            })?;
        samples.extend(
            doc.text
                .split('\n')
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn extractor_spawn_failure_is_reported() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = ExtractorConfig {
            python: "definitely-not-a-real-interpreter".to_string(),
        };

        let err = run_extractor(
            &config,
            &dir.path().join("WikiExtractor.py"),
            &dir.path().join("dump.xml.bz2"),
            &dir.path().join("out"),
        )
        .unwrap_err();
        assert!(matches!(err, CorpusError::ExtractorSpawn { .. }));
    }

    #[test]
    fn extractor_nonzero_exit_is_an_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        // `false` ignores its arguments and exits 1.
        let config = ExtractorConfig {
            python: "false".to_string(),
        };

        let err = run_extractor(
            &config,
            &dir.path().join("WikiExtractor.py"),
            &dir.path().join("dump.xml.bz2"),
            &dir.path().join("out"),
        )
        .unwrap_err();
        assert!(matches!(err, CorpusError::ExtractorFailed { .. }));
    }

    #[test]
    fn shard_collection_ignores_other_files() {
        let root = tempdir().expect("Failed to create temp dir");
        let sub = root.path().join("AA");
        std::fs::create_dir_all(&sub).expect("Failed to create subdir");
        std::fs::write(sub.join("wiki_00"), b"").expect("Failed to write shard");
        std::fs::write(sub.join("README"), b"").expect("Failed to write file");

        let shards = collect_shards(root.path()).expect("Failed to collect");
        assert_eq!(shards.len(), 1);
        assert!(shards[0].ends_with("AA/wiki_00"));
    }
}
