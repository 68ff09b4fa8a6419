// src/data/source.rs

use std::path::{Path, PathBuf};

use crate::data::download::{download_to, unpack_archive};
use crate::error::Result;

/// Static configuration for one corpus: source URL and the directory it
/// occupies under the data root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusDescriptor {
    pub name: &'static str,
    pub url: &'static str,
    pub dirname: &'static str,
}

impl CorpusDescriptor {
    pub fn local_dir(&self, root: &Path) -> PathBuf {
        root.join(self.dirname)
    }
}

/// Fetch capability: ensure the corpus files exist under `root`.
///
/// The default implementation covers archive-backed corpora: if the corpus
/// directory already exists nothing is transferred; otherwise the archive
/// is downloaded next to `root` and unpacked in place. Dump-backed corpora
/// override `fetch` to run their extraction step instead.
pub trait CorpusSource {
    fn descriptor(&self) -> &CorpusDescriptor;

    fn fetch(&self, root: &Path) -> Result<PathBuf> {
        let dir = self.descriptor().local_dir(root);
        if dir.exists() {
            return Ok(dir);
        }
        let archive = download_to(self.descriptor().url, root)?;
        unpack_archive(&archive, root)?;
        Ok(dir)
    }
}
