// src/data/download.rs

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{CorpusError, Result};

/// Final path segment of a URL, used as the local filename.
pub fn url_filename(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Downloads `url` into `dir`, skipping the transfer when the target file
/// already exists. Returns the local path.
pub fn download_to(url: &str, dir: &Path) -> Result<PathBuf> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CorpusError::UnsupportedUrl(url.to_string()));
    }

    std::fs::create_dir_all(dir)?;
    let target = dir.join(url_filename(url));
    if target.exists() {
        debug!("{} already present, skipping download", target.display());
        return Ok(target);
    }

    info!("Downloading {} -> {}", url, target.display());
    let response = ureq::get(url).call().map_err(|e| CorpusError::Download {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    let mut reader = response.into_reader();
    let file = File::create(&target).map_err(|e| CorpusError::FileWrite {
        path: target.clone(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);
    let bytes = io::copy(&mut reader, &mut writer)?;
    info!("Downloaded {} ({} bytes)", target.display(), bytes);

    Ok(target)
}

/// Unpacks `archive` into `dest` when it is a `.zip` or `.tar.gz`/`.tgz`
/// file. Anything else (e.g. a `.bz2` dump consumed by the extractor as-is)
/// is left untouched.
pub fn unpack_archive(archive: &Path, dest: &Path) -> Result<()> {
    let name = archive
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    if name.ends_with(".zip") {
        unpack_zip(archive, dest)
    } else if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        unpack_tar_gz(archive, dest)
    } else {
        debug!("{} is not an archive, nothing to unpack", archive.display());
        Ok(())
    }
}

fn unpack_zip(path: &Path, dest: &Path) -> Result<()> {
    info!("Unpacking {} -> {}", path.display(), dest.display());
    let file = File::open(path).map_err(|e| CorpusError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| CorpusError::Unpack {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    archive.extract(dest).map_err(|e| CorpusError::Unpack {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn unpack_tar_gz(path: &Path, dest: &Path) -> Result<()> {
    info!("Unpacking {} -> {}", path.display(), dest.display());
    let file = File::open(path).map_err(|e| CorpusError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut archive = tar::Archive::new(GzDecoder::new(file));
    archive.unpack(dest).map_err(|e| CorpusError::Unpack {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
