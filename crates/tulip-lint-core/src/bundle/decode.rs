//! Format detection and decoding of bundle bytes.

use super::DecodeError;
use crate::model::Document;

use std::io::{Cursor, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Supported bundle container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleFormat {
    /// A single JSON document.
    Json,
    /// A ZIP archive of JSON documents.
    Zip,
    /// A gzip-compressed tar archive of JSON documents.
    TarGz,
}

impl BundleFormat {
    /// Detects the format from a file name (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with(".json") {
            Some(Self::Json)
        } else if name.ends_with(".zip") {
            Some(Self::Zip)
        } else if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
            Some(Self::TarGz)
        } else {
            None
        }
    }
}

impl std::fmt::Display for BundleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "JSON file"),
            Self::Zip => write!(f, "ZIP archive"),
            Self::TarGz => write!(f, ".tar.gz archive"),
        }
    }
}

/// Decodes raw bundle bytes into document fragments.
///
/// Archive entries whose name ends in `.json` are parsed in archive order.
/// Entries that fail to parse are skipped with a warning.
///
/// # Errors
///
/// Returns [`DecodeError`] for unparsable JSON, unreadable archives, or
/// archives without any parsable `.json` entry.
pub fn decode(bytes: &[u8], format: BundleFormat) -> Result<Vec<Document>, DecodeError> {
    match format {
        BundleFormat::Json => {
            let document = Document::from_slice(bytes).map_err(DecodeError::InvalidJson)?;
            Ok(vec![document])
        }
        BundleFormat::Zip => decode_zip(bytes),
        BundleFormat::TarGz => decode_tar_gz(bytes),
    }
}

/// Reads a bundle file and decodes it according to its extension.
///
/// # Errors
///
/// Returns [`DecodeError::UnsupportedFormat`] for unknown extensions,
/// [`DecodeError::Io`] if the file cannot be read, or any decoding error.
pub fn read_bundle(path: &Path) -> Result<Vec<Document>, DecodeError> {
    let format = BundleFormat::from_path(path).ok_or_else(|| DecodeError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let bytes = std::fs::read(path).map_err(|e| DecodeError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!("Decoding {} as {format}", path.display());
    decode(&bytes, format)
}

fn decode_zip(bytes: &[u8]) -> Result<Vec<Document>, DecodeError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut documents = Vec::new();

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() || !is_json_entry(entry.name()) {
            continue;
        }
        let name = entry.name().to_string();
        let mut content = Vec::new();
        entry
            .read_to_end(&mut content)
            .map_err(zip::result::ZipError::Io)?;
        parse_entry(&name, &content, &mut documents);
    }

    finish(documents, BundleFormat::Zip)
}

fn decode_tar_gz(bytes: &[u8]) -> Result<Vec<Document>, DecodeError> {
    let mut tar = Vec::new();
    flate2::read::GzDecoder::new(bytes)
        .read_to_end(&mut tar)
        .map_err(DecodeError::Gzip)?;

    let mut archive = tar::Archive::new(tar.as_slice());
    let mut documents = Vec::new();

    for entry in archive.entries().map_err(corrupt_tar)? {
        let mut entry = entry.map_err(corrupt_tar)?;
        if !entry.header().entry_type().is_file() {
            continue;
        }
        let name = entry.path().map_err(corrupt_tar)?.to_string_lossy().to_string();
        if !is_json_entry(&name) {
            continue;
        }
        let mut content = Vec::new();
        entry.read_to_end(&mut content).map_err(corrupt_tar)?;
        parse_entry(&name, &content, &mut documents);
    }

    finish(documents, BundleFormat::TarGz)
}

fn corrupt_tar(e: std::io::Error) -> DecodeError {
    DecodeError::corrupt(e.to_string())
}

fn is_json_entry(name: &str) -> bool {
    name.ends_with(".json")
}

fn parse_entry(name: &str, content: &[u8], documents: &mut Vec<Document>) {
    match Document::from_slice(content) {
        Ok(document) => {
            debug!("Parsed archive entry {name}");
            documents.push(document);
        }
        Err(e) => warn!("Skipping archive entry {name}: {e}"),
    }
}

fn finish(documents: Vec<Document>, format: BundleFormat) -> Result<Vec<Document>, DecodeError> {
    if documents.is_empty() {
        return Err(DecodeError::NoJsonEntries { format });
    }
    Ok(documents)
}
