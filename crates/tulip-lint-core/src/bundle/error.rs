//! Errors raised while decoding bundle files.

use super::BundleFormat;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while decoding an uploaded bundle.
///
/// Any of these aborts analysis of the affected input.
#[derive(Debug, Error, Diagnostic)]
pub enum DecodeError {
    /// The bytes are not a JSON document.
    #[error("Invalid JSON file: {0}")]
    #[diagnostic(
        code(tulip_lint::decode::invalid_json),
        help("export the app again or check that the file is not truncated")
    )]
    InvalidJson(#[source] serde_json::Error),

    /// The ZIP container could not be read.
    #[error("Failed to read ZIP archive: {0}")]
    #[diagnostic(code(tulip_lint::decode::zip))]
    Zip(#[from] zip::result::ZipError),

    /// The gzip stream could not be decompressed.
    #[error("Failed to decompress gzip stream: {0}")]
    #[diagnostic(code(tulip_lint::decode::gzip))]
    Gzip(#[source] std::io::Error),

    /// The tar stream is malformed.
    #[error("Corrupt tar archive: {message}")]
    #[diagnostic(code(tulip_lint::decode::tar))]
    CorruptArchive {
        /// What was wrong with the archive.
        message: String,
    },

    /// The archive holds no parsable `.json` entry.
    #[error("No JSON files found in {format}")]
    #[diagnostic(
        code(tulip_lint::decode::no_json),
        help("the archive must contain at least one valid `.json` app export")
    )]
    NoJsonEntries {
        /// Format of the archive that was scanned.
        format: BundleFormat,
    },

    /// The file extension is not a supported bundle format.
    #[error("Unsupported bundle file: {}", path.display())]
    #[diagnostic(
        code(tulip_lint::decode::unsupported),
        help("upload a .json, .zip, .tar.gz or .tgz file")
    )]
    UnsupportedFormat {
        /// Offending path.
        path: PathBuf,
    },

    /// The file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    #[diagnostic(code(tulip_lint::decode::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

impl DecodeError {
    pub(crate) fn corrupt(message: impl Into<String>) -> Self {
        Self::CorruptArchive {
            message: message.into(),
        }
    }
}
