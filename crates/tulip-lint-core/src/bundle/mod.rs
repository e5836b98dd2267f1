//! Decoding and merging of uploaded app bundles.
//!
//! A bundle is either a plain JSON export, a ZIP archive of JSON exports, or
//! a gzip-compressed tar archive of JSON exports. Decoding yields one
//! [`Document`](crate::Document) fragment per JSON file; [`merge`] combines
//! the fragments into the single document the analyzer consumes.

mod decode;
mod error;
mod merge;

pub use decode::{decode, read_bundle, BundleFormat};
pub use error::DecodeError;
pub use merge::merge;
