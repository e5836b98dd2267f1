//! Bundle file discovery.

use anyhow::{Context, Result};
use ignore::overrides::OverrideBuilder;
use std::path::{Path, PathBuf};
use tulip_lint_core::bundle::BundleFormat;
use tulip_lint_core::InputConfig;

/// Expands input paths into bundle files.
///
/// Files are taken as given. Directories are walked for files with a
/// recognised bundle extension, skipping hidden entries and honoring
/// `input.exclude` and `.gitignore`, and each directory's files are sorted. Inputs keep their command-line
/// order.
///
/// # Errors
///
/// Fails on a missing path, an invalid exclude pattern, or a walk error.
pub fn collect(paths: &[PathBuf], input: &InputConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            files.extend(walk(path, input)?);
        } else {
            anyhow::bail!("Input path does not exist: {}", path.display());
        }
    }

    tracing::debug!("Discovered {} bundle file(s)", files.len());
    Ok(files)
}

fn walk(root: &Path, input: &InputConfig) -> Result<Vec<PathBuf>> {
    let mut overrides = OverrideBuilder::new(root);
    for pattern in &input.exclude {
        overrides
            .add(&format!("!{pattern}"))
            .with_context(|| format!("Invalid exclude pattern: {pattern}"))?;
    }
    let overrides = overrides.build().context("Invalid exclude patterns")?;

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .git_ignore(input.respect_gitignore)
        .require_git(false)
        .overrides(overrides);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && BundleFormat::from_path(path).is_some() {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
