//! Locating `tulip-lint.toml`.
//!
//! The first match wins:
//!
//! 1. `--config` / `TULIP_LINT_CONFIG`
//! 2. `tulip-lint.toml` or `.tulip-lint.toml` in the working directory
//! 3. the same names next to the bundles being checked, in argument order
//! 4. `$TULIP_LINT_CONFIG_DIR/config.toml`, else `~/.tulip-lint/config.toml`
//!
//! Without a match the built-in defaults apply.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tulip_lint_core::Config;

const LOCAL_NAMES: [&str; 2] = ["tulip-lint.toml", ".tulip-lint.toml"];

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line.
    Explicit(PathBuf),
    /// Found in the working directory or beside a bundle.
    Local(PathBuf),
    /// Found in the per-user config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Loads the configuration, or defaults when nothing was found.
    ///
    /// # Errors
    ///
    /// Fails if the resolved file cannot be read or parsed.
    pub fn load(&self) -> Result<Config> {
        let path = match self {
            Self::Explicit(p) | Self::Local(p) => p,
            Self::Global(p) => {
                tracing::info!("Using global config: {}", p.display());
                p
            }
            Self::Default => return Ok(Config::default()),
        };
        Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

/// Resolves the configuration for a `check` over `inputs`.
#[must_use]
pub fn resolve(cwd: &Path, inputs: &[PathBuf], explicit: Option<&Path>) -> ConfigSource {
    let global = std::env::var_os("TULIP_LINT_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".tulip-lint")));
    resolve_in(cwd, inputs, explicit, global.as_deref())
}

fn resolve_in(
    cwd: &Path,
    inputs: &[PathBuf],
    explicit: Option<&Path>,
    global_dir: Option<&Path>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    let bundle_dirs = inputs.iter().filter_map(|input| {
        if input.is_dir() {
            Some(input.as_path())
        } else {
            input.parent()
        }
    });

    for dir in std::iter::once(cwd).chain(bundle_dirs) {
        if let Some(found) = LOCAL_NAMES.iter().map(|n| dir.join(n)).find(|p| p.is_file()) {
            tracing::debug!("Found config: {}", found.display());
            return ConfigSource::Local(found);
        }
    }

    global_dir
        .map(|dir| dir.join("config.toml"))
        .filter(|p| p.is_file())
        .map_or(ConfigSource::Default, ConfigSource::Global)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// A working directory and a separate bundle directory holding `app.json`.
    fn layout() -> (TempDir, TempDir, PathBuf) {
        let cwd = TempDir::new().unwrap();
        let bundles = TempDir::new().unwrap();
        let app = bundles.path().join("app.json");
        fs::write(&app, "{}").unwrap();
        (cwd, bundles, app)
    }

    #[test]
    fn explicit_path_is_used_without_checking_it_exists() {
        let (cwd, _bundles, app) = layout();
        fs::write(cwd.path().join("tulip-lint.toml"), "").unwrap();

        let source = resolve_in(cwd.path(), &[app], Some(Path::new("/nope.toml")), None);
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("/nope.toml")));
    }

    #[test]
    fn config_beside_the_bundle_file() {
        let (cwd, bundles, app) = layout();
        fs::write(bundles.path().join(".tulip-lint.toml"), "").unwrap();

        let source = resolve_in(cwd.path(), &[app], None, None);
        assert_eq!(
            source,
            ConfigSource::Local(bundles.path().join(".tulip-lint.toml"))
        );
    }

    #[test]
    fn config_inside_a_bundle_directory() {
        let (cwd, bundles, _app) = layout();
        fs::write(bundles.path().join("tulip-lint.toml"), "").unwrap();

        let source = resolve_in(cwd.path(), &[bundles.path().to_path_buf()], None, None);
        assert_eq!(
            source,
            ConfigSource::Local(bundles.path().join("tulip-lint.toml"))
        );
    }

    #[test]
    fn working_directory_wins_over_bundle_directory() {
        let (cwd, bundles, app) = layout();
        fs::write(cwd.path().join(".tulip-lint.toml"), "").unwrap();
        fs::write(bundles.path().join("tulip-lint.toml"), "").unwrap();

        let source = resolve_in(cwd.path(), &[app], None, None);
        assert_eq!(source, ConfigSource::Local(cwd.path().join(".tulip-lint.toml")));
    }

    #[test]
    fn global_config_when_nothing_local() {
        let (cwd, _bundles, app) = layout();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        let source = resolve_in(cwd.path(), &[app.clone()], None, Some(global.path()));
        assert_eq!(source, ConfigSource::Global(global.path().join("config.toml")));

        let empty = TempDir::new().unwrap();
        let source = resolve_in(cwd.path(), &[app], None, Some(empty.path()));
        assert_eq!(source, ConfigSource::Default);
    }

    #[test]
    fn load_default_yields_default_config() {
        let config = ConfigSource::Default.load().unwrap();
        assert!(config.rules.is_empty());
        assert!(config.input.respect_gitignore);
    }

    #[test]
    fn load_reads_rule_switches() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tulip-lint.toml");
        fs::write(&path, "[rules.TL010]\nenabled = false\n").unwrap();

        let config = ConfigSource::Local(path).load().unwrap();
        assert!(!config.is_rule_enabled("unused-variables", "TL010"));
        assert!(config.is_rule_enabled("untitled-steps", "TL003"));
    }

    #[test]
    fn load_missing_explicit_file_fails() {
        let err = ConfigSource::Explicit(PathBuf::from("/nonexistent/tulip-lint.toml"))
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn load_invalid_toml_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tulip-lint.toml");
        fs::write(&path, "[rules\n").unwrap();

        assert!(ConfigSource::Local(path).load().is_err());
    }
}
