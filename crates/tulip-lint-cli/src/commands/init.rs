//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# tulip-lint configuration

[input]
# Glob patterns to exclude when a directory is given
exclude = [
    "**/node_modules/**",
]

# Respect .gitignore files
respect_gitignore = true

# Rule configurations, keyed by rule name or code.
# Every rule is enabled unless switched off here.

# [rules.unused-variables]
# enabled = false

# [rules.TL006]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("tulip-lint.toml"), force)?;

    println!("Created tulip-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit tulip-lint.toml to configure rules");
    println!("  2. Run: tulip-lint check <bundle>");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tulip_lint_core::Config;

    #[test]
    fn default_config_parses_to_defaults() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.input.exclude, ["**/node_modules/**"]);
        assert!(config.input.respect_gitignore);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("tulip-lint.toml");
        std::fs::write(&path, "# mine").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        write_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
