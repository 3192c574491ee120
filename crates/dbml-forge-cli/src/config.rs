use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub cli: CliSettings,
}

/// CLI-specific settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliSettings {
    #[serde(default = "default_schema_dir")]
    pub default_schema_dir: String,
    /// File extension searched for when a directory is given.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Treat structural warnings as errors unless overridden.
    #[serde(default)]
    pub strict: bool,
}

impl Default for CliSettings {
    fn default() -> Self {
        Self {
            default_schema_dir: default_schema_dir(),
            extension: default_extension(),
            strict: false,
        }
    }
}

fn default_schema_dir() -> String {
    "schemas/".to_string()
}

fn default_extension() -> String {
    "dbml".to_string()
}

impl CliConfig {
    /// Paths to process: the explicit ones, or the configured schema dir.
    pub fn resolve_paths(&self, explicit: &[PathBuf]) -> Vec<PathBuf> {
        if explicit.is_empty() {
            vec![PathBuf::from(&self.cli.default_schema_dir)]
        } else {
            explicit.to_vec()
        }
    }

    /// Strict mode is on if either the flag or the config asks for it.
    pub fn resolve_strict(&self, flag: bool) -> bool {
        flag || self.cli.strict
    }
}

/// Discovery order for config file:
/// 1. `--config <path>` (explicit, or `DBML_FORGE_CONFIG` via clap)
/// 2. `./dbml-forge.toml` (project-local)
/// 3. `$XDG_CONFIG_HOME/dbml-forge/config.toml`
/// 4. `~/.config/dbml-forge/config.toml`
pub fn load_config(explicit_path: Option<&Path>) -> Result<CliConfig, CliError> {
    if let Some(path) = explicit_path {
        return load_config_from_path(path);
    }

    let local = PathBuf::from("dbml-forge.toml");
    if local.exists() {
        return load_config_from_path(&local);
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("dbml-forge/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config/dbml-forge/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    Ok(CliConfig::default())
}

fn load_config_from_path(path: &Path) -> Result<CliConfig, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: CliConfig = toml::from_str(&contents).map_err(|e| CliError::Config {
        message: format!("failed to parse {}: {}", path.display(), e),
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = CliConfig::default();
        assert_eq!(config.cli.default_schema_dir, "schemas/");
        assert_eq!(config.cli.extension, "dbml");
        assert!(!config.cli.strict);
    }

    #[test]
    fn parse_partial_toml() {
        let config: CliConfig = toml::from_str("[cli]\nstrict = true\n").unwrap();
        assert!(config.cli.strict);
        assert_eq!(config.cli.default_schema_dir, "schemas/");
        assert_eq!(config.cli.extension, "dbml");
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[cli]
default_schema_dir = "db/"
extension = "dbml.txt"
strict = true
"#;
        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.cli.default_schema_dir, "db/");
        assert_eq!(config.cli.extension, "dbml.txt");
        assert!(config.cli.strict);
    }

    #[test]
    fn empty_file_is_default() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.cli.default_schema_dir, "schemas/");
    }

    #[test]
    fn resolve_paths_prefers_explicit() {
        let config = CliConfig::default();
        assert_eq!(config.resolve_paths(&[]), vec![PathBuf::from("schemas/")]);
        assert_eq!(
            config.resolve_paths(&[PathBuf::from("a.dbml")]),
            vec![PathBuf::from("a.dbml")]
        );
    }

    #[test]
    fn resolve_strict_combines_flag_and_config() {
        let mut config = CliConfig::default();
        assert!(!config.resolve_strict(false));
        assert!(config.resolve_strict(true));
        config.cli.strict = true;
        assert!(config.resolve_strict(false));
    }

    #[test]
    fn load_config_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[cli]\nextension = \"sqldbml\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.cli.extension, "sqldbml");
    }

    #[test]
    fn load_config_from_explicit_missing_file() {
        let result = load_config(Some(Path::new("/nonexistent/config.toml")));
        assert!(matches!(result, Err(CliError::Io { .. })));
    }

    #[test]
    fn load_config_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[cli\nstrict = ").unwrap();
        let result = load_config(Some(&path));
        assert!(matches!(result, Err(CliError::Config { .. })));
    }
}
