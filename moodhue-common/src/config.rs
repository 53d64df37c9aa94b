//! Configuration loading and root folder resolution
//!
//! Root folder resolution priority:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable (`MOODHUE_ROOT_FOLDER`, then `MOODHUE_ROOT`)
//! 3. TOML config file (`root_folder` key)
//! 4. OS-dependent compiled default (fallback)
//!
//! A missing TOML file is normal and silently ignored. A malformed one is
//! logged and ignored; startup never aborts on configuration alone.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Primary environment variable for the root folder
pub const ENV_ROOT_FOLDER: &str = "MOODHUE_ROOT_FOLDER";

/// Secondary (shorter) environment variable for the root folder
pub const ENV_ROOT: &str = "MOODHUE_ROOT";

/// SQLite file name inside the root folder
pub const DATABASE_FILE_NAME: &str = "palettes.db";

/// Built-in defaults used when nothing else is configured
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledDefaults {
    pub root_folder: PathBuf,
    pub log_level: String,
    pub port: u16,
    pub bind_address: String,
}

impl CompiledDefaults {
    /// Defaults for the platform this binary was compiled for
    pub fn for_current_platform() -> Self {
        Self {
            root_folder: default_root_folder(),
            log_level: default_log_level(),
            port: default_port(),
            bind_address: default_bind_address(),
        }
    }
}

fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "linux") {
        // ~/.local/share/moodhue
        dirs::data_local_dir()
            .map(|d| d.join("moodhue"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/moodhue"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("moodhue"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/moodhue"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("moodhue"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\moodhue"))
    } else {
        PathBuf::from("./moodhue_data")
    }
}

fn default_port() -> u16 {
    8000
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Bootstrap configuration loaded from `<module>.toml`
///
/// Every field has a default so a partial file is valid.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TomlConfig {
    /// Folder holding the SQLite database
    pub root_folder: Option<PathBuf>,

    /// HTTP listen port
    pub port: u16,

    /// HTTP listen address
    pub bind_address: String,

    pub translator: TranslatorConfig,

    pub logging: LoggingConfig,
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            root_folder: None,
            port: default_port(),
            bind_address: default_bind_address(),
            translator: TranslatorConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TomlConfig {
    /// Parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.translator.validate()?;
        Ok(config)
    }
}

/// Translation service settings
///
/// The endpoint must speak the LibreTranslate `/translate` protocol.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TranslatorConfig {
    pub enabled: bool,
    pub endpoint: String,
    pub target_language: String,
    pub timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: "http://127.0.0.1:5000".to_string(),
            target_language: "en".to_string(),
            timeout_ms: 5000,
        }
    }
}

impl TranslatorConfig {
    fn validate(&self) -> Result<()> {
        if self.enabled && self.endpoint.trim().is_empty() {
            return Err(Error::Config(
                "translator.enabled is set but translator.endpoint is empty".to_string(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(Error::Config("translator.timeout_ms must be > 0".to_string()));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Resolves the root folder for a module
pub struct RootFolderResolver {
    module_name: String,
    cli_override: Option<PathBuf>,
}

impl RootFolderResolver {
    pub fn new(module_name: &str) -> Self {
        Self {
            module_name: module_name.to_string(),
            cli_override: None,
        }
    }

    /// Attach a command-line `--root-folder` value (priority 1)
    pub fn with_cli_override(mut self, path: Option<PathBuf>) -> Self {
        self.cli_override = path;
        self
    }

    /// Resolve the root folder; never fails
    pub fn resolve(&self) -> PathBuf {
        if let Some(path) = &self.cli_override {
            return path.clone();
        }

        if let Ok(path) = std::env::var(ENV_ROOT_FOLDER) {
            return PathBuf::from(path);
        }
        if let Ok(path) = std::env::var(ENV_ROOT) {
            return PathBuf::from(path);
        }

        if let Some(root_folder) = self.load_toml_config().root_folder {
            return root_folder;
        }

        CompiledDefaults::for_current_platform().root_folder
    }

    /// Load `<module>.toml`, falling back to defaults when missing or invalid
    pub fn load_toml_config(&self) -> TomlConfig {
        let Some(path) = self.config_file_path() else {
            debug!("No config file for module '{}', using defaults", self.module_name);
            return TomlConfig::default();
        };

        match TomlConfig::load(&path) {
            Ok(config) => {
                debug!("Loaded config file {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                TomlConfig::default()
            }
        }
    }

    /// First existing config file: user config dir, then /etc
    fn config_file_path(&self) -> Option<PathBuf> {
        let file_name = format!("{}.toml", self.module_name);

        let user_config = dirs::config_dir().map(|d| d.join("moodhue").join(&file_name));
        if let Some(path) = user_config {
            if path.exists() {
                return Some(path);
            }
        }

        if cfg!(unix) {
            let system_config = PathBuf::from("/etc/moodhue").join(&file_name);
            if system_config.exists() {
                return Some(system_config);
            }
        }

        None
    }
}

/// Prepares the root folder and derives file locations inside it
pub struct RootFolderInitializer {
    root_folder: PathBuf,
}

impl RootFolderInitializer {
    pub fn new(root_folder: PathBuf) -> Self {
        Self { root_folder }
    }

    /// Create the root folder if needed (idempotent)
    pub fn ensure_directory_exists(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root_folder)?;
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DATABASE_FILE_NAME)
    }

    pub fn database_exists(&self) -> bool {
        self.database_path().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TomlConfig::parse("port = 9100\n").unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.logging.level, "info");
        assert!(!config.translator.enabled);
    }

    #[test]
    fn test_translator_section() {
        let config = TomlConfig::parse(
            r#"
            [translator]
            enabled = true
            endpoint = "http://translate.local"
            timeout_ms = 1500
            "#,
        )
        .unwrap();
        assert!(config.translator.enabled);
        assert_eq!(config.translator.endpoint, "http://translate.local");
        assert_eq!(config.translator.target_language, "en");
        assert_eq!(config.translator.timeout_ms, 1500);
    }

    #[test]
    fn test_enabled_translator_requires_endpoint() {
        let result = TomlConfig::parse("[translator]\nenabled = true\nendpoint = \"\"\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = TomlConfig::parse("port = \"not a number\"");
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_cli_override_wins() {
        let resolver = RootFolderResolver::new("test-module")
            .with_cli_override(Some(PathBuf::from("/tmp/moodhue-cli")));
        assert_eq!(resolver.resolve(), PathBuf::from("/tmp/moodhue-cli"));
    }
}
