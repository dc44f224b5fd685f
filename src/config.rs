use crate::error::{ClikitError, Result};
use crate::output::progress::{DEFAULT_LABEL, DEFAULT_WIDTH, EMPTY_GLYPH, FILLED_GLYPH};
use crate::output::ProgressOptions;
use crate::files::DEFAULT_JSON_INDENT;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// The base config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "clikit";

/// The filename for the configuration file.
const CONFIG_FILENAME: &str = "config.toml";

// ============================================================================
// Configuration
// ============================================================================

/// User preferences for clikit output.
///
/// Missing sections and fields fall back to their defaults, so a partial
/// file such as
///
/// ```toml
/// [progress]
/// width = 30
/// ```
///
/// is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub progress: ProgressConfig,

    #[serde(default)]
    pub files: FilesConfig,
}

/// `[progress]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressConfig {
    /// Number of cells in the bar.
    #[serde(default = "default_width")]
    pub width: usize,

    /// Text shown before the bar.
    #[serde(default = "default_label")]
    pub label: String,

    /// Glyph for completed cells. Must be a single character.
    #[serde(default = "default_filled")]
    pub filled: String,

    /// Glyph for remaining cells. Must be a single character.
    #[serde(default = "default_empty")]
    pub empty: String,
}

/// `[files]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Spaces per level when writing JSON.
    #[serde(default = "default_json_indent")]
    pub json_indent: usize,
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

fn default_filled() -> String {
    FILLED_GLYPH.to_string()
}

fn default_empty() -> String {
    EMPTY_GLYPH.to_string()
}

fn default_json_indent() -> usize {
    DEFAULT_JSON_INDENT
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            label: default_label(),
            filled: default_filled(),
            empty: default_empty(),
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            json_indent: default_json_indent(),
        }
    }
}

impl ProgressConfig {
    /// Convert to indicator options. Call [`validate_config`] first; an
    /// empty glyph string falls back to the default glyph.
    pub fn to_options(&self) -> ProgressOptions {
        ProgressOptions {
            width: self.width,
            label: self.label.clone(),
            filled: self.filled.chars().next().unwrap_or(FILLED_GLYPH),
            empty: self.empty.chars().next().unwrap_or(EMPTY_GLYPH),
        }
    }
}

// ============================================================================
// Config Validation
// ============================================================================

/// Validation failures for a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `progress.width` is zero.
    ZeroWidth,
    /// A glyph is not exactly one character.
    InvalidGlyph { field: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroWidth => write!(f, "`progress.width` must be greater than 0"),
            ConfigError::InvalidGlyph { field, value } => write!(
                f,
                "`progress.{}` must be exactly one character, got {:?}",
                field, value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Check a configuration for values the output components cannot use.
pub fn validate_config(config: &Config) -> std::result::Result<(), ConfigError> {
    if config.progress.width == 0 {
        return Err(ConfigError::ZeroWidth);
    }
    for (field, value) in [
        ("filled", &config.progress.filled),
        ("empty", &config.progress.empty),
    ] {
        if value.chars().count() != 1 {
            return Err(ConfigError::InvalidGlyph {
                field,
                value: value.clone(),
            });
        }
    }
    Ok(())
}

// ============================================================================
// Config File Management
// ============================================================================

/// Get the clikit config directory path (~/.config/clikit/).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ClikitError::Config("Could not determine home directory".to_string()))?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (~/.config/clikit/config.toml).
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILENAME))
}

/// Load the configuration from `~/.config/clikit/config.toml`.
///
/// If the file doesn't exist it is created with default values and
/// comments explaining each option.
pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

/// Load the configuration from an explicit path, creating it if missing.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("creating default config at {}", path.display());
        let config = Config::default();
        write_config(path, &config)?;
        return Ok(config);
    }

    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content).map_err(|e| {
        ClikitError::Config(format!(
            "Failed to parse config file at {}: {}",
            path.display(),
            e
        ))
    })?;
    validate_config(&config).map_err(|e| {
        ClikitError::Config(format!("Invalid config file at {}: {}", path.display(), e))
    })?;

    Ok(config)
}

/// Save the configuration to `~/.config/clikit/config.toml`.
///
/// Overwrites the existing file, including any user-added comments.
pub fn save_config(config: &Config) -> Result<()> {
    write_config(&config_path()?, config)
}

fn write_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, generate_config_with_comments(config))?;
    Ok(())
}

/// Render the configuration as TOML with explanatory comments.
pub fn generate_config_with_comments(config: &Config) -> String {
    format!(
        r#"# clikit configuration

[progress]
# Number of cells in the progress bar
width = {}
# Text shown before the bar
label = {}
# Glyphs for completed and remaining cells (one character each)
filled = {}
empty = {}

[files]
# Spaces per indentation level when writing JSON
json_indent = {}
"#,
        config.progress.width,
        toml_string(&config.progress.label),
        toml_string(&config.progress.filled),
        toml_string(&config.progress.empty),
        config.files.json_indent
    )
}

fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
