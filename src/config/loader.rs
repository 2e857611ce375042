//! Configuration file loading with precedence handling.

use crate::model::{Align, ColumnFormat};
use crate::state::PageSize;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TABVIEW_CONFIG";
/// Environment variable overriding the page size.
pub const PAGE_SIZE_ENV: &str = "TABVIEW_PAGE_SIZE";
/// Any non-empty value disables colors (<https://no-color.org>).
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An environment override holds a value that cannot be used.
    #[error("Invalid value for {name}: {reason}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, defaults are used.
/// Corresponds to `~/.config/tabview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Initial page size (10, 25, 50 or 100).
    #[serde(default)]
    pub page_size: Option<PageSize>,

    /// Whether the search input is offered.
    #[serde(default)]
    pub searchable: Option<bool>,

    /// Text shown in the empty search input.
    #[serde(default)]
    pub search_placeholder: Option<String>,

    /// Fields searched instead of every column field.
    #[serde(default)]
    pub search_fields: Option<Vec<String>>,

    /// Whether Enter / click on a row opens its detail.
    #[serde(default)]
    pub row_click: Option<bool>,

    /// Symbol for `currency` columns.
    #[serde(default)]
    pub currency_symbol: Option<String>,

    /// Whether to use colors.
    #[serde(default)]
    pub color: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Column layout, in display order.
    #[serde(default)]
    pub columns: Option<Vec<ColumnConfig>>,

    /// Row styling rules, first match wins.
    #[serde(default)]
    pub row_classes: Option<Vec<RowClassRule>>,
}

/// One `[[columns]]` entry.
///
/// ```toml
/// [[columns]]
/// header = "Price"
/// field = "price"
/// format = "currency"
/// align = "right"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ColumnConfig {
    /// Header label.
    pub header: String,
    /// Source field. Without one the column is display-only.
    #[serde(default)]
    pub field: Option<String>,
    /// Defaults to true for field columns.
    #[serde(default)]
    pub sortable: Option<bool>,
    /// Cell alignment; numbers and currency default right.
    #[serde(default)]
    pub align: Option<Align>,
    /// Display format.
    #[serde(default)]
    pub format: Option<ColumnFormat>,
    /// Fixed width in terminal cells.
    #[serde(default)]
    pub width: Option<u16>,
    /// Fixed cell text, e.g. `"View"` for an action column.
    #[serde(default)]
    pub render: Option<String>,
}

impl ColumnConfig {
    /// Plain column showing `field` under its own name.
    pub fn for_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            header: field.clone(),
            field: Some(field),
            sortable: None,
            align: None,
            format: None,
            width: None,
            render: None,
        }
    }
}

/// One `[[row_classes]]` entry: rows whose `field` reads `equals` get `class`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RowClassRule {
    /// Field to test.
    pub field: String,
    /// Expected string form, compared case-insensitively.
    pub equals: String,
    /// Class name handed to the renderer.
    pub class: String,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Initial rows per page.
    pub page_size: PageSize,
    /// Whether the search input is shown and applied.
    pub searchable: bool,
    /// Text shown in the empty search input.
    pub search_placeholder: String,
    /// Fields searched; `None` searches every column field.
    pub search_fields: Option<Vec<String>>,
    /// Whether rows can be selected and opened.
    pub row_click: bool,
    /// Symbol for `currency` columns.
    pub currency_symbol: String,
    /// Whether to use colors.
    pub color: bool,
    /// Explicit columns; empty means infer from the data.
    pub columns: Vec<ColumnConfig>,
    /// Row styling rules, first match wins.
    pub row_classes: Vec<RowClassRule>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::Ten,
            searchable: true,
            search_placeholder: "Search...".to_string(),
            search_fields: None,
            row_click: true,
            currency_symbol: "$".to_string(),
            color: true,
            columns: Vec::new(),
            row_classes: Vec::new(),
            log_file_path: default_log_path(),
        }
    }
}

/// Overrides taken from command-line flags. `None` leaves the value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--page-size`.
    pub page_size: Option<PageSize>,
    /// `--columns a,b,c`: plain columns for these fields.
    pub columns: Option<Vec<String>>,
    /// `--search-fields a,b`.
    pub search_fields: Option<Vec<String>>,
    /// `--no-color`.
    pub no_color: bool,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tabview/tabview.log` on Linux, or the platform's
/// state/data directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir().or_else(dirs::data_local_dir) {
        Some(state_dir) => state_dir.join("tabview").join("tabview.log"),
        None => PathBuf::from("tabview.log"),
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path: `<config_dir>/tabview/config.toml`.
///
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tabview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TABVIEW_CONFIG` environment variable
/// 3. Default path `<config_dir>/tabview/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        page_size: config.page_size.unwrap_or(defaults.page_size),
        searchable: config.searchable.unwrap_or(defaults.searchable),
        search_placeholder: config
            .search_placeholder
            .unwrap_or(defaults.search_placeholder),
        search_fields: config.search_fields.or(defaults.search_fields),
        row_click: config.row_click.unwrap_or(defaults.row_click),
        currency_symbol: config.currency_symbol.unwrap_or(defaults.currency_symbol),
        color: config.color.unwrap_or(defaults.color),
        columns: config.columns.unwrap_or(defaults.columns),
        row_classes: config.row_classes.unwrap_or(defaults.row_classes),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TABVIEW_PAGE_SIZE`: page size (must be 10, 25, 50 or 100)
/// - `NO_COLOR`: any non-empty value disables colors
///
/// # Errors
///
/// Returns `InvalidEnv` when `TABVIEW_PAGE_SIZE` is not an allowed size.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(PAGE_SIZE_ENV) {
        config.page_size = raw
            .parse::<PageSize>()
            .map_err(|e| ConfigError::InvalidEnv {
                name: PAGE_SIZE_ENV,
                reason: e.to_string(),
            })?;
    }

    if std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()) {
        config.color = false;
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(page_size) = overrides.page_size {
        config.page_size = page_size;
    }

    if let Some(fields) = overrides.columns {
        config.columns = fields.into_iter().map(ColumnConfig::for_field).collect();
    }

    if let Some(fields) = overrides.search_fields {
        config.search_fields = Some(fields);
    }

    if overrides.no_color {
        config.color = false;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
