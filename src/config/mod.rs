//! Configuration: TOML file, environment and CLI precedence, key bindings,
//! and column construction from config.

pub mod columns;
pub mod keybindings;
pub mod loader;

pub use columns::{build_columns, configure_table, row_classifier};
pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    CliOverrides, ColumnConfig, ConfigError, ConfigFile, ResolvedConfig, RowClassRule,
};
