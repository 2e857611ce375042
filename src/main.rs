//! tabview - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tabview::config::{
    apply_cli_overrides, apply_env_overrides, configure_table, load_config_with_precedence,
    merge_config, CliOverrides, ResolvedConfig,
};
use tabview::model::AppError;
use tabview::source::{detect_input_source, InputSource};
use tabview::state::{PageSize, SortSpec, ViewState};
use tabview::view::{render_page_text, run_with_source};
use tracing::info;

/// tabview - browse JSON records as a searchable, sortable, paginated table
#[derive(Parser, Debug)]
#[command(name = "tabview")]
#[command(version)]
#[command(about = "Browse JSON records as a searchable, sortable, paginated table")]
pub struct Args {
    /// JSON array or JSON Lines file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start with this search term applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort by this field (ascending unless --desc)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Rows per page: 10, 25, 50 or 100
    #[arg(long)]
    pub page_size: Option<PageSize>,

    /// Start on this page (must be positive)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Comma-separated fields to show as columns
    #[arg(long, value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// Comma-separated fields to search instead of every column
    #[arg(long, value_delimiter = ',')]
    pub search_fields: Option<Vec<String>>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Print the requested page as plain text instead of opening the viewer
    #[arg(long)]
    pub print: bool,
}

impl Args {
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            page_size: self.page_size,
            columns: self.columns.clone(),
            search_fields: self.search_fields.clone(),
            no_color: self.no_color,
        }
    }

    /// Table state requested on the command line. The page goes last since
    /// a search term or page size resets it.
    fn initial_state(&self, config: &ResolvedConfig) -> ViewState {
        let mut state = ViewState::new();
        state.set_page_size(config.page_size);
        if let Some(term) = &self.search {
            state.set_search_term(term.clone());
        }
        if let Some(field) = &self.sort {
            state.set_sort(Some(if self.desc {
                SortSpec::descending(field.clone())
            } else {
                SortSpec::ascending(field.clone())
            }));
        }
        state.set_current_page(self.page as usize);
        state
    }
}

/// Load everything up front and print one page.
fn print_page(
    source: InputSource,
    config: &ResolvedConfig,
    state: ViewState,
) -> Result<(), AppError> {
    let loaded = source.load()?;
    let mut table = configure_table(config, &loaded.fields, state);
    table.set_data(loaded.rows);
    table.set_loading(false);
    print!("{}", render_page_text(&table));
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = load_config_with_precedence(args.config.clone())?;
        let merged = merge_config(config_file);
        let with_env = apply_env_overrides(merged)?;
        apply_cli_overrides(with_env, args.cli_overrides())
    };

    tabview::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let source = detect_input_source(args.file.clone())?;
    let state = args.initial_state(&config);

    if args.print {
        return print_page(source, &config, state);
    }

    run_with_source(source, config, state)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}
