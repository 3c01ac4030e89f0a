use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::select::select_model::DEFAULT_PLACEHOLDER_LABEL;

pub const DEFAULT_CONFIG_PATH: &str = "lga-select.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "lga-select",
    version,
    about = "Populate a dependent LGA select from the selected state"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: lga-select.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// YAML lookup table to use instead of the builtin one
    #[arg(long, global = true)]
    pub table: Option<String>,

    /// Append one JSON line per update to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,

    /// Label of the "no selection" option
    #[arg(long, global = true)]
    pub placeholder: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the states in the lookup table
    Regions,

    /// Select a state and print the resulting LGA options
    Lgas {
        /// State to select (an unknown or empty state yields only the placeholder)
        #[arg(long)]
        state: String,

        /// Output format: console, json, html
        #[arg(long)]
        format: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Render the state/LGA form fragment as HTML
    Render {
        /// State to pre-select
        #[arg(long)]
        state: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `lga-select.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder_label: String,

    #[serde(default = "default_console")]
    pub format: String,

    pub table: Option<String>,

    pub trace: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            placeholder_label: default_placeholder(),
            format: default_console(),
            table: None,
            trace: None,
        }
    }
}

// Serde default helpers
fn default_placeholder() -> String { DEFAULT_PLACEHOLDER_LABEL.to_string() }
fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => match serde_yaml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = config_path, error = %e, "ignoring malformed config file");
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Settings (merge CLI args with config file)
// ============================================================================

/// Effective settings after applying CLI > config file > defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub placeholder_label: String,
    pub format: String,
    pub table: Option<String>,
    pub trace: Option<String>,
}

pub fn resolve_settings(cli: &Cli, config: &AppConfig) -> Settings {
    let format = match &cli.command {
        Commands::Lgas {
            format: Some(format),
            ..
        } => format.clone(),
        _ => config.format.clone(),
    };

    Settings {
        placeholder_label: cli
            .placeholder
            .clone()
            .unwrap_or_else(|| config.placeholder_label.clone()),
        format,
        table: cli.table.clone().or_else(|| config.table.clone()),
        trace: cli.trace.clone().or_else(|| config.trace.clone()),
    }
}

/// Log level for a `-v` count, used when `RUST_LOG` is not set.
pub fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
