//! CLI argument definitions for `bgs`.

use std::path::PathBuf;

use bgs_model::{BackgroundCategory, ColorFamily, SelectorMode};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bgs",
    version,
    about = "Background compatibility and validation engine",
    long_about = "Classify brand colors, search the background catalog and validate\n\
                  candidate backgrounds for accessibility, performance and brand fit."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings file (default: platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of tables.
    #[arg(long = "json", global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify hex colors into color families.
    Classify {
        #[arg(value_name = "HEX", required = true)]
        colors: Vec<String>,
    },

    /// Search the catalog for compatible backgrounds.
    Search(SearchArgs),

    /// Validate a catalog entry or an arbitrary style token.
    Validate(ValidateArgs),

    /// Analyze brand colors.
    Analyze {
        #[arg(value_name = "PRIMARY")]
        primary: String,
        #[arg(value_name = "SECONDARY")]
        secondary: Option<String>,
    },

    /// Select a catalog entry and apply it through the selector controller.
    Apply(ApplyArgs),

    /// List catalog entries.
    Catalog(CatalogArgs),
}

#[derive(Args)]
pub struct BrandArgs {
    /// Brand primary color (e.g. #3B82F6).
    #[arg(long = "primary", value_name = "HEX")]
    pub primary: Option<String>,

    /// Brand secondary color.
    #[arg(long = "secondary", value_name = "HEX", requires = "primary")]
    pub secondary: Option<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    #[arg(long = "mode", value_enum, default_value = "recommended")]
    pub mode: ModeArg,

    /// Base color family of the current page background.
    #[arg(long = "base-color", value_name = "FAMILY", default_value = "blue")]
    pub base_color: ColorFamily,

    #[command(flatten)]
    pub brand: BrandArgs,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Catalog entry to validate.
    #[arg(value_name = "VARIATION_ID", required_unless_present = "token")]
    pub variation: Option<String>,

    /// Validate this style token instead of a catalog entry.
    #[arg(long = "token", value_name = "TOKEN", conflicts_with = "variation")]
    pub token: Option<String>,

    /// Base color family for `--token`.
    #[arg(long = "base-color", value_name = "FAMILY", default_value = "blue")]
    pub base_color: ColorFamily,

    /// Accent color family for `--token` (default: the base color).
    #[arg(long = "accent-color", value_name = "FAMILY")]
    pub accent_color: Option<ColorFamily>,

    /// Selector mode recorded with the validation.
    #[arg(long = "mode", value_enum)]
    pub mode: Option<ModeArg>,

    #[command(flatten)]
    pub brand: BrandArgs,
}

#[derive(Args)]
pub struct ApplyArgs {
    #[arg(value_name = "VARIATION_ID")]
    pub variation: String,

    #[arg(long = "mode", value_enum, default_value = "recommended")]
    pub mode: ModeArg,

    /// Base color family of the current page background.
    #[arg(long = "base-color", value_name = "FAMILY", default_value = "blue")]
    pub base_color: ColorFamily,

    #[command(flatten)]
    pub brand: BrandArgs,
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Only entries of this family.
    #[arg(long = "base-color", value_name = "FAMILY")]
    pub base_color: Option<ColorFamily>,

    /// Only enhanced entries of this category.
    #[arg(long = "category", value_name = "CATEGORY")]
    pub category: Option<BackgroundCategory>,
}

/// CLI selector mode choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    #[value(alias = "generated")]
    Recommended,
    Brand,
    Custom,
}

impl From<ModeArg> for SelectorMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Recommended => SelectorMode::Recommended,
            ModeArg::Brand => SelectorMode::Brand,
            ModeArg::Custom => SelectorMode::Custom,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
