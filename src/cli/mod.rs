//! CLI argument parsing for genprompt.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// genprompt: Render test-generation prompts from a fixed set of templates.
///
/// Each generator type (Playwright code generation, test-only, page-only,
/// Cucumber-only) has one template with `{{name}}` placeholders that are
/// filled from config defaults, a variables file and `-v` arguments.
#[derive(Parser, Debug)]
#[command(name = "genprompt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file to use instead of ./genprompt.yaml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for genprompt.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the available generator types.
    ///
    /// Prints each template key with its display label.
    List(ListArgs),

    /// Show a template.
    ///
    /// Prints the label, the placeholders it takes and the raw body.
    Show(ShowArgs),

    /// Render a template with variables.
    ///
    /// Placeholders without a value are left in the output unless
    /// `--strict` is given or `strict: true` is configured. `--no-strict`
    /// overrides the config for one call.
    Render(RenderArgs),

    /// Escape code fences so text can be nested inside another fenced block.
    ///
    /// Reads FILE, or stdin when FILE is omitted or `-`.
    Escape(EscapeArgs),
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Print the directory as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Template key (e.g., PLAYWRIGHT_CODE_GENERATION).
    pub key: String,

    /// Print only the template body.
    #[arg(long)]
    pub raw: bool,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Template key. Defaults to `default_generator` from the config.
    pub key: Option<String>,

    /// Variable assignment NAME=VALUE (repeatable).
    #[arg(short = 'v', long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// YAML or JSON file with a mapping of variables.
    #[arg(long, value_name = "PATH")]
    pub vars_file: Option<PathBuf>,

    /// Fail if any placeholder is left without a value.
    #[arg(long, overrides_with = "no_strict")]
    pub strict: bool,

    /// Render best-effort even when the config sets `strict: true`.
    #[arg(long, overrides_with = "strict")]
    pub no_strict: bool,

    /// Write the prompt to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `escape` command.
#[derive(Parser, Debug)]
pub struct EscapeArgs {
    /// Input file (default: stdin).
    pub file: Option<PathBuf>,

    /// Wrap the escaped text in a fenced block with this language tag.
    #[arg(long, value_name = "LANG")]
    pub fence: Option<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
