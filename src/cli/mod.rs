//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - group: Group command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod group;
pub mod list;

pub use completions::CompletionsArgs;
pub use group::GroupArgs;
pub use list::ListArgs;

/// bundle-order - group feature bundles by start order
#[derive(Parser, Debug)]
#[command(
    name = "bundle-order",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Group feature bundles by start order",
    long_about = "Reads a feature descriptor (JSON or YAML) and shows its bundles grouped by \
                  start order. Bundles without a start order are started last.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  bundle-order group                     \x1b[90m# Groups from ./feature.json\x1b[0m\n   \
                  bundle-order -d feature.yaml group     \x1b[90m# Use a specific descriptor\x1b[0m\n   \
                  bundle-order group --format json       \x1b[90m# Machine readable output\x1b[0m\n   \
                  bundle-order list                      \x1b[90m# Bundles in declaration order\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Feature descriptor (defaults to feature.json, feature.yaml or feature.yml)
    #[arg(long, short = 'd', global = true, env = "BUNDLE_ORDER_DESCRIPTOR")]
    pub descriptor: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show bundles grouped by start order
    Group(GroupArgs),

    /// List bundles in declaration order
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
