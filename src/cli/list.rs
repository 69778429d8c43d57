use clap::Parser;

use crate::ui::OutputFormat;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List bundles in declaration order:\n    bundle-order list\n\n\
                  List bundles as YAML:\n    bundle-order list --format yaml")]
pub struct ListArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
