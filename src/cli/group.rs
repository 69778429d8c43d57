use clap::Parser;

use crate::ui::OutputFormat;

/// Arguments for the group command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show bundles grouped by start order:\n    bundle-order group\n\n\
                  Use a specific descriptor:\n    bundle-order -d feature.yaml group\n\n\
                  Emit JSON for scripts:\n    bundle-order group --format json")]
pub struct GroupArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
