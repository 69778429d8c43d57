//! Group command implementation
//!
//! Prints the descriptor's bundles grouped by start order.

use std::path::PathBuf;

use crate::cli::GroupArgs;
use crate::error::Result;
use crate::ui;

/// Run group command
pub fn run(descriptor: Option<PathBuf>, args: GroupArgs) -> Result<()> {
    let feature = super::load_descriptor(descriptor)?;
    let groups = feature.bundles.by_start_order()?;

    print!("{}", ui::render_groups(&groups, args.format)?);

    Ok(())
}
