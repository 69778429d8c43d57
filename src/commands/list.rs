//! List command implementation
//!
//! Prints the descriptor's bundles in declaration order with their start order.

use std::path::PathBuf;

use crate::cli::ListArgs;
use crate::error::Result;
use crate::ui;

/// Run list command
pub fn run(descriptor: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let feature = super::load_descriptor(descriptor)?;

    if let Some(id) = feature.id.as_deref() {
        tracing::debug!(feature = id, "Listing bundles");
    }

    print!("{}", ui::render_list(&feature.bundles, args.format)?);

    Ok(())
}
