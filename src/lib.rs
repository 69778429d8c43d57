//! bundle-order - group feature bundles by start order
//!
//! Bundles with an explicit start order are grouped and ordered ascending;
//! bundles without one (start order `0`) form the last group.

pub mod artifact;
pub mod bundles;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;

pub use artifact::{Artifact, Artifacts};
pub use bundles::{
    Bundles, StartOrder, StartOrderGroups, compare_start_order, group_by_start_order,
};
pub use error::{BundleOrderError, Result};
