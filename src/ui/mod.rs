//! Output rendering for bundle listings and start order groups
//!
//! Text output is styled with `console`; JSON and YAML output use the same
//! serializable views so scripts see identical data in either format.

use std::fmt::Write as _;

use clap::ValueEnum;
use console::Style;
use serde::Serialize;

use crate::artifact::Artifact;
use crate::bundles::{Bundles, StartOrder, StartOrderGroups};
use crate::error::{Result, output};

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// One start order group as written in JSON/YAML output
#[derive(Debug, Serialize, PartialEq)]
pub struct GroupView<'a> {
    #[serde(rename = "start-order")]
    pub start_order: i32,
    pub bundles: Vec<&'a str>,
}

/// One bundle as written in JSON/YAML list output
#[derive(Debug, Serialize, PartialEq)]
pub struct BundleView<'a> {
    pub id: &'a str,
    #[serde(rename = "start-order")]
    pub start_order: i32,
}

/// Label for a start order, `0` is shown as unspecified
pub fn start_order_label(start_order: i32) -> String {
    if StartOrder::from(start_order).is_unspecified() {
        "unspecified".to_string()
    } else {
        start_order.to_string()
    }
}

pub fn group_views<'a>(groups: &StartOrderGroups<&'a Artifact>) -> Vec<GroupView<'a>> {
    groups
        .iter()
        .map(|(start_order, bundles)| GroupView {
            start_order,
            bundles: bundles.iter().copied().map(Artifact::id).collect(),
        })
        .collect()
}

/// Render start order groups in the requested format
pub fn render_groups(groups: &StartOrderGroups<&Artifact>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_groups_text(groups)),
        OutputFormat::Json => to_json(&group_views(groups)),
        OutputFormat::Yaml => to_yaml(&group_views(groups)),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|json| format!("{json}\n"))
        .map_err(|e| output::render_failed("json", e.to_string()))
}

fn to_yaml<T: Serialize>(value: &T) -> Result<String> {
    serde_yaml::to_string(value).map_err(|e| output::render_failed("yaml", e.to_string()))
}

fn render_groups_text(groups: &StartOrderGroups<&Artifact>) -> String {
    if groups.is_empty() {
        return "No bundles declared.\n".to_string();
    }

    let heading = Style::new().bold().green();
    let mut out = String::new();

    for (start_order, bundles) in groups {
        let title = if StartOrder::from(start_order).is_unspecified() {
            "Unspecified start order:".to_string()
        } else {
            format!("Start order {start_order}:")
        };
        let _ = writeln!(out, "{}", heading.apply_to(title));
        for bundle in bundles {
            let _ = writeln!(out, "  {}", bundle.id());
        }
    }

    out
}

/// Render bundles in declaration order with their start order
pub fn render_list(bundles: &Bundles, format: OutputFormat) -> Result<String> {
    let mut views = Vec::with_capacity(bundles.len());
    for bundle in bundles {
        views.push(BundleView {
            id: bundle.id(),
            start_order: bundle.start_order()?,
        });
    }

    match format {
        OutputFormat::Text => Ok(render_list_text(&views)),
        OutputFormat::Json => to_json(&views),
        OutputFormat::Yaml => to_yaml(&views),
    }
}

fn render_list_text(views: &[BundleView<'_>]) -> String {
    if views.is_empty() {
        return "No bundles declared.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Bundles ({}):", views.len());
    for view in views {
        let _ = writeln!(
            out,
            "  {} {}",
            Style::new().bold().yellow().apply_to(view.id),
            Style::new()
                .dim()
                .apply_to(format!("(start order {})", start_order_label(view.start_order)))
        );
    }
    out
}
