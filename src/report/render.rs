//! Text and JSON rendering of program reports.

use std::fmt::Write as _;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::report::comparison::ToolComparison;
use crate::report::format::{format_distance, format_feeds, format_rpms, format_time};
use crate::report::program::{ProgramReport, ReportRow};

/// Shown above text reports
pub const ESTIMATE_NOTE: &str = "Note: time and distance are only computed for cutting moves (G1). \
Groups made only of cycles (CYCLE...), macros (F_...) or rapid moves (G0) show 0.";

const ID_WIDTH: usize = 6;
const TOOL_WIDTH: usize = 25;
const GROUP_WIDTH: usize = 40;
const RPM_WIDTH: usize = 14;
const FEED_WIDTH: usize = 14;
const DISTANCE_WIDTH: usize = 14;

/// Output format of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render reports and the tool comparison in the requested format
pub fn render(
    format: OutputFormat,
    reports: &[ProgramReport],
    comparison: &ToolComparison,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reports, comparison)),
        OutputFormat::Json => render_json(reports, comparison),
    }
}

/// Fixed-width tables, one per program, then the comparison
pub fn render_text(reports: &[ProgramReport], comparison: &ToolComparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n", ESTIMATE_NOTE);

    for report in reports {
        let _ = writeln!(out, "Tools in: {}", report.name);

        let cells: Vec<[String; 3]> = report
            .rows
            .iter()
            .map(|row| {
                [
                    format_rpms(&row.record),
                    format_feeds(&row.record),
                    format_distance(row.record.cut_distance_mm),
                ]
            })
            .collect();
        let total_distance = format_distance(report.total_distance_mm());
        let rpm_width = column_width(RPM_WIDTH, cells.iter().map(|c| c[0].as_str()));
        let feed_width = column_width(FEED_WIDTH, cells.iter().map(|c| c[1].as_str()));
        let distance_width = column_width(
            DISTANCE_WIDTH,
            cells
                .iter()
                .map(|c| c[2].as_str())
                .chain(std::iter::once(total_distance.as_str())),
        );

        let _ = writeln!(
            out,
            "{:<ID_WIDTH$}{:<TOOL_WIDTH$}{:<GROUP_WIDTH$}{:<rpm_width$}{:<feed_width$}{:<distance_width$}{}",
            "ID", "Tool", "Group", "RPM (S)", "Feed (F)", "Distance", "Est. Time"
        );

        if report.rows.is_empty() {
            let _ = writeln!(out, "No tools found.\n");
            continue;
        }

        for (row, [rpms, feeds, distance]) in report.rows.iter().zip(&cells) {
            let _ = writeln!(
                out,
                "{:<ID_WIDTH$}{:<TOOL_WIDTH$}{:<GROUP_WIDTH$}{:<rpm_width$}{:<feed_width$}{:<distance_width$}{}",
                row.sequence_id,
                truncate(&row.record.tool_id, TOOL_WIDTH - 1),
                truncate(&row.record.group_name, GROUP_WIDTH - 1),
                rpms,
                feeds,
                distance,
                format_time(row.record.cut_time_seconds),
            );
        }

        let label_width = ID_WIDTH + TOOL_WIDTH + GROUP_WIDTH + rpm_width + feed_width;
        let _ = writeln!(
            out,
            "{:<label_width$}{:<distance_width$}{}\n",
            "TOTALS",
            total_distance,
            format_time(report.total_time_seconds()),
        );
    }

    render_comparison(&mut out, comparison);
    out
}

fn render_comparison(out: &mut String, comparison: &ToolComparison) {
    let _ = writeln!(out, "Tool comparison");
    if comparison.is_empty() {
        let _ = writeln!(out, "No tools to compare.");
        return;
    }

    let tool_width = comparison
        .rows
        .iter()
        .map(|r| r.tool.chars().count())
        .max()
        .unwrap_or(0)
        .max("Tool".len())
        + 2;

    let _ = write!(out, "{:<tool_width$}", "Tool");
    for name in &comparison.programs {
        let _ = write!(out, "{:<width$}", name, width = name.chars().count() + 2);
    }
    out.push('\n');

    for row in &comparison.rows {
        let _ = write!(out, "{:<tool_width$}", row.tool);
        for (name, present) in comparison.programs.iter().zip(&row.present) {
            let mark = if *present { "X" } else { "" };
            let _ = write!(out, "{:<width$}", mark, width = name.chars().count() + 2);
        }
        // Marks are left-aligned, so trailing padding is noise
        let trimmed = out.trim_end_matches(' ').len();
        out.truncate(trimmed);
        out.push('\n');
    }
}

/// Widest cell plus a two-space gap, never narrower than `min`
fn column_width<'a>(min: usize, cells: impl Iterator<Item = &'a str>) -> usize {
    cells
        .map(|cell| cell.chars().count() + 2)
        .fold(min, usize::max)
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[derive(Serialize)]
struct JsonProgram<'a> {
    name: &'a str,
    groups: &'a [ReportRow],
    total_distance_mm: f64,
    total_time_seconds: f64,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    programs: Vec<JsonProgram<'a>>,
    comparison: &'a ToolComparison,
}

/// Pretty-printed JSON with per-program totals
pub fn render_json(reports: &[ProgramReport], comparison: &ToolComparison) -> Result<String> {
    let report = JsonReport {
        programs: reports
            .iter()
            .map(|r| JsonProgram {
                name: &r.name,
                groups: &r.rows,
                total_distance_mm: r.total_distance_mm(),
                total_time_seconds: r.total_time_seconds(),
            })
            .collect(),
        comparison,
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
