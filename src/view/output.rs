//! Command-line Output
//!
//! Renders a view state as an aligned text table, JSON or CSV.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::state::ViewState;
use super::ResourcePage;

/// Output format for command-line rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(RenderError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        })
    }
}

/// Errors that can occur while rendering output
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Unknown output format: {0} (expected table, json or csv)")]
    UnknownFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output was not valid UTF-8")]
    Utf8,
}

/// Render a view state in the given format
pub fn render<P: ResourcePage>(
    state: &ViewState<P>,
    format: OutputFormat,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Table => Ok(render_table(state)),
        OutputFormat::Json => render_json(state),
        OutputFormat::Csv => render_csv(state),
    }
}

/// Aligned text table, or the matching loading / error / empty message
pub fn render_table<P: ResourcePage>(state: &ViewState<P>) -> String {
    let items = match state {
        ViewState::Loading => return format!("Loading {}...\n", P::RESOURCE),
        ViewState::Error(message) => return format!("Error! {}\n", message),
        ViewState::Ready(items) if items.is_empty() => {
            return format!("{}\n{}\n", P::EMPTY_HEADING, P::EMPTY_MESSAGE);
        }
        ViewState::Ready(items) => items,
    };

    let rows: Vec<Vec<String>> = items.iter().map(ResourcePage::row).collect();

    let mut widths: Vec<usize> = P::COLUMNS.iter().map(|c| c.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(P::TITLE);
    out.push('\n');
    out.push('\n');
    push_line(&mut out, P::COLUMNS.iter().copied(), &widths);
    let total = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 3;
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for row in &rows {
        push_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Tagged JSON: `{"status": "ready", "data": [...]}`
pub fn render_json<P: ResourcePage>(
    state: &ViewState<P>,
) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// CSV with a header row; error and loading states produce no rows
pub fn render_csv<P: ResourcePage>(state: &ViewState<P>) -> Result<String, RenderError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(P::COLUMNS)?;

    if let Some(items) = state.records() {
        for item in items {
            writer.write_record(item.row())?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RenderError::Csv(e.into_error().into()))?;
    String::from_utf8(bytes).map_err(|_| RenderError::Utf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{decode_all, Team, Workout};
    use serde_json::json;

    fn teams() -> ViewState<Team> {
        ViewState::Ready(decode_all(&[
            json!({"name": "Team Marvel", "member_count": 6, "captain": "Steve Rogers"}),
            json!({"name": "Team DC", "members": [1, 2]}),
        ]))
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default().to_string(), "table");
    }

    #[test]
    fn test_table_output() {
        let table = render_table(&teams());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Teams");
        assert!(lines[2].starts_with("Name        | Members | Captain"));
        assert!(lines[3].chars().all(|c| c == '-'));
        assert!(lines[4].starts_with("Team Marvel | 6       | Steve Rogers"));
        assert!(lines[5].starts_with("Team DC     | 2       | N/A"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_table_states() {
        let empty: ViewState<Workout> = ViewState::Ready(vec![]);
        assert!(render_table(&empty).starts_with("No Workouts Found"));

        let failed: ViewState<Workout> = ViewState::Error("HTTP error! status: 500".into());
        assert_eq!(render_table(&failed), "Error! HTTP error! status: 500\n");

        let loading: ViewState<Workout> = ViewState::Loading;
        assert_eq!(render_table(&loading), "Loading workouts...\n");
    }

    #[test]
    fn test_json_output() {
        let rendered = render_json(&teams()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["status"], "ready");
        assert_eq!(value["data"][0]["name"], "Team Marvel");
        assert_eq!(value["data"][1]["members"], 2);
    }

    #[test]
    fn test_csv_output() {
        let rendered = render_csv(&teams()).unwrap();
        let mut lines = rendered.lines();

        assert_eq!(lines.next(), Some("Name,Members,Captain,Created,Description"));
        assert_eq!(
            lines.next(),
            Some("Team Marvel,6,Steve Rogers,N/A,No description available")
        );
        assert_eq!(lines.next(), Some("Team DC,2,N/A,N/A,No description available"));
        assert_eq!(lines.next(), None);
    }
}
