//! Per-program report rows and totals.

use serde::Serialize;

use crate::estimate::GroupRecord;

/// A group record as shown to the user, tagged with its sequence id
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// `"<file>.<group>"`, both 1-based
    pub sequence_id: String,
    #[serde(flatten)]
    pub record: GroupRecord,
}

/// All rows of one program
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramReport {
    pub name: String,
    pub rows: Vec<ReportRow>,
}

impl ProgramReport {
    /// Wrap a program's groups, numbering them `file_index + 1 . n`
    pub fn new(file_index: usize, name: impl Into<String>, groups: Vec<GroupRecord>) -> Self {
        let rows = groups
            .into_iter()
            .enumerate()
            .map(|(group_index, record)| ReportRow {
                sequence_id: format!("{}.{}", file_index + 1, group_index + 1),
                record,
            })
            .collect();

        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn total_distance_mm(&self) -> f64 {
        self.rows.iter().map(|r| r.record.cut_distance_mm).sum()
    }

    pub fn total_time_seconds(&self) -> f64 {
        self.rows.iter().map(|r| r.record.cut_time_seconds).sum()
    }

    pub fn row_mut(&mut self, sequence_id: &str) -> Option<&mut ReportRow> {
        self.rows.iter_mut().find(|r| r.sequence_id == sequence_id)
    }

    /// Whether any row of this program uses the tool
    pub fn uses_tool(&self, tool_id: &str) -> bool {
        self.rows.iter().any(|r| r.record.tool_id == tool_id)
    }
}
