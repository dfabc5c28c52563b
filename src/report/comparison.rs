//! Tool comparison across programs.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::report::program::ProgramReport;

/// Which program uses which tool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolComparison {
    /// Column headers, one per program
    pub programs: Vec<String>,
    pub rows: Vec<ComparisonRow>,
}

/// One tool and its presence in each program
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub tool: String,
    /// Parallel to [`ToolComparison::programs`]
    pub present: Vec<bool>,
}

impl ToolComparison {
    /// Build the comparison from the union of all tools, sorted by name
    pub fn from_reports(reports: &[ProgramReport]) -> Self {
        let tools: BTreeSet<&str> = reports
            .iter()
            .flat_map(|report| report.rows.iter())
            .map(|row| row.record.tool_id.as_str())
            .collect();

        let rows = tools
            .into_iter()
            .map(|tool| ComparisonRow {
                tool: tool.to_string(),
                present: reports.iter().map(|r| r.uses_tool(tool)).collect(),
            })
            .collect();

        Self {
            programs: reports.iter().map(|r| r.name.clone()).collect(),
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::GroupRecord;

    fn with_tools(index: usize, name: &str, tools: &[&str]) -> ProgramReport {
        let groups = tools
            .iter()
            .map(|tool| {
                let mut record = GroupRecord::open("g");
                record.tool_id = tool.to_string();
                record
            })
            .collect();
        ProgramReport::new(index, name, groups)
    }

    #[test]
    fn test_union_sorted_with_marks() {
        let reports = vec![
            with_tools(0, "a.mpf", &["T2", "T1"]),
            with_tools(1, "b.mpf", &["T3", "T1"]),
        ];
        let comparison = ToolComparison::from_reports(&reports);

        assert_eq!(comparison.programs, vec!["a.mpf", "b.mpf"]);
        let tools: Vec<_> = comparison.rows.iter().map(|r| r.tool.as_str()).collect();
        assert_eq!(tools, vec!["T1", "T2", "T3"]);
        assert_eq!(comparison.rows[0].present, vec![true, true]);
        assert_eq!(comparison.rows[1].present, vec![true, false]);
        assert_eq!(comparison.rows[2].present, vec![false, true]);
    }

    #[test]
    fn test_groups_without_tool_compare_as_na() {
        let reports = vec![ProgramReport::new(0, "a", vec![GroupRecord::open("g")])];
        let comparison = ToolComparison::from_reports(&reports);

        assert_eq!(comparison.rows.len(), 1);
        assert_eq!(comparison.rows[0].tool, "N/A");
    }

    #[test]
    fn test_no_groups_is_empty() {
        let reports = vec![ProgramReport::new(0, "a", Vec::new())];
        assert!(ToolComparison::from_reports(&reports).is_empty());
    }
}
