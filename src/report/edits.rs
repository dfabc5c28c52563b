//! User edits to report rows
//!
//! Only the tool and group name of a row can be overridden. Everything the
//! estimator derives (time, distance, feeds, speeds, ids) is read-only, and
//! an edits file that tries to set one of those is rejected.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::report::program::ProgramReport;

/// Contents of an edits TOML file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct EditsFile {
    #[serde(default)]
    pub edit: Vec<RowEdit>,
}

/// Override for a single row, addressed by its sequence id
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RowEdit {
    pub id: String,
    pub tool: Option<String>,
    pub group: Option<String>,
}

impl EditsFile {
    /// Load edits from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading edits file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing edits file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply every edit to the matching row
    ///
    /// Returns the ids that matched no row.
    pub fn apply(&self, reports: &mut [ProgramReport]) -> Vec<String> {
        let mut unmatched = Vec::new();

        for edit in &self.edit {
            let row = reports.iter_mut().find_map(|r| r.row_mut(&edit.id));
            let Some(row) = row else {
                log::warn!("edit for unknown row id '{}' skipped", edit.id);
                unmatched.push(edit.id.clone());
                continue;
            };

            if let Some(tool) = &edit.tool {
                row.record.tool_id = tool.clone();
            }
            if let Some(group) = &edit.group {
                row.record.group_name = group.clone();
            }
        }

        unmatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::GroupRecord;

    fn reports() -> Vec<ProgramReport> {
        let mut record = GroupRecord::open("Roughing");
        record.charge(100.0, 12.0);
        vec![ProgramReport::new(0, "a.mpf", vec![record])]
    }

    #[test]
    fn test_apply_tool_and_group() {
        let edits = EditsFile::from_toml_str(
            r#"
[[edit]]
id = "1.1"
tool = "EM12"
group = "Rough pocket"
"#,
        )
        .expect("parse edits");

        let mut reports = reports();
        let unmatched = edits.apply(&mut reports);

        assert!(unmatched.is_empty());
        let row = &reports[0].rows[0];
        assert_eq!(row.record.tool_id, "EM12");
        assert_eq!(row.record.group_name, "Rough pocket");
        assert_eq!(row.record.cut_distance_mm, 100.0);
        assert_eq!(row.record.cut_time_seconds, 12.0);
    }

    #[test]
    fn test_unknown_id_reported() {
        let edits = EditsFile::from_toml_str("[[edit]]\nid = \"3.7\"\ntool = \"X\"\n")
            .expect("parse edits");

        let mut reports = reports();
        assert_eq!(edits.apply(&mut reports), vec!["3.7".to_string()]);
        assert_eq!(reports[0].rows[0].record.tool_id, "N/A");
    }

    #[test]
    fn test_derived_columns_rejected() {
        let result = EditsFile::from_toml_str("[[edit]]\nid = \"1.1\"\ncut_time_seconds = 5.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_file() {
        let edits = EditsFile::from_toml_str("").expect("parse edits");
        assert!(edits.edit.is_empty());
    }
}
