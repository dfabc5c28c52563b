//! Report building, edits and comparison across several programs
use gcode_cycle_time::parse;
use gcode_cycle_time::report::{render_text, EditsFile, ProgramReport, ToolComparison};

const PROGRAM_A: &str = r#"GROUP_BEGIN(0, "Drill", 0, 0)
T="DRILL_8"
S2500 F120
G0 X10 Y10 Z2
G1 Z-20
G0 Z2
GROUP_END(0, 0)
GROUP_BEGIN(0, "Pocket", 0, 0)
T="EM10"
G1 F600 X60
GROUP_END(0, 0)
"#;

const PROGRAM_B: &str = r#"GROUP_BEGIN(0, "Pocket", 0, 0)
T="EM12"
G1 F900 X90
GROUP_END(0, 0)
"#;

fn reports() -> Vec<ProgramReport> {
    vec![
        ProgramReport::new(0, "a.mpf", parse(PROGRAM_A)),
        ProgramReport::new(1, "b.mpf", parse(PROGRAM_B)),
    ]
}

#[test]
fn test_sequence_ids_and_totals() {
    let reports = reports();

    let ids: Vec<_> = reports
        .iter()
        .flat_map(|r| r.rows.iter().map(|row| row.sequence_id.clone()))
        .collect();
    assert_eq!(ids, vec!["1.1", "1.2", "2.1"]);

    // Drill: Z2 -> Z-20 at F120. Pocket starts after the G0 retract, X10 -> X60 at F600
    let a = &reports[0];
    let drill = a.rows[0].record.cut_distance_mm;
    let pocket = a.rows[1].record.cut_distance_mm;
    assert!((drill - 22.0).abs() < 1e-9);
    assert!((pocket - 50.0).abs() < 1e-9);
    assert!((a.total_distance_mm() - 72.0).abs() < 1e-9);
    assert!((a.total_time_seconds() - (11.0 + 5.0)).abs() < 1e-9);
}

#[test]
fn test_comparison_marks() {
    let comparison = ToolComparison::from_reports(&reports());

    let rows: Vec<_> = comparison
        .rows
        .iter()
        .map(|r| (r.tool.as_str(), r.present.clone()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("DRILL_8", vec![true, false]),
            ("EM10", vec![true, false]),
            ("EM12", vec![false, true]),
        ]
    );
}

#[test]
fn test_edits_change_comparison_not_estimates() {
    let mut reports = reports();
    let before = reports[1].rows[0].record.clone();

    let edits = EditsFile::from_toml_str(
        r#"
[[edit]]
id = "2.1"
tool = "EM10"
"#,
    )
    .expect("parse edits");
    assert!(edits.apply(&mut reports).is_empty());

    let after = &reports[1].rows[0].record;
    assert_eq!(after.tool_id, "EM10");
    assert_eq!(after.cut_time_seconds, before.cut_time_seconds);
    assert_eq!(after.cut_distance_mm, before.cut_distance_mm);
    assert_eq!(after.feed_values_seen, before.feed_values_seen);

    let comparison = ToolComparison::from_reports(&reports);
    let em10 = comparison
        .rows
        .iter()
        .find(|r| r.tool == "EM10")
        .expect("EM10 row");
    assert_eq!(em10.present, vec![true, true]);
    assert!(comparison.rows.iter().all(|r| r.tool != "EM12"));
}

#[test]
fn test_text_report_lists_every_program() {
    let reports = reports();
    let text = render_text(&reports, &ToolComparison::from_reports(&reports));

    assert!(text.contains("Tools in: a.mpf"));
    assert!(text.contains("Tools in: b.mpf"));
    assert!(text.contains("DRILL_8"));
    assert!(text.contains("2500"));
    assert!(text.contains("120.0"));
    assert_eq!(text.matches("TOTALS").count(), 2);
}
