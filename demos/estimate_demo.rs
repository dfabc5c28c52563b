use gcode_cycle_time::parse;
use gcode_cycle_time::report::format::{format_distance, format_feeds, format_rpms, format_time};

fn main() {
    println!("=== Cycle Time Estimator Demo ===");

    let program = r#"GROUP_BEGIN(0, "Facing", 0, 0)
T="FACE_MILL_50"
S1800 M3
G0 X-30 Y0 Z5
G1 Z0 F300
G1 X130
GROUP_END(0, 0)
GROUP_BEGIN(0, "Turning", 0, 0)
T="CNMG_12"
G95 S1000 F0.2
G1 X20
G0 X0
GROUP_END(0, 0)
"#;

    for group in parse(program) {
        println!("\nGroup: '{}' (tool {})", group.group_name, group.tool_id);
        println!("  RPM:      {}", format_rpms(&group));
        println!("  Feed:     {}", format_feeds(&group));
        println!("  Distance: {}", format_distance(group.cut_distance_mm));
        println!("  Time:     {}", format_time(group.cut_time_seconds));
    }
}
