//! Estimation Engine
//!
//! Single pass over a program: every line updates the modal machine state and
//! charges cutting moves to the open group.

use crate::estimate::group::GroupRecord;
use crate::estimate::state::MachineState;
use crate::parser::{program_lines, scan_line, MotionMode};

/// Emitted groups plus a handle on the one currently open
#[derive(Debug, Default)]
pub struct GroupAccumulator {
    groups: Vec<GroupRecord>,
    open: Option<usize>,
}

impl GroupAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new group, closing the previous one if it is still open
    pub fn begin(&mut self, name: &str, line_num: usize) {
        if let Some(previous) = self.open.take() {
            log::debug!(
                "line {}: group '{}' implicitly closed by '{}'",
                line_num,
                self.groups[previous].group_name,
                name
            );
        }
        log::debug!("line {}: group '{}' opened", line_num, name);
        self.groups.push(GroupRecord::open(name));
        self.open = Some(self.groups.len() - 1);
    }

    /// Close the open group; no-op when none is open
    pub fn end(&mut self, line_num: usize) {
        if let Some(idx) = self.open.take() {
            log::debug!(
                "line {}: group '{}' closed",
                line_num,
                self.groups[idx].group_name
            );
        }
    }

    /// The group currently collecting time and distance
    pub fn current_mut(&mut self) -> Option<&mut GroupRecord> {
        self.open.map(|idx| &mut self.groups[idx])
    }

    /// Close anything still open and hand back the groups in opening order
    pub fn finish(mut self) -> Vec<GroupRecord> {
        if let Some(idx) = self.open.take() {
            log::warn!(
                "group '{}' was never closed, closing at end of input",
                self.groups[idx].group_name
            );
        }
        self.groups
    }
}

/// Estimate cut time and distance for every group of a program
///
/// Never fails: anything that is not understood is ignored. Parsing the same
/// text twice gives the same result.
pub fn parse(text: &str) -> Vec<GroupRecord> {
    let mut state = MachineState::new();
    let mut groups = GroupAccumulator::new();

    for (idx, line) in program_lines(text).enumerate() {
        estimate_line(&mut state, &mut groups, line, idx + 1);
    }

    let groups = groups.finish();
    log::debug!("parsed {} group(s)", groups.len());
    groups
}

/// Apply one line to the machine state and the open group
///
/// Outside of a group only the group markers are looked at; the machine
/// state is left untouched.
pub fn estimate_line(
    state: &mut MachineState,
    groups: &mut GroupAccumulator,
    line: &str,
    line_num: usize,
) {
    let directives = scan_line(line);

    if let Some(name) = directives.group_begin {
        groups.begin(name, line_num);
    }
    if directives.group_end {
        groups.end(line_num);
    }

    let Some(group) = groups.current_mut() else {
        return;
    };

    state.apply_modal(&directives);

    if let Some(rpm) = directives.spindle {
        group.record_rpm(rpm);
    }
    if let Some(feed) = directives.feed {
        group.record_feed(feed);
    }
    if let Some(tool) = directives.tool {
        group.tool_id = tool.to_string();
    }

    if let Some(mv) = state.move_to(&directives) {
        if mv.motion_mode == MotionMode::Linear && mv.distance > 0.0 {
            group.charge(mv.distance, state.cut_time_seconds(mv.distance));
        }
    }
}
