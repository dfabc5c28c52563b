//! Modal machine state
//!
//! One `MachineState` lives for a whole parse and is mutated in place line by
//! line. It is never reset at group boundaries.

use crate::parser::{Axis, FeedMode, LineDirectives, MotionMode};

/// Persistent (modal) machine state
#[derive(Debug, Clone, PartialEq)]
pub struct MachineState {
    /// Last commanded X, Y, Z
    pub position: [f64; 3],
    pub feed: f64,
    pub spindle_speed: f64,
    pub feed_mode: FeedMode,
    pub motion_mode: MotionMode,
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of applying a line's axis words
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    pub distance: f64,
    pub motion_mode: MotionMode,
}

impl MachineState {
    pub fn new() -> Self {
        Self {
            position: [0.0; 3],
            feed: 0.0,
            spindle_speed: 1.0,
            feed_mode: FeedMode::PerMinute,
            motion_mode: MotionMode::Rapid,
        }
    }

    pub fn is_feed_per_revolution(&self) -> bool {
        self.feed_mode == FeedMode::PerRevolution
    }

    /// Apply the modal words of a line (motion, feed mode, spindle, feed)
    pub fn apply_modal(&mut self, directives: &LineDirectives<'_>) {
        if let Some(mode) = directives.motion {
            self.motion_mode = mode;
        }
        if let Some(mode) = directives.feed_mode {
            self.feed_mode = mode;
        }
        if let Some(rpm) = directives.spindle {
            self.spindle_speed = rpm;
        }
        if let Some(feed) = directives.feed {
            self.feed = feed;
        }
    }

    /// Move to the line's axis targets, returning the straight-line distance
    ///
    /// Axes without a word keep their current value. The position is always
    /// updated, whatever the motion mode.
    pub fn move_to(&mut self, directives: &LineDirectives<'_>) -> Option<Move> {
        if !directives.has_targets() {
            return None;
        }

        let mut target = self.position;
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            if let Some(value) = directives.target(axis) {
                target[axis.index()] = value;
            }
        }

        let distance = self
            .position
            .iter()
            .zip(target.iter())
            .map(|(from, to)| (to - from).powi(2))
            .sum::<f64>()
            .sqrt();

        self.position = target;

        Some(Move {
            distance,
            motion_mode: self.motion_mode,
        })
    }

    /// Cutting time in seconds for a move at the active feed
    ///
    /// Zero when the feed (or, per revolution, the spindle speed) cannot give
    /// a rate.
    pub fn cut_time_seconds(&self, distance: f64) -> f64 {
        match self.feed_mode {
            FeedMode::PerRevolution if self.spindle_speed > 0.0 && self.feed > 0.0 => {
                distance / (self.feed * self.spindle_speed) * 60.0
            }
            FeedMode::PerMinute if self.feed > 0.0 => distance / self.feed * 60.0,
            _ => 0.0,
        }
    }
}
