//! Line Directives
//!
//! Folds the tokens of one line into the set of changes the estimator
//! applies for that line.

use crate::parser::lexer::{Axis, FeedMode, MotionMode, Token};

/// Everything one program line asks the machine to do
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineDirectives<'a> {
    /// Name of a group opened on this line
    pub group_begin: Option<&'a str>,
    /// Whether the line closes the open group
    pub group_end: bool,
    pub motion: Option<MotionMode>,
    /// Last feed-mode word wins, so `G94` beats `G95` on the same line
    pub feed_mode: Option<FeedMode>,
    pub spindle: Option<f64>,
    pub feed: Option<f64>,
    pub tool: Option<&'a str>,
    /// Per-axis target, indexed by [`Axis::index`]
    pub targets: [Option<f64>; 3],
}

impl LineDirectives<'_> {
    /// Whether any axis word was found
    pub fn has_targets(&self) -> bool {
        self.targets.iter().any(Option::is_some)
    }

    /// Target for a single axis, if the line carries one
    pub fn target(&self, axis: Axis) -> Option<f64> {
        self.targets[axis.index()]
    }
}

/// Fold a line's tokens into directives
pub fn tokens_to_directives(tokens: Vec<Token<'_>>) -> LineDirectives<'_> {
    let mut directives = LineDirectives::default();

    for token in tokens {
        match token {
            Token::GroupBegin(name) => {
                directives.group_begin.get_or_insert(name);
            }
            Token::GroupEnd => directives.group_end = true,
            Token::Motion(mode) => {
                directives.motion.get_or_insert(mode);
            }
            Token::FeedMode(mode) => directives.feed_mode = Some(mode),
            Token::Spindle(rpm) => {
                directives.spindle.get_or_insert(rpm);
            }
            Token::Feed(feed) => {
                directives.feed.get_or_insert(feed);
            }
            Token::Tool(tool) => {
                directives.tool.get_or_insert(tool);
            }
            Token::Coordinate(axis, value) => directives.targets[axis.index()] = Some(value),
        }
    }

    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_coordinate_overwrites_axis() {
        let directives = tokens_to_directives(vec![
            Token::Coordinate(Axis::X, 1.0),
            Token::Coordinate(Axis::Z, -3.0),
            Token::Coordinate(Axis::X, 7.5),
        ]);

        assert_eq!(directives.target(Axis::X), Some(7.5));
        assert_eq!(directives.target(Axis::Y), None);
        assert_eq!(directives.target(Axis::Z), Some(-3.0));
        assert!(directives.has_targets());
    }

    #[test]
    fn test_per_minute_wins_over_per_revolution() {
        let directives = tokens_to_directives(vec![
            Token::FeedMode(FeedMode::PerRevolution),
            Token::FeedMode(FeedMode::PerMinute),
        ]);
        assert_eq!(directives.feed_mode, Some(FeedMode::PerMinute));
    }

    #[test]
    fn test_first_motion_is_kept() {
        let directives = tokens_to_directives(vec![
            Token::Motion(MotionMode::Linear),
            Token::Motion(MotionMode::Rapid),
        ]);
        assert_eq!(directives.motion, Some(MotionMode::Linear));
    }

    #[test]
    fn test_empty_line() {
        let directives = tokens_to_directives(Vec::new());
        assert_eq!(directives, LineDirectives::default());
        assert!(!directives.has_targets());
    }
}
