//! Program Lexer
//!
//! Best-effort extraction of the words the estimator cares about from one
//! line of program text. Every scanner is independent: a token whose payload
//! does not parse is dropped and the rest of the line is still scanned.

use std::sync::LazyLock;

use regex::Regex;

static GROUP_BEGIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"GROUP_BEGIN\([^,]*,\s*"([^"]*)""#).expect("group begin regex"));
static TOOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"T="([^"]*)""#).expect("tool regex"));
static COORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([XYZ])([-0-9.]+)").expect("coordinate regex"));
static FEED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"F([-0-9.]+)").expect("feed regex"));
static SPINDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"S([0-9]+)").expect("spindle regex"));
static MOTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"G0?([01])").expect("motion regex"));

const GROUP_END: &str = "GROUP_END";
const FEED_PER_REVOLUTION: &str = "G95";
const FEED_PER_MINUTE: &str = "G94";

/// Linear machine axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Index into an `[f64; 3]` position
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "X" => Some(Axis::X),
            "Y" => Some(Axis::Y),
            "Z" => Some(Axis::Z),
            _ => None,
        }
    }
}

/// Motion mode selected by `G0`/`G1` (and `G00`/`G01`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionMode {
    /// Non-cutting positioning move
    #[default]
    Rapid,
    /// Cutting move at the active feed
    Linear,
}

/// How the active feed value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedMode {
    /// `G94`: distance per minute
    #[default]
    PerMinute,
    /// `G95`: distance per spindle revolution
    PerRevolution,
}

/// A recognized word on a program line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    /// `GROUP_BEGIN(..., "name"` with the captured name
    GroupBegin(&'a str),
    /// Literal `GROUP_END`
    GroupEnd,
    /// `G0`, `G1`, `G00` or `G01`
    Motion(MotionMode),
    /// `G95` or `G94`
    FeedMode(FeedMode),
    /// `S` followed by an unsigned integer, kept as `f64` so huge values still parse
    Spindle(f64),
    /// `F` followed by a signed decimal
    Feed(f64),
    /// `T="value"`
    Tool(&'a str),
    /// Axis letter followed by a signed decimal
    Coordinate(Axis, f64),
}

/// Tokenize one line of program text
///
/// Tokens come out in the order the estimator applies them: group markers,
/// motion, feed mode (`G95` before `G94`), spindle, feed, tool, then every
/// coordinate left to right.
pub fn tokenize_line(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();

    if let Some(caps) = GROUP_BEGIN_RE.captures(line) {
        if let Some(name) = caps.get(1) {
            tokens.push(Token::GroupBegin(name.as_str()));
        }
    }

    if line.contains(GROUP_END) {
        tokens.push(Token::GroupEnd);
    }

    if let Some(caps) = MOTION_RE.captures(line) {
        let mode = match caps.get(1).map(|m| m.as_str()) {
            Some("1") => MotionMode::Linear,
            _ => MotionMode::Rapid,
        };
        tokens.push(Token::Motion(mode));
    }

    if line.contains(FEED_PER_REVOLUTION) {
        tokens.push(Token::FeedMode(FeedMode::PerRevolution));
    }
    if line.contains(FEED_PER_MINUTE) {
        tokens.push(Token::FeedMode(FeedMode::PerMinute));
    }

    if let Some(caps) = SPINDLE_RE.captures(line) {
        if let Some(rpm) = parse_payload::<f64>(&caps, 'S') {
            tokens.push(Token::Spindle(rpm));
        }
    }

    if let Some(caps) = FEED_RE.captures(line) {
        if let Some(feed) = parse_payload::<f64>(&caps, 'F') {
            tokens.push(Token::Feed(feed));
        }
    }

    if let Some(caps) = TOOL_RE.captures(line) {
        if let Some(tool) = caps.get(1) {
            tokens.push(Token::Tool(tool.as_str()));
        }
    }

    for caps in COORD_RE.captures_iter(line) {
        let axis = caps.get(1).and_then(|m| Axis::from_letter(m.as_str()));
        let value = caps.get(2).and_then(|m| m.as_str().parse::<f64>().ok());
        match (axis, value) {
            (Some(axis), Some(value)) => tokens.push(Token::Coordinate(axis, value)),
            _ => log::trace!("skipping malformed coordinate '{}'", &caps[0]),
        }
    }

    tokens
}

/// Parse the numeric capture of a single-letter word, dropping it if malformed
fn parse_payload<T: std::str::FromStr>(caps: &regex::Captures<'_>, letter: char) -> Option<T> {
    let text = caps.get(1)?.as_str();
    match text.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            log::trace!("skipping malformed {}-word '{}{}'", letter, letter, text);
            None
        }
    }
}
