//! Styling of build-tool error output.
//!
//! Classification is pure ([`classify_line`], [`styled_lines`]); emission goes
//! through a caller-supplied [`LogSink`].

use std::fmt;

/// Trailing summary lines the build tool appends after every log.
const FOOTER_LINES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogStyle {
    Dim,
    Alert,
    BoldAlert,
}

impl LogStyle {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Dim => "dim",
            Self::Alert => "red",
            Self::BoldAlert => "bold red",
        }
    }
}

impl fmt::Display for LogStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyledLine<'a> {
    Blank,
    Text { text: &'a str, style: LogStyle },
}

/// Destination for styled log output.
pub trait LogSink {
    fn blank_line(&mut self);
    fn styled_line(&mut self, text: &str, style: LogStyle);
}

/// Style for a single line, keyed on its first whitespace-delimited token.
/// Returns `None` for a line with no tokens.
pub fn classify_line(line: &str) -> Option<LogStyle> {
    let first = line.split_whitespace().next()?;
    Some(match first {
        "Warning:" => LogStyle::Alert,
        "Error:" | ">>>" | "cpp:" => LogStyle::BoldAlert,
        _ => LogStyle::Dim,
    })
}

/// Classify every displayed line of `log`. The log is trimmed and its last
/// two lines dropped; a log of two lines or fewer produces nothing.
pub fn styled_lines(log: &str) -> Vec<StyledLine<'_>> {
    let lines: Vec<&str> = log.trim().split('\n').collect();
    let shown = lines.len().saturating_sub(FOOTER_LINES);
    lines[..shown]
        .iter()
        .map(|&line| match classify_line(line) {
            Some(style) => StyledLine::Text { text: line, style },
            None => StyledLine::Blank,
        })
        .collect()
}

pub fn print_styled_error<S: LogSink + ?Sized>(sink: &mut S, log: &str) {
    for line in styled_lines(log) {
        match line {
            StyledLine::Blank => sink.blank_line(),
            StyledLine::Text { text, style } => sink.styled_line(text, style),
        }
    }
}
