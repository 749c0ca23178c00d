//! Textual input parser
//!
//! Turns the ant-farm input grammar into an ant count, a validated
//! [`Graph`], and the original lines for echo. The core proper never
//! reads files or strings; this is the only place line-oriented
//! parsing happens.
//!
//! Grammar, in order:
//! - line 1: a positive integer, the ant count
//! - header lines, until the first link line:
//!   - `##start` / `##end`: the *next* room line is the start/end room
//!   - `#...` (anything else starting with `#`): a comment, kept for
//!     echo, otherwise ignored
//!   - `<name> <x> <y>`: a room declaration
//! - every line from the first `<a>-<b>` line onward: a link declaration
//!
//! Any blank line, anywhere, is an error.

use crate::graph::Graph;
use crate::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// A fully parsed and validated input.
pub struct ParsedInput {
    /// Ant count from line 1
    pub ants: u32,
    /// The validated room graph, start and end already marked
    pub graph: Graph,
    /// Every input line, verbatim, in order — for echo
    pub echo: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum PendingMarker {
    Start,
    End,
}

fn room_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\S+)\s+(-?\d+)\s+(-?\d+)$").unwrap())
}

fn link_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([^\s-]+)-([^\s-]+)$").unwrap())
}

fn ants_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+$").unwrap())
}

/// Parse a complete input file's contents.
pub fn parse(input: &str) -> Result<ParsedInput> {
    let lines: Vec<&str> = input.lines().collect();
    let echo: Vec<String> = lines.iter().map(|l| l.to_string()).collect();

    let mut iter = lines.iter();
    let ants_line = iter.next().ok_or_else(|| Error::invalid_ants("empty input"))?;
    if ants_line.is_empty() {
        return Err(Error::EmptyLine);
    }
    if !ants_line_re().is_match(ants_line) {
        return Err(Error::invalid_ants(format!("{ants_line:?}")));
    }
    let ants: u32 = ants_line
        .parse()
        .map_err(|_| Error::invalid_ants(format!("{ants_line:?}")))?;
    if ants == 0 {
        return Err(Error::invalid_ants("must be > 0"));
    }

    let mut graph = Graph::new();
    let mut pending_marker: Option<PendingMarker> = None;
    let mut start_seen = false;
    let mut end_seen = false;
    let mut in_links = false;

    for line in iter {
        if line.is_empty() {
            return Err(Error::EmptyLine);
        }

        if !in_links {
            if *line == "##start" {
                if start_seen {
                    return Err(Error::MultipleStart);
                }
                if pending_marker.is_some() {
                    return Err(Error::invalid_room("##start immediately after another marker, expected a room line"));
                }
                start_seen = true;
                pending_marker = Some(PendingMarker::Start);
                continue;
            }
            if *line == "##end" {
                if end_seen {
                    return Err(Error::MultipleEnd);
                }
                if pending_marker.is_some() {
                    return Err(Error::invalid_room("##end immediately after another marker, expected a room line"));
                }
                end_seen = true;
                pending_marker = Some(PendingMarker::End);
                continue;
            }
            if link_line_re().is_match(line) {
                in_links = true;
                // fall through to link handling below
            } else if line.starts_with('#') {
                continue;
            } else if let Some(caps) = room_line_re().captures(line) {
                let name = &caps[1];
                if name.starts_with('#') || name.starts_with('L') {
                    return Err(Error::invalid_room(format!(
                        "room name {name:?} may not start with '#' or 'L'"
                    )));
                }
                let x: i32 = caps[2]
                    .parse()
                    .map_err(|_| Error::invalid_room(format!("bad x coordinate in {line:?}")))?;
                let y: i32 = caps[3]
                    .parse()
                    .map_err(|_| Error::invalid_room(format!("bad y coordinate in {line:?}")))?;
                graph.add_room(name, x, y)?;
                match pending_marker.take() {
                    Some(PendingMarker::Start) => graph.mark_start(name)?,
                    Some(PendingMarker::End) => graph.mark_end(name)?,
                    None => {}
                }
                continue;
            } else {
                return Err(Error::unrecognized_line(line.to_string()));
            }
        }

        let caps = link_line_re()
            .captures(line)
            .ok_or_else(|| Error::unrecognized_line(line.to_string()))?;
        let a = &caps[1];
        let b = &caps[2];
        graph.add_link(a, b)?;
    }

    if pending_marker.is_some() {
        return Err(match pending_marker {
            Some(PendingMarker::Start) => Error::invalid_room("##start with no following room line"),
            Some(PendingMarker::End) => Error::invalid_room("##end with no following room line"),
            None => unreachable!(),
        });
    }
    if !start_seen {
        return Err(Error::MissingStart);
    }
    if !end_seen {
        return Err(Error::MissingEnd);
    }

    Ok(ParsedInput { ants, graph, echo })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_trivial_direct_link() {
        let input = "1\n##start\nstart 0 0\n##end\nend 1 0\nstart-end\n";
        let parsed = parse(input).unwrap();
        assert_eq!(parsed.ants, 1);
        assert_eq!(parsed.graph.room_count(), 2);
    }

    #[test]
    fn comments_are_preserved_but_ignored() {
        let input = "2\n# a comment\n##start\nstart 0 0\n##end\nend 1 0\nstart-end\n";
        let parsed = parse(input).unwrap();
        assert_eq!(parsed.ants, 2);
        assert!(parsed.echo.iter().any(|l| l == "# a comment"));
    }

    #[test]
    fn zero_ants_is_an_error() {
        let input = "0\n##start\nstart 0 0\n##end\nend 1 0\nstart-end\n";
        assert_eq!(parse(input), Err(Error::invalid_ants("must be > 0")));
    }

    #[test]
    fn duplicate_start_marker_is_an_error() {
        let input = "1\n##start\na 0 0\n##start\nb 1 0\n##end\nend 2 0\na-end\nb-end\n";
        assert_eq!(parse(input), Err(Error::MultipleStart));
    }

    #[test]
    fn consecutive_markers_without_a_room_line_is_rejected() {
        let input = "1\n##start\n##end\nstart 0 0\nend 1 0\nstart-end\n";
        assert!(matches!(parse(input), Err(Error::InvalidRoom(_))));
    }

    #[test]
    fn missing_end_marker_is_an_error() {
        let input = "1\n##start\nstart 0 0\nend 1 0\nstart-end\n";
        assert_eq!(parse(input), Err(Error::MissingEnd));
    }

    #[test]
    fn blank_line_is_an_error() {
        let input = "1\n##start\nstart 0 0\n\n##end\nend 1 0\nstart-end\n";
        assert_eq!(parse(input), Err(Error::EmptyLine));
    }

    #[test]
    fn self_link_is_rejected() {
        let input = "1\n##start\nstart 0 0\n##end\nend 1 0\nstart-start\n";
        assert!(matches!(parse(input), Err(Error::InvalidLink(_))));
    }

    #[test]
    fn room_name_starting_with_l_is_rejected() {
        let input = "1\n##start\nL1 0 0\n##end\nend 1 0\nL1-end\n";
        assert!(matches!(parse(input), Err(Error::InvalidRoom(_))));
    }

    #[test]
    fn unknown_link_endpoint_is_rejected() {
        let input = "1\n##start\nstart 0 0\n##end\nend 1 0\nstart-ghost\n";
        assert!(matches!(parse(input), Err(Error::InvalidLink(_))));
    }
}
