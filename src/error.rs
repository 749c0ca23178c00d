//! Error types for lemin-core
//!
//! Every variant corresponds to one row of the ant-farm error taxonomy.
//! Parsing and graph-construction errors carry a human-readable detail
//! string for logs; the fixed user-facing message the CLI prints for
//! any of them (other than [`Error::NoPath`]) is `ERROR: invalid data
//! format`, per the external contract — see [`Error::user_message`].

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the graph, parsing input, or
/// running the core pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Ant count missing, non-integer, or <= 0
    #[error("invalid ant count: {0}")]
    InvalidAnts(String),

    /// Malformed room line or duplicate room name
    #[error("invalid room: {0}")]
    InvalidRoom(String),

    /// Malformed link, unknown endpoint, self-link, or duplicate link
    #[error("invalid link: {0}")]
    InvalidLink(String),

    /// No `##start` marker was ever processed
    #[error("missing start room marker")]
    MissingStart,

    /// No `##end` marker was ever processed
    #[error("missing end room marker")]
    MissingEnd,

    /// `##start` marker seen twice
    #[error("multiple start markers")]
    MultipleStart,

    /// `##end` marker seen twice
    #[error("multiple end markers")]
    MultipleEnd,

    /// A line matched none of the input grammar's productions
    #[error("unrecognized line: {0}")]
    UnrecognizedLine(String),

    /// A blank line appeared anywhere in the input
    #[error("empty line is not allowed")]
    EmptyLine,

    /// The max-flow extractor found zero vertex-disjoint paths
    #[error("ERROR: invalid data format, no path found")]
    NoPath,
}

impl Error {
    /// Create an invalid-ant-count error
    pub fn invalid_ants(msg: impl Into<String>) -> Self {
        Self::InvalidAnts(msg.into())
    }

    /// Create an invalid-room error
    pub fn invalid_room(msg: impl Into<String>) -> Self {
        Self::InvalidRoom(msg.into())
    }

    /// Create an invalid-link error
    pub fn invalid_link(msg: impl Into<String>) -> Self {
        Self::InvalidLink(msg.into())
    }

    /// Create an unrecognized-line error
    pub fn unrecognized_line(msg: impl Into<String>) -> Self {
        Self::UnrecognizedLine(msg.into())
    }

    /// The fixed message the CLI prints for this error.
    ///
    /// Every variant except [`Error::NoPath`] collapses to the same
    /// generic string per the input contract — the taxonomy exists for
    /// internal diagnostics (logs, tests), not for distinguishing
    /// failures at the program's textual boundary.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::NoPath => "ERROR: invalid data format, no path found",
            _ => "ERROR: invalid data format",
        }
    }
}
