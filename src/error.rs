//! Error types for csvfsm

use std::fmt;
use thiserror::Error;

/// Result type alias for csvfsm operations
pub type Result<T> = std::result::Result<T, CsvError>;

/// Location of a character in the input
///
/// `line` and `column` are 1-based and counted in characters; `offset` is the
/// 0-based character index from the start of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u64,
    pub column: u64,
    pub offset: u64,
}

impl Position {
    /// Position of the first character of input
    pub fn start() -> Self {
        Position {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Advance past `ch`
    pub(crate) fn advance(&mut self, ch: char) {
        self.offset += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors that can occur while reading or strictly parsing CSV
///
/// The lenient parser never produces the parse variants; they are only
/// reported when [`ParseOptions::strict`](crate::ParseOptions::strict) is on.
#[derive(Error, Debug)]
pub enum CsvError {
    /// I/O error from the input source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes are not valid UTF-8
    #[error("Invalid UTF-8 in input at line {line}")]
    InvalidUtf8 { line: u64 },

    /// Input ended inside a quoted field
    #[error("Unterminated quoted field opened at {position}")]
    UnterminatedQuote { position: Position },

    /// A character other than a delimiter, quote or line terminator followed
    /// a closing quote
    #[error("Unexpected character {ch:?} after closing quote at {position}")]
    CharAfterClosingQuote { ch: char, position: Position },
}
