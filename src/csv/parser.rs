//! CSV parsing driven by the seven-state machine in [`state`](super::state)

use super::state::{transition, Action, Anomaly, State, Transition};
use crate::error::{CsvError, Position, Result};
use crate::types::{Document, Record};
use tracing::{debug, trace};

/// Parser configuration
///
/// # Examples
///
/// ```
/// use csvfsm::csv::{CsvParser, ParseOptions};
///
/// let mut parser = CsvParser::with_options(ParseOptions::new().strict(true));
/// assert!(parser.feed_str("\"a\"b").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    strict: bool,
}

impl ParseOptions {
    /// Lenient options: every input is accepted
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject malformed input instead of absorbing it (builder pattern)
    ///
    /// In strict mode a character after a closing quote and end-of-input
    /// inside a quoted field are reported as errors.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Check if strict mode is on
    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

/// Incremental CSV parser
///
/// Characters are pushed one at a time with [`feed`](Self::feed) (or a chunk
/// at a time with [`feed_str`](Self::feed_str)); [`finish`](Self::finish)
/// consumes the parser, closes any open record and returns the document.
///
/// # Examples
///
/// ```
/// use csvfsm::csv::CsvParser;
///
/// let mut parser = CsvParser::new();
/// parser.feed_str("name,city\nAli").unwrap();
/// parser.feed_str("ce,\"New York, NY\"\n").unwrap();
/// let doc = parser.finish().unwrap();
///
/// assert_eq!(doc.len(), 2);
/// assert_eq!(doc[1], ["Alice", "New York, NY"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CsvParser {
    state: State,
    buffer: String,
    current: Option<Record>,
    document: Document,

    // Input tracking
    position: Position,
    quote_start: Position,

    options: ParseOptions,
}

impl CsvParser {
    /// Create a lenient parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options
    pub fn with_options(options: ParseOptions) -> Self {
        CsvParser {
            options,
            ..Self::default()
        }
    }

    /// Push one character
    ///
    /// Only fails in strict mode; the offending character is not consumed.
    pub fn feed(&mut self, ch: char) -> Result<()> {
        let t = transition(self.state, ch);
        if let Some(anomaly) = t.anomaly {
            if self.options.strict {
                return Err(self.reject(anomaly, ch));
            }
            debug!(
                target: "csvfsm::parser",
                ?anomaly,
                ch = ?ch,
                position = %self.position,
                "absorbed malformed input"
            );
        }
        self.apply(t, ch);
        Ok(())
    }

    /// Push every character of `chunk` in order
    pub fn feed_str(&mut self, chunk: &str) -> Result<()> {
        for ch in chunk.chars() {
            self.feed(ch)?;
        }
        Ok(())
    }

    /// Signal end-of-input and return the parsed document
    ///
    /// A record still open at end-of-input is closed with its pending field,
    /// even when that field is empty. A trailing bare `\r` is dropped.
    pub fn finish(self) -> Result<Document> {
        if self.state.in_quotes() {
            if self.options.strict {
                return Err(CsvError::UnterminatedQuote {
                    position: self.quote_start,
                });
            }
            debug!(
                target: "csvfsm::parser",
                opened_at = %self.quote_start,
                "closing unterminated quoted field at end of input"
            );
        }
        Ok(self.close())
    }

    /// Current machine state
    pub fn state(&self) -> State {
        self.state
    }

    /// Position of the next character to be fed
    pub fn position(&self) -> Position {
        self.position
    }

    /// Records completed so far
    pub fn records(&self) -> &[Record] {
        self.document.records()
    }

    /// Parser configuration
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    fn apply(&mut self, t: Transition, ch: char) {
        if t.next == State::QuotedField && matches!(self.state, State::RecordStart | State::Field) {
            self.quote_start = self.position;
        }

        for action in t.actions {
            match action {
                Action::OpenRecord => self.current = Some(Record::new()),
                Action::Push => self.buffer.push(ch),
                Action::PushCr => self.buffer.push('\r'),
                Action::FlushField => self.flush_field(),
                Action::EndRecord => self.end_record(),
            }
        }

        trace!(target: "csvfsm::state", from = %self.state, to = %t.next, ch = ?ch);
        self.state = t.next;
        self.position.advance(ch);
    }

    fn flush_field(&mut self) {
        let field = std::mem::take(&mut self.buffer);
        self.current.get_or_insert_with(Record::new).push(field);
    }

    fn end_record(&mut self) {
        if let Some(record) = self.current.take() {
            debug!(
                target: "csvfsm::parser",
                fields = record.len(),
                line = self.position.line,
                "record complete"
            );
            self.document.push(record);
        }
    }

    fn close(mut self) -> Document {
        if self.state.has_open_record() {
            self.flush_field();
            self.end_record();
        }
        self.document
    }

    fn reject(&self, anomaly: Anomaly, ch: char) -> CsvError {
        match anomaly {
            Anomaly::CharAfterClosingQuote => CsvError::CharAfterClosingQuote {
                ch,
                position: self.position,
            },
        }
    }
}

/// Parse a complete string into a document
///
/// Never fails: malformed input is absorbed.
///
/// # Examples
///
/// ```
/// let doc = csvfsm::parse("a,\"b,c\"\r\n\n,d");
/// assert_eq!(doc.to_vecs(), vec![vec!["a", "b,c"], vec!["", "d"]]);
/// ```
pub fn parse(input: &str) -> Document {
    parse_chars(input.chars())
}

/// Parse any ordered character source into a document
pub fn parse_chars<I>(input: I) -> Document
where
    I: IntoIterator<Item = char>,
{
    let mut parser = CsvParser::new();
    for ch in input {
        let t = transition(parser.state, ch);
        parser.apply(t, ch);
    }
    parser.close()
}

/// Parse a complete string with custom options
pub fn parse_with(input: &str, options: ParseOptions) -> Result<Document> {
    let mut parser = CsvParser::with_options(options);
    parser.feed_str(input)?;
    parser.finish()
}
