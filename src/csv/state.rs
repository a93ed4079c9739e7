//! Parser states and the pure transition function
//!
//! Every step of the parser is described by [`transition`]: given the current
//! [`State`] and the next input character it returns the next state plus the
//! ordered list of [`Action`]s to perform on the parser's buffers. Keeping the
//! table free of side effects lets each row be checked in isolation.

use std::fmt;

use Action::{EndRecord, FlushField, OpenRecord, Push, PushCr};

const QUOTE: char = '"';
const DELIMITER: char = ',';
const LF: char = '\n';
const CR: char = '\r';

/// The seven states of the CSV state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// Between records or at the very start of input
    #[default]
    RecordStart,
    /// Inside an unquoted field
    Field,
    /// Inside a quoted field
    QuotedField,
    /// Saw a quote inside a quoted field
    QuotedFieldQuote,
    /// Saw a bare carriage return at record start
    CReturnInStart,
    /// Saw a bare carriage return inside an unquoted field
    CReturnInField,
    /// Saw a bare carriage return inside a quoted field
    CReturnInQuote,
}

impl State {
    /// Whether a record is open while the machine sits in this state
    pub fn has_open_record(self) -> bool {
        !matches!(self, State::RecordStart | State::CReturnInStart)
    }

    /// Whether this state is inside a quoted field
    pub fn in_quotes(self) -> bool {
        matches!(self, State::QuotedField | State::CReturnInQuote)
    }

    pub fn name(self) -> &'static str {
        match self {
            State::RecordStart => "RecordStart",
            State::Field => "Field",
            State::QuotedField => "QuotedField",
            State::QuotedFieldQuote => "QuotedFieldQuote",
            State::CReturnInStart => "CReturnInStart",
            State::CReturnInField => "CReturnInField",
            State::CReturnInQuote => "CReturnInQuote",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Side effect applied by the parser while taking a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start a new, empty current record
    OpenRecord,
    /// Append the input character to the field buffer
    Push,
    /// Append a carriage return to the field buffer
    PushCr,
    /// Move the field buffer into the current record
    FlushField,
    /// Append the current record to the document
    EndRecord,
}

/// Input the lenient parser absorbs but strict mode rejects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anomaly {
    /// A character other than `\n`, `"`, `,` or `\r` after a closing quote
    CharAfterClosingQuote,
}

/// Result of feeding one character to [`transition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: State,
    pub actions: &'static [Action],
    pub anomaly: Option<Anomaly>,
}

impl Transition {
    const fn to(next: State, actions: &'static [Action]) -> Self {
        Transition {
            next,
            actions,
            anomaly: None,
        }
    }
}

/// Compute the transition for `ch` in `state`
pub fn transition(state: State, ch: char) -> Transition {
    match state {
        State::RecordStart => match ch {
            LF => Transition::to(State::RecordStart, &[]),
            QUOTE => Transition::to(State::QuotedField, &[OpenRecord]),
            // Leading delimiter: the record starts with an empty field
            DELIMITER => Transition::to(State::Field, &[OpenRecord, FlushField]),
            CR => Transition::to(State::CReturnInStart, &[]),
            _ => Transition::to(State::Field, &[OpenRecord, Push]),
        },
        State::Field => match ch {
            LF => Transition::to(State::RecordStart, &[FlushField, EndRecord]),
            QUOTE => Transition::to(State::QuotedField, &[]),
            DELIMITER => Transition::to(State::Field, &[FlushField]),
            CR => Transition::to(State::CReturnInField, &[]),
            _ => Transition::to(State::Field, &[Push]),
        },
        State::QuotedField => match ch {
            QUOTE => Transition::to(State::QuotedFieldQuote, &[]),
            CR => Transition::to(State::CReturnInQuote, &[]),
            _ => Transition::to(State::QuotedField, &[Push]),
        },
        State::QuotedFieldQuote => match ch {
            LF => Transition::to(State::RecordStart, &[FlushField, EndRecord]),
            QUOTE => Transition::to(State::QuotedField, &[Push]),
            DELIMITER => Transition::to(State::Field, &[FlushField]),
            // Closing quote followed by CR: expect the LF in Field
            CR => Transition::to(State::Field, &[]),
            // Treated as an implied delimiter
            _ => Transition {
                next: State::Field,
                actions: &[FlushField, Push],
                anomaly: Some(Anomaly::CharAfterClosingQuote),
            },
        },
        State::CReturnInStart => match ch {
            LF => Transition::to(State::RecordStart, &[]),
            DELIMITER => Transition::to(State::Field, &[OpenRecord, PushCr, FlushField]),
            // The second CR still needs checking
            CR => Transition::to(State::CReturnInField, &[OpenRecord, PushCr]),
            _ => Transition::to(State::Field, &[OpenRecord, PushCr, Push]),
        },
        State::CReturnInField => match ch {
            LF => Transition::to(State::RecordStart, &[FlushField, EndRecord]),
            DELIMITER => Transition::to(State::Field, &[PushCr, FlushField]),
            CR => Transition::to(State::CReturnInField, &[PushCr]),
            _ => Transition::to(State::Field, &[PushCr, Push]),
        },
        State::CReturnInQuote => match ch {
            // CRLF inside quotes keeps only the LF
            LF => Transition::to(State::QuotedField, &[Push]),
            QUOTE => Transition::to(State::QuotedFieldQuote, &[PushCr]),
            CR => Transition::to(State::CReturnInQuote, &[PushCr]),
            _ => Transition::to(State::QuotedField, &[PushCr, Push]),
        },
    }
}
