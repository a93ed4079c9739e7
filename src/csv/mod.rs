//! CSV state machine and parser

mod parser;
pub mod state;

pub use parser::{parse, parse_chars, parse_with, CsvParser, ParseOptions};
pub use state::{transition, Action, Anomaly, State, Transition};
