//! # csvfsm
//!
//! A character-at-a-time CSV parser built on an explicit seven-state machine.
//!
//! ## Features
//!
//! - **RFC 4180-like semantics**: quoted fields, embedded delimiters and
//!   newlines, doubled-quote escaping
//! - **All three line endings**: `\n`, `\r\n` and bare `\r` (kept as data)
//! - **Never fails by default**: malformed input is absorbed by fixed rules;
//!   opt into [`ParseOptions::strict`] to have it reported instead
//! - **Incremental**: push characters or chunks as they arrive with
//!   [`CsvParser`]
//!
//! ## Quick Start
//!
//! ```
//! use csvfsm::parse;
//!
//! let doc = parse("name,quote\r\nAda,\"Say \"\"hi\"\"\"\n\nBob,\"a,b\"");
//!
//! assert_eq!(doc.len(), 3);
//! assert_eq!(doc[0], ["name", "quote"]);
//! assert_eq!(doc[1], ["Ada", "Say \"hi\""]);
//! assert_eq!(doc[2], ["Bob", "a,b"]);
//! ```
//!
//! ## Reading Files
//!
//! ```no_run
//! use csvfsm::CsvReader;
//!
//! let doc = CsvReader::open("data.csv")?.read_document()?;
//! println!("{}", doc);
//! # Ok::<(), csvfsm::CsvError>(())
//! ```

pub mod csv;
pub mod csv_reader;
pub mod error;
pub mod render;
pub mod types;

pub use csv::{parse, parse_chars, parse_with, CsvParser, ParseOptions, State};
pub use csv_reader::CsvReader;
pub use error::{CsvError, Position, Result};
pub use types::{Document, Field, Record};
