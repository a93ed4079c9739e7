//! CSV reading from files and other byte sources

use crate::csv::{CsvParser, ParseOptions};
use crate::error::{CsvError, Result};
use crate::types::Document;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// CSV reader feeding a byte source through the state machine
///
/// Input is read in `\n`-terminated chunks, so only one line (or one
/// line of a multi-line quoted field) is held as raw bytes at a time. The
/// parsed [`Document`] itself is kept in memory.
///
/// # Examples
///
/// ```no_run
/// use csvfsm::csv_reader::CsvReader;
///
/// let doc = CsvReader::open("data.csv").unwrap().read_document().unwrap();
///
/// for record in &doc {
///     println!("{:?}", record.fields());
/// }
/// ```
///
/// # Strict Mode
///
/// ```
/// use csvfsm::csv::ParseOptions;
/// use csvfsm::csv_reader::CsvReader;
///
/// let result = CsvReader::from_reader("\"open".as_bytes())
///     .options(ParseOptions::new().strict(true))
///     .read_document();
///
/// assert!(result.is_err());
/// ```
pub struct CsvReader<R> {
    reader: BufReader<R>,

    // Parser state
    line_buffer: Vec<u8>,
    line_count: u64,

    // Configuration
    options: ParseOptions,
}

impl CsvReader<File> {
    /// Open a CSV file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(target: "csvfsm::reader", path = %path.display(), "opened CSV file");
        Ok(CsvReader::from_reader(file))
    }
}

impl<R: Read> CsvReader<R> {
    /// Wrap any byte source
    pub fn from_reader(reader: R) -> Self {
        CsvReader {
            reader: BufReader::new(reader),
            line_buffer: Vec::with_capacity(1024),
            line_count: 0,
            options: ParseOptions::default(),
        }
    }

    /// Set parser options (builder pattern)
    pub fn options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Read the whole source and parse it into a document
    pub fn read_document(mut self) -> Result<Document> {
        let mut parser = CsvParser::with_options(self.options);

        loop {
            self.line_buffer.clear();
            let bytes_read = self.reader.read_until(b'\n', &mut self.line_buffer)?;
            if bytes_read == 0 {
                break;
            }
            self.line_count += 1;

            // A '\n' byte never falls inside a multi-byte UTF-8 sequence
            let chunk = std::str::from_utf8(&self.line_buffer).map_err(|_| {
                CsvError::InvalidUtf8 {
                    line: self.line_count,
                }
            })?;
            parser.feed_str(chunk)?;
        }

        let document = parser.finish()?;
        debug!(
            target: "csvfsm::reader",
            lines = self.line_count,
            records = document.len(),
            "finished reading CSV"
        );
        Ok(document)
    }
}
