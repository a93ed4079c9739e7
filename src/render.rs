//! Console rendering of parsed documents
//!
//! Renders a [`Document`] as a single line of nested list literals, e.g.
//! `[['a', 'b'], ['c']]`. This is meant for people reading a terminal, not as
//! an interchange format; enable the `serde` feature for that.

use crate::types::{Document, Record};
use std::fmt::{self, Write};

/// Render a document as nested list literals
///
/// # Examples
///
/// ```
/// let doc = csvfsm::parse("a,\"it's\"\n\"x\ny\",\n");
/// assert_eq!(
///     csvfsm::render::to_list_literal(&doc),
///     r#"[['a', "it's"], ['x\ny', '']]"#
/// );
/// ```
pub fn to_list_literal(doc: &Document) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_document(&mut out, doc);
    out
}

fn write_document<W: Write>(out: &mut W, doc: &Document) -> fmt::Result {
    out.write_char('[')?;
    for (i, record) in doc.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_record(out, record)?;
    }
    out.write_char(']')
}

fn write_record<W: Write>(out: &mut W, record: &Record) -> fmt::Result {
    out.write_char('[')?;
    for (i, field) in record.iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write_quoted(out, field)?;
    }
    out.write_char(']')
}

/// Quote a field, preferring single quotes
fn write_quoted<W: Write>(out: &mut W, field: &str) -> fmt::Result {
    let quote = if field.contains('\'') && !field.contains('"') {
        '"'
    } else {
        '\''
    };

    out.write_char(quote)?;
    for ch in field.chars() {
        match ch {
            '\\' => out.write_str("\\\\")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            c if c == quote => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => write!(out, "\\x{:02x}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    out.write_char(quote)
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_document(f, self)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_record(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_empty_document() {
        assert_eq!(to_list_literal(&Document::new()), "[]");
    }

    #[test]
    fn test_simple_document() {
        let doc = parse("a,b\nc\n");
        assert_eq!(to_list_literal(&doc), "[['a', 'b'], ['c']]");
        assert_eq!(doc.to_string(), "[['a', 'b'], ['c']]");
        assert_eq!(doc[0].to_string(), "['a', 'b']");
    }

    #[test]
    fn test_escapes() {
        let doc = parse("\"a\rb\",\"c\\d\",\"tab\there\"\n");
        assert_eq!(to_list_literal(&doc), r"[['a\rb', 'c\\d', 'tab\there']]");
    }

    #[test]
    fn test_quote_selection() {
        let doc = parse("it's,\"say \"\"hi\"\"\",\"both ' and \"\"\"\n");
        assert_eq!(
            to_list_literal(&doc),
            r#"[["it's", 'say "hi"', 'both \' and "']]"#
        );
    }

    #[test]
    fn test_control_characters() {
        let doc = parse("a\u{1}b\n");
        assert_eq!(to_list_literal(&doc), r"[['a\x01b']]");
    }
}
