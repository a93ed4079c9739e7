//! Type definitions for parsed CSV data

use std::ops::Index;

/// A single field value
pub type Field = String;

/// Represents one logical CSV row
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record from existing fields
    pub fn from_fields(fields: Vec<Field>) -> Self {
        Record { fields }
    }

    /// Get field at column index
    pub fn get(&self, col: usize) -> Option<&str> {
        self.fields.get(col).map(String::as_str)
    }

    /// Get number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Borrow all fields
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Iterate over fields as string slices
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    /// Take the fields out of the record
    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }

    pub(crate) fn push(&mut self, field: Field) {
        self.fields.push(field);
    }
}

impl From<Vec<Field>> for Record {
    fn from(fields: Vec<Field>) -> Self {
        Record::from_fields(fields)
    }
}

impl<S: Into<Field>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Record::from_fields(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Record {
    type Item = Field;
    type IntoIter = std::vec::IntoIter<Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl Index<usize> for Record {
    type Output = str;

    fn index(&self, col: usize) -> &str {
        &self.fields[col]
    }
}

impl<S: AsRef<str>> PartialEq<[S]> for Record {
    fn eq(&self, other: &[S]) -> bool {
        self.fields.len() == other.len()
            && self.fields.iter().zip(other).all(|(a, b)| a == b.as_ref())
    }
}

impl<S: AsRef<str>, const N: usize> PartialEq<[S; N]> for Record {
    fn eq(&self, other: &[S; N]) -> bool {
        self == &other[..]
    }
}

/// The complete ordered collection of parsed records
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Get record at row index
    pub fn get(&self, row: usize) -> Option<&Record> {
        self.records.get(row)
    }

    /// Get number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if document has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Borrow all records
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Iterate over records
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Take the records out of the document
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Convert document to nested vectors of strings
    pub fn to_vecs(&self) -> Vec<Vec<String>> {
        self.records.iter().map(|r| r.fields().to_vec()).collect()
    }

    pub(crate) fn push(&mut self, record: Record) {
        self.records.push(record);
    }
}

impl From<Vec<Record>> for Document {
    fn from(records: Vec<Record>) -> Self {
        Document { records }
    }
}

impl FromIterator<Record> for Document {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Document {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Document {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Index<usize> for Document {
    type Output = Record;

    fn index(&self, row: usize) -> &Record {
        &self.records[row]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let record: Record = ["a", "", "c"].into_iter().collect();
        assert_eq!(record.len(), 3);
        assert_eq!(record.get(0), Some("a"));
        assert_eq!(record.get(1), Some(""));
        assert_eq!(record.get(3), None);
        assert_eq!(&record[2], "c");
        assert_eq!(record, ["a", "", "c"]);
        assert_ne!(record, ["a", "c"]);
    }

    #[test]
    fn test_document_to_vecs() {
        let doc: Document = vec![
            Record::from(vec!["x".to_string()]),
            Record::from_fields(vec!["y".to_string(), "z".to_string()]),
        ]
        .into();

        assert_eq!(doc.len(), 2);
        assert_eq!(doc[1], ["y", "z"]);
        assert_eq!(
            doc.to_vecs(),
            vec![vec!["x".to_string()], vec!["y".to_string(), "z".to_string()]]
        );
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.get(0), None);
        assert_eq!(doc.iter().count(), 0);
    }
}
