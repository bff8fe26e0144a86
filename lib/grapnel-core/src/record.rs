//! Loosely-typed data records.
//!
//! A [`Record`] is the single input shared by the path template resolver and
//! the encoders: path resolution consumes matching keys, the selected
//! encoding serializes whatever remains. Keys keep their insertion order, so
//! encoded output is reproducible for a given input.
//!
//! # Example
//!
//! ```
//! use grapnel_core::{Value, record};
//!
//! let data = record! {
//!     "id" => 5,
//!     "name" => "Alice",
//! };
//! assert_eq!(data.get("id").and_then(Value::as_number).map(ToString::to_string), Some("5".into()));
//! ```

use std::borrow::Cow;

use bytes::Bytes;

/// A single record value: text, a number, or a binary blob.
///
/// The three variants cover everything the encoders accept, so each encoder
/// matches exhaustively instead of inspecting types at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text value, emitted as-is.
    Text(String),
    /// Numeric value, emitted in standard decimal notation.
    Number(serde_json::Number),
    /// Binary value, only encodable as a multipart file part.
    Blob(Blob),
}

impl Value {
    /// Numeric value from a float, `None` for NaN or infinities.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        serde_json::Number::from_f64(value).map(Self::Number)
    }

    /// Text content, if this is a text value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Numeric content, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<&serde_json::Number> {
        match self {
            Self::Number(number) => Some(number),
            _ => None,
        }
    }

    /// Blob content, if this is a binary value.
    #[must_use]
    pub const fn as_blob(&self) -> Option<&Blob> {
        match self {
            Self::Blob(blob) => Some(blob),
            _ => None,
        }
    }

    /// Returns `true` for binary values.
    #[must_use]
    pub const fn is_blob(&self) -> bool {
        matches!(self, Self::Blob(_))
    }

    /// Textual representation used for path substitution and query encoding.
    ///
    /// Blobs have no textual representation.
    pub(crate) fn to_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Text(text) => Some(Cow::Borrowed(text)),
            Self::Number(number) => Some(Cow::Owned(number.to_string())),
            Self::Blob(_) => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<Blob> for Value {
    fn from(value: Blob) -> Self {
        Self::Blob(value)
    }
}

impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Number(number) => number.serialize(serializer),
            Self::Blob(_) => Err(serde::ser::Error::custom(
                "binary values are not JSON-serializable",
            )),
        }
    }
}

/// Binary payload with optional file metadata.
///
/// Blobs become file parts in multipart bodies; the filename defaults to
/// `blob` and the content type to `application/octet-stream` when unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    data: Bytes,
    filename: Option<String>,
    content_type: Option<String>,
}

impl Blob {
    /// Create a blob from raw bytes.
    #[must_use]
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            filename: None,
            content_type: None,
        }
    }

    /// Set the filename advertised in the multipart part.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set the content type advertised in the multipart part.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Raw bytes.
    #[must_use]
    pub const fn data(&self) -> &Bytes {
        &self.data
    }

    /// Filename, if set.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Content type, if set.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

/// Insertion-ordered mapping from keys to [`Value`]s.
///
/// Each request call takes its record by value: path resolution returns the
/// shrunk remainder and the encoders only ever see keys that were not
/// consumed as path variables. Re-inserting an existing key replaces the
/// value in place without changing its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing in place if the key already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Insert a value, consuming and returning the record (builder style).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Value for the given key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the record contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(name, _)| name == key)
    }

    /// Remove a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.entries.iter().position(|(name, _)| name == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the record has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (key, value) in iter {
            record.insert(key, value);
        }
        record
    }
}

impl serde::Serialize for Record {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Construct a [`Record`] from `key => value` pairs.
///
/// # Example
///
/// ```
/// use grapnel_core::record;
///
/// let data = record! {
///     "id" => 5,
///     "name" => "Alice",
/// };
/// assert_eq!(data.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
    () => { $crate::Record::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $(record.insert($key, $value);)+
        record
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_preserves_insertion_order() {
        let record = record! {
            "z" => "last?",
            "a" => 1,
            "m" => "middle",
        };
        let keys: Vec<_> = record.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn record_insert_replaces_in_place() {
        let mut record = record! { "a" => 1, "b" => 2 };
        record.insert("a", "replaced");

        let keys: Vec<_> = record.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(record.get("a").and_then(Value::as_str), Some("replaced"));
    }

    #[test]
    fn record_remove_keeps_order() {
        let mut record = record! { "a" => 1, "b" => 2, "c" => 3 };
        let removed = record.remove("b");

        assert!(removed.is_some());
        assert!(!record.contains_key("b"));
        let keys: Vec<_> = record.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn record_remove_missing() {
        let mut record = record! { "a" => 1 };
        assert!(record.remove("b").is_none());
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn value_to_text() {
        assert_eq!(Value::from("x").to_text().as_deref(), Some("x"));
        assert_eq!(Value::from(5).to_text().as_deref(), Some("5"));
        assert_eq!(
            Value::from_f64(5.5).and_then(|v| v.to_text().map(Cow::into_owned)),
            Some("5.5".to_string())
        );
        assert!(Value::from(Blob::new("bytes")).to_text().is_none());
    }

    #[test]
    fn value_from_f64_rejects_non_finite() {
        assert!(Value::from_f64(f64::NAN).is_none());
        assert!(Value::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn blob_metadata() {
        let blob = Blob::new(vec![0xFF, 0xD8])
            .with_filename("photo.jpg")
            .with_content_type("image/jpeg");

        assert_eq!(blob.filename(), Some("photo.jpg"));
        assert_eq!(blob.content_type(), Some("image/jpeg"));
        assert_eq!(blob.data().as_ref(), &[0xFF, 0xD8]);
    }

    #[test]
    fn record_serializes_as_json_object() {
        let record = record! { "name" => "Alice", "age" => 30 };
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r#"{"name":"Alice","age":30}"#);
    }

    #[test]
    fn blob_value_fails_json_serialization() {
        let record = record! { "file" => Blob::new("data") };
        assert!(serde_json::to_string(&record).is_err());
    }
}
