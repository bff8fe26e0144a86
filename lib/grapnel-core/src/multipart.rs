//! Multipart form bodies.
//!
//! [`Form`] is the multipart primitive behind [`crate::Encoding::Multipart`]:
//! it owns its boundary, advertises it through the content type, and frames
//! each record entry as one part. Text and numeric values become text parts;
//! blobs become file parts carrying their own filename and content type.

use bytes::{BufMut, Bytes, BytesMut};

use crate::{Blob, Record, Value};

const DEFAULT_FILENAME: &str = "blob";
const DEFAULT_PART_TYPE: &str = "application/octet-stream";

/// A single part in a multipart form.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    name: String,
    filename: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

impl Part {
    /// Create a text part.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filename: None,
            content_type: None,
            data: Bytes::from(value.into().into_bytes()),
        }
    }

    /// Create a file part from a blob.
    ///
    /// Falls back to the filename `blob` and `application/octet-stream`
    /// when the blob carries no metadata.
    #[must_use]
    pub fn file(name: impl Into<String>, blob: &Blob) -> Self {
        Self {
            name: name.into(),
            filename: Some(blob.filename().unwrap_or(DEFAULT_FILENAME).to_string()),
            content_type: Some(blob.content_type().unwrap_or(DEFAULT_PART_TYPE).to_string()),
            data: blob.data().clone(),
        }
    }

    /// Part name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Filename, set for file parts.
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Content type, set for file parts.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Part data.
    #[must_use]
    pub const fn data(&self) -> &Bytes {
        &self.data
    }
}

/// A multipart form with a unique boundary.
#[derive(Debug, Clone)]
pub struct Form {
    parts: Vec<Part>,
    boundary: String,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Create an empty form with a generated boundary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            boundary: generate_boundary(),
        }
    }

    /// Create an empty form with a fixed boundary.
    ///
    /// The boundary must not appear in any part data.
    #[must_use]
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            parts: Vec::new(),
            boundary: boundary.into(),
        }
    }

    /// Build a form from a record: one part per entry, in insertion order.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        let mut form = Self::new();
        for (key, value) in record.iter() {
            let part = match value {
                Value::Text(text) => Part::text(key, text.clone()),
                Value::Number(number) => Part::text(key, number.to_string()),
                Value::Blob(blob) => Part::file(key, blob),
            };
            form.parts.push(part);
        }
        form
    }

    /// Append a part.
    #[must_use]
    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    /// The boundary string.
    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// The parts in this form.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// The advertised `Content-Type`, `multipart/form-data; boundary=<boundary>`.
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={}", self.boundary)
    }

    /// Consume the form into (content type, encoded body).
    #[must_use]
    pub fn into_body(self) -> (String, Bytes) {
        let content_type = self.content_type();
        (content_type, self.encode())
    }

    fn encode(&self) -> Bytes {
        let mut buf = BytesMut::new();

        for part in &self.parts {
            buf.put_slice(b"--");
            buf.put_slice(self.boundary.as_bytes());
            buf.put_slice(b"\r\n");

            buf.put_slice(b"Content-Disposition: form-data; name=\"");
            buf.put_slice(part.name.as_bytes());
            buf.put_slice(b"\"");
            if let Some(filename) = &part.filename {
                buf.put_slice(b"; filename=\"");
                buf.put_slice(filename.as_bytes());
                buf.put_slice(b"\"");
            }
            buf.put_slice(b"\r\n");

            if let Some(content_type) = &part.content_type {
                buf.put_slice(b"Content-Type: ");
                buf.put_slice(content_type.as_bytes());
                buf.put_slice(b"\r\n");
            }

            buf.put_slice(b"\r\n");
            buf.put_slice(&part.data);
            buf.put_slice(b"\r\n");
        }

        buf.put_slice(b"--");
        buf.put_slice(self.boundary.as_bytes());
        buf.put_slice(b"--\r\n");

        buf.freeze()
    }
}

/// Generate a boundary unlikely to collide with part data.
fn generate_boundary() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);

    format!("----GrapnelBoundary{timestamp:x}")
}
