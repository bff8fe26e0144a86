//! Payload encoding strategies.
//!
//! The four wire encodings share one shape — serialize the remaining record,
//! fix the implied `Content-Type` — so they are a single parametrized
//! strategy, [`Encoding`], rather than parallel hand-written functions.

use bytes::Bytes;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{Error, Record, Result, multipart::Form};

/// Characters escaped in query strings and URL-encoded bodies.
///
/// Everything except `A-Za-z0-9 - _ . ! ~ * ' ( )` is percent-escaped, which
/// notably encodes a space as `%20` rather than `+`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";
const URL_ENCODED_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// An encoded request payload with the `Content-Type` it implies.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Percent-encoded query string, appended to the URL (no content type).
    Query(String),
    /// Request body bytes with their content type.
    Body {
        /// The `Content-Type` header value implied by the encoding.
        content_type: String,
        /// Encoded body bytes.
        bytes: Bytes,
    },
}

/// Wire encoding selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Percent-encoded query string appended to the URL (GET).
    Query,
    /// JSON body, `application/json;charset=UTF-8`.
    Json,
    /// Multipart form body; the multipart form generates and advertises
    /// its own boundary through the content type.
    Multipart,
    /// URL-encoded form body, `application/x-www-form-urlencoded;charset=UTF-8`.
    UrlEncoded,
}

impl Encoding {
    /// Encode the remaining record into a payload.
    ///
    /// # Errors
    ///
    /// Returns an error when a value is incompatible with the encoding:
    /// blobs in query strings or URL-encoded bodies ([`Error::BinaryValue`])
    /// and blobs in JSON bodies ([`Error::Json`]). Raised before any network
    /// call is issued.
    pub fn encode(self, record: &Record) -> Result<Payload> {
        match self {
            Self::Query => to_query_string(record).map(Payload::Query),
            Self::Json => Ok(Payload::Body {
                content_type: JSON_CONTENT_TYPE.to_string(),
                bytes: to_json(record)?,
            }),
            Self::UrlEncoded => Ok(Payload::Body {
                content_type: URL_ENCODED_CONTENT_TYPE.to_string(),
                bytes: Bytes::from(to_query_string(record)?.into_bytes()),
            }),
            Self::Multipart => {
                let (content_type, bytes) = Form::from_record(record).into_body();
                Ok(Payload::Body {
                    content_type,
                    bytes,
                })
            }
        }
    }
}

/// Serialize a record as an ampersand-joined percent-encoded query string.
///
/// Pairs are emitted in insertion order; an empty record yields an empty
/// string.
///
/// # Errors
///
/// Returns [`Error::BinaryValue`] for blob values, which have no textual
/// representation.
///
/// # Example
///
/// ```
/// use grapnel_core::{record, to_query_string};
///
/// let query = to_query_string(&record! { "a" => "1", "b" => "two words" }).expect("encode");
/// assert_eq!(query, "a=1&b=two%20words");
/// ```
pub fn to_query_string(record: &Record) -> Result<String> {
    let mut query = String::new();
    for (key, value) in record.iter() {
        let text = value.to_text().ok_or_else(|| Error::binary_value(key))?;
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(&utf8_percent_encode(key, COMPONENT).to_string());
        query.push('=');
        query.push_str(&utf8_percent_encode(&text, COMPONENT).to_string());
    }
    Ok(query)
}

/// Serialize a record as JSON bytes.
///
/// An empty record encodes as `{}`.
///
/// # Errors
///
/// Returns an error when a value is not JSON-serializable (blobs).
pub fn to_json(record: &Record) -> Result<Bytes> {
    serde_json::to_vec(record).map(Bytes::from).map_err(Into::into)
}
