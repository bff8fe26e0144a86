//! HTTP request assembly.
//!
//! [`Request`] is built fresh per call and consumed by the dispatcher. The
//! builder applies an encoded [`Payload`] — a query string onto the URL, or
//! body bytes with their computed `Content-Type` — and merges headers in
//! order, so caller-supplied headers applied after a payload may overwrite
//! the computed content type.

use std::collections::HashMap;

use bytes::Bytes;

use crate::{Method, Payload};

/// An HTTP request with method, URL, headers, and optional body.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
}

impl Request {
    /// Creates a new [`RequestBuilder`].
    #[must_use]
    pub fn builder(method: Method, url: url::Url) -> RequestBuilder {
        RequestBuilder::new(method, url)
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Request URL.
    #[must_use]
    pub const fn url(&self) -> &url::Url {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Request body.
    #[must_use]
    pub const fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Consume into (method, url, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (Method, url::Url, HashMap<String, String>, Option<Bytes>) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Builder for [`Request`] instances.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: url::Url,
    headers: HashMap<String, String>,
    body: Option<Bytes>,
}

impl RequestBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(method: Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Sets a header, replacing any previous value for the name.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets multiple headers.
    #[must_use]
    pub fn headers(mut self, headers: impl IntoIterator<Item = (String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Applies an encoded payload.
    ///
    /// A query payload is appended to the URL (joined with `&` when the URL
    /// already carries a query, omitted entirely when empty); a body payload
    /// sets the computed `Content-Type` and the body bytes.
    #[must_use]
    pub fn payload(mut self, payload: Payload) -> Self {
        match payload {
            Payload::Query(query) => {
                if !query.is_empty() {
                    let merged = match self.url.query() {
                        Some(existing) if !existing.is_empty() => {
                            format!("{existing}&{query}")
                        }
                        _ => query,
                    };
                    self.url.set_query(Some(&merged));
                }
                self
            }
            Payload::Body {
                content_type,
                bytes,
            } => self.header("Content-Type", content_type).body(bytes),
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: Bytes) -> Self {
        self.body = Some(body);
        self
    }

    /// Builds the [`Request`].
    #[must_use]
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Encoding, record};

    fn parse(url: &str) -> url::Url {
        url::Url::parse(url).expect("valid URL")
    }

    #[test]
    fn request_builder_basic() {
        let request = Request::builder(Method::Get, parse("https://api.example.com/users"))
            .header("Accept", "application/json")
            .build();

        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.url().as_str(), "https://api.example.com/users");
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert!(request.body().is_none());
    }

    #[test]
    fn query_payload_appends_to_url() {
        let payload = Encoding::Query
            .encode(&record! { "q" => "two words", "page" => 1 })
            .expect("encode");
        let request = Request::builder(Method::Get, parse("https://api.example.com/search"))
            .payload(payload)
            .build();

        assert_eq!(
            request.url().as_str(),
            "https://api.example.com/search?q=two%20words&page=1"
        );
        assert!(request.body().is_none());
        assert!(request.header("Content-Type").is_none());
    }

    #[test]
    fn empty_query_payload_leaves_url_untouched() {
        let request = Request::builder(Method::Get, parse("https://api.example.com/search"))
            .payload(Payload::Query(String::new()))
            .build();

        assert_eq!(request.url().as_str(), "https://api.example.com/search");
    }

    #[test]
    fn query_payload_merges_with_existing_query() {
        let request = Request::builder(Method::Get, parse("https://api.example.com/s?fixed=1"))
            .payload(Payload::Query("q=rust".to_string()))
            .build();

        assert_eq!(
            request.url().as_str(),
            "https://api.example.com/s?fixed=1&q=rust"
        );
    }

    #[test]
    fn body_payload_sets_content_type() {
        let payload = Encoding::Json
            .encode(&record! { "name" => "test" })
            .expect("encode");
        let request = Request::builder(Method::Post, parse("https://api.example.com/users"))
            .payload(payload)
            .build();

        assert_eq!(
            request.header("Content-Type"),
            Some("application/json;charset=UTF-8")
        );
        assert_eq!(
            request.body().map(|b| b.as_ref()),
            Some(br#"{"name":"test"}"#.as_ref())
        );
    }

    #[test]
    fn later_headers_override_computed_content_type() {
        let payload = Encoding::Json.encode(&record! { "a" => 1 }).expect("encode");
        let request = Request::builder(Method::Post, parse("https://api.example.com/users"))
            .payload(payload)
            .headers([("Content-Type".to_string(), "application/custom".to_string())])
            .build();

        assert_eq!(request.header("Content-Type"), Some("application/custom"));
    }
}
