//! HTTP responses.
//!
//! [`Response`] is the raw settled outcome of a dispatched request: status,
//! headers, and body bytes. Parsing the body is left to the caller.

use std::collections::HashMap;

use bytes::Bytes;

/// HTTP response with status, headers, and raw body bytes.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl Response {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume into body bytes.
    #[must_use]
    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Consume into (status, headers, body).
    #[must_use]
    pub fn into_parts(self) -> (u16, HashMap<String, String>, Bytes) {
        (self.status, self.headers, self.body)
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 3xx.
    #[must_use]
    pub const fn is_redirection(&self) -> bool {
        self.status >= 300 && self.status < 400
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_basic() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let response = Response::new(200, headers, Bytes::from(r#"{"id":1}"#));

        assert_eq!(response.status(), 200);
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.body().as_ref(), br#"{"id":1}"#);
        assert!(response.is_success());
    }

    #[test]
    fn response_status_classes() {
        assert!(Response::new(301, HashMap::new(), Bytes::new()).is_redirection());
        assert!(Response::new(404, HashMap::new(), Bytes::new()).is_client_error());
        assert!(Response::new(500, HashMap::new(), Bytes::new()).is_server_error());
        assert!(!Response::new(500, HashMap::new(), Bytes::new()).is_success());
    }

    #[test]
    fn response_into_parts() {
        let response = Response::new(204, HashMap::new(), Bytes::new());
        let (status, headers, body) = response.into_parts();

        assert_eq!(status, 204);
        assert!(headers.is_empty());
        assert!(body.is_empty());
    }
}
