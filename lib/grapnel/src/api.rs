//! Templated endpoint facade.
//!
//! An [`Endpoint`] binds one URL template to an HTTP client and an optional
//! [`Canceller`]. Each HTTP method yields a call builder: GET takes its data
//! as a query string, every other method offers the three body encodings.
//! Each leaf call runs the full pipeline independently — resolve path
//! variables, encode the remainder, dispatch — so calls never share state
//! beyond the template, the client, and the canceller.
//!
//! # Example
//!
//! ```ignore
//! use grapnel::prelude::*;
//!
//! let endpoint = Endpoint::new("https://api.example.com/users/:id");
//! let response = endpoint
//!     .get(RequestOptions::new())
//!     .query(record! { "id" => 5, "expand" => "profile" }, [])
//!     .await?;
//! ```

use grapnel_core::{
    Canceller, Encoding, HttpClient, HttpClientExt, Method, Record, Request, Response, Result,
    resolve_path,
};

use crate::HyperClient;

/// Opaque per-builder request options.
///
/// Carries headers applied ahead of the computed `Content-Type`, so the
/// encoding always wins over options while per-call headers win over both.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    fn into_headers(self) -> Vec<(String, String)> {
        self.headers
    }
}

/// A templated HTTP endpoint.
///
/// The template and canceller are read-only once constructed; every call
/// takes its own [`Record`] by value, so two calls on the same endpoint can
/// never consume each other's data.
#[derive(Debug)]
pub struct Endpoint<C = HyperClient> {
    client: C,
    template: String,
    canceller: Option<Canceller>,
}

impl<C: Clone> Clone for Endpoint<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            template: self.template.clone(),
            canceller: self.canceller.clone(),
        }
    }
}

impl Endpoint<HyperClient> {
    /// Create an endpoint for a URL template with a default [`HyperClient`].
    ///
    /// The template may embed `:identifier` path variables.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self::with_client(HyperClient::new(), template)
    }
}

impl<C> Endpoint<C> {
    /// Create an endpoint backed by the given client.
    ///
    /// Useful for sharing one HTTP client (and its connection pool) across
    /// endpoints, or for substituting a test client.
    #[must_use]
    pub fn with_client(client: C, template: impl Into<String>) -> Self {
        Self {
            client,
            template: template.into(),
            canceller: None,
        }
    }

    /// Attach a canceller; every subsequent call arms it before dispatch.
    #[must_use]
    pub fn with_canceller(mut self, canceller: Canceller) -> Self {
        self.canceller = Some(canceller);
        self
    }

    /// The URL template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The underlying HTTP client.
    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }
}

impl<C: HttpClient> Endpoint<C> {
    /// HTTP GET builder; data goes into the query string.
    #[must_use]
    pub fn get(&self, options: RequestOptions) -> QueryCall<'_, C> {
        QueryCall {
            endpoint: self,
            options,
        }
    }

    /// HTTP DELETE builder.
    #[must_use]
    pub fn delete(&self, options: RequestOptions) -> BodyCall<'_, C> {
        self.body_call(Method::Delete, options)
    }

    /// HTTP HEAD builder.
    #[must_use]
    pub fn head(&self, options: RequestOptions) -> BodyCall<'_, C> {
        self.body_call(Method::Head, options)
    }

    /// HTTP OPTIONS builder.
    #[must_use]
    pub fn options(&self, options: RequestOptions) -> BodyCall<'_, C> {
        self.body_call(Method::Options, options)
    }

    /// HTTP PATCH builder.
    #[must_use]
    pub fn patch(&self, options: RequestOptions) -> BodyCall<'_, C> {
        self.body_call(Method::Patch, options)
    }

    /// HTTP POST builder.
    #[must_use]
    pub fn post(&self, options: RequestOptions) -> BodyCall<'_, C> {
        self.body_call(Method::Post, options)
    }

    /// HTTP PUT builder.
    #[must_use]
    pub fn put(&self, options: RequestOptions) -> BodyCall<'_, C> {
        self.body_call(Method::Put, options)
    }

    fn body_call(&self, method: Method, options: RequestOptions) -> BodyCall<'_, C> {
        BodyCall {
            endpoint: self,
            method,
            options,
        }
    }

    /// Run the full pipeline: resolve the template, encode the remainder,
    /// dispatch through the client.
    async fn send(
        &self,
        method: Method,
        encoding: Encoding,
        options: RequestOptions,
        data: Record,
        headers: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Response> {
        let (resolved, remaining) = resolve_path(&self.template, data)?;
        let payload = encoding.encode(&remaining)?;
        let url = url::Url::parse(&resolved)?;

        let request = Request::builder(method, url)
            .headers(options.into_headers())
            .payload(payload)
            .headers(headers)
            .build();

        self.client
            .execute_cancellable(request, self.canceller.as_ref())
            .await
    }
}

/// GET call builder: query-string encoding only.
#[derive(Debug)]
pub struct QueryCall<'a, C> {
    endpoint: &'a Endpoint<C>,
    options: RequestOptions,
}

impl<C: HttpClient> QueryCall<'_, C> {
    /// Dispatch a GET with the record encoded as a query string.
    ///
    /// Path variables are resolved (and consumed) from `data` first; the
    /// remaining entries become the query string, appended only when
    /// non-empty.
    ///
    /// # Errors
    ///
    /// Returns template/encoding errors before any network call, and
    /// network or cancellation failures afterwards.
    pub async fn query(
        self,
        data: Record,
        headers: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Response> {
        self.endpoint
            .send(Method::Get, Encoding::Query, self.options, data, headers)
            .await
    }
}

/// Call builder for body-carrying methods.
#[derive(Debug)]
pub struct BodyCall<'a, C> {
    endpoint: &'a Endpoint<C>,
    method: Method,
    options: RequestOptions,
}

impl<C: HttpClient> BodyCall<'_, C> {
    /// Dispatch with the record encoded as a JSON body
    /// (`application/json;charset=UTF-8`).
    ///
    /// # Errors
    ///
    /// Returns template/encoding errors before any network call, and
    /// network or cancellation failures afterwards.
    pub async fn json(
        self,
        data: Record,
        headers: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Response> {
        self.endpoint
            .send(self.method, Encoding::Json, self.options, data, headers)
            .await
    }

    /// Dispatch with the record encoded as a multipart form body; blob
    /// values become file parts.
    ///
    /// # Errors
    ///
    /// Returns template/encoding errors before any network call, and
    /// network or cancellation failures afterwards.
    pub async fn multi_part(
        self,
        data: Record,
        headers: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Response> {
        self.endpoint
            .send(self.method, Encoding::Multipart, self.options, data, headers)
            .await
    }

    /// Dispatch with the record encoded as a URL-encoded form body
    /// (`application/x-www-form-urlencoded;charset=UTF-8`).
    ///
    /// # Errors
    ///
    /// Returns template/encoding errors before any network call, and
    /// network or cancellation failures afterwards.
    pub async fn url_encoded(
        self,
        data: Record,
        headers: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Response> {
        self.endpoint
            .send(self.method, Encoding::UrlEncoded, self.options, data, headers)
            .await
    }
}
