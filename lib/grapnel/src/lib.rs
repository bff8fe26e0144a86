//! Templated, cancellable HTTP request builder.
//!
//! Bind a URL template to an HTTP client, pick a method and a wire encoding,
//! and hand over a loosely-typed record: path variables are resolved (and
//! consumed) first, the remainder is encoded as the query string or the body,
//! and the request is dispatched with optional cooperative cancellation.
//!
//! # Example
//!
//! ```ignore
//! use grapnel::prelude::*;
//!
//! let canceller = Canceller::new();
//! let endpoint = Endpoint::new("https://api.example.com/users/:id")
//!     .with_canceller(canceller.clone());
//!
//! // GET https://api.example.com/users/5?expand=profile
//! let response = endpoint
//!     .get(RequestOptions::new())
//!     .query(record! { "id" => 5, "expand" => "profile" }, [])
//!     .await?;
//!
//! // Cancel from anywhere while a call is in flight:
//! canceller.cancel();
//! ```

mod api;
mod client;
mod config;
mod connector;
pub mod prelude;

// Re-export client types
pub use api::{BodyCall, Endpoint, QueryCall, RequestOptions};
pub use client::HyperClient;
pub use config::{ClientConfig, ClientConfigBuilder};

// Re-export core types
pub use grapnel_core::{
    Blob, Canceller, Encoding, Error, Form, HttpClient, HttpClientExt, Method, Part, Payload,
    Record, Request, RequestBuilder, Response, Result, Value, record, resolve_path, to_json,
    to_query_string,
};

// Re-export crates backing the public surface
pub use url;
