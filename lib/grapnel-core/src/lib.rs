//! Core types for the grapnel templated HTTP request builder.
//!
//! This crate provides the foundational pieces used by grapnel:
//! - [`Record`], [`Value`], [`Blob`] - Loosely-typed request data
//! - [`resolve_path`] - URL path template resolution
//! - [`Encoding`] and [`Payload`] - Wire encoding strategies
//! - [`Form`] and [`Part`] - Multipart form bodies
//! - [`Request`] and [`RequestBuilder`] - HTTP request types
//! - [`Response`] - HTTP response type
//! - [`Canceller`] - Cooperative cancellation handle
//! - [`HttpClient`] and [`HttpClientExt`] - Client trait seam and
//!   cancellable dispatch
//! - [`Error`] and [`Result`] - Error handling

mod body;
mod cancel;
mod client;
mod error;
mod method;
mod multipart;
pub mod prelude;
mod record;
mod request;
mod response;
mod template;

pub use body::{Encoding, Payload, to_json, to_query_string};
pub use cancel::Canceller;
pub use client::{HttpClient, HttpClientExt};
pub use error::{Error, Result};
pub use method::Method;
pub use multipart::{Form, Part};
pub use record::{Blob, Record, Value};
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use template::resolve_path;
