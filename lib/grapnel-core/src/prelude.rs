//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use grapnel_core::prelude::*;
//! ```

pub use crate::{
    Blob, Canceller, Encoding, Error, HttpClient, HttpClientExt, Method, Payload, Record, Request,
    RequestBuilder, Response, Result, Value, resolve_path, to_json, to_query_string,
};
