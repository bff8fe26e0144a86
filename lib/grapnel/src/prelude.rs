//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use grapnel::prelude::*;
//! ```

pub use crate::{
    Blob, Canceller, Endpoint, Error, HttpClient, HttpClientExt, HyperClient, Method, Record,
    RequestOptions, Response, Result, Value, record,
};
