//! HTTP client implementation using hyper-util.

use std::collections::HashMap;
use std::time::Instant;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{Client, connect::HttpConnector},
    rt::TokioExecutor,
};
use tracing::{debug, info, warn};

use grapnel_core::{Error, HttpClient, Request, Response, Result};

use crate::{config::ClientConfig, connector::https_connector};

/// HTTP client over hyper-util with rustls TLS.
///
/// This is the network primitive behind [`crate::Endpoint`]: it issues
/// exactly one network call per execute, propagates every failure to the
/// caller, and logs request/response lines through `tracing`.
///
/// # Example
///
/// ```ignore
/// use grapnel::HyperClient;
///
/// let client = HyperClient::new();
/// let response = client.execute(request).await?;
/// ```
#[derive(Clone)]
pub struct HyperClient {
    inner: Client<HttpsConnector<HttpConnector>, Full<Bytes>>,
    config: ClientConfig,
}

impl std::fmt::Debug for HyperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HyperClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HyperClient {
    /// Create a new client with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration.
    #[must_use]
    pub fn with_config(config: ClientConfig) -> Self {
        let inner = Client::builder(TokioExecutor::new())
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_idle_per_host)
            .build(https_connector());

        Self { inner, config }
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a hyper request from a grapnel request.
    fn build_hyper_request(request: Request) -> Result<http::Request<Full<Bytes>>> {
        let (method, url, headers, body) = request.into_parts();

        let mut builder = http::Request::builder()
            .method(http::Method::from(method))
            .uri(url.as_str());

        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let body = body.map_or_else(Full::default, Full::new);
        builder
            .body(body)
            .map_err(|e| Error::invalid_request(e.to_string()))
    }

    /// Extract response headers as a `HashMap`.
    fn extract_headers(headers: &http::HeaderMap) -> HashMap<String, String> {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    #[allow(clippy::needless_pass_by_value)]
    fn map_hyper_error(err: hyper_util::client::legacy::Error) -> Error {
        let msg = err.to_string();

        if err.is_connect() {
            return Error::connection(msg);
        }

        if msg.contains("ssl") || msg.contains("tls") || msg.contains("certificate") {
            return Error::tls(msg);
        }

        Error::connection(msg)
    }
}

impl Default for HyperClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for HyperClient {
    async fn execute(&self, request: Request) -> Result<Response> {
        let method = request.method();
        let url = request.url().to_string();
        debug!(%method, %url, "sending request");

        let start = Instant::now();
        let hyper_request = Self::build_hyper_request(request)?;

        let outcome = self.inner.request(hyper_request).await;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        let response = match outcome {
            Ok(response) => response,
            Err(err) => {
                let err = Self::map_hyper_error(err);
                warn!(error = %err, elapsed_ms, "request failed");
                return Err(err);
            }
        };

        let status = response.status().as_u16();
        let response_headers = Self::extract_headers(response.headers());

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| Error::connection(e.to_string()))?
            .to_bytes();

        if (200..300).contains(&status) {
            info!(status, elapsed_ms, "request completed");
        } else {
            warn!(status, elapsed_ms, "request completed with HTTP error status");
        }

        Ok(Response::new(status, response_headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_default() {
        let client = HyperClient::new();
        assert_eq!(client.config().pool_idle_per_host, 32);
    }

    #[test]
    fn client_with_config() {
        let config = ClientConfig::builder().pool_idle_per_host(8).build();
        let client = HyperClient::with_config(config);
        assert_eq!(client.config().pool_idle_per_host, 8);
    }

    #[test]
    fn client_is_clone() {
        let client = HyperClient::new();
        let _cloned = client.clone();
    }

    #[test]
    fn client_is_debug() {
        let client = HyperClient::new();
        let debug = format!("{client:?}");
        assert!(debug.contains("HyperClient"));
    }
}
