//! The seam between the request pipeline and an HTTP library.
//!
//! A [`Transport`] executes one [`HttpRequest`] and hands back the
//! [`HttpResponse`] as data, whatever its status. Status interpretation stays
//! in the pipeline. [`UreqTransport`] is the default implementation.

use tracing::trace;
use ureq::http;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes a single HTTP round-trip.
///
/// Implementations must not retry and must return non-2xx responses as `Ok`.
/// `Err` is reserved for failures where no response was received.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by a shared `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Build an agent that returns 4xx/5xx as data, optionally routed through
    /// `proxy` (e.g. `http://127.0.0.1:8080`).
    pub fn new(proxy: Option<&str>) -> Result<Self, TransportError> {
        let proxy = proxy
            .map(|address| {
                ureq::Proxy::new(address).map_err(|e| TransportError::InvalidProxy {
                    address: address.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()?;

        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .proxy(proxy)
            .build()
            .new_agent();
        Ok(Self { agent })
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = http::Request::builder()
            .method(request.method.as_str())
            .uri(request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        trace!(method = %request.method, url = %request.url, "executing request");
        let result = match &request.body {
            Some(body) => self.agent.run(builder.body(body.clone()).map_err(invalid)?),
            None => self.agent.run(builder.body(()).map_err(invalid)?),
        };
        let mut response = result?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        // Uncapped: ureq stops at 10 MiB otherwise.
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_string()?;
        trace!(status, bytes = body.len(), "received response");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn invalid(err: http::Error) -> TransportError {
    TransportError::InvalidRequest(err.to_string())
}
