//! The shared request pipeline every ZAP endpoint goes through.
//!
//! # Design
//! `ZapClient` holds an immutable [`ClientConfig`] and a [`Transport`], both
//! behind `Arc`, so clones are cheap and calls never contend. A call is split
//! the same way as the endpoint bindings see it:
//!
//! 1. [`ZapClient::build_request`] filters the parameters and shapes a plain
//!    [`HttpRequest`] (query string for GET, form body otherwise, alternate
//!    base address for [`Format::Other`]).
//! 2. The transport executes it exactly once.
//! 3. [`ZapClient::parse_response`] turns the [`HttpResponse`] into an
//!    [`ApiResponse`] or a [`ClientError`].

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::api::{
    AjaxSpider, AlertFilter, Ascan, Authentication, Autoupdate, Context, Core, Endpoint,
    HttpSessions, Retest,
};
use crate::config::{ClientConfig, ClientOptions};
use crate::error::{ClientError, ErrorResponse, TransportError};
use crate::http::{Format, HttpMethod, HttpRequest, HttpResponse};
use crate::params::{encode_pairs, Params};
use crate::transport::{Transport, UreqTransport};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Payload of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Parsed body of a default-format endpoint.
    Json(Value),
    /// Raw body of an "other"-format endpoint (HTML, XML, Markdown, ...).
    Other(String),
}

impl ApiResponse {
    /// The parsed JSON value, or `None` for an "other"-format body.
    pub fn into_json(self) -> Option<Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Other(_) => None,
        }
    }

    /// The body as text. JSON values are re-serialized.
    pub fn into_text(self) -> String {
        match self {
            ApiResponse::Json(value) => value.to_string(),
            ApiResponse::Other(text) => text,
        }
    }
}

/// Client for the ZAP REST API.
#[derive(Clone)]
pub struct ZapClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for ZapClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZapClient")
            .field("base_url", &self.config.base_url)
            .field("base_url_other", &self.config.base_url_other)
            .finish_non_exhaustive()
    }
}

impl ZapClient {
    /// Build a client that talks HTTP through `ureq`, honouring
    /// `options.proxy`.
    pub fn new(options: ClientOptions) -> Result<Self, ClientError> {
        let transport = UreqTransport::new(options.proxy.as_deref())?;
        Ok(Self::with_transport(options, transport))
    }

    /// Build a client over any transport. `options.proxy` is the transport's
    /// concern and is ignored here.
    pub fn with_transport(options: ClientOptions, transport: impl Transport + 'static) -> Self {
        Self {
            config: Arc::new(ClientConfig::from(&options)),
            transport: Arc::new(transport),
        }
    }

    /// Shape one endpoint call into an HTTP request without executing it.
    pub fn build_request(
        &self,
        path: &str,
        params: &Params,
        format: Format,
        method: HttpMethod,
    ) -> HttpRequest {
        let base = match format {
            Format::Json => &self.config.base_url,
            Format::Other => &self.config.base_url_other,
        };
        let mut url = format!("{base}{path}");
        let mut headers = self.config.headers.clone();
        let pairs = params.filtered();

        let body = if method == HttpMethod::Get {
            if !pairs.is_empty() {
                url.push('?');
                url.push_str(&encode_pairs(&pairs));
            }
            None
        } else {
            headers.push(("content-type".to_string(), FORM_CONTENT_TYPE.to_string()));
            Some(encode_pairs(&pairs))
        };

        HttpRequest {
            method,
            url,
            headers,
            body,
        }
    }

    /// Interpret a response for an endpoint of the given format.
    pub fn parse_response(
        &self,
        format: Format,
        response: HttpResponse,
    ) -> Result<ApiResponse, ClientError> {
        if !response.is_success() {
            return Err(ClientError::new(TransportError::Status {
                status: response.status,
                body: response.body,
            }));
        }
        match format {
            Format::Json => match serde_json::from_str(&response.body) {
                Ok(value) => Ok(ApiResponse::Json(value)),
                Err(e) => Err(ClientError::with_response(
                    TransportError::Decode(e),
                    ErrorResponse {
                        status: Some(response.status),
                        data: Some(Value::String(response.body)),
                    },
                )),
            },
            Format::Other => Ok(ApiResponse::Other(response.body)),
        }
    }

    /// Run one endpoint call through the pipeline.
    pub fn request(
        &self,
        path: &str,
        params: Params,
        format: Format,
        method: HttpMethod,
    ) -> Result<ApiResponse, ClientError> {
        let request = self.build_request(path, &params, format, method);
        debug!(method = %request.method, url = %request.url, ?format, "dispatching ZAP API request");

        let result = self
            .transport
            .execute(&request)
            .map_err(ClientError::new)
            .and_then(|response| self.parse_response(format, response));

        if let Err(err) = &result {
            warn!(
                method = %request.method,
                path,
                status = ?err.status(),
                error = %err,
                "ZAP API request failed"
            );
        }
        result
    }

    /// GET a default-format endpoint and return its JSON body.
    pub fn request_json(&self, path: &str, params: Params) -> Result<Value, ClientError> {
        self.request(path, params, Format::Json, HttpMethod::Get)
            .map(|response| response.into_json().unwrap_or(Value::Null))
    }

    /// Call an "other"-format endpoint and return its raw body.
    pub fn request_other(
        &self,
        path: &str,
        params: Params,
        method: HttpMethod,
    ) -> Result<String, ClientError> {
        self.request(path, params, Format::Other, method)
            .map(ApiResponse::into_text)
    }

    /// Call a described endpoint with its descriptor's format and method.
    pub fn call(&self, endpoint: &Endpoint, params: Params) -> Result<ApiResponse, ClientError> {
        self.request(endpoint.path, params, endpoint.format, endpoint.method)
    }

    pub fn ajax_spider(&self) -> AjaxSpider<'_> {
        AjaxSpider::new(self)
    }

    pub fn alert_filter(&self) -> AlertFilter<'_> {
        AlertFilter::new(self)
    }

    pub fn ascan(&self) -> Ascan<'_> {
        Ascan::new(self)
    }

    pub fn authentication(&self) -> Authentication<'_> {
        Authentication::new(self)
    }

    pub fn autoupdate(&self) -> Autoupdate<'_> {
        Autoupdate::new(self)
    }

    pub fn context(&self) -> Context<'_> {
        Context::new(self)
    }

    pub fn core(&self) -> Core<'_> {
        Core::new(self)
    }

    pub fn http_sessions(&self) -> HttpSessions<'_> {
        HttpSessions::new(self)
    }

    pub fn retest(&self) -> Retest<'_> {
        Retest::new(self)
    }
}
