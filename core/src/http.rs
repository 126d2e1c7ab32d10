//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! The pipeline builds `HttpRequest` values and parses `HttpResponse` values
//! as plain data. Executing the round-trip is the job of a
//! [`Transport`](crate::transport::Transport), so request shaping can be
//! tested without a network.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which ZAP base address serves an endpoint and how its body is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// `/JSON/...` endpoints. Bodies are parsed as JSON.
    #[default]
    Json,
    /// `/OTHER/...` endpoints. Bodies are returned as raw text (HTML, XML, ...).
    Other,
}

/// An HTTP request described as plain data.
///
/// `url` already carries the query string for GET requests. Non-GET requests
/// carry their parameters form-encoded in `body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_ignores_case() {
        let req = HttpRequest {
            method: HttpMethod::Get,
            url: "http://zap/JSON/core/view/version".to_string(),
            headers: vec![("X-ZAP-API-Key".to_string(), "k1".to_string())],
            body: None,
        };
        assert_eq!(req.header("x-zap-api-key"), Some("k1"));
        assert_eq!(req.header("content-type"), None);
    }

    #[test]
    fn only_2xx_is_success() {
        let mut resp = HttpResponse {
            status: 204,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(resp.is_success());
        resp.status = 302;
        assert!(!resp.is_success());
        resp.status = 199;
        assert!(!resp.is_success());
    }

    #[test]
    fn method_defaults_to_get() {
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
