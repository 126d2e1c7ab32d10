//! A small stand-in for the ZAP API, for exercising clients over real HTTP.
//!
//! Serves `/JSON/{component}/{type}/{name}` and `/OTHER/...` for any method,
//! reads parameters from the query string and from form bodies, enforces an
//! optional API key, and records every request it sees so tests can assert on
//! exactly what went over the wire.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::debug;

pub const VERSION: &str = "2.16.1";
pub const API_KEY_HEADER: &str = "x-zap-api-key";
pub const DEFAULT_CONTEXT: &str = "Default Context";

/// One request as received by the mock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub method: String,
    /// `JSON` or `OTHER`.
    pub format: String,
    /// Path below the format prefix, e.g. `core/view/version`.
    pub endpoint: String,
    pub query: Vec<(String, String)>,
    pub form: Vec<(String, String)>,
    pub api_key: Option<String>,
    pub content_type: Option<String>,
}

impl RecordedRequest {
    /// Query and form parameters together, query first.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query
            .iter()
            .chain(self.form.iter())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params().find(|(k, _)| *k == name).map(|(_, v)| v)
    }
}

#[derive(Debug)]
struct ZapState {
    contexts: Vec<String>,
    scans: u32,
    requests: Vec<RecordedRequest>,
}

/// Shared state behind the mock's routes.
#[derive(Debug)]
pub struct MockZap {
    api_key: Option<String>,
    state: Mutex<ZapState>,
}

pub type Shared = Arc<MockZap>;

impl MockZap {
    /// A mock that requires `api_key` on every call when it is `Some`.
    pub fn new(api_key: Option<&str>) -> Self {
        Self {
            api_key: api_key.map(str::to_string),
            state: Mutex::new(ZapState {
                contexts: vec![DEFAULT_CONTEXT.to_string()],
                scans: 0,
                requests: Vec::new(),
            }),
        }
    }

    /// Every request received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn contexts(&self) -> Vec<String> {
        self.lock().contexts.clone()
    }

    fn lock(&self) -> MutexGuard<'_, ZapState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Error body in ZAP's JSON shape.
#[derive(Debug)]
pub struct ZapError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ZapError {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    fn bad_request(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, message)
    }
}

impl IntoResponse for ZapError {
    fn into_response(self) -> Response {
        let body = json!({ "code": self.code, "message": self.message });
        (self.status, Json(body)).into_response()
    }
}

pub fn app() -> Router {
    app_with(Arc::new(MockZap::new(None)))
}

pub fn app_with(zap: Shared) -> Router {
    Router::new()
        .route("/JSON/{*endpoint}", any(json_endpoint))
        .route("/OTHER/{*endpoint}", any(other_endpoint))
        .with_state(zap)
}

pub async fn run(listener: TcpListener, zap: Shared) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(zap)).await
}

async fn json_endpoint(
    State(zap): State<Shared>,
    method: Method,
    Path(endpoint): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: String,
) -> Response {
    let request = record(&zap, "JSON", &method, &endpoint, query, &headers, &body);
    let result = check_api_key(&zap, &request).and_then(|()| dispatch_json(&zap, &request));
    match result {
        Ok(value) => Json(value).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn other_endpoint(
    State(zap): State<Shared>,
    method: Method,
    Path(endpoint): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: String,
) -> Response {
    let request = record(&zap, "OTHER", &method, &endpoint, query, &headers, &body);
    if let Err(err) = check_api_key(&zap, &request) {
        return err.into_response();
    }
    match request.endpoint.as_str() {
        "core/other/htmlreport" => (
            [(header::CONTENT_TYPE, "text/html; charset=UTF-8")],
            "<html><head><title>ZAP Scanning Report</title></head><body><h1>ZAP Scanning Report</h1></body></html>",
        )
            .into_response(),
        "core/other/xmlreport" => (
            [(header::CONTENT_TYPE, "application/xml; charset=UTF-8")],
            format!("<?xml version=\"1.0\"?><OWASPZAPReport version=\"{VERSION}\"></OWASPZAPReport>"),
        )
            .into_response(),
        other => (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/xml; charset=UTF-8")],
            format!("<error><code>bad_other</code><endpoint>{other}</endpoint></error>"),
        )
            .into_response(),
    }
}

fn record(
    zap: &MockZap,
    format: &str,
    method: &Method,
    endpoint: &str,
    query: Option<String>,
    headers: &HeaderMap,
    body: &str,
) -> RecordedRequest {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let request = RecordedRequest {
        method: method.to_string(),
        format: format.to_string(),
        endpoint: endpoint.trim_end_matches('/').to_string(),
        query: decode(query.as_deref().unwrap_or_default()),
        form: decode(body),
        api_key: header_value(API_KEY_HEADER),
        content_type: header_value("content-type"),
    };
    debug!(method = %request.method, format, endpoint = %request.endpoint, "mock ZAP request");
    zap.lock().requests.push(request.clone());
    request
}

fn decode(encoded: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(encoded.as_bytes())
        .into_owned()
        .collect()
}

fn check_api_key(zap: &MockZap, request: &RecordedRequest) -> Result<(), ZapError> {
    match &zap.api_key {
        Some(expected) if request.api_key.as_deref() != Some(expected.as_str()) => Err(ZapError::new(
            StatusCode::FORBIDDEN,
            "bad_api_key",
            "Provided API key is incorrect or not supplied",
        )),
        _ => Ok(()),
    }
}

fn required<'r>(request: &'r RecordedRequest, name: &str) -> Result<&'r str, ZapError> {
    request
        .param(name)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ZapError::bad_request("missing_parameter", format!("Missing Parameter ({name})")))
}

fn ok() -> Value {
    json!({ "Result": "OK" })
}

fn dispatch_json(zap: &MockZap, request: &RecordedRequest) -> Result<Value, ZapError> {
    match request.endpoint.as_str() {
        "core/view/version" => Ok(json!({ "version": VERSION })),
        "context/view/contextList" => Ok(json!({ "contextList": zap.contexts() })),
        "context/action/newContext" => {
            let name = required(request, "contextName")?;
            let mut state = zap.lock();
            if state.contexts.iter().any(|c| c == name) {
                return Err(ZapError::bad_request("already_exists", format!("Already Exists ({name})")));
            }
            state.contexts.push(name.to_string());
            Ok(json!({ "contextId": state.contexts.len().to_string() }))
        }
        "context/action/removeContext" => {
            let name = required(request, "contextName")?;
            let mut state = zap.lock();
            let before = state.contexts.len();
            state.contexts.retain(|c| c != name);
            if state.contexts.len() == before {
                return Err(ZapError::bad_request("context_not_found", format!("Context Not Found ({name})")));
            }
            Ok(ok())
        }
        "ascan/action/scan" => {
            if request.param("url").is_none() && request.param("contextId").is_none() {
                return Err(ZapError::bad_request("missing_parameter", "Missing Parameter (url)"));
            }
            let mut state = zap.lock();
            let id = state.scans;
            state.scans += 1;
            Ok(json!({ "scan": id.to_string() }))
        }
        "ascan/view/status" => Ok(json!({ "status": "100" })),
        other => Err(unknown_endpoint(other)),
    }
}

fn unknown_endpoint(endpoint: &str) -> ZapError {
    let mut segments = endpoint.split('/');
    let (component, kind) = (segments.next().unwrap_or_default(), segments.next().unwrap_or_default());
    match kind {
        "view" => ZapError::bad_request("bad_view", format!("Bad View ({endpoint})")),
        "action" => ZapError::bad_request("bad_action", format!("Bad Action ({endpoint})")),
        _ => ZapError::new(
            StatusCode::NOT_FOUND,
            "no_implementor",
            format!("No Implementor ({component})"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(endpoint: &str, query: &[(&str, &str)]) -> RecordedRequest {
        RecordedRequest {
            method: "GET".to_string(),
            format: "JSON".to_string(),
            endpoint: endpoint.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            form: Vec::new(),
            api_key: None,
            content_type: None,
        }
    }

    #[test]
    fn params_prefer_query_then_form() {
        let mut req = request("x", &[("a", "1")]);
        req.form.push(("a".to_string(), "2".to_string()));
        req.form.push(("b".to_string(), "3".to_string()));
        assert_eq!(req.param("a"), Some("1"));
        assert_eq!(req.param("b"), Some("3"));
        assert_eq!(req.params().count(), 3);
    }

    #[test]
    fn decode_handles_plus_and_percent() {
        assert_eq!(
            decode("q=a+b%26c&empty="),
            vec![
                ("q".to_string(), "a b&c".to_string()),
                ("empty".to_string(), String::new())
            ]
        );
        assert!(decode("").is_empty());
    }

    #[test]
    fn new_context_rejects_duplicates() {
        let zap = MockZap::new(None);
        let req = request("context/action/newContext", &[("contextName", "c1")]);
        assert_eq!(dispatch_json(&zap, &req).unwrap(), json!({ "contextId": "2" }));
        let err = dispatch_json(&zap, &req).unwrap_err();
        assert_eq!(err.code, "already_exists");
        assert_eq!(zap.contexts(), vec![DEFAULT_CONTEXT.to_string(), "c1".to_string()]);
    }

    #[test]
    fn empty_required_param_is_missing() {
        let zap = MockZap::new(None);
        let err = dispatch_json(&zap, &request("context/action/newContext", &[("contextName", "")])).unwrap_err();
        assert_eq!(err.code, "missing_parameter");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_endpoints_map_to_zap_codes() {
        assert_eq!(unknown_endpoint("core/view/nope").code, "bad_view");
        assert_eq!(unknown_endpoint("core/action/nope").code, "bad_action");
        let err = unknown_endpoint("nope");
        assert_eq!(err.code, "no_implementor");
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn api_key_is_enforced_only_when_configured() {
        let open = MockZap::new(None);
        assert!(check_api_key(&open, &request("core/view/version", &[])).is_ok());

        let locked = MockZap::new(Some("k1"));
        let mut req = request("core/view/version", &[]);
        assert_eq!(check_api_key(&locked, &req).unwrap_err().code, "bad_api_key");
        req.api_key = Some("k1".to_string());
        assert!(check_api_key(&locked, &req).is_ok());
    }

    #[test]
    fn scans_get_sequential_ids() {
        let zap = MockZap::new(None);
        let req = request("ascan/action/scan", &[("url", "http://example.com")]);
        assert_eq!(dispatch_json(&zap, &req).unwrap(), json!({ "scan": "0" }));
        assert_eq!(dispatch_json(&zap, &req).unwrap(), json!({ "scan": "1" }));
    }
}
