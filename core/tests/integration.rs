//! End-to-end tests against the mock ZAP server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the client over real
//! HTTP through the default ureq transport. The mock records every request it
//! receives, so the tests assert on what actually went over the wire as well
//! as on what the client returned.

use std::net::SocketAddr;
use std::sync::Arc;

use mock_server::{MockZap, DEFAULT_CONTEXT, VERSION};
use serde_json::json;
use zap_client::{ClientOptions, Format, HttpMethod, Params, TransportError, ZapClient};

const KEY: &str = "k1";

fn start_server(zap: Arc<MockZap>) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, zap).await
        })
    });

    addr
}

fn client_for(addr: SocketAddr, api_key: Option<&str>) -> ZapClient {
    let mut options = ClientOptions::new().with_zap_address(&format!("http://{addr}"));
    if let Some(key) = api_key {
        options = options.with_api_key(key);
    }
    ZapClient::new(options).unwrap()
}

fn setup() -> (Arc<MockZap>, ZapClient) {
    let zap = Arc::new(MockZap::new(Some(KEY)));
    let addr = start_server(Arc::clone(&zap));
    (zap, client_for(addr, Some(KEY)))
}

#[test]
fn version_round_trip() {
    let (zap, client) = setup();

    let version = client.core().version().unwrap();
    assert_eq!(version, json!({ "version": VERSION }));

    let requests = zap.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].format, "JSON");
    assert_eq!(requests[0].endpoint, "core/view/version");
    assert_eq!(requests[0].api_key.as_deref(), Some(KEY));
}

#[test]
fn context_lifecycle() {
    let (zap, client) = setup();

    // Step 1: the default context is always present.
    let list = client.context().context_list().unwrap();
    assert_eq!(list["contextList"], json!([DEFAULT_CONTEXT]));

    // Step 2: create a context through the typed binding.
    let created = client.context().new_context("c1").unwrap();
    assert_eq!(created["contextId"], "2");

    // Step 3: creating it again surfaces ZAP's error body.
    let err = client.context().new_context("c1").unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.message(), "Request failed with status code 400");
    assert_eq!(err.response().error_body().unwrap().code, "already_exists");

    // Step 4: remove it and check the list again.
    let removed = client.context().remove_context("c1").unwrap();
    assert_eq!(removed, json!({ "Result": "OK" }));
    assert_eq!(zap.contexts(), vec![DEFAULT_CONTEXT.to_string()]);
}

#[test]
fn post_sends_form_body() {
    let (zap, client) = setup();

    let response = client
        .request(
            "/context/action/newContext",
            Params::new().with("contextName", "c1"),
            Format::Json,
            HttpMethod::Post,
        )
        .unwrap();
    assert_eq!(response.into_json(), Some(json!({ "contextId": "2" })));

    let recorded = &zap.requests()[0];
    assert_eq!(recorded.method, "POST");
    assert!(recorded.query.is_empty());
    assert_eq!(recorded.form, vec![("contextName".to_string(), "c1".to_string())]);
    assert_eq!(
        recorded.content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
}

#[test]
fn get_filters_absent_values_and_keeps_falsy_ones() {
    let (zap, client) = setup();

    let params = Params::new()
        .with("a", None::<&str>)
        .with("b", 0)
        .with("c", "")
        .with("d", false);
    client.request_json("/ascan/view/status", params).unwrap();

    let recorded = &zap.requests()[0];
    assert_eq!(recorded.param("a"), None);
    assert_eq!(recorded.param("b"), Some("0"));
    assert_eq!(recorded.param("c"), Some(""));
    assert_eq!(recorded.param("d"), Some("false"));
}

#[test]
fn missing_api_key_is_rejected() {
    let zap = Arc::new(MockZap::new(Some(KEY)));
    let addr = start_server(Arc::clone(&zap));
    let client = client_for(addr, None);

    let err = client.core().version().unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(err.response().error_body().unwrap().code, "bad_api_key");
    assert!(zap.requests()[0].api_key.is_none());
}

#[test]
fn unknown_view_is_a_client_error() {
    let (_zap, client) = setup();

    let err = client.request_json("/core/view/nope", Params::new()).unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert!(matches!(err.cause(), TransportError::Status { status: 400, .. }));
    assert_eq!(err.response().error_body().unwrap().code, "bad_view");
}

#[test]
fn other_format_returns_raw_body() {
    let (zap, client) = setup();

    let report = client.core().xmlreport().unwrap();
    assert!(report.starts_with("<?xml"));
    assert!(report.contains(VERSION));

    let recorded = &zap.requests()[0];
    assert_eq!(recorded.format, "OTHER");
    assert_eq!(recorded.endpoint, "core/other/xmlreport");
}

#[test]
fn other_format_error_keeps_text_body() {
    let (_zap, client) = setup();

    let err = client
        .request_other("/core/other/nope", Params::new(), HttpMethod::Get)
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    let data = err.response().data.as_ref().unwrap();
    assert!(data.as_str().unwrap().contains("bad_other"));
}

#[test]
fn unreachable_server_has_no_response() {
    let client = client_for("127.0.0.1:1".parse().unwrap(), None);

    let err = client.core().version().unwrap_err();
    assert_eq!(err.status(), None);
    assert!(err.response().data.is_none());
    assert!(matches!(err.cause(), TransportError::Network(_)));
}

#[test]
fn client_is_shared_across_threads() {
    let (zap, client) = setup();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let client = client.clone();
            std::thread::spawn(move || {
                let url = format!("http://target/{i}");
                client.ascan().scan(Some(&url), None, None, None, None, None, None)
            })
        })
        .collect();
    for handle in handles {
        let scan = handle.join().unwrap().unwrap();
        assert!(scan["scan"].is_string());
    }

    assert_eq!(zap.requests().len(), 4);
}
