//! Client for the Zed Attack Proxy (ZAP) REST API.
//!
//! # Overview
//! Every ZAP endpoint is a fixed path plus a bag of parameters. The bindings
//! in [`api`] supply those and forward them through one shared pipeline,
//! [`ZapClient::request`], which filters absent parameters, encodes them as a
//! query string (GET) or a form body (everything else), picks the JSON or
//! OTHER base address, performs exactly one HTTP call and folds every failure
//! into a [`ClientError`].
//!
//! # Design
//! - `ZapClient` is stateless between calls: its configuration is fixed at
//!   construction and shared behind `Arc`, so one client serves any number of
//!   threads.
//! - Request shaping and response parsing are plain-data steps
//!   (`build_request` / `parse_response`); the [`Transport`] in between is the
//!   only I/O, and defaults to a blocking `ureq` agent.
//! - Only `None` parameters are dropped. `0`, `false` and `""` are sent.
//!
//! ```no_run
//! use zap_client::{ClientOptions, ZapClient};
//!
//! let zap = ZapClient::new(ClientOptions::new().with_api_key("changeme"))?;
//! let version = zap.core().version()?;
//! let scan = zap.ascan().scan(Some("https://example.com"), None, None, None, None, None, None)?;
//! # Ok::<(), zap_client::ClientError>(())
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod params;
pub mod transport;

pub use client::{ApiResponse, ZapClient};
pub use config::ClientOptions;
pub use error::{ClientError, ErrorBody, ErrorResponse, TransportError};
pub use http::{Format, HttpMethod, HttpRequest, HttpResponse};
pub use params::{IntoParamValue, ParamValue, Params};
pub use transport::{Transport, UreqTransport};
