//! Per-component ZAP endpoint bindings.
//!
//! # Design
//! Each component is declared as a table of rows through `endpoints!`:
//!
//! ```text
//! view fn scan_progress(scan_id: &str => "scanId") = "/ascan/view/scanProgress";
//! ```
//!
//! and the macro generates a borrowed group type (`Ascan<'a>`) with one typed
//! method per row plus a `const ENDPOINTS` descriptor table. `view` and
//! `action` rows hit the JSON base address and return `serde_json::Value`;
//! `other` rows hit the OTHER base address and return the raw body. Paths and
//! wire parameter names are ZAP's own and are kept verbatim.

use crate::http::{Format, HttpMethod};

macro_rules! endpoints {
    (@kind view) => { $crate::api::EndpointKind::View };
    (@kind action) => { $crate::api::EndpointKind::Action };
    (@kind other) => { $crate::api::EndpointKind::Other };
    (@output other) => { String };
    (@output $kind:ident) => { ::serde_json::Value };
    (@call other, $client:expr, $path:expr, $params:expr) => {
        $client.request_other($path, $params, $crate::HttpMethod::Get)
    };
    (@call $kind:ident, $client:expr, $path:expr, $params:expr) => {
        $client.request_json($path, $params)
    };
    (
        $(#[$group_meta:meta])*
        $group:ident;
        $(
            $(#[$meta:meta])*
            $kind:ident fn $name:ident($($arg:ident: $ty:ty => $wire:literal),* $(,)?) = $path:literal;
        )*
    ) => {
        $(#[$group_meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $group<'a> {
            client: &'a $crate::ZapClient,
        }

        impl<'a> $group<'a> {
            /// Every endpoint of this component, in declaration order.
            pub const ENDPOINTS: &'static [$crate::api::Endpoint] = &[
                $(
                    $crate::api::Endpoint {
                        name: stringify!($name),
                        kind: endpoints!(@kind $kind),
                        path: $path,
                        method: $crate::HttpMethod::Get,
                        format: endpoints!(@kind $kind).format(),
                        params: &[$($wire),*],
                    },
                )*
            ];

            pub(crate) fn new(client: &'a $crate::ZapClient) -> Self {
                Self { client }
            }

            $(
                $(#[$meta])*
                pub fn $name(&self, $($arg: $ty),*) -> Result<endpoints!(@output $kind), $crate::ClientError> {
                    let params = $crate::Params::new()$(.with($wire, $arg))*;
                    endpoints!(@call $kind, self.client, $path, params)
                }
            )*
        }
    };
}

mod ajax_spider;
mod alert_filter;
mod ascan;
mod authentication;
mod autoupdate;
mod context;
mod core_api;
mod http_sessions;
mod retest;

pub use self::ajax_spider::AjaxSpider;
pub use self::alert_filter::AlertFilter;
pub use self::ascan::Ascan;
pub use self::authentication::Authentication;
pub use self::autoupdate::Autoupdate;
pub use self::context::Context;
pub use self::core_api::Core;
pub use self::http_sessions::HttpSessions;
pub use self::retest::Retest;

/// ZAP's endpoint types: the middle segment of every path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    View,
    Action,
    Other,
}

impl EndpointKind {
    pub const fn segment(self) -> &'static str {
        match self {
            EndpointKind::View => "view",
            EndpointKind::Action => "action",
            EndpointKind::Other => "other",
        }
    }

    pub const fn format(self) -> Format {
        match self {
            EndpointKind::View | EndpointKind::Action => Format::Json,
            EndpointKind::Other => Format::Other,
        }
    }
}

/// Static description of one ZAP endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub kind: EndpointKind,
    pub path: &'static str,
    pub method: HttpMethod,
    pub format: Format,
    /// Wire parameter names, in the order the binding sends them.
    pub params: &'static [&'static str],
}

/// Endpoint tables keyed by ZAP component name.
pub const COMPONENTS: &[(&str, &[Endpoint])] = &[
    ("ajaxSpider", AjaxSpider::ENDPOINTS),
    ("alertFilter", AlertFilter::ENDPOINTS),
    ("ascan", Ascan::ENDPOINTS),
    ("authentication", Authentication::ENDPOINTS),
    ("autoupdate", Autoupdate::ENDPOINTS),
    ("context", Context::ENDPOINTS),
    ("core", Core::ENDPOINTS),
    ("httpSessions", HttpSessions::ENDPOINTS),
    ("retest", Retest::ENDPOINTS),
];

/// Look up an endpoint by its path.
pub fn find_endpoint(path: &str) -> Option<&'static Endpoint> {
    COMPONENTS
        .iter()
        .flat_map(|&(_, endpoints)| endpoints.iter())
        .find(|endpoint| endpoint.path == path)
}
