use serde::{Deserialize, Serialize};

use crate::rule::RedirectRule;

/// Viewer-request event as delivered by the edge runtime.
#[derive(Debug, Deserialize)]
pub struct ViewerEvent {
    pub request: ViewerRequest,
}

#[derive(Debug, Deserialize)]
pub struct ViewerRequest {
    /// Path plus query, already normalized by the platform before it
    /// reaches us. Absent means empty.
    #[serde(default)]
    pub uri: String,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct RedirectResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(rename = "statusDescription")]
    pub status_description: &'static str,
    pub headers: ResponseHeaders,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ResponseHeaders {
    pub location: HeaderEntry,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct HeaderEntry {
    pub value: String,
}

impl RedirectResponse {
    pub fn moved_permanently(location: String) -> Self {
        Self {
            status_code: 301,
            status_description: "Moved Permanently",
            headers: ResponseHeaders {
                location: HeaderEntry { value: location },
            },
        }
    }
}

pub fn handle(rule: &RedirectRule, event: ViewerEvent) -> RedirectResponse {
    RedirectResponse::moved_permanently(rule.location_for(&event.request.uri))
}
