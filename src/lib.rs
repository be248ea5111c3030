use std::sync::Arc;

use axum::{
    extract::{OriginalUri, State},
    response::{IntoResponse, Response},
    Router,
};
use http::StatusCode;
use tracing::instrument;

pub mod edge;
pub mod rule;

pub use rule::{ConfigError, RedirectRule};

/// 301 response carrying nothing but a `location` header.
pub struct MovedPermanently(pub String);

impl IntoResponse for MovedPermanently {
    fn into_response(self) -> Response {
        (StatusCode::MOVED_PERMANENTLY, [("location", self.0)]).into_response()
    }
}

#[instrument(skip(rule))]
pub async fn redirect_handler(
    State(rule): State<Arc<RedirectRule>>,
    OriginalUri(uri): OriginalUri,
) -> MovedPermanently {
    // The uri goes into the rule verbatim, path and query included.
    let target = match uri.path_and_query() {
        Some(path_and_query) => rule.location_for(path_and_query.as_str()),
        None => rule.location_for(""),
    };

    tracing::info!("Redirecting {} to {}", uri, target);

    MovedPermanently(target)
}

pub fn router(rule: Arc<RedirectRule>) -> Router {
    Router::new().fallback(redirect_handler).with_state(rule)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    async fn send(rule: RedirectRule, uri: &str) -> Response {
        router(Arc::new(rule))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn redirects_with_the_original_path() {
        let response = send(RedirectRule::new("https://example.com", false), "/old/page").await;

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://example.com/old/page"
        );
    }

    #[tokio::test]
    async fn redirects_with_the_query_string() {
        let response = send(
            RedirectRule::new("https://example.com", false),
            "/search?q=rust",
        )
        .await;

        assert_eq!(
            response.headers()[header::LOCATION],
            "https://example.com/search?q=rust"
        );
    }

    #[tokio::test]
    async fn static_rule_redirects_every_path_to_the_destination() {
        for uri in ["/", "/anything", "/deep/nested/path?with=query"] {
            let response = send(RedirectRule::new("https://example.com/new", true), uri).await;

            assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
            assert_eq!(
                response.headers()[header::LOCATION],
                "https://example.com/new"
            );
        }
    }

    #[tokio::test]
    async fn location_is_the_only_header() {
        let response = send(RedirectRule::new("https://example.com", false), "/old/page").await;

        assert_eq!(response.headers().len(), 1);
    }

    #[test]
    fn status_description_matches_the_reason_phrase() {
        assert_eq!(
            StatusCode::MOVED_PERMANENTLY.canonical_reason(),
            Some("Moved Permanently")
        );
    }
}
