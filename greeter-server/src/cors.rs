//! Cross-origin policy
//!
//! Every response is marked readable from any origin, with credentials,
//! for any method and any request header. Preflights are answered here
//! without reaching the router.

use axum::{
    extract::Request,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_HEADERS,
            ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE,
            ACCESS_CONTROL_REQUEST_METHOD, ORIGIN, VARY,
        },
        HeaderName, HeaderValue, Method, StatusCode,
    },
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

/// Seconds a browser may cache a preflight result
pub const PREFLIGHT_MAX_AGE: u32 = 600;

/// Headers stamped onto every response
const POLICY: [(HeaderName, &str); 4] = [
    (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"),
    (ACCESS_CONTROL_ALLOW_METHODS, "*"),
    (ACCESS_CONTROL_ALLOW_HEADERS, "*"),
];

/// Apply the policy to every response of `router`, including the
/// framework's own 404 and 405 responses.
///
/// The policy wraps `router` as a whole, so preflights are answered
/// before route matching and never pick up a method router's `allow`.
pub fn apply(router: Router) -> Router {
    let outer = Router::new()
        .fallback_service(router)
        .layer(middleware::from_fn(answer_preflight));

    POLICY.into_iter().fold(outer, |outer, (name, value)| {
        outer.layer(SetResponseHeaderLayer::overriding(
            name,
            HeaderValue::from_static(value),
        ))
    })
}

/// A preflight is an OPTIONS request carrying both `Origin` and
/// `Access-Control-Request-Method`.
fn is_preflight(request: &Request) -> bool {
    let headers = request.headers();
    request.method() == Method::OPTIONS
        && headers.contains_key(ORIGIN)
        && headers.contains_key(ACCESS_CONTROL_REQUEST_METHOD)
}

async fn answer_preflight(request: Request, next: Next) -> Response {
    if !is_preflight(&request) {
        return next.run(request).await;
    }

    tracing::debug!(path = %request.uri().path(), "answering CORS preflight");

    (
        StatusCode::OK,
        [
            (VARY, HeaderValue::from_static("Origin")),
            (ACCESS_CONTROL_MAX_AGE, HeaderValue::from(PREFLIGHT_MAX_AGE)),
        ],
        "OK",
    )
        .into_response()
}
