//! The cross-origin policy for the API.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Create a layer that lets the client served from `allowed_origin` call the API.
///
/// Any method and header is allowed from that origin, and credentials such as
/// cookies may be sent. Requests from other origins get no
/// `access-control-allow-origin` header, so browsers block them.
///
/// The requested method and headers are mirrored back on preflight requests
/// since wildcards cannot be combined with credentials.
pub fn cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([allowed_origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
