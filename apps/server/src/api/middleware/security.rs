//! Security headers middleware

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};

/// Baseline headers for every response: DNS prefetch on, HSTS, no MIME
/// sniffing, and full referrer URLs only on same-origin navigation. API
/// paths additionally get the shared-cache default when the handler did not
/// set a `Cache-Control` of its own.
pub async fn security_headers_middleware(req: Request, next: Next) -> Response {
    let is_api_path = {
        let path = req.uri().path();
        path.starts_with("/facilities") || path.starts_with("/meta")
    };

    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert("x-dns-prefetch-control", HeaderValue::from_static("on"));
    headers.insert(
        "strict-transport-security",
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );
    // Avoid MIME sniffing.
    headers.insert(
        "x-content-type-options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        "referrer-policy",
        HeaderValue::from_static("origin-when-cross-origin"),
    );

    if is_api_path && !headers.contains_key("cache-control") {
        headers.insert(
            "cache-control",
            HeaderValue::from_static("public, s-maxage=300, stale-while-revalidate=600"),
        );
    }

    response
}
