use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// 逗号分隔的来源列表，非法或空项忽略
fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect()
}

pub fn cors_layer() -> CorsLayer {
    let mut origins = parse_origins(&std::env::var("ALLOWED_ORIGINS").unwrap_or_default());
    if origins.is_empty() {
        origins = DEFAULT_ORIGINS.into_iter().map(HeaderValue::from_static).collect();
    }

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
}
