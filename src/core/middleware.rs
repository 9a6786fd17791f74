//! 核心中间件模块

use axum::{
    body::Body,
    extract::{FromRequest, Query, Request},
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use std::time::Instant;
use tracing::{debug, info, warn};

/// 改写请求方法时允许缓冲的最大表单体积
const OVERRIDE_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// 请求日志中间件
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    info!(
        "{} {} {} - {}ms",
        method,
        uri,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );

    response
}

#[derive(Debug, Default, Deserialize)]
struct MethodField {
    #[serde(rename = "_method")]
    method: Option<String>,
}

fn overridable(raw: &str) -> Option<Method> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

fn is_urlencoded_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

async fn form_method(headers: &HeaderMap, bytes: &axum::body::Bytes) -> Option<String> {
    if !is_urlencoded_form(headers) {
        return None;
    }

    let probe = Request::builder()
        .method(Method::POST)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(bytes.clone()))
        .ok()?;

    Form::<MethodField>::from_request(probe, &())
        .await
        .ok()
        .and_then(|Form(field)| field.method)
}

/// 方法改写中间件
///
/// HTML 表单只能发 GET/POST。POST 请求在查询串或表单体中带有
/// `_method=PUT|PATCH|DELETE` 时，按该方法继续路由。必须挂在路由之前。
pub async fn method_override_middleware(req: Request, next: Next) -> Response {
    if req.method() != Method::POST {
        return next.run(req).await;
    }

    let (mut parts, body) = req.into_parts();
    let bytes = match axum::body::to_bytes(body, OVERRIDE_BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("读取请求体失败: {}", err);
            return StatusCode::PAYLOAD_TOO_LARGE.into_response();
        }
    };

    let from_query = Query::<MethodField>::try_from_uri(&parts.uri)
        .ok()
        .and_then(|Query(field)| field.method);
    let requested = match from_query {
        Some(method) => Some(method),
        None => form_method(&parts.headers, &bytes).await,
    };

    if let Some(method) = requested.as_deref().and_then(overridable) {
        debug!("{} {} 改写为 {}", parts.method, parts.uri, method);
        parts.method = method;
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
