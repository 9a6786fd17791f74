//! 路由表与中间件栈

use axum::{
    middleware,
    routing::get,
    Router,
};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::app::fruits::{handler, service::FruitService};
use crate::core::middleware::{method_override_middleware, request_logging_middleware};

/// 存活检查
async fn liveness() -> &'static str {
    "your server is running... better catch it."
}

/// 水果路由；未匹配的路径交给静态文件目录
pub fn fruit_routes(fruit_service: FruitService, static_dir: impl AsRef<Path>) -> Router {
    let state = handler::AppState { fruit_service };

    Router::new()
        .route("/", get(liveness))
        .route("/fruits/seed", get(handler::seed))
        .route("/fruits", get(handler::index).post(handler::create))
        .route("/fruits/new", get(handler::new_form))
        .route(
            "/fruits/:id",
            get(handler::show).put(handler::update).delete(handler::delete),
        )
        .route("/fruits/:id/edit", get(handler::edit_form))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

/// 完整应用
///
/// 方法改写必须在路由匹配之前生效，所以内层路由作为外层的 fallback，
/// 中间件挂在外层。
pub fn build_app(fruit_service: FruitService, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .fallback_service(fruit_routes(fruit_service, static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(middleware::from_fn(method_override_middleware)),
        )
}
