// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::scan_result_repository::ScanResultRepository;
use crate::presentation::handlers::result_handler;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 路由不持有任何状态，仓库需通过 `Extension<Arc<R>>` 注入，
/// 参见 [`app`]。
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes<R>() -> Router
where
    R: ScanResultRepository + 'static,
{
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version));

    let result_routes = Router::new()
        .route(
            "/results",
            get(result_handler::list_results::<R>).post(result_handler::create_result::<R>),
        )
        .route("/results/{id}", get(result_handler::get_result::<R>));

    Router::new().merge(public_routes).merge(result_routes)
}

/// 组装完整应用：路由、仓库注入和请求追踪
pub fn app<R>(repo: Arc<R>) -> Router
where
    R: ScanResultRepository + 'static,
{
    routes::<R>()
        .layer(Extension(repo))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
