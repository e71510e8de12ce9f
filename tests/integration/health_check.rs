// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use scan_results::infrastructure::repositories::scan_result_repo_impl::ScanResultRepositoryImpl;
use scan_results::presentation::routes;
use tower::util::ServiceExt;

/// 健康检查测试
///
/// 健康检查不访问仓库，因此无需注入数据库
#[tokio::test]
async fn health_check_works() {
    let app = routes::routes::<ScanResultRepositoryImpl>();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn version_reports_crate_version() {
    let app = routes::routes::<ScanResultRepositoryImpl>();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/version")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], env!("CARGO_PKG_VERSION").as_bytes());
}
