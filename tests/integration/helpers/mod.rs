// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use scan_results::config::settings::DatabaseSettings;
use scan_results::domain::models::scan_result::{NewScanResult, ScanResult};
use scan_results::domain::repositories::scan_result_repository::ScanResultRepository;
use scan_results::infrastructure::database::connection;
use scan_results::infrastructure::repositories::scan_result_repo_impl::ScanResultRepositoryImpl;
use scan_results::presentation::routes;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db_pool: Arc<DatabaseConnection>,
    pub repo: Arc<ScanResultRepositoryImpl>,
}

impl TestApp {
    /// 绕过HTTP接口直接写入一条 pending 记录
    pub async fn seed(&self, repository_name: &str) -> ScanResult {
        self.repo
            .create(NewScanResult::pending(repository_name.to_string()))
            .await
            .expect("Failed to seed scan result")
    }
}

/// 使用全新迁移的内存数据库
pub async fn create_test_db() -> Arc<DatabaseConnection> {
    let db_settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: None,
        min_connections: None,
        connect_timeout: None,
        idle_timeout: None,
    };

    let db = connection::connect_and_migrate(&db_settings)
        .await
        .expect("Failed to set up test database");
    Arc::new(db)
}

pub async fn create_test_app() -> TestApp {
    let db_pool = create_test_db().await;
    let repo = Arc::new(ScanResultRepositoryImpl::new(db_pool.clone()));
    let app = routes::app(repo.clone());
    let server = TestServer::new(app).expect("Failed to start test server");

    TestApp {
        server,
        db_pool,
        repo,
    }
}
