// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use scan_results::config::settings::Settings;
use scan_results::infrastructure::database::connection;
use scan_results::infrastructure::metrics;
use scan_results::infrastructure::repositories::scan_result_repo_impl::ScanResultRepositoryImpl;
use scan_results::presentation::routes;
use scan_results::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging
    telemetry::init_telemetry(settings.logging.json);
    info!("Starting scan-results...");
    info!("Configuration loaded");

    // 3. Metrics exporter
    metrics::init_metrics(&settings.metrics)?;

    // 4. Connect to database and apply migrations
    let db = connection::connect_and_migrate(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // 5. Start HTTP server
    let repo = Arc::new(ScanResultRepositoryImpl::new(db));
    let app = routes::app(repo);

    let addr = settings.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
