// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// 创建的扫描结果计数器名称
pub const SCAN_RESULTS_CREATED: &str = "scan_results_created_total";

/// 按配置启动Prometheus导出器
///
/// 未启用时不安装任何recorder，`metrics` 宏调用为空操作。
pub fn init_metrics(settings: &MetricsSettings) -> anyhow::Result<()> {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return Ok(());
    }

    let addr: SocketAddr = settings.listen_addr.parse()?;

    // Address already in use is not fatal for the API itself
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}", e);
        return Ok(());
    }

    metrics::describe_counter!(SCAN_RESULTS_CREATED, "Number of scan results created");
    info!("Metrics exporter listening on {}", addr);
    Ok(())
}
