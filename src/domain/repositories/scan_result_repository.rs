// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scan_result::{NewScanResult, ScanResult};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 扫描结果仓库特质
///
/// 定义扫描结果数据访问接口
#[async_trait]
pub trait ScanResultRepository: Send + Sync {
    /// 保存新的扫描结果，返回带有生成ID的实体
    async fn create(&self, result: NewScanResult) -> Result<ScanResult, RepositoryError>;
    /// 根据ID查找扫描结果
    async fn find_by_id(&self, id: i32) -> Result<Option<ScanResult>, RepositoryError>;
    /// 查询全部扫描结果，按ID升序
    async fn find_all(&self) -> Result<Vec<ScanResult>, RepositoryError>;
    /// 删除全部扫描结果，返回删除的行数
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
}
