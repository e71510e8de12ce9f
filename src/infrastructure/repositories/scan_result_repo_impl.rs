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

use crate::domain::models::scan_result::{NewScanResult, ScanResult};
use crate::domain::repositories::scan_result_repository::{
    RepositoryError, ScanResultRepository,
};
use crate::infrastructure::database::entities::scan_result;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use tracing::debug;

/// 扫描结果仓库实现
#[derive(Clone)]
pub struct ScanResultRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ScanResultRepositoryImpl {
    /// 创建新的扫描结果仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ScanResultRepository for ScanResultRepositoryImpl {
    async fn create(&self, result: NewScanResult) -> Result<ScanResult, RepositoryError> {
        let model = scan_result::ActiveModel {
            id: NotSet,
            repository_name: Set(result.repository_name),
            status: Set(result.status.into()),
            created_at: Set(result.created_at),
            updated_at: Set(result.created_at),
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        debug!("Inserted results row {}", inserted.id);
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ScanResult>, RepositoryError> {
        let model = scan_result::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<ScanResult>, RepositoryError> {
        let models = scan_result::Entity::find()
            .order_by_asc(scan_result::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let res = scan_result::Entity::delete_many()
            .exec(self.db.as_ref())
            .await?;

        Ok(res.rows_affected)
    }
}

impl From<scan_result::Model> for ScanResult {
    fn from(model: scan_result::Model) -> Self {
        Self {
            id: model.id,
            repository_name: model.repository_name,
            status: model.status.into(),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
