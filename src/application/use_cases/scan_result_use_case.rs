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

use crate::domain::{
    models::scan_result::{NewScanResult, ScanResult},
    repositories::scan_result_repository::{RepositoryError, ScanResultRepository},
    services::repository_name_validator::{validate_repository_name, ValidationError},
};
use crate::infrastructure::metrics::SCAN_RESULTS_CREATED;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ScanResultUseCaseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Result {0} not found")]
    NotFound(i32),
}

pub struct ScanResultUseCase<R> {
    repo: Arc<R>,
}

impl<R> ScanResultUseCase<R>
where
    R: ScanResultRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list_results(&self) -> Result<Vec<ScanResult>, ScanResultUseCaseError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn create_result(&self, payload: &Value) -> Result<ScanResult, ScanResultUseCaseError> {
        // Rejected payloads never reach the repository
        let repository_name = validate_repository_name(payload).map_err(|e| {
            warn!("Rejected scan result payload: {}", e);
            e
        })?;

        let created = self
            .repo
            .create(NewScanResult::pending(repository_name))
            .await?;

        metrics::counter!(SCAN_RESULTS_CREATED).increment(1);
        info!(
            "Created scan result {} for repository '{}'",
            created.id, created.repository_name
        );

        Ok(created)
    }

    pub async fn get_result(&self, id: i32) -> Result<ScanResult, ScanResultUseCaseError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ScanResultUseCaseError::NotFound(id))
    }
}
