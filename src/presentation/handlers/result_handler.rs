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

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::{
    application::use_cases::scan_result_use_case::ScanResultUseCase,
    domain::{
        models::scan_result::ScanResult,
        repositories::scan_result_repository::ScanResultRepository,
    },
    presentation::errors::AppError,
};

/// 列出全部扫描结果
pub async fn list_results<R>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<Json<Vec<ScanResult>>, AppError>
where
    R: ScanResultRepository + 'static,
{
    let use_case = ScanResultUseCase::new(repo);
    let results = use_case.list_results().await?;
    Ok(Json(results))
}

/// 创建新的扫描结果
///
/// 请求体可以是任意JSON，`repoName` 字段的校验由用例完成。
pub async fn create_result<R>(
    Extension(repo): Extension<Arc<R>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ScanResult>), AppError>
where
    R: ScanResultRepository + 'static,
{
    let Json(payload) = payload?;
    let use_case = ScanResultUseCase::new(repo);
    let result = use_case.create_result(&payload).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

/// 获取扫描结果详情
pub async fn get_result<R>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i32>,
) -> Result<Json<ScanResult>, AppError>
where
    R: ScanResultRepository + 'static,
{
    let use_case = ScanResultUseCase::new(repo);
    let result = use_case.get_result(id).await?;
    Ok(Json(result))
}
