// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

/// 请求体中承载仓库名称的字段
pub const REPOSITORY_NAME_FIELD: &str = "repoName";

/// 标签匹配：任何 `<...>` 片段
static MARKUP_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("markup tag pattern is valid"));

/// 验证错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 字段存在但不是字符串
    #[error("validation failed: {field} must be a string")]
    NotAString { field: &'static str },
    /// 字段缺失、为空或仅含空白
    #[error("validation failed: {field} cannot be empty")]
    Blank { field: &'static str },
}

/// 从请求负载中提取并清洗仓库名称
///
/// 依次执行：定位 `repoName` 字段、检查类型、去除首尾空白、
/// 移除标签、再次去除空白。标签内的文本会被保留。
///
/// # 参数
///
/// * `payload` - 任意形状的JSON请求体
///
/// # 返回值
///
/// * `Ok(String)` - 清洗后的非空名称
/// * `Err(ValidationError)` - 名称缺失、为空或不是字符串
pub fn validate_repository_name(payload: &Value) -> Result<String, ValidationError> {
    let field = REPOSITORY_NAME_FIELD;

    let raw = match payload.get(field) {
        None => return Err(ValidationError::Blank { field }),
        Some(Value::String(raw)) => raw,
        Some(_) => return Err(ValidationError::NotAString { field }),
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Blank { field });
    }

    let cleaned = strip_markup(trimmed);
    if cleaned.is_empty() {
        return Err(ValidationError::Blank { field });
    }

    Ok(cleaned)
}

/// 移除文本中的标签片段并去除首尾空白
pub fn strip_markup(text: &str) -> String {
    MARKUP_TAG.replace_all(text, "").trim().to_string()
}
