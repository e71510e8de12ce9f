// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 扫描结果实体
///
/// 表示一次仓库扫描的结果记录。`id` 由存储层在创建时分配，
/// 之后不可变；`repository_name` 总是经过清洗的非空字符串。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    /// 结果唯一标识符，由数据库自增生成
    pub id: i32,
    /// 被扫描的仓库名称
    pub repository_name: String,
    /// 扫描状态
    pub status: ScanStatus,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
    /// 更新时间
    pub updated_at: DateTime<FixedOffset>,
}

/// 待持久化的扫描结果
///
/// 尚未分配 `id` 的扫描结果，由创建用例构造后交给仓库保存。
#[derive(Debug, Clone, PartialEq)]
pub struct NewScanResult {
    /// 已清洗的仓库名称
    pub repository_name: String,
    /// 初始状态
    pub status: ScanStatus,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
}

impl NewScanResult {
    /// 创建一个处于 `pending` 状态的新扫描结果
    ///
    /// # 参数
    ///
    /// * `repository_name` - 已清洗的仓库名称
    pub fn pending(repository_name: String) -> Self {
        Self {
            repository_name,
            status: ScanStatus::Pending,
            created_at: Utc::now().into(),
        }
    }
}

/// 扫描状态枚举
///
/// 状态转换遵循以下流程：
/// Pending → InProgress → Success/Failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScanStatus {
    /// 待处理，扫描已登记但尚未开始
    #[default]
    Pending,
    /// 扫描中
    InProgress,
    /// 扫描成功
    Success,
    /// 扫描失败
    Failure,
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScanStatus::Pending => write!(f, "pending"),
            ScanStatus::InProgress => write!(f, "in_progress"),
            ScanStatus::Success => write!(f, "success"),
            ScanStatus::Failure => write!(f, "failure"),
        }
    }
}

impl FromStr for ScanStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ScanStatus::Pending),
            "in_progress" => Ok(ScanStatus::InProgress),
            "success" => Ok(ScanStatus::Success),
            "failure" => Ok(ScanStatus::Failure),
            _ => Err(()),
        }
    }
}
