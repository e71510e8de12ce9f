// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scan_result::ScanStatus;
use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum SeaScanStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    #[sea_orm(string_value = "success")]
    Success,
    #[sea_orm(string_value = "failure")]
    Failure,
}

impl From<ScanStatus> for SeaScanStatus {
    fn from(status: ScanStatus) -> Self {
        match status {
            ScanStatus::Pending => SeaScanStatus::Pending,
            ScanStatus::InProgress => SeaScanStatus::InProgress,
            ScanStatus::Success => SeaScanStatus::Success,
            ScanStatus::Failure => SeaScanStatus::Failure,
        }
    }
}

impl From<SeaScanStatus> for ScanStatus {
    fn from(status: SeaScanStatus) -> Self {
        match status {
            SeaScanStatus::Pending => ScanStatus::Pending,
            SeaScanStatus::InProgress => ScanStatus::InProgress,
            SeaScanStatus::Success => ScanStatus::Success,
            SeaScanStatus::Failure => ScanStatus::Failure,
        }
    }
}
