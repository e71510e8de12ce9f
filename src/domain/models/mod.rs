// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 扫描结果（scan_result）：一次仓库扫描的记录及其状态
pub mod scan_result;
