// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 抓取流水线中不涉及网络的三个阶段：
/// - 提取服务（extraction_service）：按提取模式从HTML中生成结果列表
/// - 过滤服务（filter_service）：按子串条件过滤结果
/// - 导出服务（export_service）：将结果编码为内联、CSV或JSON格式
pub mod export_service;
pub mod extraction_service;
pub mod filter_service;
