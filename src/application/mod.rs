// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 负责请求DTO的定义与校验，以及编排获取、提取、过滤、导出的抓取用例
pub mod dto;
pub mod usecases;
