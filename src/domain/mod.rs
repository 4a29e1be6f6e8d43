// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：抓取任务、提取模式和输出格式
/// - 服务（services）：提取、过滤和导出服务
///
/// 领域层不依赖网络或HTTP框架，只处理已获取的HTML文本。
pub mod models;
pub mod services;
