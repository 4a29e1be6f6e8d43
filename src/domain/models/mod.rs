// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 抓取任务（scrape_job）：经过校验的一次抓取请求
/// - 导出产物（artifact）：内联结果或可下载文件
pub mod artifact;
pub mod scrape_job;
