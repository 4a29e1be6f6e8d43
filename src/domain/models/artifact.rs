// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 抓取结果集合
///
/// 内联响应与JSON文件共用的 `{"results": [...]}` 结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResults {
    /// 按文档顺序排列的结果字符串
    pub results: Vec<String>,
}

/// 导出产物
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportedArtifact {
    /// 直接返回给调用方的结构化结果
    Inline(ScrapeResults),
    /// 以附件形式下载的文件
    File {
        /// 建议的文件名
        filename: &'static str,
        /// MIME类型
        content_type: &'static str,
        /// UTF-8编码的文件内容
        body: Vec<u8>,
    },
}
