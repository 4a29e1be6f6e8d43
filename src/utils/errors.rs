// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

use crate::engines::traits::EngineError;

/// 抓取流水线错误类型
///
/// 每个请求要么完整成功，要么以其中一种错误整体失败
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// 请求体不完整或字段无效
    #[error("{0}")]
    Validation(String),

    /// 获取目标页面失败（网络错误、超时或非2xx状态）
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] EngineError),

    /// 解析、提取或编码过程中的意外失败
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ScrapeError {
    /// 是否为调用方可修正的错误
    pub fn is_client_error(&self) -> bool {
        matches!(self, ScrapeError::Validation(_))
    }
}
