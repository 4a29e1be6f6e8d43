// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::Selector;
use std::fmt;

use crate::utils::errors::ScrapeError;

/// 提取模式
///
/// 决定哪些HTML元素会成为结果条目
#[derive(Debug, Clone)]
pub enum ExtractionMode {
    /// 标题元素 h1-h6
    Titles,
    /// 段落元素 p
    Paragraphs,
    /// 带 href 的链接
    Links,
    /// 带 src 的图片
    Images,
    /// 自定义CSS选择器（已编译）
    Custom(Selector),
    /// 未识别的模式，提取结果始终为空
    Unknown(String),
}

impl ExtractionMode {
    /// 根据请求中的 `data_type` 和 `custom_selector` 构建提取模式
    ///
    /// `custom` 模式必须提供可解析的非空选择器，否则返回校验错误；
    /// 其他模式忽略选择器。未识别的模式不会报错。
    pub fn parse(
        data_type: Option<&str>,
        custom_selector: Option<&str>,
    ) -> Result<Self, ScrapeError> {
        let mode = match data_type.unwrap_or_default() {
            "titles" => Self::Titles,
            "paragraphs" => Self::Paragraphs,
            "links" => Self::Links,
            "images" => Self::Images,
            "custom" => {
                let raw = custom_selector.map(str::trim).unwrap_or_default();
                if raw.is_empty() {
                    return Err(ScrapeError::Validation(
                        "custom_selector is required when data_type is 'custom'".to_string(),
                    ));
                }
                let selector = Selector::parse(raw).map_err(|e| {
                    ScrapeError::Validation(format!("custom_selector '{}' is invalid: {}", raw, e))
                })?;
                Self::Custom(selector)
            }
            other => Self::Unknown(other.to_string()),
        };
        Ok(mode)
    }

    /// 模式名称
    pub fn as_str(&self) -> &str {
        match self {
            Self::Titles => "titles",
            Self::Paragraphs => "paragraphs",
            Self::Links => "links",
            Self::Images => "images",
            Self::Custom(_) => "custom",
            Self::Unknown(name) => name,
        }
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 直接返回JSON结果
    #[default]
    Inline,
    /// CSV附件
    Csv,
    /// JSON附件
    Json,
}

impl OutputFormat {
    /// 解析输出格式，未识别或缺省的值回退为 `Inline`
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("csv") => Self::Csv,
            Some("json") => Self::Json,
            _ => Self::Inline,
        }
    }
}

/// 抓取任务
///
/// 由请求DTO校验得到，生命周期仅限于单个请求
#[derive(Debug, Clone)]
pub struct ScrapeJob {
    /// 目标URL
    pub url: String,
    /// 子串过滤条件，空字符串表示不过滤
    pub query: String,
    /// 提取模式
    pub mode: ExtractionMode,
    /// 输出格式
    pub format: OutputFormat,
}
