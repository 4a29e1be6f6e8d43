// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::{ElementRef, Html, Selector};

use crate::domain::models::scrape_job::ExtractionMode;
use crate::utils::errors::ScrapeError;

const TITLE_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";
const PARAGRAPH_SELECTOR: &str = "p";
const LINK_SELECTOR: &str = "a[href]";
const IMAGE_SELECTOR: &str = "img[src]";

/// 提取服务
///
/// 负责从 HTML 内容中按提取模式生成有序的结果字符串
pub struct ExtractionService;

impl ExtractionService {
    /// 提取数据
    ///
    /// 文档只解析一次，结果保持文档顺序，不去重。
    /// 标题、段落和自定义模式会丢弃文本为空的元素；链接和图片始终产生条目。
    ///
    /// # 参数
    ///
    /// * `html_content` - 原始HTML文本
    /// * `mode` - 提取模式
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<String>)` - 提取结果，未识别的模式返回空列表
    /// * `Err(ScrapeError)` - 内置选择器编译失败
    pub fn extract(html_content: &str, mode: &ExtractionMode) -> Result<Vec<String>, ScrapeError> {
        let document = Html::parse_document(html_content);

        let results = match mode {
            ExtractionMode::Titles => Self::texts(&document, &Self::selector(TITLE_SELECTOR)?),
            ExtractionMode::Paragraphs => {
                Self::texts(&document, &Self::selector(PARAGRAPH_SELECTOR)?)
            }
            ExtractionMode::Links => document
                .select(&Self::selector(LINK_SELECTOR)?)
                .filter_map(|element| {
                    let href = element.value().attr("href")?;
                    let text = Self::element_text(&element);
                    Some(if text.is_empty() {
                        href.to_string()
                    } else {
                        format!("{} ({})", text, href)
                    })
                })
                .collect(),
            ExtractionMode::Images => document
                .select(&Self::selector(IMAGE_SELECTOR)?)
                .filter_map(|element| {
                    let src = element.value().attr("src")?;
                    let alt = element.value().attr("alt").unwrap_or_default();
                    Some(if alt.is_empty() {
                        src.to_string()
                    } else {
                        format!("{} ({})", alt, src)
                    })
                })
                .collect(),
            ExtractionMode::Custom(selector) => Self::texts(&document, selector),
            // Unrecognized modes yield nothing instead of failing the request
            ExtractionMode::Unknown(_) => Vec::new(),
        };

        Ok(results)
    }

    /// 元素的可见文本
    ///
    /// 每个文本节点去除首尾空白，丢弃空片段后直接拼接
    pub fn element_text(element: &ElementRef<'_>) -> String {
        element
            .text()
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .collect()
    }

    fn texts(document: &Html, selector: &Selector) -> Vec<String> {
        document
            .select(selector)
            .map(|element| Self::element_text(&element))
            .filter(|text| !text.is_empty())
            .collect()
    }

    fn selector(css: &str) -> Result<Selector, ScrapeError> {
        Selector::parse(css).map_err(|e| {
            ScrapeError::Internal(format!("built-in selector '{}' failed to parse: {}", css, e))
        })
    }
}

#[cfg(test)]
#[path = "extraction_service_test.rs"]
mod tests;
