// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::artifact::{ExportedArtifact, ScrapeResults};
use crate::domain::models::scrape_job::OutputFormat;
use crate::utils::errors::ScrapeError;

/// CSV表头
pub const CSV_HEADER: &str = "Resultado";
/// CSV附件文件名
pub const CSV_FILENAME: &str = "resultados.csv";
/// JSON附件文件名
pub const JSON_FILENAME: &str = "resultados.json";

/// 导出服务
///
/// 将结果列表编码为指定输出格式
pub struct ExportService;

impl ExportService {
    /// 编码结果
    ///
    /// # 参数
    ///
    /// * `results` - 已过滤的结果列表
    /// * `format` - 输出格式
    ///
    /// # 返回值
    ///
    /// * `Ok(ExportedArtifact)` - 内联结果或附件
    /// * `Err(ScrapeError::Internal)` - 序列化失败
    pub fn encode(
        results: Vec<String>,
        format: OutputFormat,
    ) -> Result<ExportedArtifact, ScrapeError> {
        match format {
            OutputFormat::Inline => Ok(ExportedArtifact::Inline(ScrapeResults { results })),
            OutputFormat::Csv => Ok(ExportedArtifact::File {
                filename: CSV_FILENAME,
                content_type: "text/csv",
                body: Self::to_csv(&results)?,
            }),
            OutputFormat::Json => Ok(ExportedArtifact::File {
                filename: JSON_FILENAME,
                content_type: "application/json",
                body: Self::to_json(ScrapeResults { results })?,
            }),
        }
    }

    fn to_csv(results: &[String]) -> Result<Vec<u8>, ScrapeError> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(Vec::new());

        writer
            .write_record([CSV_HEADER])
            .map_err(|e| ScrapeError::Internal(format!("CSV encoding failed: {}", e)))?;
        for item in results {
            writer
                .write_record([item.as_str()])
                .map_err(|e| ScrapeError::Internal(format!("CSV encoding failed: {}", e)))?;
        }

        writer
            .into_inner()
            .map_err(|e| ScrapeError::Internal(format!("CSV flush failed: {}", e)))
    }

    fn to_json(payload: ScrapeResults) -> Result<Vec<u8>, ScrapeError> {
        // serde_json's pretty printer indents with two spaces and leaves non-ASCII unescaped
        serde_json::to_vec_pretty(&payload)
            .map_err(|e| ScrapeError::Internal(format!("JSON encoding failed: {}", e)))
    }
}
