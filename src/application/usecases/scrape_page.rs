// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tracing::{debug, warn};
use validator::Validate;

use crate::application::dto::scrape_request::ScrapeRequestDto;
use crate::domain::models::artifact::ExportedArtifact;
use crate::domain::models::scrape_job::{ExtractionMode, OutputFormat, ScrapeJob};
use crate::domain::services::export_service::ExportService;
use crate::domain::services::extraction_service::ExtractionService;
use crate::domain::services::filter_service::FilterService;
use crate::engines::traits::FetchEngine;
use crate::utils::errors::ScrapeError;

// === Section: Use Case Definition ===

pub struct ScrapePageUseCase {
    engine: Arc<dyn FetchEngine>,
}

// === Section: Implementation ===

impl ScrapePageUseCase {
    pub fn new(engine: Arc<dyn FetchEngine>) -> Self {
        Self { engine }
    }

    /// 执行一次抓取
    ///
    /// 请求先被校验为 `ScrapeJob`，校验失败时不会发起任何网络请求。
    pub async fn execute(
        &self,
        request_dto: ScrapeRequestDto,
    ) -> Result<ExportedArtifact, ScrapeError> {
        let job = self.map_dto_to_job(request_dto)?;

        let response = self.engine.fetch(&job.url).await.map_err(|e| {
            warn!(url = %job.url, engine = self.engine.name(), "Fetch failed: {}", e);
            ScrapeError::from(e)
        })?;
        debug!(
            url = %job.url,
            status = response.status_code,
            content_type = %response.content_type,
            response_time_ms = response.response_time_ms,
            "Page fetched"
        );

        let results = ExtractionService::extract(&response.content, &job.mode)?;
        debug!(mode = %job.mode, count = results.len(), "Results extracted");

        let results = if job.query.is_empty() {
            results
        } else {
            let before = results.len();
            let filtered = FilterService::apply(results, &job.query);
            debug!(query = %job.query, before, after = filtered.len(), "Filter applied");
            filtered
        };

        ExportService::encode(results, job.format)
    }

    fn map_dto_to_job(&self, dto: ScrapeRequestDto) -> Result<ScrapeJob, ScrapeError> {
        dto.validate()
            .map_err(|errors| ScrapeError::Validation(errors.to_string()))?;

        let mode =
            ExtractionMode::parse(dto.data_type.as_deref(), dto.custom_selector.as_deref())?;
        let format = OutputFormat::parse(dto.output_format.as_deref());

        Ok(ScrapeJob {
            url: dto.url.unwrap_or_default(),
            query: dto.query.unwrap_or_default(),
            mode,
            format,
        })
    }
}
