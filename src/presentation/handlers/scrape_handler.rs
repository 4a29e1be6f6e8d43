// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    extract::{rejection::JsonRejection, Extension, Json},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::info;

use crate::{
    application::{dto::scrape_request::ScrapeRequestDto, usecases::scrape_page::ScrapePageUseCase},
    domain::models::artifact::ExportedArtifact,
    presentation::errors::AppError,
    utils::errors::ScrapeError,
};

/// 抓取端点 `POST /scrape`
///
/// 请求体解析失败（缺失、非JSON、字段类型错误）一律视为校验错误
pub async fn scrape(
    Extension(use_case): Extension<Arc<ScrapePageUseCase>>,
    payload: Result<Json<ScrapeRequestDto>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        ScrapeError::Validation(format!("Invalid JSON body: {}", rejection.body_text()))
    })?;

    info!(
        url = payload.url.as_deref().unwrap_or_default(),
        data_type = payload.data_type.as_deref().unwrap_or_default(),
        output_format = payload.output_format.as_deref().unwrap_or_default(),
        "Scrape requested"
    );

    let artifact = use_case.execute(payload).await?;
    Ok(artifact_response(artifact))
}

/// 将导出产物转换为HTTP响应
///
/// 内联结果直接返回JSON，文件以附件形式下载
pub fn artifact_response(artifact: ExportedArtifact) -> Response {
    match artifact {
        ExportedArtifact::Inline(results) => (StatusCode::OK, Json(results)).into_response(),
        ExportedArtifact::File {
            filename,
            content_type,
            body,
        } => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, content_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", filename),
                ),
            ],
            body,
        )
            .into_response(),
    }
}
