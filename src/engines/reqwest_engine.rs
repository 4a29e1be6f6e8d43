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

use crate::config::settings::FetcherSettings;
use crate::engines::traits::{EngineError, FetchEngine, FetchResponse};
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// 获取引擎
///
/// 基于reqwest实现的基本HTTP获取引擎，客户端在创建时构建一次并在请求间复用
pub struct ReqwestEngine {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestEngine {
    /// 创建获取引擎
    ///
    /// # 参数
    ///
    /// * `settings` - 获取引擎配置（User-Agent 和超时）
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestEngine)` - 构建成功
    /// * `Err(EngineError)` - HTTP客户端构建失败
    pub fn new(settings: &FetcherSettings) -> Result<Self, EngineError> {
        let timeout = settings.timeout();
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(timeout)
            .build()?;

        Ok(Self { client, timeout })
    }

    fn map_send_error(&self, err: reqwest::Error) -> EngineError {
        if err.is_timeout() {
            EngineError::Timeout(self.timeout)
        } else {
            EngineError::RequestFailed(err)
        }
    }
}

#[async_trait]
impl FetchEngine for ReqwestEngine {
    /// 执行HTTP获取
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchResponse)` - 2xx响应及其文本内容
    /// * `Err(EngineError)` - 传输错误、超时或非2xx状态
    async fn fetch(&self, url: &str) -> Result<FetchResponse, EngineError> {
        let parsed = Url::parse(url).map_err(|e| EngineError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let start = Instant::now();
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::HttpStatus(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.trim().is_empty())
            .unwrap_or("text/html")
            .to_string();

        let content = response.text().await.map_err(|e| self.map_send_error(e))?;
        let response_time_ms = start.elapsed().as_millis() as u64;

        debug!(
            url = url,
            status = status.as_u16(),
            bytes = content.len(),
            response_time_ms,
            "Fetched page"
        );

        Ok(FetchResponse {
            status_code: status.as_u16(),
            content,
            content_type,
            response_time_ms,
        })
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
