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

use pagescrape::application::usecases::scrape_page::ScrapePageUseCase;
use pagescrape::config::settings::Settings;
use pagescrape::engines::reqwest_engine::ReqwestEngine;
use pagescrape::engines::traits::FetchEngine;
use pagescrape::presentation::routes;
use pagescrape::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting pagescrape...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Initialize fetch engine and use case
    let engine: Arc<dyn FetchEngine> = Arc::new(ReqwestEngine::new(&settings.fetcher)?);
    info!(
        engine = engine.name(),
        timeout_secs = settings.fetcher.timeout_secs,
        "Fetch engine initialized"
    );
    let use_case = Arc::new(ScrapePageUseCase::new(engine));

    // 4. Start HTTP server
    let app = routes::routes(use_case, &settings.static_files);
    if settings.static_files.enabled {
        info!("Serving static files from {}", settings.static_files.dir);
    }

    let addr = settings.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
