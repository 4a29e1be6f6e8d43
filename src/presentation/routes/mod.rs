// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::usecases::scrape_page::ScrapePageUseCase;
use crate::config::settings::StaticFilesSettings;
use crate::presentation::handlers::scrape_handler;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// 创建应用路由
///
/// 注册 `/scrape` 与 `/health`，其余路径回退到静态文件目录（启用时）。
///
/// # 参数
///
/// * `use_case` - 抓取用例
/// * `static_files` - 静态文件配置
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(use_case: Arc<ScrapePageUseCase>, static_files: &StaticFilesSettings) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/scrape", post(scrape_handler::scrape));

    let app = if static_files.enabled {
        api_routes.fallback_service(ServeDir::new(&static_files.dir))
    } else {
        api_routes
    };

    app.layer(Extension(use_case))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}
