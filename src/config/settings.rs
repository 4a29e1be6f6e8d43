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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 默认的抓取标识 User-Agent
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; SunaBot/1.0)";

/// 应用程序配置设置
///
/// 包含服务器、获取引擎和静态文件等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 获取引擎配置
    pub fetcher: FetcherSettings,
    /// 静态文件配置
    pub static_files: StaticFilesSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 获取引擎配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherSettings {
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
    /// 发送给目标站点的 User-Agent
    pub user_agent: String,
}

impl FetcherSettings {
    /// 超时时间
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetcherSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// 静态文件配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesSettings {
    /// 是否提供静态文件（前端页面）
    pub enabled: bool,
    /// 静态文件根目录
    pub dir: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、配置文件和环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            // Default fetcher settings
            .set_default("fetcher.timeout_secs", 15)?
            .set_default("fetcher.user_agent", DEFAULT_USER_AGENT)?
            // Default static file settings
            .set_default("static_files.enabled", true)?
            .set_default("static_files.dir", ".")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("PAGESCRAPE")
                    .prefix_separator("_")
                    .separator("__"),
            );

        builder.build()?.try_deserialize()
    }

    /// 服务器监听地址
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
