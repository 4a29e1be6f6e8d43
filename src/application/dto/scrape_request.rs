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

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 抓取请求数据传输对象
///
/// 所有字段在传输层均可缺省或为 `null`，由用例统一校验
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct ScrapeRequestDto {
    /// 要抓取的网页URL
    #[validate(
        required(message = "url is required"),
        length(min = 1, message = "url is required")
    )]
    pub url: Option<String>,
    /// 子串过滤条件
    pub query: Option<String>,
    /// 提取模式 (titles, paragraphs, links, images, custom)
    pub data_type: Option<String>,
    /// 自定义CSS选择器，仅在 custom 模式下使用
    pub custom_selector: Option<String>,
    /// 输出格式 (inline, csv, json)
    pub output_format: Option<String>,
}
