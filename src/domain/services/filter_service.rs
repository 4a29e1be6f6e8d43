// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 过滤服务
pub struct FilterService;

impl FilterService {
    /// 按子串过滤结果
    ///
    /// 查询为空时原样返回；否则保留小写形式包含小写查询串的条目，顺序不变。
    pub fn apply(results: Vec<String>, query: &str) -> Vec<String> {
        if query.is_empty() {
            return results;
        }

        let needle = query.to_lowercase();
        results
            .into_iter()
            .filter(|entry| entry.to_lowercase().contains(&needle))
            .collect()
    }
}
