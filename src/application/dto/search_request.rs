// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_result::SearchResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct SearchQueryDto {
    pub term: String,
    // Falls back to search.default_limit
    pub limit: Option<i64>,
}

impl SearchQueryDto {
    /// 检查搜索词长度（按字符计算，忽略首尾空白）
    pub fn validate_term(&self, min_term_length: u64) -> Result<(), String> {
        let length = self.term.trim().chars().count() as u64;
        if length < min_term_length {
            return Err(format!(
                "Search term must be at least {} characters long",
                min_term_length
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponseDto {
    pub term: String,
    pub results: Vec<SearchResult>,
}
