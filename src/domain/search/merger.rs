// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashSet;
use uuid::Uuid;

use crate::domain::models::blog::Blog;
use crate::domain::models::search_result::SearchResult;

/// 结果合并器
///
/// 按到达顺序吸收多个索引的有序结果，基于文章ID去重，
/// 并在达到上限后停止接收。先吸收的索引天然具有更高优先级。
#[derive(Debug)]
pub struct ResultMerger {
    limit: usize,
    seen: HashSet<Uuid>,
    results: Vec<SearchResult>,
    duplicates: usize,
}

impl ResultMerger {
    /// 创建新的合并器
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            seen: HashSet::with_capacity(limit),
            results: Vec::with_capacity(limit),
            duplicates: 0,
        }
    }

    /// 是否已达到结果上限
    pub fn is_full(&self) -> bool {
        self.results.len() >= self.limit
    }

    /// 吸收一个索引的有序结果
    ///
    /// 已出现过的ID被跳过；达到上限后立即停止，剩余结果被丢弃
    pub fn absorb(&mut self, docs: Vec<Blog>) {
        for doc in docs {
            if self.is_full() {
                break;
            }
            if !self.seen.insert(doc.id) {
                self.duplicates += 1;
                continue;
            }
            self.results.push(SearchResult::from(doc));
        }
    }

    /// 被跳过的重复结果数量
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// 消费合并器并返回最终结果
    pub fn into_results(self) -> Vec<SearchResult> {
        self.results
    }
}
