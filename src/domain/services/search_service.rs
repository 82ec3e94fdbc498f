// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::{Duration, Instant};

use metrics::{counter, histogram};
use tracing::{debug, warn};

use crate::config::settings::SearchSettings;
use crate::domain::models::blog::Blog;
use crate::domain::models::search_result::SearchResult;
use crate::domain::search::index::{IndexError, SearchError, SearchIndex};
use crate::domain::search::merger::ResultMerger;
use crate::utils::retry_policy::RetryPolicy;

/// 多索引搜索服务
///
/// 先查询标题索引，结果不足 `limit` 时再查询正文索引，
/// 按文章ID去重后截断到 `limit`。标题命中总是排在仅正文命中之前。
///
/// 两次查询顺序执行，每次调用之间不共享任何可变状态。
/// 任一索引查询失败（含超时）都会使整个调用失败，不返回部分结果。
pub struct SearchService {
    title_index: Arc<dyn SearchIndex>,
    content_index: Arc<dyn SearchIndex>,
    timeout: Duration,
    max_limit: i64,
    retry_policy: RetryPolicy,
}

impl SearchService {
    pub fn new(
        title_index: Arc<dyn SearchIndex>,
        content_index: Arc<dyn SearchIndex>,
        timeout_ms: u64,
    ) -> Self {
        Self {
            title_index,
            content_index,
            timeout: Duration::from_millis(timeout_ms),
            max_limit: i64::MAX,
            retry_policy: RetryPolicy::none(),
        }
    }

    /// 根据搜索配置创建服务
    pub fn from_settings(
        title_index: Arc<dyn SearchIndex>,
        content_index: Arc<dyn SearchIndex>,
        settings: &SearchSettings,
    ) -> Self {
        Self::new(title_index, content_index, settings.query_timeout_ms)
            .with_max_limit(settings.max_limit)
            .with_retry_policy(RetryPolicy::with_max_retries(settings.max_retries))
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
        self.retry_policy = retry_policy;
        self
    }

    pub fn with_max_limit(mut self, max_limit: i64) -> Self {
        self.max_limit = max_limit;
        self
    }

    /// 执行搜索
    ///
    /// # 参数
    ///
    /// * `term` - 搜索词，首尾空白会被去除
    /// * `limit` - 最大结果数，必须为正数且不超过配置上限
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<SearchResult>)` - 无重复ID、长度不超过 `limit` 的结果
    /// * `Err(SearchError::InvalidArgument)` - 参数非法，未查询任何索引
    /// * `Err(SearchError::Unavailable)` - 某个索引查询失败或超时
    pub async fn search(&self, term: &str, limit: i64) -> Result<Vec<SearchResult>, SearchError> {
        let limit = self.validate_limit(limit)?;
        let term = term.trim();
        if term.is_empty() {
            return Err(SearchError::InvalidArgument(
                "term must not be empty".to_string(),
            ));
        }

        counter!("blog_search_requests_total").increment(1);
        let mut merger = ResultMerger::new(limit);

        let title_matches = self.query_index(self.title_index.as_ref(), term, limit).await?;
        merger.absorb(title_matches);

        if merger.is_full() {
            debug!(
                "Index {} filled limit {}; {} not queried",
                self.title_index.name(),
                limit,
                self.content_index.name()
            );
        } else {
            let content_matches = self
                .query_index(self.content_index.as_ref(), term, limit)
                .await?;
            merger.absorb(content_matches);
        }

        debug!(
            "Search returned {} results ({} duplicates skipped)",
            merger.len(),
            merger.duplicates()
        );
        histogram!("blog_search_results").record(merger.len() as f64);

        Ok(merger.into_results())
    }

    fn validate_limit(&self, limit: i64) -> Result<usize, SearchError> {
        if limit <= 0 {
            return Err(SearchError::InvalidArgument(format!(
                "limit must be positive, got {}",
                limit
            )));
        }
        if limit > self.max_limit {
            return Err(SearchError::InvalidArgument(format!(
                "limit must not exceed {}, got {}",
                self.max_limit, limit
            )));
        }
        usize::try_from(limit).map_err(|_| {
            SearchError::InvalidArgument(format!("limit {} is out of range", limit))
        })
    }

    /// 在超时与重试预算内查询单个索引
    async fn query_index(
        &self,
        index: &dyn SearchIndex,
        term: &str,
        limit: usize,
    ) -> Result<Vec<Blog>, SearchError> {
        let index_name = index.name();
        let mut retries = 0;

        loop {
            counter!("blog_search_index_queries_total", "index" => index_name).increment(1);
            let started = Instant::now();

            let error = match tokio::time::timeout(self.timeout, index.query(term, limit)).await {
                Ok(Ok(docs)) => {
                    debug!(
                        "Index {} returned {} matches in {:?}",
                        index_name,
                        docs.len(),
                        started.elapsed()
                    );
                    return Ok(docs);
                }
                Ok(Err(e)) => e,
                Err(_) => IndexError::Timeout,
            };

            counter!("blog_search_index_failures_total", "index" => index_name).increment(1);

            if !self.retry_policy.should_retry(retries) {
                warn!(
                    "Index {} failed after {} retries: {}",
                    index_name, retries, error
                );
                return Err(SearchError::Unavailable {
                    index: index_name,
                    reason: error.to_string(),
                });
            }

            retries += 1;
            let backoff = self.retry_policy.calculate_backoff(retries);
            warn!(
                "Index {} failed: {}; retry {} in {:?}",
                index_name, error, retries, backoff
            );
            tokio::time::sleep(backoff).await;
        }
    }
}
