// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::search_query::SearchQuery;
use crate::domain::parsers::{self, SiteSchema};
use crate::domain::services::aggregator::Aggregator;
use crate::engines::traits::PageFetcher;
use crate::utils::errors::WorkerError;
use metrics::{counter, histogram};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// 搜索工作器
///
/// 一个搜索查询对应一次 抓取 → 解析 → 写入汇总器。
/// 抓取失败时不写入任何内容，该键在报告中缺席。
#[derive(Clone)]
pub struct SearchWorker {
    fetcher: Arc<dyn PageFetcher>,
    schema: SiteSchema,
    aggregator: Arc<Aggregator>,
}

impl SearchWorker {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        schema: SiteSchema,
        aggregator: Arc<Aggregator>,
    ) -> Self {
        Self {
            fetcher,
            schema,
            aggregator,
        }
    }

    /// 执行一个搜索
    ///
    /// # 返回值
    ///
    /// * `Ok(usize)` - 写入的记录数（含空记录）
    /// * `Err(WorkerError)` - 抓取失败
    pub async fn run(&self, query: &SearchQuery) -> Result<usize, WorkerError> {
        info!(key = %query.key, fetcher = self.fetcher.name(), "Fetching {}", query.url);
        counter!("jobdigest_fetch_total").increment(1);

        let start = Instant::now();
        let markup = match self.fetcher.fetch(&query.url).await {
            Ok(markup) => markup,
            Err(e) => {
                warn!(key = %query.key, "Fetch failed for {}: {}", query.url, e);
                counter!("jobdigest_fetch_failed_total").increment(1);
                return Err(e.into());
            }
        };
        histogram!("jobdigest_fetch_duration_seconds").record(start.elapsed().as_secs_f64());

        let records = parsers::parse(&markup, &self.schema);
        let count = records.len();
        let jobs = records.iter().filter(|record| !record.is_empty()).count();

        // Lock is taken only for the insert
        self.aggregator.put(query.key.clone(), records);

        info!(
            key = %query.key,
            records = count,
            jobs = jobs,
            "Search completed"
        );
        Ok(count)
    }
}
