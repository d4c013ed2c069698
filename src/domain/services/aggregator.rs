// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_record::JobRecord;
use crate::domain::models::report::{AggregateReport, SearchResult};
use crate::domain::models::search_query::SearchQuery;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// 结果汇总器
///
/// 持有分组键到职位记录序列的映射，供每个搜索任务并发写入。
/// 锁只在插入期间持有，抓取和解析都在锁外完成。
#[derive(Debug, Default)]
pub struct Aggregator {
    results: Mutex<HashMap<String, Vec<JobRecord>>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入某个键的结果
    ///
    /// 同一个键重复写入时后写入者覆盖先写入者
    pub fn put(&self, key: impl Into<String>, records: Vec<JobRecord>) {
        let key = key.into();
        let count = records.len();
        let replaced = self.results.lock().insert(key.clone(), records).is_some();
        if replaced {
            debug!(key = %key, "Search key written twice, previous results overwritten");
        }
        debug!(key = %key, records = count, "Search results stored");
    }

    pub fn len(&self) -> usize {
        self.results.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.lock().is_empty()
    }

    /// 生成只读快照
    ///
    /// 必须在所有写入任务都已 join 之后调用。条目按 `queries` 的顺序排列，
    /// 同一个键只出现在第一次出现的位置；从未写入的键（抓取失败）不出现在快照中。
    pub fn snapshot(&self, queries: &[SearchQuery]) -> AggregateReport {
        let guard = self.results.lock();
        let mut seen = HashSet::new();

        let results = queries
            .iter()
            .filter(|query| seen.insert(query.key.as_str()))
            .filter_map(|query| {
                guard
                    .get(&query.key)
                    .map(|records| SearchResult::new(query.key.clone(), records.clone()))
            })
            .collect();

        AggregateReport::new(results)
    }
}
