// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_record::JobRecord;

/// 单个搜索的结果：分组键及按页面顺序排列的职位记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub key: String,
    pub records: Vec<JobRecord>,
}

impl SearchResult {
    pub fn new(key: impl Into<String>, records: Vec<JobRecord>) -> Self {
        Self {
            key: key.into(),
            records,
        }
    }

    /// 结果是否恰好为一条占位记录（页面中没有结果容器）
    pub fn is_placeholder_only(&self) -> bool {
        matches!(self.records.as_slice(), [only] if only.is_empty())
    }
}

/// 汇总报告
///
/// 一次运行中所有搜索结果的只读快照。条目顺序与配置的查询顺序一致，
/// 与并发任务的完成顺序无关。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateReport {
    results: Vec<SearchResult>,
}

impl AggregateReport {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self { results }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchResult> {
        self.results.iter()
    }

    pub fn get(&self, key: &str) -> Option<&SearchResult> {
        self.results.iter().find(|result| result.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|result| result.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
