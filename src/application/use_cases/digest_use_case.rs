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

use crate::domain::models::report::AggregateReport;
use crate::domain::models::search_query::SearchQuery;
use crate::domain::parsers::SiteSchema;
use crate::domain::services::aggregator::Aggregator;
use crate::domain::services::report_renderer::ReportRenderer;
use crate::engines::traits::PageFetcher;
use crate::infrastructure::notifier::Notifier;
use crate::utils::errors::{DigestError, WorkerError};
use crate::workers::search_worker::SearchWorker;
use chrono::NaiveDate;
use futures::future::join_all;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info};

/// 运行状态
///
/// Idle → Dispatching → AwaitingAll → Rendering → Notifying → Done，
/// 投递失败或全部搜索失败时进入 Failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestState {
    Idle,
    Dispatching,
    AwaitingAll,
    Rendering,
    Notifying,
    Done,
    Failed,
}

impl fmt::Display for DigestState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DigestState::Idle => write!(f, "idle"),
            DigestState::Dispatching => write!(f, "dispatching"),
            DigestState::AwaitingAll => write!(f, "awaiting_all"),
            DigestState::Rendering => write!(f, "rendering"),
            DigestState::Notifying => write!(f, "notifying"),
            DigestState::Done => write!(f, "done"),
            DigestState::Failed => write!(f, "failed"),
        }
    }
}

/// 一次运行的结果
#[derive(Debug, Clone)]
pub struct DigestOutcome {
    /// 汇总快照
    pub report: AggregateReport,
    /// 已投递的报告文本
    pub text: String,
    /// 成功的搜索键（按查询顺序）
    pub succeeded: Vec<String>,
    /// 失败的搜索键（按查询顺序）
    pub failed: Vec<String>,
}

/// 职位摘要用例
///
/// 为每个搜索并发执行 抓取 → 解析 → 汇总，全部结束后渲染报告并投递
pub struct DigestUseCase {
    fetcher: Arc<dyn PageFetcher>,
    notifier: Arc<dyn Notifier>,
    schema: SiteSchema,
    renderer: ReportRenderer,
    subject: String,
}

impl DigestUseCase {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        notifier: Arc<dyn Notifier>,
        schema: SiteSchema,
        renderer: ReportRenderer,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            notifier,
            schema,
            renderer,
            subject: subject.into(),
        }
    }

    fn transition(state: &mut DigestState, next: DigestState) {
        info!(from = %state, to = %next, "Digest state changed");
        *state = next;
    }

    /// 执行一次完整运行
    ///
    /// # 参数
    ///
    /// * `queries` - 按配置顺序排列的搜索
    /// * `as_of` - 报告日期
    ///
    /// # 返回值
    ///
    /// * `Ok(DigestOutcome)` - 至少一个搜索成功且报告已投递
    /// * `Err(DigestError)` - 投递失败，或全部搜索失败（此时报告仍会被投递）
    pub async fn run(
        &self,
        queries: &[SearchQuery],
        as_of: NaiveDate,
    ) -> Result<DigestOutcome, DigestError> {
        if queries.is_empty() {
            return Err(DigestError::NoQueries);
        }

        let mut state = DigestState::Idle;
        let aggregator = Arc::new(Aggregator::new());
        let worker = SearchWorker::new(
            self.fetcher.clone(),
            self.schema.clone(),
            aggregator.clone(),
        );

        Self::transition(&mut state, DigestState::Dispatching);
        let handles: Vec<_> = queries
            .iter()
            .cloned()
            .map(|query| {
                let worker = worker.clone();
                tokio::spawn(async move { worker.run(&query).await })
            })
            .collect();
        info!("Dispatched {} searches", handles.len());

        Self::transition(&mut state, DigestState::AwaitingAll);
        let mut succeeded = Vec::new();
        let mut failed = Vec::new();
        for (query, joined) in queries.iter().zip(join_all(handles).await) {
            let result = joined.map_err(|e| WorkerError::Join(e.to_string())).and_then(|r| r);
            match result {
                Ok(_) => succeeded.push(query.key.clone()),
                Err(e) => {
                    error!(key = %query.key, "Search failed: {}", e);
                    failed.push(query.key.clone());
                }
            }
        }
        info!(
            succeeded = succeeded.len(),
            failed = failed.len(),
            "All searches finished"
        );

        Self::transition(&mut state, DigestState::Rendering);
        let report = aggregator.snapshot(queries);
        let text = self.renderer.render(&report, self.schema.kind, as_of);

        Self::transition(&mut state, DigestState::Notifying);
        if let Err(e) = self.notifier.send(&self.subject, &text).await {
            Self::transition(&mut state, DigestState::Failed);
            error!(notifier = self.notifier.name(), "Report delivery failed: {}", e);
            return Err(e.into());
        }

        if succeeded.is_empty() {
            Self::transition(&mut state, DigestState::Failed);
            return Err(DigestError::AllSearchesFailed(failed.len()));
        }

        Self::transition(&mut state, DigestState::Done);
        Ok(DigestOutcome {
            report,
            text,
            succeeded,
            failed,
        })
    }
}
