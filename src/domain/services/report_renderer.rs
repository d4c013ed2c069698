// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_record::JobRecord;
use crate::domain::models::report::{AggregateReport, SearchResult};
use crate::domain::parsers::SiteSchemaKind;
use chrono::NaiveDate;

/// 卡片站点中过期职位的标签
pub const STALE_POSTING_LABEL: &str = "Posted 30+ Days Ago";

/// 表格站点没有结果容器时输出的提示
pub const NO_JOBS_MESSAGE: &str = "No jobs found.";

/// 报告渲染器
///
/// 把汇总快照渲染为确定性的纯文本报告，输出只取决于输入。
#[derive(Debug, Clone)]
pub struct ReportRenderer {
    label: String,
}

impl ReportRenderer {
    /// 创建渲染器
    ///
    /// # 参数
    ///
    /// * `label` - 报告标题中的来源名称，例如 "PSU Jobs"
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// 渲染完整报告：`<label> for <MM/DD/YYYY>`、空行、正文
    pub fn render(
        &self,
        report: &AggregateReport,
        kind: SiteSchemaKind,
        as_of: NaiveDate,
    ) -> String {
        format!(
            "{} for {}\n\n{}",
            self.label,
            as_of.format("%m/%d/%Y"),
            Self::render_body(report, kind)
        )
    }

    /// 渲染报告正文（不含标题），以一个空行结尾
    pub fn render_body(report: &AggregateReport, kind: SiteSchemaKind) -> String {
        let mut text = String::new();
        for result in report.iter() {
            render_result(&mut text, result, kind);
        }
        text.push('\n');
        text
    }
}

fn render_result(text: &mut String, result: &SearchResult, kind: SiteSchemaKind) {
    text.push_str(&result.key.to_uppercase());
    text.push_str(" JOBS\n");

    if kind == SiteSchemaKind::GridTable && result.is_placeholder_only() {
        text.push_str(NO_JOBS_MESSAGE);
        text.push_str("\n\n");
        return;
    }

    for record in result.records.iter().filter(|record| is_reportable(record, kind)) {
        for field in record.fields() {
            text.push_str(field);
            text.push('\n');
        }
        text.push('\n');
    }
}

fn is_reportable(record: &JobRecord, kind: SiteSchemaKind) -> bool {
    if record.is_empty() {
        return false;
    }
    match kind {
        SiteSchemaKind::GridTable => true,
        SiteSchemaKind::ListCard => !record.joined().contains(STALE_POSTING_LABEL),
    }
}
