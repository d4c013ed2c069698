// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_record::JobRecord;
use crate::domain::parsers::{carries_marker, element_text};
use crate::utils::url_utils::absolute_url;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

const JOB_ID_MARKER: &str = "data-job-id";

static CONTAINER_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("div.search-results-grid-container").expect("valid container selector")
});
static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("valid row selector"));
static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("valid anchor selector"));
static POSTED_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.job-table-posted").expect("valid posted selector"));
static CLOSING_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td.job-table-closing").expect("valid closing selector"));

/// 解析表格站点的搜索结果页
///
/// - 找不到结果容器时返回一条占位记录
/// - 容器中没有任何行时返回空序列
/// - 每一行都会产生一条记录，不带职位标识的行产生空记录
pub fn parse(markup: &str, base_url: &str) -> Vec<JobRecord> {
    let document = Html::parse_document(markup);

    let Some(container) = document.select(&CONTAINER_SELECTOR).next() else {
        return vec![JobRecord::placeholder()];
    };

    container
        .select(&ROW_SELECTOR)
        .map(|row| parse_row(&row, base_url))
        .collect()
}

fn parse_row(row: &ElementRef<'_>, base_url: &str) -> JobRecord {
    let mut record = JobRecord::placeholder();

    if carries_marker(row, JOB_ID_MARKER) {
        if let Some(anchor) = row.select(&ANCHOR_SELECTOR).next() {
            record.title = Some(element_text(&anchor));
            record.url = anchor
                .value()
                .attr("href")
                .map(|href| absolute_url(base_url, href));
        }
    }

    // Date cells are read even when the row has no job id
    if let Some(posted) = row.select(&POSTED_SELECTOR).next() {
        record
            .date_info
            .push(format!("Posted: {}", element_text(&posted)));
    }
    if let Some(closing) = row.select(&CLOSING_SELECTOR).next() {
        record
            .date_info
            .push(format!("Closing: {}", element_text(&closing)));
    }

    record
}
