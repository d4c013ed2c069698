// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::job_record::JobRecord;
use crate::domain::parsers::{carries_marker, element_text};
use crate::utils::url_utils::absolute_url;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

const TITLE_MARKER: &str = "jobTitle";

static ITEM_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("li").expect("valid item selector"));
static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a").expect("valid anchor selector"));
static DETAIL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("dd").expect("valid detail selector"));

/// 发布时间标签所在的 `dd` 序号（第二个）
const POSTED_DETAIL_INDEX: usize = 1;

/// 解析卡片站点的搜索结果页
///
/// 每个列表项都会产生一条记录，没有标题标记的列表项产生空记录，
/// 以保持页面顺序供后续过滤使用。
pub fn parse(markup: &str, base_url: &str) -> Vec<JobRecord> {
    let document = Html::parse_document(markup);

    document
        .select(&ITEM_SELECTOR)
        .map(|item| parse_item(&item, base_url))
        .collect()
}

fn parse_item(item: &ElementRef<'_>, base_url: &str) -> JobRecord {
    let mut record = JobRecord::placeholder();

    if !carries_marker(item, TITLE_MARKER) {
        return record;
    }

    if let Some(anchor) = item.select(&ANCHOR_SELECTOR).next() {
        record.title = Some(element_text(&anchor));
        record.url = anchor
            .value()
            .attr("href")
            .map(|href| absolute_url(base_url, href));
    }

    if let Some(posted) = item.select(&DETAIL_SELECTOR).nth(POSTED_DETAIL_INDEX) {
        record.date_info.push(element_text(&posted));
    }

    record
}
