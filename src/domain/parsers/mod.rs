// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 站点解析模块
///
/// 把不同站点的页面标记规范化为统一的职位记录序列：
/// - 表格站点（grid_table）：结果容器中的表格行
/// - 卡片站点（list_card）：列表项形式的职位卡片
///
/// 解析器从不因页面结构异常而失败，缺失的结构只会产生空序列或空的占位记录。
pub mod grid_table;
pub mod list_card;

use crate::domain::models::job_record::JobRecord;
use scraper::ElementRef;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 解析错误类型
///
/// 页面解析本身降级为空结果，这里只覆盖配置中的站点类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown site schema: {0}")]
    UnknownSchema(String),
}

/// 站点标记类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteSchemaKind {
    /// 表格站点（governmentjobs.com）
    GridTable,
    /// 卡片站点（Workday）
    ListCard,
}

impl SiteSchemaKind {
    /// 站点默认根地址，用于拼接相对链接
    pub fn default_base_url(&self) -> &'static str {
        match self {
            SiteSchemaKind::GridTable => "https://www.governmentjobs.com",
            SiteSchemaKind::ListCard => "https://psu.wd1.myworkdayjobs.com",
        }
    }
}

impl fmt::Display for SiteSchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SiteSchemaKind::GridTable => write!(f, "grid_table"),
            SiteSchemaKind::ListCard => write!(f, "list_card"),
        }
    }
}

impl FromStr for SiteSchemaKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid_table" => Ok(SiteSchemaKind::GridTable),
            "list_card" => Ok(SiteSchemaKind::ListCard),
            _ => Err(ParseError::UnknownSchema(s.to_string())),
        }
    }
}

/// 站点标记定义：类型加上拼接链接用的根地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSchema {
    pub kind: SiteSchemaKind,
    pub base_url: String,
}

impl SiteSchema {
    pub fn new(kind: SiteSchemaKind, base_url: impl Into<String>) -> Self {
        Self {
            kind,
            base_url: base_url.into(),
        }
    }

    /// 使用站点默认根地址
    pub fn with_default_base(kind: SiteSchemaKind) -> Self {
        Self::new(kind, kind.default_base_url())
    }
}

/// 按站点类型解析页面标记
pub fn parse(markup: &str, schema: &SiteSchema) -> Vec<JobRecord> {
    match schema.kind {
        SiteSchemaKind::GridTable => grid_table::parse(markup, &schema.base_url),
        SiteSchemaKind::ListCard => list_card::parse(markup, &schema.base_url),
    }
}

/// 元素自身或其任一后代是否带有标记
///
/// 标记可以是属性名，也可以出现在属性值中
pub(crate) fn carries_marker(element: &ElementRef<'_>, marker: &str) -> bool {
    element
        .descendants()
        .filter_map(ElementRef::wrap)
        .any(|el| {
            el.value()
                .attrs()
                .any(|(name, value)| name == marker || value.contains(marker))
        })
}

/// 元素的文本内容，去除首尾空白
pub(crate) fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
