// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 职位记录
///
/// 由站点解析器从一个页面片段生成，字段顺序固定：标题、链接、日期信息。
/// 所有字段都为空的记录是占位记录，表示"没有可提取的职位"，而不是错误。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobRecord {
    /// 职位标题
    pub title: Option<String>,
    /// 职位详情页的绝对URL
    pub url: Option<String>,
    /// 发布/截止日期文本，按页面顺序排列（如 "Posted: ..."、"Closing: ..."）
    pub date_info: Vec<String>,
}

impl JobRecord {
    /// 创建占位记录
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
            date_info: Vec::new(),
        }
    }

    pub fn with_date_info(mut self, info: impl Into<String>) -> Self {
        self.date_info.push(info.into());
        self
    }

    /// 按固定语义顺序返回所有已填充的字段
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.title
            .as_deref()
            .into_iter()
            .chain(self.url.as_deref())
            .chain(self.date_info.iter().map(String::as_str))
    }

    /// 是否为占位记录（没有任何字段）
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// 以单个空格连接全部字段，供内容过滤使用
    pub fn joined(&self) -> String {
        self.fields().collect::<Vec<_>>().join(" ")
    }
}
