// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::search_key::search_key;
use std::fmt;

/// 搜索查询
///
/// 一条配置好的职位搜索URL，以及由它推导出的分组键。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// 原始搜索URL
    pub url: String,
    /// 分组键，同时用作报告中的标题
    pub key: String,
}

impl SearchQuery {
    /// 由搜索URL构建查询
    ///
    /// 无法推导出分组键时（URL中没有 `=`）返回 `None`
    pub fn new(url: impl Into<String>) -> Option<Self> {
        let url = url.into();
        let key = search_key(&url)?;
        Some(Self { url, key })
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.key, self.url)
    }
}
