// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 从搜索URL推导分组键
///
/// 先把所有 `%20` 替换为 `_`，再按 `=` 切分并取第一个 `=` 之后的片段。
///
/// 已知限制：
/// - URL中没有 `=` 时返回 `None`
/// - 有多个 `=` 时只取第一段与第二段之间的内容，例如 `?q=a&x=b` 得到 `a&x`
/// - 除 `%20` 之外的百分号编码保持原样
///
/// 这一推导方式决定了哪些搜索会落到同一个键上，因此不做泛化。
pub fn search_key(query: &str) -> Option<String> {
    query
        .replace("%20", "_")
        .split('=')
        .nth(1)
        .map(str::to_string)
}
