// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将可能为相对路径的URL转换为绝对路径URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}

/// 以站点根地址为基准拼出职位链接
///
/// 基准地址无法解析或拼接失败时退回到简单的字符串拼接
pub fn absolute_url(base: &str, href: &str) -> String {
    Url::parse(base)
        .and_then(|base_url| resolve_url(&base_url, href))
        .map(String::from)
        .unwrap_or_else(|_| format!("{}{}", base, href))
}
