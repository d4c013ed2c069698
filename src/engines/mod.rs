// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod browser_engine;
pub mod http_engine;
pub mod traits;

use crate::config::settings::{FetcherKind, FetcherSettings};
use std::sync::Arc;
use std::time::Duration;
use traits::PageFetcher;

/// 按配置构建页面抓取器
pub fn build_fetcher(settings: &FetcherSettings) -> Arc<dyn PageFetcher> {
    match settings.kind {
        FetcherKind::Browser => Arc::new(browser_engine::BrowserFetcher::new(
            Duration::from_millis(settings.settle_delay_ms),
            settings.remote_debugging_url.clone(),
        )),
        FetcherKind::Http => Arc::new(http_engine::HttpFetcher::new(&settings.user_agent)),
    }
}
