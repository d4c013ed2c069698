// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{FetchError, PageFetcher};
use async_trait::async_trait;
use chromiumoxide::error::CdpError;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

const INNER_HTML_SCRIPT: &str = "document.body.innerHTML";

/// 浏览器抓取器
///
/// 基于chromiumoxide的无头浏览器抓取。浏览器在第一次抓取时启动（或连接到
/// 远程调试地址），之后所有并发抓取共用同一个浏览器，每次抓取打开一个新页面。
pub struct BrowserFetcher {
    browser: OnceCell<Browser>,
    settle_delay: Duration,
    remote_debugging_url: Option<String>,
}

impl BrowserFetcher {
    /// 创建浏览器抓取器
    ///
    /// # 参数
    ///
    /// * `settle_delay` - 页面加载后等待脚本渲染结果的时间
    /// * `remote_debugging_url` - 远程Chrome调试地址，为空时本地启动Chromium
    pub fn new(settle_delay: Duration, remote_debugging_url: Option<String>) -> Self {
        Self {
            browser: OnceCell::new(),
            settle_delay,
            remote_debugging_url,
        }
    }

    async fn browser(&self) -> Result<&Browser, FetchError> {
        self.browser
            .get_or_try_init(|| async {
                let (browser, mut handler) = if let Some(ref url) = self.remote_debugging_url {
                    info!("Connecting to remote Chrome instance at: {}", url);
                    Browser::connect(url).await.map_err(|e| {
                        FetchError::Browser(format!("Failed to connect to remote Chrome: {}", e))
                    })?
                } else {
                    let config = BrowserConfig::builder()
                        .no_sandbox()
                        .request_timeout(Duration::from_secs(30))
                        .arg("--disable-gpu")
                        .arg("--disable-dev-shm-usage")
                        .build()
                        .map_err(FetchError::Browser)?;

                    info!("Launching headless Chromium");
                    Browser::launch(config)
                        .await
                        .map_err(|e| FetchError::Browser(e.to_string()))?
                };

                // Drive browser events until the connection closes
                tokio::spawn(async move {
                    while let Some(event) = handler.next().await {
                        if event.is_err() {
                            break;
                        }
                    }
                });

                Ok::<_, FetchError>(browser)
            })
            .await
    }

    async fn read_rendered(&self, page: &Page, url: &str) -> Result<String, FetchError> {
        page.goto(url).await.map_err(navigation_error)?;

        tokio::time::sleep(self.settle_delay).await;

        page.evaluate(INNER_HTML_SCRIPT)
            .await
            .map_err(navigation_error)?
            .into_value::<String>()
            .map_err(|e| FetchError::Other(format!("Unexpected page content: {}", e)))
    }
}

fn navigation_error(e: CdpError) -> FetchError {
    match e {
        CdpError::Timeout => FetchError::Timeout,
        other => FetchError::Navigation(other.to_string()),
    }
}

#[async_trait]
impl PageFetcher for BrowserFetcher {
    /// 打开页面、等待渲染并读取 `document.body.innerHTML`
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let start = Instant::now();
        let browser = self.browser().await?;

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| FetchError::Browser(e.to_string()))?;

        let content = self.read_rendered(&page, url).await;

        if let Err(e) = page.close().await {
            warn!("Failed to close page for {}: {}", url, e);
        }

        let content = content?;
        debug!(
            url = %url,
            bytes = content.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Page rendered"
        );
        Ok(content)
    }

    fn name(&self) -> &'static str {
        "browser"
    }
}
