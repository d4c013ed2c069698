// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use jobdigest::engines::traits::{FetchError, PageFetcher};
use jobdigest::infrastructure::notifier::{Notifier, NotifyError};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;

/// 表格站点：一条匹配行，没有日期
pub const GRID_ONE_JOB: &str = r#"<html><body>
<div class="search-results-grid-container">
  <table><tbody>
    <tr data-job-id="1"><td><a href="/job/1">Data Analyst</a></td></tr>
  </tbody></table>
</div>
</body></html>"#;

/// 表格站点：没有结果容器
pub const GRID_NO_CONTAINER: &str = r#"<html><body>
<div class="search-results-empty">No results</div>
</body></html>"#;

/// 表格站点：有容器但没有任何行
pub const GRID_EMPTY_CONTAINER: &str = r#"<html><body>
<div class="search-results-grid-container"><table><tbody></tbody></table></div>
</body></html>"#;

/// 卡片站点：一条过期职位
pub const CARD_STALE_JOB: &str = r#"<html><body><ul>
<li>
  <h3><a data-automation-id="jobTitle" href="/PSU_Staff/job/Security-Officer_REQ_1">Security Officer</a></h3>
  <dl><dt>locations</dt><dd>University Park, PA</dd></dl>
  <dl><dt>posted on</dt><dd>Posted 30+ Days Ago</dd></dl>
</li>
</ul></body></html>"#;

/// 卡片站点：一条过期职位和一条新职位
pub const CARD_MIXED_JOBS: &str = r#"<html><body><ul>
<li>
  <h3><a data-automation-id="jobTitle" href="/PSU_Staff/job/Old-Risk_REQ_2">Old Risk Analyst</a></h3>
  <dl><dd>University Park, PA</dd></dl>
  <dl><dd>Posted 30+ Days Ago</dd></dl>
</li>
<li><a href="/PSU_Staff/help">Help</a></li>
<li>
  <h3><a data-automation-id="jobTitle" href="/PSU_Staff/job/Risk-Manager_REQ_3">Risk Manager</a></h3>
  <dl><dd>Hershey, PA</dd></dl>
  <dl><dd>Posted Yesterday</dd></dl>
</li>
</ul></body></html>"#;

/// 固定页面抓取器
///
/// 按URL返回预置页面，可加随机延迟模拟渲染等待
pub struct FixtureFetcher {
    pages: HashMap<String, String>,
    max_jitter_ms: u64,
}

impl FixtureFetcher {
    pub fn new(pages: Vec<(&str, &str)>) -> Self {
        Self {
            pages: pages
                .into_iter()
                .map(|(url, markup)| (url.to_string(), markup.to_string()))
                .collect(),
            max_jitter_ms: 0,
        }
    }

    pub fn with_jitter(mut self, max_jitter_ms: u64) -> Self {
        self.max_jitter_ms = max_jitter_ms;
        self
    }
}

#[async_trait]
impl PageFetcher for FixtureFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        if self.max_jitter_ms > 0 {
            let delay = rand::random_range(0..=self.max_jitter_ms);
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Navigation(format!("no fixture for {}", url)))
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

/// 记录所有投递内容的通知器
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(String, String)> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        self.sent.lock().push((subject.to_string(), body.to_string()));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// 总是投递失败的通知器
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, _subject: &str, _body: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Rejected {
            status: 550,
            body: "mailbox unavailable".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}
