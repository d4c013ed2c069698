// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::engines::traits::{FetchError, PageFetcher};
use async_trait::async_trait;
use std::time::Instant;
use tracing::debug;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; jobdigest/0.1)";

/// HTTP抓取器
///
/// 基于reqwest的普通GET抓取，适用于服务端渲染的结果页
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT)
    }
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .unwrap_or_default();

        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    /// 执行HTTP抓取
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 响应正文
    /// * `Err(FetchError)` - 网络错误或非成功状态码
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let start = Instant::now();
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::RequestFailed(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let content = response.text().await?;
        debug!(
            url = %url,
            bytes = content.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Page fetched"
        );
        Ok(content)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
