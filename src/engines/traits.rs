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

use async_trait::async_trait;
use thiserror::Error;

/// 页面抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非成功状态码
    #[error("Unexpected status {status} for {url}")]
    Status { status: u16, url: String },
    /// 浏览器启动或连接失败
    #[error("Browser unavailable: {0}")]
    Browser(String),
    /// 页面导航或读取失败
    #[error("Navigation failed: {0}")]
    Navigation(String),
    /// 浏览器请求超时
    #[error("Timeout")]
    Timeout,
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 页面抓取器特质
///
/// 给定URL返回渲染后的原始页面标记。调用可能耗时数秒，必须在工作任务中调用。
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 抓取页面
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;

    /// 抓取器名称
    fn name(&self) -> &'static str;
}
