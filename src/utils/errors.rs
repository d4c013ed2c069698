// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::FetchError;
use crate::infrastructure::notifier::NotifyError;
use thiserror::Error;

/// 单次运行错误类型
#[derive(Error, Debug)]
pub enum DigestError {
    #[error("没有配置任何搜索")]
    NoQueries,

    #[error("报告投递失败: {0}")]
    Notify(#[from] NotifyError),

    #[error("全部 {0} 个搜索都失败了")]
    AllSearchesFailed(usize),
}

/// 搜索任务错误类型
#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("抓取失败: {0}")]
    Fetch(#[from] FetchError),

    #[error("任务异常退出: {0}")]
    Join(String),
}
