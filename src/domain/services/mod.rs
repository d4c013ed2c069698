// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 分组键（search_key）：从搜索URL推导报告中的分组键
/// - 汇总器（aggregator）：并发搜索任务共享的结果映射
/// - 报告渲染（report_renderer）：把汇总快照渲染为文本报告
pub mod aggregator;
pub mod report_renderer;
pub mod search_key;
