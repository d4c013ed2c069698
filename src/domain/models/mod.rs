// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心数据结构，包括：
/// - 搜索查询（search_query）：一条搜索URL及其分组键
/// - 职位记录（job_record）：从页面片段中规范化得到的职位信息
/// - 报告（report）：单个搜索结果以及整次运行的汇总快照
pub mod job_record;
pub mod report;
pub mod search_query;
