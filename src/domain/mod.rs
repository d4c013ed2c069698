// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心逻辑，包括：
/// - 领域模型（models）：查询、职位记录和报告
/// - 站点解析（parsers）：不同站点标记到统一记录的规范化
/// - 服务（services）：分组键推导、结果汇总和报告渲染
///
/// 领域层不依赖页面抓取和消息投递的具体实现。
pub mod models;
pub mod parsers;
pub mod services;
