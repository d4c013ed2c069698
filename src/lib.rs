// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含一次完整职位摘要运行的编排用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含职位记录、站点解析、结果汇总和报告渲染
pub mod domain;

/// 引擎模块
///
/// 实现页面抓取：无头浏览器和普通HTTP
pub mod engines;

/// 基础设施模块
///
/// 提供报告投递等外部服务集成
pub mod infrastructure;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;

/// 工作器模块
///
/// 实现单个搜索的抓取、解析和写入
pub mod workers;
