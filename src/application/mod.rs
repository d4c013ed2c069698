// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 编排领域服务、抓取器和通知器，完成一次完整的职位摘要运行
pub mod use_cases;
