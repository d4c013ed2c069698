// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use jobdigest::utils::telemetry;

#[test]
fn test_telemetry_initialization_is_repeatable() {
    // 重复初始化不应 panic
    telemetry::init_telemetry();
    telemetry::init_telemetry();

    tracing::debug!(key = "python", records = 3, "Search stored");
    tracing::warn!(key = "risk", error = "navigation failed", "Search failed");
}
