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

use chrono::Local;
use jobdigest::application::use_cases::digest_use_case::DigestUseCase;
use jobdigest::config::settings::Settings;
use jobdigest::domain::services::report_renderer::ReportRenderer;
use jobdigest::engines::build_fetcher;
use jobdigest::infrastructure::notifier::build_notifier;
use jobdigest::utils::telemetry;
use tracing::info;

/// 主函数
///
/// 加载配置，执行一次职位摘要运行后退出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // 2. Initialize logging
    telemetry::init_telemetry();
    info!("Starting jobdigest...");

    // 3. Load configuration
    let settings = Settings::new()?;
    let queries = settings.search_queries()?;
    info!(
        schema = %settings.site.schema,
        queries = queries.len(),
        "Configuration loaded"
    );

    // 4. Build collaborators
    let fetcher = build_fetcher(&settings.fetcher);
    let notifier = build_notifier(&settings.notifier)?;
    info!(
        fetcher = fetcher.name(),
        notifier = notifier.name(),
        "Collaborators initialized"
    );

    // 5. Run once
    let use_case = DigestUseCase::new(
        fetcher,
        notifier,
        settings.site_schema(),
        ReportRenderer::new(settings.site.label.clone()),
        settings.subject(),
    );
    let outcome = use_case.run(&queries, Local::now().date_naive()).await?;

    info!(
        succeeded = outcome.succeeded.len(),
        failed = outcome.failed.len(),
        "Report sent"
    );
    Ok(())
}
