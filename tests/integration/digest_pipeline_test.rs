// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{
    FailingNotifier, FixtureFetcher, RecordingNotifier, CARD_MIXED_JOBS, CARD_STALE_JOB,
    GRID_EMPTY_CONTAINER, GRID_NO_CONTAINER, GRID_ONE_JOB,
};
use chrono::NaiveDate;
use jobdigest::application::use_cases::digest_use_case::DigestUseCase;
use jobdigest::domain::models::search_query::SearchQuery;
use jobdigest::domain::parsers::{SiteSchema, SiteSchemaKind};
use jobdigest::domain::services::report_renderer::ReportRenderer;
use jobdigest::utils::errors::DigestError;
use std::sync::Arc;

const PENN: &str = "https://www.governmentjobs.com/careers/pabureau";
const PSU: &str = "https://psu.wd1.myworkdayjobs.com/PSU_Staff";

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
}

fn queries(urls: &[String]) -> Vec<SearchQuery> {
    urls.iter()
        .map(|url| SearchQuery::new(url.as_str()).unwrap())
        .collect()
}

fn use_case(
    fetcher: FixtureFetcher,
    notifier: Arc<RecordingNotifier>,
    kind: SiteSchemaKind,
    label: &str,
) -> DigestUseCase {
    DigestUseCase::new(
        Arc::new(fetcher),
        notifier,
        SiteSchema::with_default_base(kind),
        ReportRenderer::new(label),
        label,
    )
}

#[tokio::test]
async fn test_grid_single_matching_row() {
    let url = format!("{}?keywords=python", PENN);
    let notifier = Arc::new(RecordingNotifier::default());
    let digest = use_case(
        FixtureFetcher::new(vec![(url.as_str(), GRID_ONE_JOB)]),
        notifier.clone(),
        SiteSchemaKind::GridTable,
        "Penn Government Jobs",
    );

    let outcome = digest.run(&queries(&[url]), as_of()).await.unwrap();

    assert!(outcome
        .text
        .contains("PYTHON JOBS\nData Analyst\nhttps://www.governmentjobs.com/job/1\n\n"));
    assert_eq!(
        outcome.text,
        "Penn Government Jobs for 03/07/2024\n\nPYTHON JOBS\nData Analyst\nhttps://www.governmentjobs.com/job/1\n\n\n"
    );

    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].0, "Penn Government Jobs");
    assert_eq!(messages[0].1, outcome.text);
}

#[tokio::test]
async fn test_list_card_stale_record_filtered() {
    let url = format!("{}?q=secret", PSU);
    let notifier = Arc::new(RecordingNotifier::default());
    let digest = use_case(
        FixtureFetcher::new(vec![(url.as_str(), CARD_STALE_JOB)]),
        notifier.clone(),
        SiteSchemaKind::ListCard,
        "PSU Jobs",
    );

    let outcome = digest.run(&queries(&[url]), as_of()).await.unwrap();

    assert!(outcome.text.contains("SECRET JOBS\n\n"));
    assert!(!outcome.text.contains("Security Officer"));
    assert_eq!(outcome.text, "PSU Jobs for 03/07/2024\n\nSECRET JOBS\n\n");
}

#[tokio::test]
async fn test_grid_missing_container_reports_no_jobs() {
    let url = format!("{}?keywords=intelligence", PENN);
    let notifier = Arc::new(RecordingNotifier::default());
    let digest = use_case(
        FixtureFetcher::new(vec![(url.as_str(), GRID_NO_CONTAINER)]),
        notifier,
        SiteSchemaKind::GridTable,
        "Penn Government Jobs",
    );

    let outcome = digest.run(&queries(&[url]), as_of()).await.unwrap();

    assert!(outcome
        .text
        .contains("INTELLIGENCE JOBS\nNo jobs found.\n\n"));
}

#[tokio::test]
async fn test_grid_empty_container_differs_from_missing_container() {
    let missing = format!("{}?keywords=intelligence", PENN);
    let empty = format!("{}?keywords=investigator", PENN);
    let notifier = Arc::new(RecordingNotifier::default());
    let digest = use_case(
        FixtureFetcher::new(vec![
            (missing.as_str(), GRID_NO_CONTAINER),
            (empty.as_str(), GRID_EMPTY_CONTAINER),
        ]),
        notifier,
        SiteSchemaKind::GridTable,
        "Penn Government Jobs",
    );

    let outcome = digest.run(&queries(&[missing, empty]), as_of()).await.unwrap();

    assert_eq!(
        outcome.text,
        "Penn Government Jobs for 03/07/2024\n\nINTELLIGENCE JOBS\nNo jobs found.\n\nINVESTIGATOR JOBS\n\n"
    );
}

#[tokio::test]
async fn test_list_card_keeps_fresh_records_in_order() {
    let url = format!("{}?q=risk", PSU);
    let notifier = Arc::new(RecordingNotifier::default());
    let digest = use_case(
        FixtureFetcher::new(vec![(url.as_str(), CARD_MIXED_JOBS)]),
        notifier,
        SiteSchemaKind::ListCard,
        "PSU Jobs",
    );

    let outcome = digest.run(&queries(&[url]), as_of()).await.unwrap();

    assert_eq!(
        outcome.text,
        "PSU Jobs for 03/07/2024\n\nRISK JOBS\nRisk Manager\nhttps://psu.wd1.myworkdayjobs.com/PSU_Staff/job/Risk-Manager_REQ_3\nPosted Yesterday\n\n\n"
    );
}

#[tokio::test]
async fn test_partial_failure_leaves_key_absent() {
    let ok = format!("{}?keywords=python", PENN);
    let missing = format!("{}?keywords=investigator", PENN);
    let notifier = Arc::new(RecordingNotifier::default());
    let digest = use_case(
        FixtureFetcher::new(vec![(ok.as_str(), GRID_ONE_JOB)]),
        notifier.clone(),
        SiteSchemaKind::GridTable,
        "Penn Government Jobs",
    );

    let outcome = digest.run(&queries(&[missing, ok]), as_of()).await.unwrap();

    assert_eq!(outcome.succeeded, vec!["python"]);
    assert_eq!(outcome.failed, vec!["investigator"]);
    assert!(!outcome.text.contains("INVESTIGATOR JOBS"));
    assert!(outcome.text.contains("PYTHON JOBS"));
    assert_eq!(notifier.messages().len(), 1);
}

#[tokio::test]
async fn test_all_searches_failed_still_delivers() {
    let urls = vec![
        format!("{}?keywords=python", PENN),
        format!("{}?keywords=intelligence", PENN),
    ];
    let notifier = Arc::new(RecordingNotifier::default());
    let digest = use_case(
        FixtureFetcher::new(Vec::new()),
        notifier.clone(),
        SiteSchemaKind::GridTable,
        "Penn Government Jobs",
    );

    let result = digest.run(&queries(&urls), as_of()).await;

    assert!(matches!(result, Err(DigestError::AllSearchesFailed(2))));
    let messages = notifier.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].1, "Penn Government Jobs for 03/07/2024\n\n\n");
}

#[tokio::test]
async fn test_notify_failure_is_fatal() {
    let url = format!("{}?keywords=python", PENN);
    let digest = DigestUseCase::new(
        Arc::new(FixtureFetcher::new(vec![(url.as_str(), GRID_ONE_JOB)])),
        Arc::new(FailingNotifier),
        SiteSchema::with_default_base(SiteSchemaKind::GridTable),
        ReportRenderer::new("Penn Government Jobs"),
        "Penn Jobs",
    );

    let result = digest.run(&queries(&[url]), as_of()).await;

    assert!(matches!(result, Err(DigestError::Notify(_))));
}

#[tokio::test]
async fn test_empty_query_list_rejected() {
    let notifier = Arc::new(RecordingNotifier::default());
    let digest = use_case(
        FixtureFetcher::new(Vec::new()),
        notifier.clone(),
        SiteSchemaKind::GridTable,
        "Penn Government Jobs",
    );

    let result = digest.run(&[], as_of()).await;

    assert!(matches!(result, Err(DigestError::NoQueries)));
    assert!(notifier.messages().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_searches_with_jitter() {
    let keys: Vec<String> = (0..10).map(|i| format!("keyword{}", i)).collect();
    let urls: Vec<String> = keys
        .iter()
        .map(|key| format!("{}?keywords={}", PENN, key))
        .collect();
    let pages: Vec<String> = (0..10)
        .map(|i| {
            format!(
                r#"<html><body><div class="search-results-grid-container"><table>
                <tr data-job-id="{i}"><td><a href="/job/{i}">Job {i}</a></td>
                <td class="job-table-posted">0{i}/01/24</td></tr>
                </table></div></body></html>"#
            )
        })
        .collect();
    let fixtures: Vec<(&str, &str)> = urls
        .iter()
        .map(String::as_str)
        .zip(pages.iter().map(String::as_str))
        .collect();

    let notifier = Arc::new(RecordingNotifier::default());
    let digest = use_case(
        FixtureFetcher::new(fixtures).with_jitter(40),
        notifier,
        SiteSchemaKind::GridTable,
        "Penn Government Jobs",
    );

    for _ in 0..5 {
        let outcome = digest.run(&queries(&urls), as_of()).await.unwrap();

        assert_eq!(outcome.report.len(), 10);
        assert_eq!(outcome.report.keys().collect::<Vec<_>>(), keys);
        for (i, result) in outcome.report.iter().enumerate() {
            assert_eq!(result.records.len(), 1);
            assert_eq!(result.records[0].title, Some(format!("Job {}", i)));
            assert_eq!(
                result.records[0].url,
                Some(format!("https://www.governmentjobs.com/job/{}", i))
            );
            assert_eq!(
                result.records[0].date_info,
                vec![format!("Posted: 0{}/01/24", i)]
            );
        }
    }
}

#[tokio::test]
async fn test_render_twice_is_identical() {
    let url = format!("{}?keywords=python", PENN);
    let notifier = Arc::new(RecordingNotifier::default());
    let digest = use_case(
        FixtureFetcher::new(vec![(url.as_str(), GRID_ONE_JOB)]),
        notifier,
        SiteSchemaKind::GridTable,
        "Penn Government Jobs",
    );

    let outcome = digest.run(&queries(&[url]), as_of()).await.unwrap();
    let renderer = ReportRenderer::new("Penn Government Jobs");

    let first = renderer.render(&outcome.report, SiteSchemaKind::GridTable, as_of());
    let second = renderer.render(&outcome.report, SiteSchemaKind::GridTable, as_of());
    assert_eq!(first, second);
    assert_eq!(first, outcome.text);
}
