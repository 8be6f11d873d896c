//! Catalog walking over HTTP

use crate::common::{catalog_url, http_source, mount_page, page, row, CATALOG_PATH};
use chrono::NaiveDate;
use dsa_harvest::catalog::{harvest, HttpPageSource, PageSource, RetryPolicy};
use dsa_harvest::config::{SourceConfig, UserAgentConfig};
use dsa_harvest::{HarvestError, PageError};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_two_page_catalog_stops_after_last_page() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        1,
        page(
            &[
                row("2023-09-25", "1 000", "csv: 1 GB zip: 100 MB", "csv: 10 MB zip: 1 MB"),
                row("2023-09-26", "2 000", "csv: 2 GB zip: 200 MB", "csv: 20 MB zip: 2 MB"),
            ],
            true,
        ),
        1,
    )
    .await;
    mount_page(
        &server,
        2,
        page(
            &[row("2023-09-27", "3 000", "csv: 3 GB zip: 300 MB", "csv: 30 MB zip: 3 MB")],
            false,
        ),
        1,
    )
    .await;
    mount_page(&server, 3, page(&[], false), 0).await;

    let source = http_source(&server, RetryPolicy::none());
    let records = harvest(&source, Duration::ZERO).await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2023, 9, 25));
    assert_eq!(records[2].date, NaiveDate::from_ymd_opt(2023, 9, 27));
    assert_eq!(records[1].statement_count, 2_000);
    assert_eq!(records[1].full_csv_size_mb, 2048.0);
    assert_eq!(records[1].full_zip_size_mb, 200.0);
    assert_eq!(records[2].light_csv_size_mb, 30.0);
    assert_eq!(records[0].full_zip_url, "https://dsa.example/full-2023-09-25.zip");
    assert_eq!(
        records[0].light_sha1_url,
        "https://dsa.example/light-2023-09-25.zip.sha1"
    );

    // MockServer verifies the `expect` counts on drop
}

#[tokio::test]
async fn test_single_page_without_next_link() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        1,
        page(&[row("2024-01-01", "5", "", "")], false),
        1,
    )
    .await;
    mount_page(&server, 2, page(&[], false), 0).await;

    let source = http_source(&server, RetryPolicy::none());
    let records = harvest(&source, Duration::ZERO).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].statement_count, 5);
    assert_eq!(records[0].full_csv_size_mb, 0.0);
}

#[tokio::test]
async fn test_server_error_aborts_with_page_number() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        1,
        page(&[row("2023-09-25", "1", "csv: 1 MB", "")], true),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let source = http_source(&server, RetryPolicy::none());
    let result = harvest(&source, Duration::ZERO).await;

    match result {
        Err(HarvestError::Page {
            page,
            source: PageError::Status { status, .. },
        }) => {
            assert_eq!(page, 2);
            assert_eq!(status, 500);
        }
        other => panic!("expected a page 2 status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transient_failure_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_page(
        &server,
        1,
        page(&[row("2023-09-25", "42", "", "")], false),
        1,
    )
    .await;

    let retry = RetryPolicy {
        max_retries: 1,
        delay: Duration::from_millis(10),
    };
    let source = http_source(&server, retry);
    let records = harvest(&source, Duration::ZERO).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].statement_count, 42);
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let retry = RetryPolicy {
        max_retries: 3,
        delay: Duration::from_millis(10),
    };
    let source = http_source(&server, retry);
    let result = harvest(&source, Duration::ZERO).await;

    assert!(matches!(
        result,
        Err(HarvestError::Page {
            page: 1,
            source: PageError::Status { status: 404, .. }
        })
    ));
}

#[tokio::test]
async fn test_non_html_response_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&server)
        .await;

    let source = http_source(&server, RetryPolicy::none());
    let result = source.fetch_page(1).await;

    match result {
        Err(PageError::ContentMismatch { content_type, .. }) => {
            assert!(content_type.starts_with("application/json"));
        }
        other => panic!("expected a content mismatch, got {:?}", other),
    }
}

#[tokio::test]
async fn test_empty_body_is_a_markup_error() {
    let server = MockServer::start().await;

    mount_page(&server, 1, String::new(), 1).await;

    let source = http_source(&server, RetryPolicy::none());
    let result = harvest(&source, Duration::ZERO).await;

    assert!(matches!(
        result,
        Err(HarvestError::Page {
            page: 1,
            source: PageError::Markup(_)
        })
    ));
}

#[tokio::test]
async fn test_requests_carry_user_agent() {
    let server = MockServer::start().await;
    let user_agent = UserAgentConfig {
        name: "TestHarvester".to_string(),
        version: "2.3.4".to_string(),
        contact_url: "https://example.com/contact".to_string(),
    };

    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .and(header(
            "user-agent",
            "TestHarvester/2.3.4 (+https://example.com/contact)",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_raw(page(&[], false), "text/html"))
        .expect(1)
        .mount(&server)
        .await;

    let source_config = SourceConfig {
        base_url: catalog_url(&server),
        ..SourceConfig::default()
    };
    let source = HttpPageSource::from_config(&source_config, &user_agent).unwrap();
    let records = harvest(&source, Duration::ZERO).await.unwrap();

    assert!(records.is_empty());
}
