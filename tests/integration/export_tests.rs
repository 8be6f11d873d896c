//! End-to-end export runs against a mock catalog

use crate::common::{http_source, mount_page, page, row, test_config, CATALOG_PATH};
use approx::assert_relative_eq;
use dsa_harvest::catalog::RetryPolicy;
use dsa_harvest::{assemble_export, run_export, HarvestError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Eight consecutive days across two pages, 1 TiB of full CSV per day
async fn mount_week_catalog(server: &MockServer) {
    let day = |d: u32| {
        row(
            &format!("2023-10-{:02}", d),
            "1 000 000",
            "csv: 1 048 576 MB zip: 1 024 GB",
            "csv: 512 MB zip: 64 MB",
        )
    };

    mount_page(server, 1, page(&(1..=4).map(day).collect::<Vec<_>>(), true), 1).await;
    mount_page(server, 2, page(&(5..=8).map(day).collect::<Vec<_>>(), false), 1).await;
}

#[tokio::test]
async fn test_run_export_writes_json() {
    let server = MockServer::start().await;
    mount_week_catalog(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("output");
    let config = test_config(&server, &output_dir.display().to_string());

    let (export, file) = run_export(&config).await.unwrap();

    assert!(file.starts_with(&output_dir));
    let name = file.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("dsa_data_export_"));
    assert!(name.ends_with(".json"));
    assert_eq!(export.records.len(), 8);

    let written: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&file).unwrap()).unwrap();

    assert_eq!(written["records"].as_array().unwrap().len(), 8);
    assert_eq!(written["records"][0]["date"], "2023-10-01");
    assert_eq!(written["records"][7]["statement_count"], 1_000_000);

    let every_day = &written["summaries"]["every_day"];
    assert_eq!(every_day["record_count"], 8);
    assert_eq!(every_day["total_statements"], 8_000_000);
    assert_eq!(every_day["date_range"], "2023-10-01 to 2023-10-08");
    assert_eq!(every_day["sampling_strategy_label"], "");
    assert_relative_eq!(
        every_day["total_full_csv_size_tb"].as_f64().unwrap(),
        8.0,
        max_relative = 1e-9
    );

    let every_2 = &written["summaries"]["every_2_days"];
    assert_eq!(every_2["record_count"], 4);
    assert_eq!(every_2["date_range"], "2023-10-01 to 2023-10-07");
    assert_eq!(every_2["sampling_strategy_label"], "Every 2 days from first day");

    let every_4 = &written["summaries"]["every_4_days"];
    assert_eq!(every_4["record_count"], 2);
    assert_eq!(every_4["date_range"], "2023-10-01 to 2023-10-05");

    let every_6 = &written["summaries"]["every_6_days"];
    assert_eq!(every_6["record_count"], 2);
    assert_eq!(every_6["date_range"], "2023-10-01 to 2023-10-07");
}

#[tokio::test]
async fn test_export_costs_follow_pricing() {
    let server = MockServer::start().await;
    mount_week_catalog(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(&server, &dir.path().display().to_string());
    config.pricing.standard.price_per_gb = 0.02;
    config.pricing.deep_archive.price_per_gb = 0.001;

    let source = http_source(&server, RetryPolicy::none());
    let export = assemble_export(&source, &config).await.unwrap();

    let summary = &export.summaries.every_day;
    // 8 TB at 1000 GB per TB
    assert_relative_eq!(summary.standard_tier_costs.full_csv_cost, 160.0, max_relative = 1e-9);
    assert_relative_eq!(summary.deep_archive_tier_costs.full_csv_cost, 8.0, max_relative = 1e-9);
    assert_relative_eq!(
        summary.standard_tier_costs.parquet_conservative_cost,
        summary.total_full_parquet_conservative_size_tb * 1000.0 * 0.02,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        summary.total_full_parquet_conservative_size_tb,
        8.0 * config.estimates.parquet_conservative_factor,
        max_relative = 1e-9
    );
}

#[tokio::test]
async fn test_failed_harvest_writes_nothing() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        1,
        page(&[row("2023-10-01", "10", "csv: 1 MB", "")], true),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("output");
    let config = test_config(&server, &output_dir.display().to_string());

    let result = run_export(&config).await;

    assert!(matches!(result, Err(HarvestError::Page { page: 2, .. })));
    assert!(!output_dir.exists());
}
