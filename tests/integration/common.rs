//! Shared fixtures for the integration tests

use dsa_harvest::catalog::{HttpPageSource, RetryPolicy};
use dsa_harvest::config::{Config, SourceConfig, UserAgentConfig};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CATALOG_PATH: &str = "/explore-data/download";

/// One catalog row as the portal renders it
pub fn row(date: &str, statements: &str, full_sizes: &str, light_sizes: &str) -> String {
    format!(
        r#"<tr class="dayarchive-row">
            <td>{date}</td>
            <td>{statements}</td>
            <td>
                <a href="https://dsa.example/full-{date}.zip"><span class="ecl-link__label">zip</span></a>
                <a href="https://dsa.example/full-{date}.zip.sha1"><span class="ecl-link__label">sha1</span></a>
            </td>
            <td>{full_sizes}</td>
            <td>
                <a href="https://dsa.example/light-{date}.zip"><span class="ecl-link__label">zip</span></a>
                <a href="https://dsa.example/light-{date}.zip.sha1"><span class="ecl-link__label">sha1</span></a>
            </td>
            <td>{light_sizes}</td>
        </tr>"#
    )
}

/// A full catalog page, with a next-page link when `has_more`
pub fn page(rows: &[String], has_more: bool) -> String {
    let pager = if has_more {
        r#"<nav class="ecl-pagination"><ul>
            <li class="ecl-pagination__item ecl-pagination__item--next">
                <a aria-label="Next page" href="?page=next">Next</a>
            </li>
        </ul></nav>"#
    } else {
        r#"<nav class="ecl-pagination"><ul><li class="ecl-pagination__item">1</li></ul></nav>"#
    };

    format!(
        r#"<!DOCTYPE html><html><head><title>Data download</title></head><body>
        <table class="ecl-table"><tbody>{}</tbody></table>
        {}
        </body></html>"#,
        rows.join("\n"),
        pager
    )
}

/// Serves `body` as HTML for catalog page `number`, expecting `hits` requests
pub async fn mount_page(server: &MockServer, number: u32, body: String, hits: u64) {
    Mock::given(method("GET"))
        .and(path(CATALOG_PATH))
        .and(query_param("page", number.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
        .expect(hits)
        .mount(server)
        .await;
}

pub fn catalog_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), CATALOG_PATH)
}

/// Page source against the mock server, without retries
pub fn http_source(server: &MockServer, retry: RetryPolicy) -> HttpPageSource {
    let client = dsa_harvest::catalog::build_http_client(
        &SourceConfig::default(),
        &UserAgentConfig::default(),
    )
    .expect("Failed to build client");
    let base = Url::parse(&catalog_url(server)).expect("Failed to parse catalog URL");
    HttpPageSource::new(client, base, "page", retry)
}

/// Configuration pointing at the mock server, with no inter-page delay
pub fn test_config(server: &MockServer, output_dir: &str) -> Config {
    let mut config = Config::default();
    config.source.base_url = catalog_url(server);
    config.source.inter_page_delay_ms = 0;
    config.source.request_timeout_secs = 5;
    config.source.connect_timeout_secs = 5;
    config.user_agent = UserAgentConfig {
        name: "TestHarvester".to_string(),
        version: "1.0.0".to_string(),
        contact_url: "https://example.com/contact".to_string(),
    };
    config.output.directory = output_dir.to_string();
    config
}
