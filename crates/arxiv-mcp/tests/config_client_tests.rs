//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

mod common;

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer};

use arxiv_mcp::client::{ArxivClient, SearchQuery};
use arxiv_mcp::config::{Config, limits};
use arxiv_mcp::models::{ArxivId, SortBy};

use common::{atom_response, entry_xml, feed_xml, pdf_response};

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_limits() {
    let config = Config::default().with_max_pages_limit(0);
    assert_eq!(config.max_pages_limit, 1);

    let config = Config::default();
    assert_eq!(config.max_pages_limit, limits::MAX_PAGES_LIMIT);
}

#[test]
fn test_content_cache_mb() {
    let config = Config::default().with_content_cache_mb(8);
    assert_eq!(config.content_cache_bytes, 8 * 1024 * 1024);
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_creation_succeeds() {
    assert!(ArxivClient::new(Config::default()).is_ok());
}

#[tokio::test]
async fn test_get_paper_requests_single_base_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("id_list", "2301.07041"))
        .and(query_param("max_results", "1"))
        .respond_with(atom_response(feed_xml(&[entry_xml("2301.07041v5", "Latest", &["A"], &["cs.CR"])])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ArxivClient::new(Config::for_testing(&mock_server.uri())).unwrap();
    let paper = client.get_paper(&ArxivId::parse("2301.07041v2").unwrap()).await.unwrap().unwrap();

    assert_eq!(paper.id, "2301.07041v5");
    assert_eq!(paper.primary_category.as_deref(), Some("cs.CR"));
}

#[tokio::test]
async fn test_response_cache_avoids_repeat_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(atom_response(feed_xml(&[entry_xml("2301.00001v1", "Cached", &["A"], &["cs.AI"])])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut config = Config::for_testing(&mock_server.uri());
    config.cache_ttl = std::time::Duration::from_secs(60);
    config.cache_max_size = 100;
    let client = ArxivClient::new(config).unwrap();

    let query = SearchQuery {
        query: "cached".to_string(),
        max_results: 10,
        sort_by: SortBy::LastUpdatedDate,
        ..Default::default()
    };
    let first = client.search(&query).await.unwrap();
    let second = client.search(&query).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_download_pdf() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pdf/hep-th/9901001.pdf"))
        .respond_with(pdf_response(b"%PDF-1.4 fake".to_vec()))
        .mount(&mock_server)
        .await;

    let client = ArxivClient::new(Config::for_testing(&mock_server.uri())).unwrap();
    let bytes = client.download_pdf(&ArxivId::parse("hep-th/9901001v2").unwrap()).await.unwrap();

    assert_eq!(bytes, b"%PDF-1.4 fake");
}
