//! Mock-based tool tests using wiremock.
//!
//! These tests verify tool behavior by mocking the arXiv query API and PDF
//! endpoint.

mod common;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use arxiv_mcp::tools::{
    McpTool, PaperContentTool, PaperDetailsTool, SearchPapersTool, SummarizePaperTool,
};

use common::{
    atom_response, entry_xml, feed_xml, mount_paper, pdf_response, pdf_with_pages,
    setup_test_context,
};

// =============================================================================
// search_papers
// =============================================================================

#[tokio::test]
async fn test_search_builds_arxiv_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "all:\"machine learning\" AND au:Hinton AND cat:cs.LG"))
        .and(query_param("max_results", "5"))
        .and(query_param("sortBy", "submittedDate"))
        .and(query_param("sortOrder", "descending"))
        .respond_with(atom_response(feed_xml(&[
            entry_xml("2301.00001v1", "Deep Nets", &["Geoffrey Hinton"], &["cs.LG"]),
            entry_xml("2301.00002v2", "Capsules", &["Geoffrey Hinton", "Sara Sabour"], &["cs.CV"]),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = SearchPapersTool
        .execute(
            &ctx,
            json!({
                "query": "machine learning",
                "author": "Hinton",
                "category": "cs.LG",
                "max_results": 5,
                "sort_by": "submittedDate"
            }),
        )
        .await
        .unwrap();

    assert!(result.starts_with("Found 2 papers:\n\n1. **Deep Nets**\n"));
    assert!(result.contains("2. **Capsules**"));
    assert!(result.contains("   Authors: Geoffrey Hinton, Sara Sabour\n"));
    assert!(result.contains("   arXiv ID: 2301.00002v2\n"));
    assert!(result.contains("   URL: http://arxiv.org/abs/2301.00001v1\n"));
}

#[tokio::test]
async fn test_search_clamps_max_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("max_results", "100"))
        .respond_with(atom_response(feed_xml(&[])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = SearchPapersTool
        .execute(&ctx, json!({"query": "graphs", "max_results": 1000}))
        .await
        .unwrap();

    assert_eq!(result, "No papers found matching your query.");
}

#[tokio::test]
async fn test_search_abstract_preview_truncated() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(atom_response(feed_xml(&[entry_xml(
            "2301.00001v1",
            "Long Abstract",
            &["A. Author"],
            &["cs.AI"],
        )])))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = SearchPapersTool.execute(&ctx, json!({"query": "long"})).await.unwrap();

    let abstract_line = result.lines().find(|l| l.trim_start().starts_with("Abstract:")).unwrap();
    let preview = abstract_line.trim_start().trim_start_matches("Abstract: ");
    assert!(preview.ends_with("..."));
    assert_eq!(preview.chars().count(), 200 + 3);
}

#[tokio::test]
async fn test_search_json_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(atom_response(feed_xml(&[entry_xml(
            "2301.00001v1",
            "Json Paper",
            &["A. Author"],
            &["cs.AI"],
        )])))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = SearchPapersTool
        .execute(&ctx, json!({"query": "json", "response_format": "json"}))
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&result).unwrap();
    assert_eq!(value["total"], 1);
    assert_eq!(value["papers"][0]["id"], "2301.00001v1");
    assert_eq!(value["papers"][0]["primaryCategory"], "cs.AI");
}

// =============================================================================
// get_paper_details
// =============================================================================

#[tokio::test]
async fn test_details_strips_version_for_lookup() {
    let mock_server = MockServer::start().await;
    mount_paper(&mock_server, "2301.07041", "Verifiable FHE").await;

    let ctx = setup_test_context(&mock_server);
    let result = PaperDetailsTool
        .execute(&ctx, json!({"arxiv_id": "https://arxiv.org/abs/2301.07041v3"}))
        .await
        .unwrap();

    assert!(result.starts_with("**Verifiable FHE**\n\n**arXiv ID:** 2301.07041v1\n"));
    assert!(result.contains("**Authors:** Ada Lovelace, Alan Turing\n"));
    assert!(result.contains("**Published:** 2023-01-17T18:58:06Z\n"));
    assert!(result.contains("**Updated:** 2023-02-01T10:00:00Z\n"));
    assert!(result.contains("**Categories:** cs.LG, stat.ML\n"));
    assert!(result.contains("**PDF:** http://arxiv.org/pdf/2301.07041v1\n"));
    assert!(result.contains("**Abstract:**\nAbstract of Verifiable FHE."));
}

#[tokio::test]
async fn test_details_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("id_list", "9912.99999"))
        .respond_with(atom_response(feed_xml(&[])))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result =
        PaperDetailsTool.execute(&ctx, json!({"arxiv_id": "9912.99999"})).await.unwrap();

    assert_eq!(result, "Paper with ID 9912.99999 not found.");
}

#[tokio::test]
async fn test_details_json_format() {
    let mock_server = MockServer::start().await;
    mount_paper(&mock_server, "hep-th/9901001", "Old Style").await;

    let ctx = setup_test_context(&mock_server);
    let result = PaperDetailsTool
        .execute(&ctx, json!({"arxiv_id": "hep-th/9901001", "response_format": "json"}))
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&result).unwrap();
    assert_eq!(value["id"], "hep-th/9901001v1");
    assert_eq!(value["primaryCategory"], "cs.LG");
    assert_eq!(value["pdfUrl"], "http://arxiv.org/pdf/hep-th/9901001v1");
}

// =============================================================================
// get_paper_content
// =============================================================================

#[tokio::test]
async fn test_content_renders_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pdf/2301.07041.pdf"))
        .respond_with(pdf_response(pdf_with_pages(3, 30)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = PaperContentTool
        .execute(&ctx, json!({"arxiv_id": "2301.07041v2"}))
        .await
        .unwrap();

    assert!(result.starts_with("--- Page 1 ---\nPage 1 lorem"));
    assert!(result.contains("\n\n--- Page 2 ---\nPage 2 lorem"));
    assert!(result.contains("\n\n--- Page 3 ---\nPage 3 lorem"));
    assert!(!result.contains("Warning"));
}

#[tokio::test]
async fn test_content_respects_max_pages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pdf/2301.07041.pdf"))
        .respond_with(pdf_response(pdf_with_pages(6, 30)))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = PaperContentTool
        .execute(&ctx, json!({"arxiv_id": "2301.07041", "max_pages": 2}))
        .await
        .unwrap();

    assert!(result.contains("--- Page 2 ---"));
    assert!(!result.contains("--- Page 3 ---"));
    assert!(result.contains("[Extracted 2 of 6 pages; 4 more not shown."));
}

#[tokio::test]
async fn test_content_short_text_warning() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pdf/2301.07041.pdf"))
        .respond_with(pdf_response(pdf_with_pages(1, 0)))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result =
        PaperContentTool.execute(&ctx, json!({"arxiv_id": "2301.07041"})).await.unwrap();

    assert!(result.starts_with(
        "Warning: Extracted text is very short. PDF might be image-based or have extraction issues.\n\n"
    ));
}

#[tokio::test]
async fn test_content_json_format() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pdf/2301.07041.pdf"))
        .respond_with(pdf_response(pdf_with_pages(4, 30)))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result = PaperContentTool
        .execute(&ctx, json!({"arxiv_id": "2301.07041", "max_pages": 3, "response_format": "json"}))
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&result).unwrap();
    assert_eq!(value["arxivId"], "2301.07041");
    assert_eq!(value["totalPages"], 4);
    assert_eq!(value["extractedPages"], 3);
    assert_eq!(value["pages"].as_array().unwrap().len(), 3);
    assert_eq!(value["pages"][2]["page"], 3);
    assert!(value.get("warning").is_none());
}

// =============================================================================
// summarize_paper
// =============================================================================

#[tokio::test]
async fn test_summarize_adds_content_preview() {
    let mock_server = MockServer::start().await;
    mount_paper(&mock_server, "2301.07041", "Verifiable FHE").await;

    Mock::given(method("GET"))
        .and(path("/pdf/2301.07041.pdf"))
        .respond_with(pdf_response(pdf_with_pages(5, 80)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result =
        SummarizePaperTool.execute(&ctx, json!({"arxiv_id": "2301.07041"})).await.unwrap();

    assert!(result.starts_with("**Verifiable FHE**\n\n"));
    let preview = result.split("\n\n**Introduction/Content Preview:**\n").nth(1).unwrap();
    assert!(preview.starts_with("--- Page 1 ---"));
    assert!(preview.ends_with("..."));
    // Summaries read at most three pages.
    assert!(!preview.contains("--- Page 4 ---"));
}

#[tokio::test]
async fn test_summarize_falls_back_to_details_when_pdf_fails() {
    let mock_server = MockServer::start().await;
    mount_paper(&mock_server, "2301.07041", "Verifiable FHE").await;

    Mock::given(method("GET"))
        .and(path("/pdf/2301.07041.pdf"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result =
        SummarizePaperTool.execute(&ctx, json!({"arxiv_id": "2301.07041"})).await.unwrap();

    assert!(result.starts_with("**Verifiable FHE**"));
    assert!(!result.contains("Content Preview"));
}

#[tokio::test]
async fn test_summarize_short_content_has_no_preview() {
    let mock_server = MockServer::start().await;
    mount_paper(&mock_server, "2301.07041", "Verifiable FHE").await;

    Mock::given(method("GET"))
        .and(path("/pdf/2301.07041.pdf"))
        .respond_with(pdf_response(pdf_with_pages(2, 5)))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result =
        SummarizePaperTool.execute(&ctx, json!({"arxiv_id": "2301.07041"})).await.unwrap();

    assert!(!result.contains("Content Preview"));
}

#[tokio::test]
async fn test_summarize_missing_paper_skips_pdf() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(atom_response(feed_xml(&[])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pdf/2301.07041.pdf"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let result =
        SummarizePaperTool.execute(&ctx, json!({"arxiv_id": "2301.07041"})).await.unwrap();

    assert_eq!(result, "Paper with ID 2301.07041 not found.");
}
