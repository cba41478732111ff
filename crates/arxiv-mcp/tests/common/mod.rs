//! Shared fixtures for integration tests: Atom feeds, generated PDFs and a
//! tool context pointed at a wiremock server.
#![allow(dead_code)]

use std::sync::Arc;

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use arxiv_mcp::client::ArxivClient;
use arxiv_mcp::config::Config;
use arxiv_mcp::pdf::ContentCache;
use arxiv_mcp::tools::ToolContext;

/// Create a test context with a mock server.
pub fn setup_test_context(mock_server: &MockServer) -> ToolContext {
    setup_test_context_with(Config::for_testing(&mock_server.uri()))
}

/// Create a test context from an adjusted test configuration.
pub fn setup_test_context_with(config: Config) -> ToolContext {
    let content_cache = ContentCache::from_config(&config);
    let max_pages_limit = config.max_pages_limit;
    let client = ArxivClient::new(config).unwrap();
    ToolContext::new(Arc::new(client), content_cache, max_pages_limit)
}

/// One Atom `<entry>` in the shape arXiv returns.
pub fn entry_xml(id: &str, title: &str, authors: &[&str], categories: &[&str]) -> String {
    let authors: String = authors
        .iter()
        .map(|a| format!("    <author>\n      <name>{a}</name>\n    </author>\n"))
        .collect();
    let category_tags: String = categories
        .iter()
        .map(|c| format!("    <category term=\"{c}\" scheme=\"http://arxiv.org/schemas/atom\"/>\n"))
        .collect();
    let primary = categories.first().copied().unwrap_or("cs.LG");

    format!(
        r#"  <entry>
    <id>http://arxiv.org/abs/{id}</id>
    <updated>2023-02-01T10:00:00Z</updated>
    <published>2023-01-17T18:58:06Z</published>
    <title>{title}</title>
    <summary>  Abstract of {title}. {filler}
</summary>
{authors}    <link href="http://arxiv.org/abs/{id}" rel="alternate" type="text/html"/>
    <link title="pdf" href="http://arxiv.org/pdf/{id}" rel="related" type="application/pdf"/>
    <arxiv:primary_category xmlns:arxiv="http://arxiv.org/schemas/atom" term="{primary}" scheme="http://arxiv.org/schemas/atom"/>
{category_tags}  </entry>
"#,
        filler = "More detail follows. ".repeat(12),
    )
}

/// Wrap entries in an Atom feed.
pub fn feed_xml(entries: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <link href="http://arxiv.org/api/query" rel="self" type="application/atom+xml"/>
  <title type="html">ArXiv Query</title>
  <id>http://arxiv.org/api/test</id>
  <updated>2023-01-20T00:00:00-05:00</updated>
  <opensearch:totalResults xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">{}</opensearch:totalResults>
{}</feed>
"#,
        entries.len(),
        entries.concat()
    )
}

/// An Atom response body for the API.
pub fn atom_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("Content-Type", "application/atom+xml; charset=utf-8")
        .set_body_string(body)
}

/// A PDF response body.
pub fn pdf_response(bytes: Vec<u8>) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("Content-Type", "application/pdf")
        .set_body_bytes(bytes)
}

/// Mount an `id_list` lookup returning one paper.
pub async fn mount_paper(mock_server: &MockServer, id: &str, title: &str) {
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("id_list", id))
        .respond_with(atom_response(feed_xml(&[entry_xml(
            &format!("{id}v1"),
            title,
            &["Ada Lovelace", "Alan Turing"],
            &["cs.LG", "stat.ML"],
        )])))
        .mount(mock_server)
        .await;
}

/// Build a PDF with one text line per page.
pub fn pdf_with_texts(texts: &[String]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 10.into()]),
                Operation::new("Td", vec![36.into(), 800.into()]),
                Operation::new("Tj", vec![Object::string_literal(text.as_str())]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = i64::try_from(kids.len()).unwrap();
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// A PDF whose page `n` reads `"Page n"` followed by `words` filler words.
pub fn pdf_with_pages(count: usize, words: usize) -> Vec<u8> {
    let texts: Vec<String> =
        (1..=count).map(|n| format!("Page {n} {}", "lorem ".repeat(words)).trim_end().to_string()).collect();
    pdf_with_texts(&texts)
}
