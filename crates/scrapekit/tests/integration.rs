//! Integration tests for ScrapeKit using wiremock

use scrapekit::{
    scrape_links, scrape_metadata, scrape_structured, scrape_text, FetchError, FetchOptions, Link,
    Metadata, Scraper, StructureKind, StructuredRecord, TableRecord, Tool, ToolError,
    EXTRACT_LINKS, SCRAPE_URL,
};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Test Page</title>
    <meta name="description" content="A page for testing">
    <meta property="og:title" content="OG Test">
</head>
<body>
    <header>Site header</header>
    <nav><a href="/home">Home</a></nav>
    <main id="content">
        <h1>Hello World</h1>
        <p>This is a <strong>test</strong> paragraph.</p>
        <a href="docs/intro" title="Intro">Read more</a>
        <ul>
            <li>Item 1</li>
            <li>Item 2
                <ol><li>Nested</li></ol>
            </li>
        </ul>
        <h2>Data</h2>
        <table>
            <tr><th>Name</th><th>Value</th></tr>
            <tr><td>a</td><td>1</td></tr>
        </table>
    </main>
    <script>alert('bad');</script>
    <footer>Copyright</footer>
</body>
</html>"#;

async fn serve_page(body: &str) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/blog/post"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "text/html"))
        .mount(&mock_server)
        .await;

    mock_server
}

#[tokio::test]
async fn test_scrape_text() {
    let mock_server = serve_page(PAGE).await;
    let url = format!("{}/blog/post", mock_server.uri());

    let text = scrape_text(&url, None).await.unwrap();
    assert!(text.starts_with("Test Page\nHello World\nThis is a\ntest\nparagraph."));
    assert!(text.contains("Item 1"));
    assert!(!text.contains("Site header"));
    assert!(!text.contains("Home"));
    assert!(!text.contains("alert"));
    assert!(!text.contains("Copyright"));
}

#[tokio::test]
async fn test_scrape_text_with_selector() {
    let mock_server = serve_page(PAGE).await;
    let url = format!("{}/blog/post", mock_server.uri());

    let text = scrape_text(&url, Some("h1, h2")).await.unwrap();
    assert_eq!(text, "Hello World\n\nData");

    let text = scrape_text(&url, Some(".missing")).await.unwrap();
    assert_eq!(text, "");
}

#[tokio::test]
async fn test_scrape_links_resolves_against_page_url() {
    let mock_server = serve_page(PAGE).await;
    let url = format!("{}/blog/post", mock_server.uri());

    let links = scrape_links(&url).await.unwrap();
    assert_eq!(
        links,
        vec![
            Link {
                url: format!("{}/home", mock_server.uri()),
                text: "Home".to_string(),
                title: String::new(),
            },
            Link {
                url: format!("{}/blog/docs/intro", mock_server.uri()),
                text: "Read more".to_string(),
                title: "Intro".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_scrape_metadata() {
    let mock_server = serve_page(PAGE).await;
    let url = format!("{}/blog/post", mock_server.uri());

    let metadata = scrape_metadata(&url).await.unwrap();
    assert_eq!(
        metadata,
        Metadata {
            title: "Test Page".to_string(),
            description: "A page for testing".to_string(),
            og_title: "OG Test".to_string(),
            ..Default::default()
        }
    );
}

#[tokio::test]
async fn test_scrape_structured() {
    let mock_server = serve_page(PAGE).await;
    let url = format!("{}/blog/post", mock_server.uri());

    let tables = scrape_structured(&url, StructureKind::Tables).await.unwrap();
    assert_eq!(
        tables,
        vec![StructuredRecord::Table(TableRecord {
            table_index: 0,
            data: vec![
                vec!["Name".to_string(), "Value".to_string()],
                vec!["a".to_string(), "1".to_string()],
            ],
        })]
    );

    let headings = scrape_structured(&url, StructureKind::Headings)
        .await
        .unwrap();
    assert_eq!(
        serde_json::to_value(&headings).unwrap(),
        json!([
            {"level": "h1", "text": "Hello World"},
            {"level": "h2", "text": "Data"}
        ])
    );

    let lists = scrape_structured(&url, StructureKind::Lists).await.unwrap();
    let lists = serde_json::to_value(&lists).unwrap();
    assert_eq!(lists[0]["type"], "ul");
    assert_eq!(lists[0]["items"].as_array().unwrap().len(), 2);
    assert_eq!(lists[1], json!({"type": "ol", "items": ["Nested"]}));
}

#[tokio::test]
async fn test_malformed_html_does_not_fail() {
    let mock_server =
        serve_page("<title>Broken<body><ul><li>one<li>two</ul><table><tr><td>x").await;
    let url = format!("{}/blog/post", mock_server.uri());

    let metadata = scrape_metadata(&url).await.unwrap();
    assert_eq!(metadata.title, "Broken<body><ul><li>one<li>two</ul><table><tr><td>x");

    let mock_server = serve_page("<ul><li>one<li>two</ul><table><tr><td>x").await;
    let url = format!("{}/blog/post", mock_server.uri());
    let lists = scrape_structured(&url, StructureKind::Lists).await.unwrap();
    assert_eq!(
        serde_json::to_value(&lists).unwrap(),
        json!([{"type": "ul", "items": ["one", "two"]}])
    );
    let tables = scrape_structured(&url, StructureKind::Tables).await.unwrap();
    assert_eq!(tables.len(), 1);
}

#[tokio::test]
async fn test_4xx_status_is_fetch_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/not-found"))
        .respond_with(ResponseTemplate::new(404).set_body_raw("<p>Not Found</p>", "text/html"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/not-found", mock_server.uri());
    let result = scrape_text(&url, None).await;
    assert!(matches!(result, Err(FetchError::HttpStatus(404))));
}

#[tokio::test]
async fn test_5xx_status_is_fetch_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/error"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/error", mock_server.uri());
    let result = scrape_links(&url).await;
    assert!(matches!(result, Err(FetchError::HttpStatus(500))));
}

#[tokio::test]
async fn test_binary_content_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/image.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(vec![0x89, 0x50, 0x4E, 0x47])
                .insert_header("content-type", "image/png"),
        )
        .mount(&mock_server)
        .await;

    let url = format!("{}/image.png", mock_server.uri());
    let result = scrape_metadata(&url).await;
    assert!(matches!(
        result,
        Err(FetchError::UnsupportedContentType(ct)) if ct == "image/png"
    ));
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<p>late</p>", "text/html")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(FetchOptions {
        timeout: Duration::from_millis(200),
        ..Default::default()
    });
    let url = format!("{}/slow", mock_server.uri());
    let result = scraper.scrape_text(&url, None).await;
    assert!(matches!(result, Err(FetchError::Timeout(_))));
}

#[tokio::test]
async fn test_connect_error() {
    // Nothing listens on port 1
    let result = scrape_text("http://127.0.0.1:1/", None).await;
    assert!(matches!(result, Err(FetchError::ConnectError(_))));
}

#[tokio::test]
async fn test_custom_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "TestAgent/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<title>UA</title>", "text/html"))
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(FetchOptions {
        user_agent: Some("TestAgent/1.0".to_string()),
        ..Default::default()
    });
    let url = format!("{}/", mock_server.uri());
    let metadata = scraper.scrape_metadata(&url).await.unwrap();
    assert_eq!(metadata.title, "UA");
}

#[tokio::test]
async fn test_tool_execute() {
    let mock_server = serve_page(PAGE).await;
    let url = format!("{}/blog/post", mock_server.uri());
    let tool = Tool::builder().timeout(Duration::from_secs(5)).build();

    let out = tool
        .execute(SCRAPE_URL, json!({"url": url, "selector": "#content p"}))
        .await
        .unwrap();
    assert_eq!(
        out,
        format!("Content from {}:\n\nThis is a test paragraph.", url)
    );

    let out = tool
        .execute(EXTRACT_LINKS, json!({"url": url}))
        .await
        .unwrap();
    assert!(out.starts_with(&format!("Found 2 links on {}:\n\n[", url)));
}

#[tokio::test]
async fn test_tool_execute_invalid_scheme() {
    let tool = Tool::default();
    let err = tool
        .execute(SCRAPE_URL, json!({"url": "ftp://example.com"}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::Scrape(FetchError::InvalidUrlScheme)));
}
