use httpmock::{Method::GET, MockServer};
use serde_json::json;
use url::Url;

use marketpulse::{Market, PulseClient, PulseError, sector::raw_search};

fn keyword_client(server: &MockServer) -> PulseClient {
    PulseClient::builder()
        .base_search(Url::parse(&server.base_url()).unwrap())
        .search_credentials("id-123", "secret-456")
        .build()
        .unwrap()
}

#[tokio::test]
async fn keyword_adapter_builds_an_authenticated_paged_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/")
            .query_param("query", "반도체 주가")
            .query_param("display", "10")
            .query_param("start", "1")
            .query_param("sort", "date")
            .header("X-Naver-Client-Id", "id-123")
            .header("X-Naver-Client-Secret", "secret-456");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                json!({
                    "total": 1234,
                    "items": [
                        {
                            "title": "<b>삼성전자</b> 주가 &quot;상승&quot;",
                            "link": "https://news.example.com/1",
                            "description": "반도체 업황 개선",
                            "pubDate": "Mon, 24 Aug 2026 10:00:00 +0900",
                            "originallink": "https://press.example.com/1"
                        }
                    ]
                })
                .to_string(),
            );
    });

    let client = keyword_client(&server);
    let articles = raw_search(&client, Market::Kr, "반도체 주가", 10)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(articles.len(), 1);
    // markup and entities are stripped during normalization
    assert_eq!(articles[0].title, "삼성전자 주가 \"상승\"");
    assert_eq!(articles[0].source.label(), "Naver");
    assert_eq!(
        articles[0].original_link.as_deref(),
        Some("https://press.example.com/1")
    );
}

#[tokio::test]
async fn keyword_adapter_without_credentials_fails_before_any_request() {
    let server = MockServer::start();
    let client = PulseClient::builder()
        .base_search(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap();

    let err = raw_search(&client, Market::Kr, "은행 주가", 10)
        .await
        .unwrap_err();
    assert!(matches!(err, PulseError::MissingCredentials(_)));
}

#[tokio::test]
async fn keyword_adapter_surfaces_upstream_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(429);
    });

    let client = keyword_client(&server);
    let err = raw_search(&client, Market::Kr, "증권 주가", 10)
        .await
        .unwrap_err();
    assert!(matches!(err, PulseError::Status { status: 429, .. }));
}

fn rss_feed(n: usize) -> String {
    let items: String = (0..n)
        .map(|i| {
            format!(
                "<item><title>Item {i}</title>\
                 <link>https://example.com/{i}</link>\
                 <description>Desc {i}</description>\
                 <pubDate>Mon, 24 Aug 2026 10:00:00 GMT</pubDate></item>"
            )
        })
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <rss version=\"2.0\"><channel><title>feed</title>{items}</channel></rss>"
    )
}

#[tokio::test]
async fn feed_adapter_parses_entries() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/").query_param("q", "biotech stocks");
        then.status(200)
            .header("content-type", "application/rss+xml")
            .body(rss_feed(3));
    });

    let client = PulseClient::builder()
        .base_feed(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap();
    let articles = raw_search(&client, Market::Us, "biotech stocks", 10)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(articles.len(), 3);
    assert_eq!(articles[0].title, "Item 0");
    assert_eq!(articles[0].link, "https://example.com/0");
    assert_eq!(articles[0].source.label(), "Google News");
}

#[tokio::test]
async fn feed_adapter_rejects_unparseable_bodies() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body("this is not xml at all");
    });

    let client = PulseClient::builder()
        .base_feed(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap();
    let err = raw_search(&client, Market::Us, "telecom stocks", 10)
        .await
        .unwrap_err();
    assert!(matches!(err, PulseError::Data(_)));
}
