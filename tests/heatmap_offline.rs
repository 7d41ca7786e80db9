use httpmock::{Method::GET, MockServer};
use url::Url;

use marketpulse::heatmap;
use marketpulse::sector::meta;
use marketpulse::sector::SectorResult;
use marketpulse::{Market, PulseError};

fn sector_result(
    sector_id: &str,
    category_id: &str,
    category_name: &str,
    volume: f64,
    rate: f64,
) -> SectorResult {
    SectorResult {
        sector_id: sector_id.to_string(),
        sector_name: sector_id.to_string(),
        category_id: category_id.to_string(),
        category_name: category_name.to_string(),
        articles: Vec::new(),
        news_volume: volume,
        change_rate: rate,
        cached_at: String::new(),
        sector_briefing: None,
        rising_keywords: Vec::new(),
    }
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

#[test]
fn aggregate_sums_volume_and_averages_change_rate() {
    let sectors = vec![
        sector_result("US_IT_1", "US_IT", "Technology", 100.0, 2.0),
        sector_result("US_IT_2", "US_IT", "Technology", 50.0, -1.0),
        sector_result("US_EN_1", "US_EN", "Energy", 30.0, 1.33),
    ];

    let snapshot = heatmap::aggregate(Market::Us, sectors).unwrap();
    assert_eq!(snapshot.market, Market::Us);
    assert_eq!(snapshot.categories.len(), 2);

    let tech = &snapshot.categories[0];
    assert_eq!(tech.category_id, "US_IT");
    assert_eq!(tech.sectors.len(), 2);
    assert_eq!(tech.total_volume, 150.0);
    assert_eq!(tech.avg_change_rate, 0.5);

    let energy = &snapshot.categories[1];
    assert_eq!(energy.total_volume, 30.0);
    assert_eq!(energy.avg_change_rate, 1.33);
}

#[test]
fn aggregate_orders_categories_by_first_appearance() {
    let sectors = vec![
        sector_result("US_EN_1", "US_EN", "Energy", 1.0, 0.0),
        sector_result("US_IT_1", "US_IT", "Technology", 1.0, 0.0),
        sector_result("US_EN_2", "US_EN", "Energy", 1.0, 0.0),
    ];

    let snapshot = heatmap::aggregate(Market::Us, sectors).unwrap();
    let ids: Vec<&str> = snapshot
        .categories
        .iter()
        .map(|c| c.category_id.as_str())
        .collect();
    assert_eq!(ids, vec!["US_EN", "US_IT"]);
    assert_eq!(snapshot.categories[0].sectors.len(), 2);
}

#[test]
fn aggregate_of_nothing_is_no_data() {
    let err = heatmap::aggregate(Market::Kr, Vec::new()).unwrap_err();
    assert!(matches!(err, PulseError::NoData));
}

#[tokio::test]
async fn background_refresh_runs_the_fanout_off_task_and_repopulates_the_cache() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200)
            .header("content-type", "application/rss+xml")
            .body(rss_feed(1));
    });

    let cache_dir = tempfile::tempdir().unwrap();
    let client = marketpulse::PulseClient::builder()
        .base_feed(Url::parse(&server.base_url()).unwrap())
        .cache_dir(cache_dir.path())
        .build()
        .unwrap();

    // the whole fan-out must be movable into a spawned task
    let task = marketpulse::RefreshTask::spawn(client.clone(), Market::Us);
    let refreshed = task.join().await;
    assert_eq!(refreshed, Some(28));

    let stats = client.cache_stats(Market::Us).unwrap();
    assert_eq!(stats.total, 28);
    assert_eq!(stats.valid, 28);
}

#[tokio::test]
async fn full_market_fanout_tolerates_one_failing_sector() {
    let server = MockServer::start();

    // each sector queries with its own keyword; one of them is broken
    for id in meta::sector_ids(Market::Us) {
        let keyword = meta::sector_meta(id).unwrap().keywords[0];
        server.mock(|when, then| {
            when.method(GET).path("/").query_param("q", keyword);
            if id == "US_HC_1" {
                then.status(500);
            } else {
                then.status(200)
                    .header("content-type", "application/rss+xml")
                    .body(rss_feed(2));
            }
        });
    }

    // no chat key: every fetched article passes classification by default
    let client = marketpulse::PulseClient::builder()
        .base_feed(Url::parse(&server.base_url()).unwrap())
        .build()
        .unwrap();

    let snapshot = client.build_heatmap(Market::Us).await.unwrap();

    assert_eq!(snapshot.market, Market::Us);
    assert!(!snapshot.updated_at.is_empty());
    assert_eq!(snapshot.categories.len(), 11);

    let total_sectors: usize = snapshot.categories.iter().map(|c| c.sectors.len()).sum();
    assert_eq!(total_sectors, 28);

    // the failing sector is still present, just empty
    let biotech = snapshot
        .categories
        .iter()
        .flat_map(|c| &c.sectors)
        .find(|s| s.sector_id == "US_HC_1")
        .unwrap();
    assert!(biotech.articles.is_empty());
    assert_eq!(biotech.news_volume, 0.0);

    // every other sector saw the two-entry feed
    let healthy = snapshot
        .categories
        .iter()
        .flat_map(|c| &c.sectors)
        .filter(|s| s.sector_id != "US_HC_1");
    for sector in healthy {
        assert_eq!(sector.news_volume, 2.0);
        assert_eq!(sector.articles.len(), 2);
    }

    // category rollups reflect the survivors
    let healthcare = snapshot
        .categories
        .iter()
        .find(|c| c.category_id == "US_HC")
        .unwrap();
    assert_eq!(healthcare.total_volume, 4.0);
}
