//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: token request → timeline walk → sink output

use futures::StreamExt;
use serde_json::{json, Value};
use tweet_history::auth::Authenticator;
use tweet_history::config::{ClientConfig, Credentials, WalkConfig};
use tweet_history::http::HttpClient;
use tweet_history::pagination::PaginationEngine;
use tweet_history::sink::{drain, JsonLinesSink};
use tweet_history::timeline::HttpTimelineFetcher;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMELINE: &str = "/1.1/statuses/user_timeline.json";

fn tweets(ids: &[u64]) -> Value {
    Value::Array(
        ids.iter()
            .map(|id| {
                json!({
                    "id": id,
                    "created_at": "Wed Oct 10 20:19:24 +0000 2018",
                    "full_text": format!("tweet {id}"),
                    "lang": "en"
                })
            })
            .collect(),
    )
}

async fn setup(server: &MockServer) -> (HttpClient, Credentials) {
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(header(
            "Content-Type",
            "application/x-www-form-urlencoded;charset=UTF-8",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token_type": "bearer",
            "access_token": "integration-token"
        })))
        .expect(1)
        .mount(server)
        .await;

    let config = ClientConfig::builder().base_url(server.uri()).build();
    let http = HttpClient::with_config(config).unwrap();
    (http, Credentials::new("key", "secret"))
}

async fn mount_page(server: &MockServer, cursor: Option<(&str, &str)>, ids: &[u64]) {
    let mock = Mock::given(method("GET"))
        .and(path(TIMELINE))
        .and(header("Authorization", "Bearer integration-token"))
        .and(query_param("screen_name", "jack"));

    let mock = match cursor {
        Some((key, value)) => mock.and(query_param(key, value)),
        None => mock
            .and(query_param_is_missing("max_id"))
            .and(query_param_is_missing("since_id")),
    };

    mock.respond_with(ResponseTemplate::new(200).set_body_json(tweets(ids)))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// End-to-End Walk Tests
// ============================================================================

#[tokio::test]
async fn test_walk_to_json_lines() {
    let mock_server = MockServer::start().await;
    let (http, credentials) = setup(&mock_server).await;

    mount_page(&mock_server, None, &[200, 199]).await;
    mount_page(&mock_server, Some(("max_id", "199")), &[199, 150, 149]).await;
    mount_page(&mock_server, Some(("max_id", "149")), &[149]).await;
    mount_page(&mock_server, Some(("since_id", "200")), &[]).await;

    let token = Authenticator::new(credentials, http.clone())
        .authenticate()
        .await
        .unwrap();
    let engine = PaginationEngine::new(HttpTimelineFetcher::new(http));

    let mut stream = engine.stream_all_posts(&token, "jack");
    let mut sink = JsonLinesSink::new(Vec::new());
    let count = drain(&mut stream, &mut sink).await.unwrap();
    let stats = stream.finish().await.unwrap();

    assert_eq!(count, 5);
    assert_eq!(stats.requests, 4);

    let out = String::from_utf8(sink.into_inner()).unwrap();
    let ids: Vec<u64> = out
        .lines()
        .map(|line| serde_json::from_str::<Value>(line).unwrap()["id"].as_u64().unwrap())
        .collect();
    // The page boundary post is emitted by both pages
    assert_eq!(ids, vec![200, 199, 199, 150, 149]);
}

#[tokio::test]
async fn test_walk_with_dedup_and_catchup() {
    let mock_server = MockServer::start().await;
    let (http, credentials) = setup(&mock_server).await;

    mount_page(&mock_server, None, &[100, 99]).await;
    mount_page(&mock_server, Some(("max_id", "99")), &[99, 98]).await;
    mount_page(&mock_server, Some(("max_id", "98")), &[98]).await;
    mount_page(&mock_server, Some(("since_id", "100")), &[102, 101]).await;

    let token = Authenticator::new(credentials, http.clone())
        .authenticate()
        .await
        .unwrap();
    let engine = PaginationEngine::new(HttpTimelineFetcher::new(http))
        .with_config(WalkConfig::new().with_dedup(true));

    let ids: Vec<u64> = engine
        .stream_all_posts(&token, "jack")
        .map(|post| post.unwrap().id)
        .collect()
        .await;

    assert_eq!(ids, vec![100, 99, 98, 102, 101]);
}

#[tokio::test]
async fn test_walk_survives_rejected_older_page() {
    let mock_server = MockServer::start().await;
    let (http, credentials) = setup(&mock_server).await;

    mount_page(&mock_server, None, &[100, 99]).await;
    Mock::given(method("GET"))
        .and(path(TIMELINE))
        .and(query_param("max_id", "99"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, Some(("since_id", "100")), &[]).await;

    let token = Authenticator::new(credentials, http.clone())
        .authenticate()
        .await
        .unwrap();
    let engine = PaginationEngine::new(HttpTimelineFetcher::new(http));

    let posts: Vec<_> = engine.stream_all_posts(&token, "jack").collect().await;

    assert!(posts.iter().all(Result::is_ok));
    assert_eq!(posts.len(), 2);
}

#[tokio::test]
async fn test_latest_page_only() {
    let mock_server = MockServer::start().await;
    let (http, credentials) = setup(&mock_server).await;

    Mock::given(method("GET"))
        .and(path(TIMELINE))
        .and(query_param("count", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tweets(&[10, 9, 8])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let token = Authenticator::new(credentials, http.clone())
        .authenticate()
        .await
        .unwrap();
    let engine = PaginationEngine::new(HttpTimelineFetcher::new(http));
    let page = engine.latest_page(&token, "jack", 3).await.unwrap();

    assert_eq!(page.ids(), vec![10, 9, 8]);
    assert!(page.newest().unwrap().created_at_utc().is_some());
}
