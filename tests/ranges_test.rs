use std::time::Duration;

use serde_json::json;
use spotop::{
    error::FetchError,
    spotify::{FetchPlan, Schedule, TopItemsClient, aggregate_all, aggregate_one},
    types::{AccessToken, Category, Session, TimeRange},
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> TopItemsClient {
    TopItemsClient::new(
        server.uri(),
        Session::new(AccessToken::new("test-token".to_string(), 3600)),
    )
}

fn artists_page(prefix: &str) -> serde_json::Value {
    let items: Vec<_> = (0..50)
        .map(|n| {
            json!({
                "id": format!("{}-{}", prefix, n),
                "name": format!("Artist {} {}", prefix, n),
                "genres": ["pop"]
            })
        })
        .collect();
    json!({ "items": items })
}

async fn mount_range(server: &MockServer, range: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/me/top/artists"))
        .and(query_param("time_range", range))
        .respond_with(response)
        .mount(server)
        .await;
}

/// short_term answers slowly, medium_term fails, long_term answers at once.
async fn server_with_failing_medium_range() -> MockServer {
    let server = MockServer::start().await;
    mount_range(
        &server,
        "short_term",
        ResponseTemplate::new(200)
            .set_body_json(artists_page("short"))
            .set_delay(Duration::from_millis(200)),
    )
    .await;
    mount_range(&server, "medium_term", ResponseTemplate::new(503)).await;
    mount_range(
        &server,
        "long_term",
        ResponseTemplate::new(200).set_body_json(artists_page("long")),
    )
    .await;
    server
}

async fn assert_partial_failure(schedule: Schedule) {
    let server = server_with_failing_medium_range().await;
    let client = client(&server);

    let outcomes = aggregate_all(
        &client,
        Category::Artists,
        &TimeRange::ALL,
        FetchPlan::new(50, 50).unwrap(),
        schedule,
    )
    .await;

    let ranges: Vec<TimeRange> = outcomes.iter().map(|o| o.range).collect();
    assert_eq!(ranges, TimeRange::ALL.to_vec());

    let short = outcomes[0].result.as_ref().unwrap();
    assert_eq!(short.len(), 50);
    assert_eq!(short[0].item.id(), "short-0");

    assert!(matches!(
        outcomes[1].result,
        Err(FetchError::Status { status: 503, .. })
    ));

    let long = outcomes[2].result.as_ref().unwrap();
    assert_eq!(long[0].rank, 1);
    assert_eq!(long[0].item.id(), "long-0");
}

#[tokio::test]
async fn test_concurrent_aggregation_reports_failed_range_in_place() {
    assert_partial_failure(Schedule::Concurrent).await;
}

#[tokio::test]
async fn test_sequential_aggregation_reports_failed_range_in_place() {
    assert_partial_failure(Schedule::Sequential).await;
}

#[tokio::test]
async fn test_aggregation_follows_caller_order() {
    let server = server_with_failing_medium_range().await;
    let client = client(&server);

    let order = [TimeRange::LongTerm, TimeRange::ShortTerm];
    let outcomes = aggregate_all(
        &client,
        Category::Artists,
        &order,
        FetchPlan::new(50, 50).unwrap(),
        Schedule::Concurrent,
    )
    .await;

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].range, TimeRange::LongTerm);
    assert_eq!(outcomes[1].range, TimeRange::ShortTerm);
    assert!(outcomes.iter().all(|o| o.result.is_ok()));
}

#[tokio::test]
async fn test_aggregate_one() {
    let server = server_with_failing_medium_range().await;
    let client = client(&server);

    let items = aggregate_one(
        &client,
        Category::Artists,
        TimeRange::LongTerm,
        FetchPlan::default(),
    )
    .await
    .unwrap();
    // Both pages come from the same mock, so the list is full
    assert_eq!(items.len(), 100);
    assert_eq!(items[99].rank, 100);

    assert!(
        aggregate_one(
            &client,
            Category::Artists,
            TimeRange::MediumTerm,
            FetchPlan::default()
        )
        .await
        .is_err()
    );
}

#[test]
fn test_time_range_values() {
    let values: Vec<&str> = TimeRange::ALL.iter().map(|r| r.as_str()).collect();
    assert_eq!(values, vec!["short_term", "medium_term", "long_term"]);
    assert_eq!(TimeRange::ShortTerm.label(), "Last 4 weeks");
    assert_eq!(TimeRange::MediumTerm.label(), "Last 6 months");
    assert_eq!(TimeRange::LongTerm.label(), "All time");
}
