mod common;

use axum::{http::StatusCode, Router};
use common::{app, send};
use serde_json::json;

async fn scrape(app: &Router) -> String {
    let (status, bytes) = send(app, "GET", "/metrics", None).await;
    assert_eq!(status, StatusCode::OK);
    String::from_utf8(bytes).unwrap()
}

/// Value of one exposition series, 0 when the series does not exist yet.
fn series(text: &str, name_and_labels: &str) -> f64 {
    text.lines()
        .find_map(|line| {
            line.strip_prefix(name_and_labels)
                .and_then(|rest| rest.strip_prefix(' '))
                .and_then(|value| value.trim().parse().ok())
        })
        .unwrap_or(0.0)
}

/// Sum of `request_count` over every label set.
fn total_requests(text: &str) -> f64 {
    text.lines()
        .filter(|line| line.starts_with("request_count{"))
        .filter_map(|line| line.rsplit(' ').next())
        .filter_map(|value| value.parse::<f64>().ok())
        .sum()
}

// One test per binary: the registry is process-wide, so concurrent tests would skew the counts.
#[tokio::test]
async fn request_counter_tracks_every_prior_request() {
    let app = app();
    let health = r#"request_count{method="GET",route="/health",status="200"}"#;
    let scrapes = r#"request_count{method="GET",route="/metrics",status="200"}"#;

    let first = scrape(&app).await;
    assert_eq!(series(&first, scrapes), 0.0);
    let before = total_requests(&first);

    send(&app, "GET", "/health", None).await;
    send(&app, "GET", "/health", None).await;
    send(&app, "POST", "/items/", Some(json!({"price": 1}))).await;
    send(&app, "GET", "/nowhere", None).await;

    let second = scrape(&app).await;
    // four requests plus the first scrape
    assert_eq!(total_requests(&second), before + 5.0);
    assert_eq!(series(&second, scrapes), 1.0);
    assert_eq!(series(&second, health), 2.0);
    assert_eq!(
        series(&second, r#"request_count{method="POST",route="/items/",status="422"}"#),
        1.0
    );
    assert_eq!(
        series(&second, r#"request_count{method="GET",route="unmatched",status="404"}"#),
        1.0
    );
    assert_eq!(
        series(
            &second,
            r#"request_latency_seconds_count{method="GET",route="/health",status="200"}"#
        ),
        2.0
    );

    let third = scrape(&app).await;
    assert_eq!(total_requests(&third), before + 6.0);
    assert_eq!(series(&third, scrapes), 2.0);

    assert!(third.contains("# TYPE request_latency_seconds histogram"));
    assert!(third.contains("app_info{"));
    #[cfg(target_os = "linux")]
    assert!(third.contains("process_resident_memory_bytes"));
}
