use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    body::Body,
    extract::Query,
    http::{HeaderMap, Request, StatusCode},
    routing::get,
};
use serde_json::{Value, json};
use soilwatch_core::calibration::Calibration;
use soilwatch_feed::feed_client::{FeedClient, FeedClientParams};
use tower::ServiceExt;

use crate::{app, config::DashboardSettings, state::AppState};

pub type RecordedQuery = Arc<Mutex<Option<HashMap<String, String>>>>;

pub type TestEntry = (String, Option<String>, Option<String>);

async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}/feeds.json")
}

fn feed_body(entries: &[TestEntry]) -> Value {
    let feeds: Vec<Value> = entries
        .iter()
        .enumerate()
        .map(|(index, (created_at, field1, field2))| {
            json!({
                "created_at": created_at,
                "entry_id": index + 1,
                "field1": field1,
                "field2": field2,
            })
        })
        .collect();

    json!({ "channel": { "id": 1 }, "feeds": feeds })
}

/// Upstream answering every request with the same entries.
pub async fn static_upstream(entries: &[(&str, Option<&str>, Option<&str>)]) -> String {
    let entries: Vec<TestEntry> = entries
        .iter()
        .map(|(created_at, field1, field2)| {
            (
                created_at.to_string(),
                field1.map(String::from),
                field2.map(String::from),
            )
        })
        .collect();
    let body = feed_body(&entries);

    spawn_upstream(Router::new().route(
        "/feeds.json",
        get(move || {
            let body = body.clone();
            async move { Json(body) }
        }),
    ))
    .await
}

/// Upstream that keeps the query string of the last request.
pub async fn recording_upstream(entries: Vec<TestEntry>) -> (String, RecordedQuery) {
    let recorded: RecordedQuery = Arc::new(Mutex::new(None));
    let body = feed_body(&entries);

    let recorder = recorded.clone();
    let router = Router::new().route(
        "/feeds.json",
        get(move |Query(query): Query<HashMap<String, String>>| {
            let body = body.clone();
            let recorder = recorder.clone();
            async move {
                *recorder.lock().unwrap() = Some(query);
                Json(body)
            }
        }),
    );

    (spawn_upstream(router).await, recorded)
}

pub async fn failing_upstream() -> String {
    spawn_upstream(Router::new().route(
        "/feeds.json",
        get(|| async { (StatusCode::BAD_GATEWAY, "channel offline") }),
    ))
    .await
}

pub fn test_app(feed_url: String) -> Router {
    let feed_client = FeedClient::new(FeedClientParams {
        feed_url,
        api_key: None,
        request_timeout: Duration::from_secs(5),
    })
    .unwrap();

    app(Arc::new(AppState {
        feed_client,
        calibration: Calibration::CAPACITIVE,
        dashboard: DashboardSettings {
            channel_url: Some(String::from("https://thingspeak.com/channels/2907360")),
            ..Default::default()
        },
    }))
}

pub async fn send(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}
