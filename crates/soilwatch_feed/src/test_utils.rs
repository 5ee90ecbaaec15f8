use std::time::Duration;

use axum::Router;
use serde_json::{Value, json};

use crate::feed_client::{FeedClient, FeedClientParams};

/// Serves `router` on an ephemeral port and returns its feeds endpoint.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}/feeds.json")
}

pub fn test_client(feed_url: String) -> FeedClient {
    FeedClient::new(FeedClientParams {
        feed_url,
        api_key: None,
        request_timeout: Duration::from_secs(5),
    })
    .unwrap()
}

/// Feed body with one entry per `(created_at, field1, field2)`.
pub fn feed_body(entries: &[(&str, Option<&str>, Option<&str>)]) -> Value {
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

    json!({
        "channel": { "id": 1, "name": "test" },
        "feeds": feeds,
    })
}
