//! Latency and concurrency of reply generation, against a running server.

mod common;

use agent_service::services::STUB_REPLY;
use common::{TestApp, TEST_DELAY};
use futures::future::join_all;
use serde_json::{json, Value};
use std::time::{Duration, Instant};

async fn request_reply(client: &reqwest::Client, address: &str, context: String) -> String {
    let response = client
        .post(format!("{}/agent/generate-reply", address))
        .json(&json!({"action": "draft_reply", "context": context}))
        .timeout(Duration::from_secs(10))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    body["reply"].as_str().expect("reply missing").to_string()
}

#[tokio::test]
async fn reply_arrives_no_earlier_than_default_delay() {
    let delay = Duration::from_secs(2);
    let app = TestApp::spawn(delay).await;
    let client = app.client();

    let start = Instant::now();
    let reply = request_reply(
        &client,
        &app.address,
        "Guest asked about weekend pricing".to_string(),
    )
    .await;

    assert!(start.elapsed() >= delay, "replied after {:?}", start.elapsed());
    assert_eq!(reply, STUB_REPLY);
}

#[tokio::test]
async fn concurrent_replies_do_not_interfere() {
    const N: usize = 8;
    let app = TestApp::spawn(TEST_DELAY).await;
    let client = app.client();

    let start = Instant::now();
    let replies = join_all(
        (0..N).map(|i| request_reply(&client, &app.address, format!("conversation {i}"))),
    )
    .await;
    let elapsed = start.elapsed();

    assert_eq!(replies.len(), N);
    assert!(replies.iter().all(|r| r == STUB_REPLY));

    // Serial handling would take N * TEST_DELAY.
    assert!(elapsed >= TEST_DELAY);
    assert!(
        elapsed < TEST_DELAY * (N as u32) / 2,
        "requests were not interleaved: {elapsed:?}"
    );

    assert_eq!(app.activity.records().len(), N);
}

#[tokio::test]
async fn events_are_not_delayed_by_pending_generation() {
    let app = TestApp::spawn(Duration::from_secs(2)).await;
    let client = app.client();

    let pending = {
        let client = client.clone();
        let address = app.address.clone();
        tokio::spawn(async move { request_reply(&client, &address, "slow".to_string()).await })
    };

    // Let the generation request reach the handler.
    tokio::time::sleep(Duration::from_millis(100)).await;

    let start = Instant::now();
    let response = client
        .post(format!("{}/agent/events", app.address))
        .json(&json!({
            "event": "MESSAGE_RECEIVED",
            "context": "Guest: thanks!",
            "timestamp": "2024-01-01T00:00:00Z"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);
    assert!(start.elapsed() < Duration::from_secs(1));

    assert_eq!(pending.await.unwrap(), STUB_REPLY);
}
