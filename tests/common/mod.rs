//! Shared fixtures for integration tests.
//!
//! The fixture dataset has two users and three posts:
//!
//! | post | author | comments |
//! |------|--------|----------|
//! | 10   | Alice  | 1        |
//! | 11   | Bob    | 3        |
//! | 12   | Alice  | 3        |

#![allow(dead_code)]

use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use feedboard::adapters::mock::{MockHttpClient, MockResponse, StaticImages};
use feedboard::app::{App, AppMessage};
use feedboard::client::ApiClient;
use feedboard::config::DashboardConfig;
use feedboard::pipeline::Pipeline;

pub const BASE: &str = "http://api.test";

pub fn users_body() -> Value {
    json!({"users": {"1": "Alice", "2": "Bob"}})
}

pub fn posts_body(user_id: &str) -> Value {
    match user_id {
        "1" => json!({"posts": [
            {"id": 10, "userid": 1, "content": "First post"},
            {"id": 12, "userid": 1, "content": "Third post"}
        ]}),
        "2" => json!({"posts": [{"id": 11, "userid": 2, "content": "Second post"}]}),
        _ => json!({"posts": []}),
    }
}

pub fn comments_body(post_id: u64) -> Value {
    let count = match post_id {
        10 => 1,
        11 | 12 => 3,
        _ => 0,
    };
    let comments: Vec<Value> = (0..count)
        .map(|i| json!({"id": post_id * 100 + i, "postid": post_id, "content": "nice"}))
        .collect();
    json!({ "comments": comments })
}

/// Seed a [`MockHttpClient`] with the fixture dataset under [`BASE`].
pub fn seed_mock(mock: &MockHttpClient) {
    mock.set_response(&format!("{}/users", BASE), MockResponse::json(users_body()));
    for user_id in ["1", "2"] {
        mock.set_response(
            &format!("{}/users/{}/posts", BASE, user_id),
            MockResponse::json(posts_body(user_id)),
        );
    }
    for post_id in [10, 11, 12] {
        mock.set_response(
            &format!("{}/posts/{}/comments", BASE, post_id),
            MockResponse::json(comments_body(post_id)),
        );
    }
}

/// Mount the fixture dataset on a wiremock server.
pub async fn mount_fixture(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(users_body()))
        .mount(server)
        .await;
    for user_id in ["1", "2"] {
        Mock::given(method("GET"))
            .and(path(format!("/users/{}/posts", user_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(posts_body(user_id)))
            .mount(server)
            .await;
    }
    for post_id in [10u64, 11, 12] {
        Mock::given(method("GET"))
            .and(path(format!("/posts/{}/comments", post_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(comments_body(post_id)))
            .mount(server)
            .await;
    }
}

pub fn test_config() -> DashboardConfig {
    DashboardConfig::default().with_base_url(BASE)
}

pub fn mock_pipeline(mock: &MockHttpClient, config: &DashboardConfig) -> Pipeline {
    let client = ApiClient::new(config.base_url.clone(), Arc::new(mock.clone()));
    Pipeline::new(client, Arc::new(StaticImages::default()), config)
}

/// App over a seeded mock client, with its message receiver taken.
pub fn mock_app(mock: &MockHttpClient, config: DashboardConfig) -> (App, UnboundedReceiver<AppMessage>) {
    let pipeline = mock_pipeline(mock, &config);
    let mut app = App::new(pipeline, config);
    let rx = app.message_rx.take().expect("receiver is present on a new app");
    (app, rx)
}

/// Feed messages to the app until `done` holds or the wait times out.
pub async fn pump_until<F>(app: &mut App, rx: &mut UnboundedReceiver<AppMessage>, done: F) -> bool
where
    F: Fn(&App) -> bool,
{
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while !done(app) {
        let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
        match tokio::time::timeout(remaining, rx.recv()).await {
            Ok(Some(message)) => app.handle_message(message),
            _ => return false,
        }
    }
    true
}
