#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::Router;
use chrono::NaiveDate;
use serde_json::{json, Value};
use taskboard_client::ApiClient;
use taskboard_core::author::AuthorIdentity;

/// Serve `router` on an ephemeral local port and return a client for it.
pub async fn spawn(router: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ApiClient::new(format!("http://{addr}"))
}

/// Shared request counter for stub handlers.
#[derive(Clone, Default)]
pub struct Hits(Arc<AtomicUsize>);

impl Hits {
    pub fn record(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

pub fn author() -> AuthorIdentity {
    AuthorIdentity::new("ada@example.com", "ada", None)
}

/// A task as the server serializes it.
pub fn task_json(id: i64, name: &str, status: &str, deadline: NaiveDate) -> Value {
    json!({
        "id": id,
        "projectId": 7,
        "name": name,
        "description": null,
        "deadline": deadline.to_string(),
        "status": status,
        "authorId": "ada@example.com",
        "authorName": "ada",
        "authorAvatar": null,
        "createdAt": "2024-06-01T09:00:00Z",
        "updatedAt": "2024-06-01T09:00:00Z"
    })
}

pub fn tasks_json() -> Vec<Value> {
    vec![
        task_json(1, "Plan", "IN_PROGRESS", day(5)),
        task_json(2, "Build", "IN_PROGRESS", day(20)),
        task_json(3, "Ship", "COMPLETED", day(1)),
    ]
}
