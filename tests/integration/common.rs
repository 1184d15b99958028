//! Shared fixtures

use std::path::Path;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use library_server::{
    api,
    config::{AppConfig, JsonPaths, LoansConfig, LoggingConfig, ServerConfig},
    services::{clock::FixedClock, ServiceOptions},
    AppState,
};

pub fn today() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 15, 10, 0, 0).unwrap()
}

pub fn days(n: i64) -> DateTime<Utc> {
    today() + Duration::days(n)
}

/// A dataset on disk plus the app wired to it, with the clock frozen at `today()`
pub struct TestLibrary {
    pub _dir: TempDir,
    pub paths: JsonPaths,
    pub state: AppState,
}

impl TestLibrary {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let paths = seed(dir.path());
        let config = AppConfig {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            json_paths: paths.clone(),
            loans: LoansConfig::default(),
        };
        let options = ServiceOptions {
            clock: Arc::new(FixedClock(today())),
            ..ServiceOptions::default()
        };
        let state = AppState::new(config, options);
        Self { _dir: dir, paths, state }
    }

    pub fn router(&self) -> Router {
        api::router(self.state.clone())
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::post(uri).body(Body::empty()).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    /// Raw JSON document as currently on disk
    pub fn read_document(&self, path: &Path) -> Vec<Value> {
        let raw: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
        raw.as_array().unwrap().clone()
    }

    pub fn find_on_disk(&self, path: &Path, id: i64) -> Value {
        self.read_document(path)
            .into_iter()
            .find(|v| v["id"] == id)
            .unwrap()
    }
}

fn seed(dir: &Path) -> JsonPaths {
    let paths = JsonPaths::in_dir(dir);
    let write = |path: &Path, value: Value| {
        std::fs::write(path, serde_json::to_vec_pretty(&value).unwrap()).unwrap();
    };

    write(
        &paths.authors,
        json!([
            { "id": 1, "name": "Ursula K. Le Guin" },
            { "id": 2, "name": "Octavia E. Butler" }
        ]),
    );
    write(
        &paths.books,
        json!([
            { "id": 1, "title": "The Dispossessed", "author_id": 1, "genre": "Science Fiction", "isbn": "9780061054884", "image_name": "dispossessed.jpg" },
            { "id": 2, "title": "Kindred", "author_id": 2, "genre": "Fiction", "isbn": "9780807083697", "image_name": "kindred.jpg" }
        ]),
    );
    write(
        &paths.book_items,
        json!([
            { "id": 1, "book_id": 1, "acquisition_date": days(-400), "condition": "Good" },
            { "id": 2, "book_id": 1, "acquisition_date": days(-300), "condition": "New" },
            { "id": 3, "book_id": 2, "acquisition_date": days(-200), "condition": "Worn" }
        ]),
    );
    write(
        &paths.patrons,
        json!([
            { "id": 1, "name": "Ana Smith", "membership_start": days(-165), "membership_end": days(200), "image_name": "ana.jpg" },
            { "id": 2, "name": "Juan Ana", "membership_start": days(-325), "membership_end": days(40), "image_name": "juan.jpg" },
            { "id": 3, "name": "Bob Stone", "membership_start": days(-355), "membership_end": days(10), "image_name": "bob.jpg" },
            { "id": 4, "name": "Carla Diaz", "membership_start": days(-355), "membership_end": days(10), "image_name": "carla.jpg" },
            { "id": 5, "name": "Dan Lapsed", "membership_start": days(-370), "membership_end": days(-5), "image_name": "dan.jpg" }
        ]),
    );
    write(
        &paths.loans,
        json!([
            { "id": 1, "book_item_id": 1, "patron_id": 1, "loan_date": days(-9), "due_date": days(5), "return_date": null },
            { "id": 2, "book_item_id": 2, "patron_id": 1, "loan_date": days(-20), "due_date": days(-6), "return_date": days(-1) },
            { "id": 3, "book_item_id": 3, "patron_id": 3, "loan_date": days(-15), "due_date": days(-1), "return_date": null },
            { "id": 4, "book_item_id": 1, "patron_id": 5, "loan_date": days(-11), "due_date": days(3), "return_date": null },
            { "id": 5, "book_item_id": 2, "patron_id": 1, "loan_date": days(-12), "due_date": days(2), "return_date": null },
            { "id": 6, "book_item_id": 3, "patron_id": 2, "loan_date": days(-30), "due_date": days(-16), "return_date": null }
        ]),
    );
    paths
}
