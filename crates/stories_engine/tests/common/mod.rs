#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Mutex, Once};

use stories_engine::{FailureKind, FetchError, Fetcher, Hit, SearchResponse};
use tokio::sync::oneshot;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(stories_logging::initialize_for_tests);
}

pub fn hit(id: u64, title: &str) -> Hit {
    Hit {
        object_id: id.to_string(),
        title: Some(title.to_string()),
        url: Some(format!("https://{}.example.com", title.to_lowercase())),
        author: Some("someone".to_string()),
        num_comments: Some(3),
        points: Some(4),
    }
}

pub fn react_and_redux() -> SearchResponse {
    SearchResponse {
        hits: vec![hit(0, "React"), hit(1, "Redux")],
    }
}

/// Answers every request with the same canned result and records the URLs.
pub struct CannedFetcher {
    result: Result<SearchResponse, FetchError>,
    calls: Mutex<Vec<String>>,
}

impl CannedFetcher {
    pub fn ok(response: SearchResponse) -> Self {
        Self {
            result: Ok(response),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(FetchError::new(FailureKind::Network, "connection refused")),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Fetcher for CannedFetcher {
    async fn search(&self, url: &str) -> Result<SearchResponse, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.result.clone()
    }
}

/// Holds each request open until the test releases it.
#[derive(Default)]
pub struct GatedFetcher {
    gates: Mutex<HashMap<String, oneshot::Receiver<Result<SearchResponse, FetchError>>>>,
}

impl GatedFetcher {
    pub fn gate(&self, url: &str) -> oneshot::Sender<Result<SearchResponse, FetchError>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(url.to_string(), rx);
        tx
    }
}

#[async_trait::async_trait]
impl Fetcher for GatedFetcher {
    async fn search(&self, url: &str) -> Result<SearchResponse, FetchError> {
        let rx = self
            .gates
            .lock()
            .unwrap()
            .remove(url)
            .expect("request for ungated url");
        rx.await
            .unwrap_or_else(|_| Err(FetchError::new(FailureKind::Network, "gate dropped")))
    }
}
