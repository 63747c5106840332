#![allow(dead_code)]

use axum::Router;
use axum::body::Bytes;
use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::post;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

/// A request received by the stub login endpoint.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: String,
}

/// Stub `/login` endpoint answering every request with a fixed response.
pub struct StubServer {
    pub endpoint: Url,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a stub server on an ephemeral port.
pub async fn spawn_login_stub(status: StatusCode, body: &str) -> StubServer {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();
    let body = body.to_string();

    let app = Router::new().route(
        "/login",
        post(move |headers: HeaderMap, request: Bytes| {
            let recorded = recorded.clone();
            let body = body.clone();
            async move {
                recorded.lock().unwrap().push(RecordedRequest {
                    content_type: headers
                        .get(header::CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_owned),
                    body: String::from_utf8_lossy(&request).into_owned(),
                });
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubServer {
        endpoint: Url::parse(&format!("http://{addr}/login")).unwrap(),
        requests,
    }
}

/// Starts a stub server that answers 200 with `body` only after `delay`.
pub async fn spawn_delayed_login_stub(delay: Duration, body: &str) -> StubServer {
    let body = body.to_string();
    let app = Router::new().route(
        "/login",
        post(move || {
            let body = body.clone();
            async move {
                tokio::time::sleep(delay).await;
                (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubServer {
        endpoint: Url::parse(&format!("http://{addr}/login")).unwrap(),
        requests: Arc::new(Mutex::new(Vec::new())),
    }
}

/// An endpoint on a port nothing listens on.
pub async fn unreachable_endpoint() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}/login")).unwrap()
}

pub fn page_url() -> Url {
    Url::parse("https://management.example/index.html").unwrap()
}
