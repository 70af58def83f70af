//! In-process mock of the "top items" endpoints.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{
    Router,
    extract::{Path, RawQuery, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tokio::net::TcpListener;
use topfive::clients::TimeRange;

pub const TOKEN: &str = "test-token";

#[derive(Debug, Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

/// A request as seen by the mock
#[derive(Debug, Clone)]
pub struct Hit {
    pub endpoint: String,
    pub query: Vec<(String, String)>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
}

impl Hit {
    pub fn param(&self, key: &str) -> Vec<&str> {
        self.query
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

#[derive(Default)]
pub struct MockApi {
    responses: HashMap<(String, String), Canned>,
    token: Option<String>,
    hits: Mutex<Vec<Hit>>,
    completed: AtomicUsize,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply 401 to any request that does not carry `Bearer <token>`
    pub fn require_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn respond(
        mut self,
        endpoint: &str,
        range: TimeRange,
        status: StatusCode,
        body: impl Into<String>,
    ) -> Self {
        self.responses.insert(
            (endpoint.to_string(), range.as_str().to_string()),
            Canned {
                status,
                body: body.into(),
                delay: Duration::ZERO,
            },
        );
        self
    }

    /// Hold the response for `endpoint`/`range` back by `delay`
    pub fn delay(mut self, endpoint: &str, range: TimeRange, delay: Duration) -> Self {
        if let Some(canned) = self
            .responses
            .get_mut(&(endpoint.to_string(), range.as_str().to_string()))
        {
            canned.delay = delay;
        }
        self
    }

    pub async fn serve(self) -> MockServer {
        let state = Arc::new(self);
        let router = Router::new()
            .route("/v1/me/top/{endpoint}", get(top_items))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        MockServer {
            base_url: format!("http://{addr}/v1/me/top"),
            state,
        }
    }
}

pub struct MockServer {
    pub base_url: String,
    state: Arc<MockApi>,
}

impl MockServer {
    pub fn hits(&self) -> Vec<Hit> {
        self.state.hits.lock().unwrap().clone()
    }

    pub fn hit_count(&self, endpoint: &str) -> usize {
        self.hits().iter().filter(|h| h.endpoint == endpoint).count()
    }

    /// Requests the mock finished answering, delays included
    pub fn completed(&self) -> usize {
        self.state.completed.load(Ordering::SeqCst)
    }
}

async fn top_items(
    State(api): State<Arc<MockApi>>,
    Path(endpoint): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    let query: Vec<(String, String)> =
        url::form_urlencoded::parse(query.unwrap_or_default().as_bytes())
            .into_owned()
            .collect();
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let hit = Hit {
        endpoint: endpoint.clone(),
        query: query.clone(),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
    };
    api.hits.lock().unwrap().push(hit.clone());

    if let Some(token) = &api.token {
        if hit.authorization.as_deref() != Some(format!("Bearer {token}").as_str()) {
            api.completed.fetch_add(1, Ordering::SeqCst);
            return (StatusCode::UNAUTHORIZED, error_body(401, "No token provided")).into_response();
        }
    }

    let range = hit.param("time_range").first().copied().unwrap_or_default().to_string();
    let Some(canned) = api.responses.get(&(endpoint, range)).cloned() else {
        api.completed.fetch_add(1, Ordering::SeqCst);
        return (StatusCode::NOT_FOUND, error_body(404, "Service not found")).into_response();
    };

    tokio::time::sleep(canned.delay).await;
    api.completed.fetch_add(1, Ordering::SeqCst);
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
        .into_response()
}

pub fn error_body(status: u16, message: &str) -> String {
    json!({ "error": { "status": status, "message": message } }).to_string()
}

pub fn artists_body(names: &[&str]) -> String {
    let items: Vec<_> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "external_urls": { "spotify": format!("https://open.spotify.com/artist/{i}") },
                "followers": { "href": null, "total": 100 },
                "genres": ["indie"],
                "href": format!("https://api.spotify.com/v1/artists/{i}"),
                "id": i.to_string(),
                "images": [],
                "name": name,
                "popularity": 50,
                "type": "artist",
                "uri": format!("spotify:artist:{i}")
            })
        })
        .collect();
    page(items)
}

pub fn tracks_body(tracks: &[(&str, Vec<&str>)]) -> String {
    let items: Vec<_> = tracks
        .iter()
        .map(|(name, artists)| {
            let artists: Vec<_> = artists.iter().map(|a| json!({ "name": a })).collect();
            json!({
                "album": { "name": "Album", "artists": artists.clone() },
                "artists": artists,
                "duration_ms": 180_000,
                "explicit": false,
                "name": name,
                "popularity": 40,
                "type": "track",
                "uri": "spotify:track:x"
            })
        })
        .collect();
    page(items)
}

fn page(items: Vec<serde_json::Value>) -> String {
    let total = items.len();
    json!({
        "items": items,
        "total": total,
        "limit": 5,
        "offset": 0,
        "href": "https://api.spotify.com/v1/me/top",
        "previous": null,
        "next": null
    })
    .to_string()
}
