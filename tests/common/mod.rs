//! Shared test fixtures: an in-process mock of the shortening backend

#![allow(dead_code)]

use std::sync::Mutex;

use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use serde_json::{Value, json};

/// Everything the mock backend received
#[derive(Default)]
pub struct Recorded {
    pub bodies: Mutex<Vec<Value>>,
    pub paths: Mutex<Vec<String>>,
}

impl Recorded {
    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().map(|b| b.clone()).unwrap_or_default()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

pub struct MockBackend {
    pub base_url: String,
    pub recorded: web::Data<Recorded>,
}

/// Start the mock on an ephemeral port
///
/// Behavior:
/// - `POST /shorten`: alias `taken` -> 400 with a string detail; a URL
///   containing `invalid` -> 422 with a list detail; otherwise 200
/// - `GET /analytics/abc123` -> 200; `broken` -> 200 with a wrong shape;
///   `boom` -> 500 plain text; anything else -> 404 with a string detail
/// - `GET /health` -> `{"status":"ok"}`
pub async fn start_mock_backend() -> MockBackend {
    let recorded = web::Data::new(Recorded::default());
    let data = recorded.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/shorten", web::post().to(shorten))
            .route("/analytics/{code}", web::get().to(analytics))
            .route("/health", web::get().to(health))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind mock backend");

    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());

    MockBackend {
        base_url: format!("http://{}", addr),
        recorded,
    }
}

async fn shorten(req: HttpRequest, rec: web::Data<Recorded>, body: web::Json<Value>) -> HttpResponse {
    let body = body.into_inner();
    if let Ok(mut bodies) = rec.bodies.lock() {
        bodies.push(body.clone());
    }

    let original_url = body["original_url"].as_str().unwrap_or_default().to_string();
    let alias = body["custom_alias"].as_str().map(str::to_string);

    if alias.as_deref() == Some("taken") {
        return HttpResponse::BadRequest().json(json!({ "detail": "alias taken" }));
    }
    if original_url.contains("invalid") {
        return HttpResponse::UnprocessableEntity().json(json!({
            "detail": [{ "loc": ["body", "original_url"], "msg": "invalid url" }]
        }));
    }

    let code = alias.unwrap_or_else(|| "abc123".to_string());
    let host = req.connection_info().host().to_string();
    HttpResponse::Ok().json(json!({
        "short_code": code,
        "short_url": format!("http://{}/{}", host, code),
        "original_url": original_url,
        "expires_at": "2025-01-31T00:00:00",
        "created_at": "2025-01-01T00:00:00",
    }))
}

async fn analytics(req: HttpRequest, rec: web::Data<Recorded>) -> HttpResponse {
    let raw_path = req.uri().path().to_string();
    if let Ok(mut paths) = rec.paths.lock() {
        paths.push(raw_path.clone());
    }

    let code = req.match_info().get("code").unwrap_or_default().to_string();
    let host = req.connection_info().host().to_string();
    match code.as_str() {
        "abc123" => HttpResponse::Ok().json(json!({
            "short_code": "abc123",
            "short_url": format!("http://{}/abc123", host),
            "original_url": "https://example.com/a/very/long/path",
            "click_count": 42,
            "created_at": "2025-01-01T00:00:00",
            "last_clicked": null,
            "expires_at": "2025-01-31T00:00:00Z",
        })),
        "broken" => HttpResponse::Ok().json(json!({ "unexpected": true })),
        "boom" => HttpResponse::InternalServerError().body("Internal Server Error"),
        _ => HttpResponse::NotFound().json(json!({ "detail": "Short URL not found" })),
    }
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
