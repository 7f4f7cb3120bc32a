#![allow(dead_code)]
//! Fakes shared by the unit tests.
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use actix_multipart::Multipart;
use actix_web::{dev::ServerHandle, web, App, HttpRequest, HttpResponse, HttpServer};
use futures_util::TryStreamExt;
use serde_json::json;

use crate::api::error;
use crate::constants::{UPLOAD_ENDPOINT, UPLOAD_FIELD_NAME, USERS_ENDPOINT};
use crate::modules::directory::{
    model::DirectoryQuery,
    repository::UserRepository,
    schema::{DirectoryResult, Pagination, UserRecord},
};
use crate::modules::notification::{Notice, Notifier};
use crate::modules::upload::{
    model::SelectedFile, repository::UploadRepository, schema::UploadResponse,
};

#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.title.into_owned()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

#[derive(Debug, Clone)]
pub enum UploadOutcome {
    Url(String),
    MissingUrl,
    Status(u16),
}

pub struct FakeUploadRepository {
    outcome: Mutex<UploadOutcome>,
    uploaded: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl FakeUploadRepository {
    pub fn new(outcome: UploadOutcome) -> Self {
        Self { outcome: Mutex::new(outcome), uploaded: Mutex::new(Vec::new()), calls: AtomicUsize::new(0) }
    }

    pub fn set_outcome(&self, outcome: UploadOutcome) {
        *self.outcome.lock().unwrap() = outcome;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn uploaded_names(&self) -> Vec<String> {
        self.uploaded.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl UploadRepository for FakeUploadRepository {
    async fn upload_visiting_card(
        &self,
        file: &SelectedFile,
    ) -> Result<UploadResponse, error::SystemError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.uploaded.lock().unwrap().push(file.name.clone());
        let outcome = self.outcome.lock().unwrap().clone();
        match outcome {
            UploadOutcome::Url(url) => Ok(UploadResponse { image_url: Some(url) }),
            UploadOutcome::MissingUrl => Ok(UploadResponse { image_url: None }),
            UploadOutcome::Status(code) => Err(error::SystemError::Status(
                reqwest::StatusCode::from_u16(code).unwrap(),
            )),
        }
    }
}

pub fn sample_users(count: usize) -> Vec<UserRecord> {
    (1..=count)
        .map(|i| UserRecord {
            id: format!("u{i}"),
            name: format!("User {i}"),
            email: format!("user{i}@example.com"),
            website: if i % 2 == 0 { format!("https://user{i}.example.com") } else { String::new() },
            phone: format!("+1 555 01{i:02}"),
            job_title: "Engineer".to_string(),
            company: format!("Company {}", i % 3),
        })
        .collect()
}

/// In-memory stand-in for `GET /api/users`: filters by name, paginates, and
/// can be told to fail or to answer certain pages slowly.
pub struct FakeUserRepository {
    users: Vec<UserRecord>,
    queries: Mutex<Vec<DirectoryQuery>>,
    failing: AtomicBool,
    delays: Mutex<HashMap<u32, Duration>>,
}

impl FakeUserRepository {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            users,
            queries: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
            delays: Mutex::new(HashMap::new()),
        }
    }

    pub fn queries(&self) -> Vec<DirectoryQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn delay_page(&self, page: u32, delay: Duration) {
        self.delays.lock().unwrap().insert(page, delay);
    }
}

#[async_trait::async_trait]
impl UserRepository for FakeUserRepository {
    async fn list_users(
        &self,
        query: &DirectoryQuery,
    ) -> Result<DirectoryResult, error::SystemError> {
        self.queries.lock().unwrap().push(query.clone());

        let delay = self.delays.lock().unwrap().get(&query.page).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(error::SystemError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE));
        }

        let needle = query.search_term.to_lowercase();
        let matching: Vec<&UserRecord> =
            self.users.iter().filter(|u| u.name.to_lowercase().contains(&needle)).collect();

        let page_size = query.page_size as usize;
        let data = matching
            .iter()
            .skip((query.page as usize - 1) * page_size)
            .take(page_size)
            .map(|u| (*u).clone())
            .collect();

        Ok(DirectoryResult {
            data,
            pagination: Pagination {
                total: matching.len() as u64,
                total_pages: matching.len().div_ceil(page_size) as u32,
                page: query.page,
            },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Healthy,
    Failing,
}

async fn upload_card(mut payload: Multipart) -> HttpResponse {
    let mut fields = Vec::new();
    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition().cloned();
        let name = content_disposition.as_ref().and_then(|cd| cd.get_name()).unwrap_or_default().to_string();
        let filename =
            content_disposition.as_ref().and_then(|cd| cd.get_filename()).unwrap_or_default().to_string();
        let mime_type = field.content_type().map(|m| m.to_string()).unwrap_or_default();

        let mut size = 0;
        while let Ok(Some(chunk)) = field.try_next().await {
            size += chunk.len();
        }
        fields.push((name, filename, mime_type, size));
    }

    match fields.as_slice() {
        [(name, filename, mime_type, size)] if name == UPLOAD_FIELD_NAME => HttpResponse::Ok()
            .json(json!({ "imageUrl": format!("https://cdn.test/{filename}?mime={mime_type}&size={size}") })),
        _ => HttpResponse::BadRequest().finish(),
    }
}

async fn list_users(req: HttpRequest, query: web::Query<HashMap<String, String>>) -> HttpResponse {
    let page = query.get("page").and_then(|p| p.parse::<u32>().ok()).unwrap_or(1);
    HttpResponse::Ok().json(json!({
        "data": [{ "id": "echo", "name": req.query_string() }],
        "pagination": { "total": 1, "totalPages": 1, "page": page },
    }))
}

async fn unavailable() -> HttpResponse {
    HttpResponse::InternalServerError().finish()
}

/// Start an actix-web fake of the card backend on an ephemeral port.
/// Must run inside an actix system (`#[actix_web::test]`).
pub fn spawn_backend(backend: Backend) -> (String, ServerHandle) {
    let server = HttpServer::new(move || {
        let app = App::new();
        match backend {
            Backend::Healthy => app
                .route(UPLOAD_ENDPOINT, web::post().to(upload_card))
                .route(USERS_ENDPOINT, web::get().to(list_users)),
            Backend::Failing => app
                .route(UPLOAD_ENDPOINT, web::post().to(unavailable))
                .route(USERS_ENDPOINT, web::get().to(unavailable)),
        }
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    (format!("http://{addr}"), handle)
}
