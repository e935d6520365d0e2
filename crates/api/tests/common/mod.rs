//! Shared fixtures for the API integration tests.
//!
//! The router is built exactly as in production, but over in-memory stores
//! that reproduce the Postgres join semantics (LEFT JOIN rows, NULL child
//! columns, asymmetric delete cascade).

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use filmlib_api::auth::jwt::{generate_access_token, JwtConfig, TokenValidator};
use filmlib_api::config::ServerConfig;
use filmlib_api::router::build_app_router;
use filmlib_api::services::{AccountService, PerformerService, WorkService};
use filmlib_api::state::AppState;
use filmlib_core::models::{Account, Performer, Work};
use filmlib_core::roles::Role;
use filmlib_core::sorting::SortMode;
use filmlib_core::types::EntityId;
use filmlib_db::models::performer::PerformerWorkRow;
use filmlib_db::models::work::WorkPerformerRow;
use filmlib_db::store::{AccountStore, PerformerStore, WorkStore};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret";

// ---------------------------------------------------------------------------
// In-memory stores
// ---------------------------------------------------------------------------

#[derive(Default)]
struct CatalogTables {
    performers: Vec<Performer>,
    /// Stored without their performer list; links live in `links`.
    works: Vec<Work>,
    /// `(work_id, performer_id)`, duplicates allowed, no foreign key to
    /// performers.
    links: Vec<(EntityId, EntityId)>,
}

/// Backs both [`PerformerStore`] and [`WorkStore`] so the two views share
/// one set of tables.
#[derive(Default, Clone)]
pub struct MemoryCatalog {
    tables: Arc<Mutex<CatalogTables>>,
}

fn work_rows(tables: &CatalogTables, works: &[Work]) -> Vec<WorkPerformerRow> {
    let mut rows = Vec::new();
    for work in works {
        let performers: Vec<Option<&Performer>> = tables
            .links
            .iter()
            .filter(|(work_id, _)| *work_id == work.id)
            .map(|(_, performer_id)| tables.performers.iter().find(|p| p.id == *performer_id))
            .collect();

        let base = |performer: Option<&Performer>| WorkPerformerRow {
            work_id: work.id,
            work_title: work.title.clone(),
            work_description: work.description.clone(),
            work_release_date: work.release_date,
            work_rating: work.rating,
            performer_id: performer.map(|p| p.id),
            performer_name: performer.map(|p| p.name.clone()),
            performer_gender: performer.map(|p| p.gender.clone()),
            performer_birth_date: performer.and_then(|p| p.birth_date),
        };

        if performers.is_empty() {
            rows.push(base(None));
        } else {
            rows.extend(performers.into_iter().map(base));
        }
    }
    rows
}

fn strip_performers(work: &Work) -> Work {
    Work {
        performers: Vec::new(),
        ..work.clone()
    }
}

#[async_trait]
impl PerformerStore for MemoryCatalog {
    async fn create(&self, performer: &Performer) -> Result<(), sqlx::Error> {
        self.tables.lock().unwrap().performers.push(performer.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Performer>, sqlx::Error> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.performers.iter().find(|p| p.id == id).cloned())
    }

    async fn update(&self, performer: &Performer) -> Result<bool, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();
        match tables.performers.iter_mut().find(|p| p.id == performer.id) {
            Some(stored) => {
                *stored = performer.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: EntityId) -> Result<bool, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.performers.len();
        tables.performers.retain(|p| p.id != id);
        Ok(tables.performers.len() != before)
    }

    async fn list_with_works(&self) -> Result<Vec<PerformerWorkRow>, sqlx::Error> {
        let tables = self.tables.lock().unwrap();
        let mut rows = Vec::new();
        for performer in &tables.performers {
            let works: Vec<&Work> = tables
                .links
                .iter()
                .filter(|(_, performer_id)| *performer_id == performer.id)
                .filter_map(|(work_id, _)| tables.works.iter().find(|w| w.id == *work_id))
                .collect();

            let base = |work: Option<&Work>| PerformerWorkRow {
                performer_id: performer.id,
                performer_name: performer.name.clone(),
                performer_gender: performer.gender.clone(),
                performer_birth_date: performer.birth_date,
                work_id: work.map(|w| w.id),
                work_title: work.map(|w| w.title.clone()),
                work_description: work.map(|w| w.description.clone()),
                work_release_date: work.and_then(|w| w.release_date),
                work_rating: work.map(|w| w.rating),
            };

            if works.is_empty() {
                rows.push(base(None));
            } else {
                rows.extend(works.into_iter().map(|w| base(Some(w))));
            }
        }
        Ok(rows)
    }
}

#[async_trait]
impl WorkStore for MemoryCatalog {
    async fn create(&self, work: &Work) -> Result<(), sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();
        tables.works.push(strip_performers(work));
        for performer in &work.performers {
            tables.links.push((work.id, performer.id));
        }
        Ok(())
    }

    async fn find_rows_by_id(&self, id: EntityId) -> Result<Vec<WorkPerformerRow>, sqlx::Error> {
        let tables = self.tables.lock().unwrap();
        let works: Vec<Work> = tables.works.iter().filter(|w| w.id == id).cloned().collect();
        Ok(work_rows(&tables, &works))
    }

    async fn update(&self, work: &Work) -> Result<bool, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();
        let Some(stored) = tables.works.iter_mut().find(|w| w.id == work.id) else {
            return Ok(false);
        };
        *stored = strip_performers(work);
        tables.links.retain(|(work_id, _)| *work_id != work.id);
        for performer in &work.performers {
            tables.links.push((work.id, performer.id));
        }
        Ok(true)
    }

    async fn delete(&self, id: EntityId) -> Result<bool, sqlx::Error> {
        let mut tables = self.tables.lock().unwrap();
        tables.links.retain(|(work_id, _)| *work_id != id);
        let before = tables.works.len();
        tables.works.retain(|w| w.id != id);
        Ok(tables.works.len() != before)
    }

    async fn list_sorted(&self, mode: SortMode) -> Result<Vec<WorkPerformerRow>, sqlx::Error> {
        let tables = self.tables.lock().unwrap();
        let mut works = tables.works.clone();
        match mode {
            SortMode::TitleAsc => works.sort_by(|a, b| a.title.cmp(&b.title)),
            // NULLS LAST
            SortMode::ReleaseDateDesc => works.sort_by(|a, b| match (a.release_date, b.release_date) {
                (Some(x), Some(y)) => y.cmp(&x),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }),
            SortMode::RatingDesc => works.sort_by(|a, b| b.rating.cmp(&a.rating)),
        }
        Ok(work_rows(&tables, &works))
    }

    async fn search_by_title(&self, fragment: &str) -> Result<Vec<WorkPerformerRow>, sqlx::Error> {
        let tables = self.tables.lock().unwrap();
        let works: Vec<Work> = tables
            .works
            .iter()
            .filter(|w| w.title.contains(fragment))
            .cloned()
            .collect();
        Ok(work_rows(&tables, &works))
    }

    async fn search_by_performer_name(
        &self,
        fragment: &str,
    ) -> Result<Vec<WorkPerformerRow>, sqlx::Error> {
        let tables = self.tables.lock().unwrap();
        let works = tables.works.clone();
        Ok(work_rows(&tables, &works)
            .into_iter()
            .filter(|row| {
                row.performer_name
                    .as_deref()
                    .is_some_and(|name| name.contains(fragment))
            })
            .collect())
    }
}

#[derive(Default, Clone)]
pub struct MemoryAccounts {
    accounts: Arc<Mutex<Vec<Account>>>,
}

#[async_trait]
impl AccountStore for MemoryAccounts {
    async fn exists(&self, username: &str) -> Result<bool, sqlx::Error> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .any(|a| a.username == username))
    }

    async fn create(&self, account: &Account) -> Result<(), sqlx::Error> {
        self.accounts.lock().unwrap().push(account.clone());
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, sqlx::Error> {
        Ok(self
            .accounts
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry_mins: 60,
        },
        admin: None,
    }
}

/// App state wired to fresh in-memory stores.
pub fn test_state() -> AppState {
    let config = test_config();
    let catalog = MemoryCatalog::default();
    AppState {
        tokens: Arc::new(TokenValidator::new(&config.jwt)),
        performers: PerformerService::new(Arc::new(catalog.clone())),
        works: WorkService::new(Arc::new(catalog)),
        accounts: AccountService::new(Arc::new(MemoryAccounts::default()), config.jwt.clone()),
        config: Arc::new(config),
    }
}

/// The full production router (same middleware stack) over in-memory stores.
pub fn build_test_app() -> Router {
    build_app_router(test_state(), &test_config())
}

pub fn admin_token() -> String {
    generate_access_token("root", Role::Admin, &test_config().jwt).unwrap()
}

pub fn user_token() -> String {
    generate_access_token("viewer", Role::User, &test_config().jwt).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Send a request with a raw `Authorization` header value.
pub async fn get_with_header(app: Router, uri: &str, authorization: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a performer through the API and return its id.
pub async fn seed_performer(app: Router, name: &str) -> String {
    let response = post_json_auth(
        app,
        "/api/v1/performers",
        serde_json::json!({ "name": name, "gender": "female", "birth_date": "1980-01-01" }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Create a work through the API and return its id.
pub async fn seed_work(
    app: Router,
    title: &str,
    release_date: &str,
    rating: i32,
    performer_ids: &[&str],
) -> String {
    let performers: Vec<_> = performer_ids
        .iter()
        .map(|id| serde_json::json!({ "id": id }))
        .collect();
    let response = post_json_auth(
        app,
        "/api/v1/works",
        serde_json::json!({
            "title": title,
            "description": format!("{title} description"),
            "release_date": release_date,
            "rating": rating,
            "performers": performers,
        }),
        &admin_token(),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}
