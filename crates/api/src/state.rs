use std::sync::Arc;

use filmlib_db::repositories::{AccountRepo, PerformerRepo, WorkRepo};
use filmlib_db::DbPool;

use crate::auth::jwt::TokenValidator;
use crate::config::ServerConfig;
use crate::services::{AccountService, PerformerService, WorkService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything inside is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Verifies bearer tokens for the role gate. Built once from `config.jwt`.
    pub tokens: Arc<TokenValidator>,
    pub performers: PerformerService,
    pub works: WorkService,
    pub accounts: AccountService,
}

impl AppState {
    /// Wire the services to the Postgres repositories.
    pub fn with_pool(pool: DbPool, config: ServerConfig) -> Self {
        let config = Arc::new(config);
        Self {
            tokens: Arc::new(TokenValidator::new(&config.jwt)),
            performers: PerformerService::new(Arc::new(PerformerRepo::new(pool.clone()))),
            works: WorkService::new(Arc::new(WorkRepo::new(pool.clone()))),
            accounts: AccountService::new(Arc::new(AccountRepo::new(pool)), config.jwt.clone()),
            config,
        }
    }
}
