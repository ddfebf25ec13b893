//! Application wiring: environment configuration and router construction.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    auth::{
        AuthConfig,
        login::{do_login, do_logout, login_page},
    },
    competitors::{
        create::{add_team_page, do_insert_team},
        manage::{do_delete_team, do_update_score, update_teams_page},
        overview::overview,
    },
    pages::{admin_page, contact_page, index_page},
    state::{AppState, DbPool},
};

pub struct AppConfig {
    pub database_url: String,
    pub bind_host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| ":memory:".to_string()),
            bind_host: std::env::var("IP")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(8000),
        }
    }
}

/// The private cookie key, derived from `SECRET_KEY`; without it a fresh key
/// is generated and sessions do not survive a restart.
fn secret_key() -> Key {
    if let Ok(secret) = std::env::var("SECRET_KEY") {
        Key::derive_from(secret.as_bytes())
    } else if cfg!(test) {
        Key::derive_from("0".repeat(64).as_bytes())
    } else {
        tracing::warn!("SECRET_KEY is not set, generating an ephemeral key");
        Key::generate()
    }
}

pub fn create_app(pool: DbPool, auth: AuthConfig) -> Router {
    let state = AppState {
        pool,
        key: secret_key(),
        auth: Arc::new(auth),
    };

    Router::new()
        .route("/", get(index_page))
        .route("/index", get(index_page))
        .route("/login", get(login_page).post(do_login))
        .route("/logout", get(do_logout))
        .route("/admin", get(admin_page))
        .route("/overview", get(overview))
        .route("/updateteams", get(update_teams_page))
        .route("/updatescore/:id", post(do_update_score))
        .route("/deleteteam/:id", get(do_delete_team))
        .route("/addteam", get(add_team_page))
        .route("/insertteam", post(do_insert_team))
        .route("/contact", get(contact_page))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
