use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::MigrationHarness;
use tokio::net::TcpListener;

use pubscore::{
    MIGRATIONS,
    auth::AuthConfig,
    config::{AppConfig, create_app},
    state::DbPool,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    tracing::info!(database_url = %config.database_url, "starting pubscore");

    let pool: DbPool = Pool::builder()
        .max_size(if config.database_url == ":memory:" { 1 } else { 10 })
        .build(ConnectionManager::new(&config.database_url))
        .unwrap();

    {
        let pool = pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().unwrap();
            conn.run_pending_migrations(MIGRATIONS).unwrap();
        })
        .await
        .unwrap();
    }

    let app = create_app(pool, AuthConfig::from_env());

    let addr = format!("{}:{}", config.bind_host, config.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    tracing::info!(%addr, "listening");

    axum::serve(listener, app).await.unwrap();
}
