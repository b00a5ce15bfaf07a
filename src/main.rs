use std::sync::Arc;

use anyhow::Context;
use campus::logging::init_tracing;
use campus::router::init_router;
use campus::state::AppState;
use campus_auth::JwtIdentityResolver;
use campus_config::{CorsConfig, JwtConfig, ServerConfig};
use campus_db::{PgUserRepository, init_db_pool, run_migrations};
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = init_db_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    let state = AppState::new(
        Arc::new(PgUserRepository::new(pool)),
        Arc::new(JwtIdentityResolver::new(JwtConfig::from_env())),
        CorsConfig::from_env(),
    );
    let app = init_router(state);

    let server_config = ServerConfig::from_env();
    let address = server_config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    info!("Server running on http://{address}");
    info!("Swagger UI available at http://{address}/swagger-ui");
    info!("Scalar UI available at http://{address}/scalar");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
