use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use project_roster::{
    app_state::AppState,
    get_postgres_pool,
    services::data_stores::PostgresProjectStore,
    utils::{
        constants::{ALLOWED_ORIGINS, APP_ADDRESS, DATABASE_URL},
        tracing::init_tracing,
    },
    Application,
};
use sqlx::PgPool;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let pg_pool = configure_postgresql().await?;
    let project_store =
        Arc::new(RwLock::new(PostgresProjectStore::new(pg_pool)));
    let app_state = AppState::new(project_store);

    let app = Application::build(app_state, &APP_ADDRESS, &ALLOWED_ORIGINS)
        .await
        .map_err(|e| eyre!("Failed to build app: {e}"))?;

    app.run().await?;
    Ok(())
}

async fn configure_postgresql() -> Result<PgPool> {
    let pg_pool = get_postgres_pool(&DATABASE_URL).await?;

    sqlx::migrate!().run(&pg_pool).await?;

    Ok(pg_pool)
}
