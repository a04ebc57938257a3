//! Schema migration CLI.

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sea_orm_migration=info".to_owned()),
        )
        .init();

    cli::run_cli(migration::Migrator).await;
}
