#[macro_use]
extern crate diesel_migrations;

use crate::data::seed;
use crate::db::migration;
use crate::opt::{Commands, Db, Run, Seed};
use anyhow::Result;
use axum::serve;
use clap::Parser;
use innodex_utils::net::create_listener;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::net::{IpAddr, Ipv4Addr};
use url::Url;

mod app;
mod data;
mod db;
mod opt;
mod routes;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3030;

fn build_connect_options(db_options: &Db) -> ConnectOptions {
    let mut seaorm_pool_options = ConnectOptions::new(db_options.database_url.as_str());
    if let Some(min_connections) = db_options.db_min_connections {
        seaorm_pool_options.min_connections(min_connections);
    }
    if let Some(max_connections) = db_options.db_max_connections {
        seaorm_pool_options.max_connections(max_connections);
    }
    seaorm_pool_options.sqlx_logging_level(log::LevelFilter::Debug);
    seaorm_pool_options
}

/// Migrates the schema and opens the connection pool.
async fn connect(db_options: &Db) -> Result<DatabaseConnection> {
    let url: Url = db_options.database_url.clone();
    let versions = tokio::task::spawn_blocking(move || migration(&url))
        .await?
        .inspect_err(|error| tracing::error!(error = error as &dyn std::error::Error, "failed to run migrations"))?;
    if !versions.is_empty() {
        tracing::info!(applied = versions.len(), "migrated database");
    }
    Ok(Database::connect(build_connect_options(db_options)).await?)
}

async fn run(opt: Run) -> Result<()> {
    let _guard = innodex_utils::tracing::setup(
        innodex_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .sentry_dsn(opt.sentry_dsn)
            .env(opt.env.clone())
            .build(),
    )?;
    routes::error::expose_internal_errors(&opt.env);

    let seaorm_pool = connect(&opt.db).await?;
    let questions = seed::load_questions(opt.questions.as_deref()).await?;
    seed::seed_if_empty(&seaorm_pool, questions).await?;

    let app = app::create_app(seaorm_pool, &opt.origins)?;
    let listener = create_listener((opt.host, opt.port), (DEFAULT_HOST, DEFAULT_PORT)).await?;

    tracing::info!(local_addr = %listener.local_addr()?, "starting app");
    serve::serve(listener, app.into_make_service()).await?;
    Ok(())
}

async fn seed_questions(opt: Seed) -> Result<()> {
    let _guard = innodex_utils::tracing::setup(
        innodex_utils::tracing::TracingConfig::builder()
            .package(env!("CARGO_PKG_NAME"))
            .version(env!("CARGO_PKG_VERSION"))
            .build(),
    )?;

    let seaorm_pool = connect(&opt.db).await?;
    let questions = seed::load_questions(opt.questions.as_deref()).await?;
    let count = seed::seed(&seaorm_pool, questions, opt.force).await?;
    tracing::info!(count, "seeding finished");
    Ok(())
}

fn main() -> Result<()> {
    let main = async {
        let opt = opt::Cli::parse();

        match opt.command {
            Commands::Run(o) => run(o).await?,
            Commands::Seed(o) => seed_questions(o).await?,
        }
        Ok(())
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(main)
}
