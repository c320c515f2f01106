use std::net::{Ipv4Addr, SocketAddr};

use adapter::database::connect_store_with;
use anyhow::{Context, Result};
use api::route::routes;
use axum::Router;
use registry::AppRegistry;
use shared::{
    config::AppConfig,
    env::{is_lambda_runtime, which, Environment},
};
use tokio::net::TcpListener;
use tower_http::{
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;
    bootstrap().await
}

fn init_logger() -> Result<()> {
    let log_level = match which() {
        Environment::Development => "debug",
        Environment::Production => "info",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into());

    // 本番 (CloudWatch) では 1 行 1 イベントの JSON で出す
    let (pretty, json) = match which() {
        Environment::Development => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_file(true)
                    .with_line_number(true)
                    .with_target(false),
            ),
            None,
        ),
        Environment::Production => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_current_span(false),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(pretty)
        .with(json)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

async fn bootstrap() -> Result<()> {
    let app_config = AppConfig::new()?;
    let db = connect_store_with(&app_config.database).await;

    let registry = AppRegistry::new(db);

    let app: Router = routes()
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(registry);

    if is_lambda_runtime() {
        tracing::info!("Running inside AWS Lambda");
        return lambda_http::run(app)
            .await
            .map_err(|e| anyhow::anyhow!(e))
            .inspect_err(|e| tracing::error!(error.message = %e, "Lambda runtime stopped"));
    }

    let addr = SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), app_config.server.port);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app)
        .await
        .context("Unexpected error happened in server")
        .inspect_err(|e| {
            tracing::error!(
                error.cause_chain = ?e,error.message = %e, "Unexpected error"
            )
        })
}
