use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use rail_api::{app, AppState};
use rail_core::BookTickets;
use rail_store::{app_config::Config, build_reference_generator, InMemoryTrainRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rail_api=debug,rail_core=debug,rail_store=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting rail booking API on port {}", config.server.port);

    let trains = InMemoryTrainRepository::load_json(&config.seat_plans.path)
        .await
        .with_context(|| format!("Failed to load seat plans from {}", config.seat_plans.path))?;

    let reference_generator = build_reference_generator(&config.business_rules);
    let book_tickets = BookTickets::new(Arc::new(trains), reference_generator);

    let app_state = AppState {
        book_tickets: Arc::new(book_tickets),
        business_rules: config.business_rules.clone(),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
