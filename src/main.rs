use std::sync::Arc;

use alerte_core::features::dashboard::dtos::ReportQuery;
use alerte_core::modules::notifications::TracingNotifier;
use alerte_core::{AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        "Configuration loaded: simulate_latency={}, latency_scale={}, public_base_url={}",
        config.store.simulate_latency,
        config.store.latency_scale,
        config.app.public_base_url
    );

    let state = AppState::bootstrap(&config, Arc::new(TracingNotifier))?;
    tracing::info!("In-memory stores seeded");

    let snapshot = state.load_dashboard().await?;
    tracing::info!(
        "Loaded {} reports in {} categories: pending={}, transmitted={}, resolved={}, today={}",
        snapshot.stats.total,
        snapshot.categories.len(),
        snapshot.stats.pending,
        snapshot.stats.transmitted,
        snapshot.stats.resolved,
        snapshot.stats.today_reports
    );

    let home = state.dashboard.home().await?;
    for report in &home.recent {
        tracing::info!(
            "#{} [{}] {} ({})",
            report.id,
            report.status,
            report.title,
            report.category
        );
    }

    let map = state.dashboard.map_view(&ReportQuery::new()).await?;
    tracing::info!(
        "Map shows {} reports centered on ({:.4}, {:.4})",
        map.reports.len(),
        map.center.0,
        map.center.1
    );

    Ok(())
}
