use backendchat_seed::{dbs::mongo::MongoDB, services::seed::SeedService};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mongo = MongoDB::init().await?;
    let report = SeedService::run(&mongo).await?;

    tracing::info!(
        database = %report.database,
        collection = report.collection,
        timestamp = %report.message.timestamp,
        elapsed_ms = (report.finished_at - report.started_at).num_milliseconds(),
        "bootstrap complete"
    );

    Ok(())
}
