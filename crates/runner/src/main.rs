//! Place-order runner entry point.

use std::process::ExitCode;

use metrics_exporter_prometheus::PrometheusBuilder;
use runner::config::{Config, LogFormat};
use runner::error::RunnerError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let json = config.log_format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer().pretty()))
        .init();
}

async fn place_order(config: &Config) -> Result<(), RunnerError> {
    let metrics_handle = PrometheusBuilder::new().install_recorder()?;

    let result = runner::run(config).await;

    if let Ok(events) = &result {
        for event in events {
            match serde_json::to_string(event) {
                Ok(event) => tracing::info!(%event, "event emitted"),
                Err(error) => tracing::warn!(%error, "event could not be serialized"),
            }
        }
    }
    tracing::info!(metrics = %metrics_handle.render(), "metrics snapshot");

    result.map(|_| ())
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_env();
    init_tracing(&config);
    tracing::info!(
        order = ?config.order_path,
        acknowledgments = config.acknowledgments_enabled,
        "placing order"
    );

    match place_order(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(RunnerError::PlaceOrder(error)) => {
            for field in error.errors() {
                tracing::warn!(field = %field.field, "{}", field.description);
            }
            tracing::error!("order rejected");
            ExitCode::FAILURE
        }
        Err(error) => {
            tracing::error!(%error, "place-order failed");
            ExitCode::FAILURE
        }
    }
}
