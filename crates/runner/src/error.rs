//! Runner error types.

use std::path::PathBuf;

use domain::ValidationError;
use metrics_exporter_prometheus::BuildError;
use thiserror::Error;
use workflow::PlaceOrderError;

/// Errors that end a runner invocation.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The order file could not be read.
    #[error("failed to read order from {}: {source}", .path.display())]
    ReadOrder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The order file is not a valid order document.
    #[error("failed to parse order: {0}")]
    ParseOrder(#[from] serde_json::Error),

    /// The built-in product catalog lists an invalid price.
    #[error("invalid catalog entry: {0}")]
    Catalog(#[from] ValidationError),

    /// The metrics recorder could not be installed.
    #[error("failed to install metrics recorder: {0}")]
    Metrics(#[from] BuildError),

    /// The workflow rejected the order.
    #[error(transparent)]
    PlaceOrder(#[from] PlaceOrderError),
}
