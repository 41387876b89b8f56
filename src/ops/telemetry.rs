// * Telemetry - JSON Logging and Prometheus Metrics
// * Provides structured logging and command/upstream metrics

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec, register_histogram_vec, CounterVec, Encoder, HistogramVec, TextEncoder,
};
use std::net::SocketAddr;
use tokio::sync::oneshot;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// * Filter used when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "pk_tracker_bot=debug,info";

lazy_static! {
    // * Commands handled, by command kind
    pub static ref COMMANDS_TOTAL: CounterVec = register_counter_vec!(
        "tracker_commands_total",
        "Total number of chat commands handled by kind",
        &["command"]
    ).expect("tracker_commands_total registration");

    // * Upstream requests by source and outcome
    pub static ref UPSTREAM_REQUESTS_TOTAL: CounterVec = register_counter_vec!(
        "tracker_upstream_requests_total",
        "Total upstream requests by source and outcome",
        &["source", "outcome"]
    ).expect("tracker_upstream_requests_total registration");

    // * Upstream request duration histogram
    pub static ref UPSTREAM_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "tracker_upstream_duration_seconds",
        "Upstream request duration in seconds",
        &["source"],
        vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    ).expect("tracker_upstream_duration_seconds registration");
}

/// Initializes the tracing subscriber with JSON formatting
///
/// # Example
/// ```ignore
/// use pk_tracker_bot::ops::telemetry;
///
/// telemetry::init_tracing();
/// tracing::info!(command = "lookup", "Handling command");
/// ```
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).json())
        .init();
}

/// Initializes tracing with pretty formatting (for development)
pub fn init_tracing_pretty() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().pretty())
        .init();
}

/// Metrics server handle for graceful shutdown
pub struct MetricsServerHandle {
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MetricsServerHandle {
    /// Signals the metrics server to shut down
    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Starts the Prometheus metrics HTTP server on the specified port
///
/// Serves `/metrics` and `/health`. Returns a handle for graceful shutdown.
pub async fn start_metrics_server(port: u16) -> MetricsServerHandle {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tokio::spawn(async move {
        let make_svc = hyper::service::make_service_fn(|_conn| async {
            Ok::<_, std::convert::Infallible>(hyper::service::service_fn(handle_metrics_request))
        });

        let server = match hyper::Server::try_bind(&addr) {
            Ok(builder) => builder.serve(make_svc).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            }),
            Err(e) => {
                tracing::error!(port = port, error = %e, "Metrics server failed to bind");
                return;
            }
        };

        tracing::info!(port = port, "Metrics server started");

        if let Err(e) = server.await {
            tracing::error!(error = %e, "Metrics server error");
        }

        tracing::info!("Metrics server stopped");
    });

    MetricsServerHandle {
        shutdown_tx: Some(shutdown_tx),
    }
}

/// Handles incoming HTTP requests to the metrics endpoint
async fn handle_metrics_request(
    req: hyper::Request<hyper::Body>,
) -> Result<hyper::Response<hyper::Body>, std::convert::Infallible> {
    let (status, body) = match req.uri().path() {
        "/metrics" => (200, get_metrics_string()),
        "/health" => (200, "OK".to_string()),
        _ => (404, "Not Found".to_string()),
    };

    let mut response = hyper::Response::new(hyper::Body::from(body));
    *response.status_mut() =
        hyper::StatusCode::from_u16(status).unwrap_or(hyper::StatusCode::INTERNAL_SERVER_ERROR);
    Ok(response)
}

/// Returns the current metrics in the Prometheus text format
pub fn get_metrics_string() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::warn!(error = %e, "Failed to encode metrics");
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}

/// Records one handled chat command
pub fn record_command(command: &str) {
    COMMANDS_TOTAL.with_label_values(&[command]).inc();
}

/// Records a finished upstream request
pub fn record_upstream(source: &str, outcome: &str, seconds: f64) {
    UPSTREAM_REQUESTS_TOTAL
        .with_label_values(&[source, outcome])
        .inc();
    UPSTREAM_DURATION_SECONDS
        .with_label_values(&[source])
        .observe(seconds);
}
