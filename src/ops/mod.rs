// * Operations: logging setup and Prometheus metrics

pub mod telemetry;

pub use telemetry::{
    get_metrics_string, init_tracing, init_tracing_pretty, record_command, record_upstream,
    start_metrics_server, MetricsServerHandle,
};
