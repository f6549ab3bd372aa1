pub mod logging;
pub mod metrics;

pub use logging::init_tracing;
pub use metrics::init_metrics;
pub use metrics_exporter_prometheus::PrometheusHandle;
