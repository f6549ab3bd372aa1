use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::error::AppError;

/// Install the global Prometheus recorder backing the `metrics` macros.
///
/// Can only succeed once per process; the returned handle renders the
/// text exposition served on `/metrics`.
pub fn init_metrics() -> Result<PrometheusHandle, AppError> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(
            metrics_exporter_prometheus::Matcher::Full(
                "http_request_duration_seconds".to_string(),
            ),
            &[0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0],
        )
        .and_then(|builder| builder.install_recorder())
        .map_err(|e| {
            AppError::InternalError(anyhow::anyhow!(
                "Failed to install metrics recorder: {}",
                e
            ))
        })
}
