/**
 * HTTP Metrics Middleware
 *
 * Records three Prometheus instruments for every request that reaches the
 * router:
 *
 * - `http_server_requests_in_flight` - requests currently being served
 * - `http_server_requests_total{uri, code, method}` - finished requests
 * - `http_server_request_duration_seconds{uri, method}` - latency, default
 *   buckets
 *
 * `uri` is always `recipes-api`: routes are not told apart. The registry is
 * owned by `HttpMetrics` and rendered by the `/metrics` handler.
 */

use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

use crate::backend::error::BackendError;

/// Static `uri` label shared by every request
pub const URI_LABEL: &str = "recipes-api";

#[derive(Clone)]
pub struct HttpMetrics {
    registry: Registry,
    in_flight: IntGauge,
    requests: IntCounterVec,
    duration: HistogramVec,
}

impl HttpMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let in_flight = IntGauge::new(
            "http_server_requests_in_flight",
            "A gauge of http requests currently being served.",
        )?;
        let requests = IntCounterVec::new(
            Opts::new("http_server_requests_total", "A counter for http requests."),
            &["uri", "code", "method"],
        )?;
        let duration = HistogramVec::new(
            HistogramOpts::new(
                "http_server_request_duration_seconds",
                "A histogram of latencies for http requests.",
            )
            .buckets(prometheus::DEFAULT_BUCKETS.to_vec()),
            &["uri", "method"],
        )?;

        registry.register(Box::new(in_flight.clone()))?;
        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(duration.clone()))?;

        Ok(Self {
            registry,
            in_flight,
            requests,
            duration,
        })
    }

    pub(crate) fn in_flight(&self) -> i64 {
        self.in_flight.get()
    }

    /// Finished requests recorded for `code`/`method` (method lower-case)
    pub(crate) fn request_count(&self, code: u16, method: &str) -> u64 {
        self.requests
            .with_label_values(&[URI_LABEL, code.to_string().as_str(), method])
            .get()
    }

    fn record(&self, status: StatusCode, method: &str, started: Instant) {
        self.requests
            .with_label_values(&[URI_LABEL, status.as_str(), method])
            .inc();
        self.duration
            .with_label_values(&[URI_LABEL, method])
            .observe(started.elapsed().as_secs_f64());
    }

    /// Prometheus text exposition of every registered metric
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

/// Keeps the in-flight gauge balanced even if the request future is dropped
struct InFlight<'a>(&'a IntGauge);

impl<'a> InFlight<'a> {
    fn enter(gauge: &'a IntGauge) -> Self {
        gauge.inc();
        Self(gauge)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.dec();
    }
}

/// Middleware recording the request metrics
pub async fn track_metrics(
    State(metrics): State<HttpMetrics>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().as_str().to_ascii_lowercase();
    let started = Instant::now();
    let _in_flight = InFlight::enter(&metrics.in_flight);

    let response = next.run(request).await;
    metrics.record(response.status(), &method, started);
    response
}

/// `GET /metrics`
pub async fn metrics_handler(State(metrics): State<HttpMetrics>) -> Result<Response, BackendError> {
    let body = metrics.render()?;

    Ok(([(CONTENT_TYPE, TextEncoder::new().format_type().to_string())], body).into_response())
}
