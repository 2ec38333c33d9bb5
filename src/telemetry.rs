//! # Telemetry
//!
//! Global subscriber setup plus the per-request trace id. The trace id lives
//! in a task-local so error responses can carry it without threading it
//! through every handler.

use std::sync::atomic::{AtomicBool, Ordering};

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use log::LevelFilter;
use thiserror::Error;
use tokio::task_local;
use tracing::Instrument;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Registry, fmt,
    layer::{Layer, SubscriberExt},
    util::{SubscriberInitExt, TryInitError},
};

use crate::config::AppConfig;
use crate::error::TRACE_ID_HEADER;

/// Correlation data for the request being served
#[derive(Debug, Clone)]
pub struct TraceContext {
    pub trace_id: String,
}

task_local! {
    static REQUEST_TRACE: TraceContext;
}

#[derive(Debug, Error)]
pub enum TelemetryInitError {
    #[error("failed to bridge log records into tracing: {0}")]
    LogBridge(#[from] log::SetLoggerError),
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] TryInitError),
}

static SUBSCRIBER_INSTALLED: AtomicBool = AtomicBool::new(false);

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn output_layer(format: &str) -> BoxedLayer {
    match format {
        "pretty" => fmt::layer().pretty().boxed(),
        _ => fmt::layer().json().flatten_event(true).boxed(),
    }
}

/// `RUST_LOG` wins over the configured level
fn level_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Installs the global subscriber once; later calls are no-ops.
///
/// `log` records (sea-orm, sqlx, the seeder) are forwarded into tracing.
pub fn init_tracing(config: &AppConfig) -> Result<(), TelemetryInitError> {
    if SUBSCRIBER_INSTALLED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    // Another component may already own the `log` facade.
    if let Err(err) = LogTracer::builder().with_max_level(LevelFilter::Trace).init() {
        eprintln!("log records will not reach tracing: {err}");
    }

    let installed = tracing_subscriber::registry()
        .with(output_layer(&config.log_format))
        .with(level_filter(config))
        .try_init();

    if let Err(err) = installed {
        SUBSCRIBER_INSTALLED.store(false, Ordering::SeqCst);
        eprintln!("keeping the existing tracing subscriber: {err}");
    }

    Ok(())
}

/// Runs `future` with `context` as the active trace context
pub async fn with_trace_context<Fut, R>(context: TraceContext, future: Fut) -> R
where
    Fut: std::future::Future<Output = R>,
{
    REQUEST_TRACE.scope(context, future).await
}

/// Trace id of the request the current task is serving
pub fn current_trace_id() -> Option<String> {
    REQUEST_TRACE.try_with(|ctx| ctx.trace_id.clone()).ok()
}

/// Request middleware assigning a trace id to every request.
///
/// An incoming `X-Trace-Id` is reused when present. The id is available to
/// handlers through [`current_trace_id`] and echoed on the response.
pub async fn trace_requests(request: Request, next: Next) -> Response {
    let trace_id = request
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty() && value.len() <= 128)
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let span = tracing::info_span!("request", trace_id = %trace_id);
    let context = TraceContext {
        trace_id: trace_id.clone(),
    };
    let mut response =
        with_trace_context(context, next.run(request).instrument(span)).await;

    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        response.headers_mut().insert(TRACE_ID_HEADER, value);
    }
    response
}
