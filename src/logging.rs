use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_LOG_DIR: &str = "storage/logs";

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %matched_path,
        "Incoming request"
    );

    let response = next.run(req).await;
    let latency = start.elapsed();
    let status = response.status();

    match status.as_u16() {
        400..=499 => {
            warn!(
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Client error"
            );
        }
        500..=599 => {
            error!(
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Server error"
            );
        }
        _ => {
            info!(
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Request completed"
            );
        }
    }

    response
}

/// Directory for rolling log files, from `LOG_DIR`.
///
/// Unset means [`DEFAULT_LOG_DIR`]; an empty value or `off` disables file
/// logging.
pub fn log_dir_from_env() -> Option<String> {
    match std::env::var("LOG_DIR") {
        Ok(dir) if dir.trim().is_empty() || dir.eq_ignore_ascii_case("off") => None,
        Ok(dir) => Some(dir),
        Err(_) => Some(DEFAULT_LOG_DIR.to_string()),
    }
}

/// Installs the global subscriber: a compact console layer plus, when
/// `log_dir` is given, a daily error log and a daily JSON log.
pub fn init_tracing(log_dir: Option<&str>) -> std::io::Result<()> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::fmt;

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,schoolerp_db=info,tower_http=warn,sqlx=warn,axum::rejection=trace",
            env!("CARGO_CRATE_NAME")
        ))
    });

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    let (file_layer, json_layer) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;

            let file_appender = RollingFileAppender::new(Rotation::DAILY, dir, "schoolerp.log");
            let file_layer = fmt::layer()
                .with_writer(file_appender)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_filter(EnvFilter::new("error"));

            // Structured logs for ingestion (e.g. Loki)
            let json_appender = RollingFileAppender::new(Rotation::DAILY, dir, "schoolerp.json");
            let json_layer = fmt::layer()
                .json()
                .with_writer(json_appender)
                .with_current_span(true)
                .with_span_list(true)
                .with_filter(EnvFilter::new("info"));

            (Some(file_layer), Some(json_layer))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .with(json_layer)
        .init();

    match log_dir {
        Some(dir) => info!(log_dir = %dir, "Tracing initialized with file logging"),
        None => info!("Tracing initialized (console only)"),
    }

    Ok(())
}
