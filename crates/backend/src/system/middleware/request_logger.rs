use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_number;

/// Middleware для логирования HTTP запросов
///
/// Пишет в лог метод, путь, статус, длительность и размер ответа.
/// 4xx уходят в warn, 5xx в error.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(
                "{} | failed to read response body: {}",
                format_line(&method, &path, parts.status, start.elapsed().as_millis(), None),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let line = format_line(
        &method,
        &path,
        parts.status,
        start.elapsed().as_millis(),
        Some(bytes.len()),
    );
    if parts.status.is_server_error() {
        tracing::error!("{}", line);
    } else if parts.status.is_client_error() {
        tracing::warn!("{}", line);
    } else {
        tracing::info!("{}", line);
    }

    Response::from_parts(parts, Body::from(bytes))
}

fn format_line(
    method: &Method,
    path: &str,
    status: StatusCode,
    duration_ms: u128,
    size: Option<usize>,
) -> String {
    let size = size.map(format_number).unwrap_or_else(|| "error".to_string());
    format!(
        "{:>5}ms | {:>12} | {} {:>6} {}",
        duration_ms,
        size,
        status.as_u16(),
        method,
        path
    )
}
