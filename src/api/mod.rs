//! HTTP API handlers

use axum::Json;
use serde::Serialize;

/// General status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
}

/// GET /status - Service health check
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_status_reports_package() {
        let Json(status) = status_handler().await;
        assert_eq!(status.service, "para-po");
        assert_eq!(status.version, env!("CARGO_PKG_VERSION"));

        let body = serde_json::to_value(&status).unwrap();
        assert_eq!(body["service"], "para-po");
    }
}
