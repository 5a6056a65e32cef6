// GET /health — static report, independent of any prior request.

use axum::Json;

use crate::models::HealthReport;

pub async fn health() -> Json<HealthReport> {
    Json(HealthReport::default())
}
