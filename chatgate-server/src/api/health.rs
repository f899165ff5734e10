use axum::response::Json;
use chatgate_types::HealthStatus;

pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}
