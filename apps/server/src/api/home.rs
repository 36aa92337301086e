use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use spendwise_core::utils::time_utils::local_today;

use crate::{error::ApiResult, main_lib::AppState, models::Dashboard};

/// Spend for the current day, week and month.
#[utoipa::path(get, path = "/api/v1/home", responses((status = 200, body = Dashboard)))]
pub async fn home(State(state): State<Arc<AppState>>) -> ApiResult<Json<Dashboard>> {
    let dashboard = state.report_service.get_dashboard(local_today())?;
    Ok(Json(dashboard.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/home", get(home))
}
