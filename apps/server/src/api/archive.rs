//! Day, week and month archives of recorded expenses.
//!
//! Path segments are parsed by hand so that a malformed or impossible date
//! (month 13, Feb 30, week 54) is a 404 rather than an extractor rejection.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use spendwise_core::reports::{parse_month, ArchiveKind, DateRange};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::ArchiveContext,
};

fn parse_number<T: std::str::FromStr>(raw: &str) -> ApiResult<T> {
    raw.trim().parse().map_err(|_| ApiError::NotFound)
}

fn archive(
    state: &AppState,
    kind: ArchiveKind,
    period: Option<DateRange>,
) -> ApiResult<ArchiveContext> {
    let period = period.ok_or(ApiError::NotFound)?;
    Ok(state.report_service.get_archive(kind, period)?.into())
}

#[utoipa::path(
    get,
    path = "/api/v1/archive/{year}/{month}/{day}",
    params(
        ("year" = i32, Path, description = "Four-digit year"),
        ("month" = String, Path, description = "Month number or English abbreviation"),
        ("day" = u32, Path, description = "Day of the month")
    ),
    responses((status = 200, body = ArchiveContext), (status = 404, description = "Not found"))
)]
pub async fn day_archive(
    State(state): State<Arc<AppState>>,
    Path((year, month, day)): Path<(String, String, String)>,
) -> ApiResult<Json<ArchiveContext>> {
    let year: i32 = parse_number(&year)?;
    let month = parse_month(&month).ok_or(ApiError::NotFound)?;
    let day: u32 = parse_number(&day)?;
    Ok(Json(archive(
        &state,
        ArchiveKind::Day,
        DateRange::for_day(year, month, day),
    )?))
}

#[utoipa::path(
    get,
    path = "/api/v1/archive/{year}/{week}/week",
    params(
        ("year" = i32, Path, description = "Four-digit year"),
        ("week" = u32, Path, description = "Week number, Monday first (week 0 precedes the first Monday)")
    ),
    responses((status = 200, body = ArchiveContext), (status = 404, description = "Not found"))
)]
pub async fn week_archive(
    State(state): State<Arc<AppState>>,
    Path((year, week)): Path<(String, String)>,
) -> ApiResult<Json<ArchiveContext>> {
    let year: i32 = parse_number(&year)?;
    let week: u32 = parse_number(&week)?;
    Ok(Json(archive(
        &state,
        ArchiveKind::Week,
        DateRange::for_week(year, week),
    )?))
}

#[utoipa::path(
    get,
    path = "/api/v1/archive/{year}/{month}",
    params(
        ("year" = i32, Path, description = "Four-digit year"),
        ("month" = String, Path, description = "Month number or English abbreviation")
    ),
    responses((status = 200, body = ArchiveContext), (status = 404, description = "Not found"))
)]
pub async fn month_archive(
    State(state): State<Arc<AppState>>,
    Path((year, month)): Path<(String, String)>,
) -> ApiResult<Json<ArchiveContext>> {
    let year: i32 = parse_number(&year)?;
    let month = parse_month(&month).ok_or(ApiError::NotFound)?;
    Ok(Json(archive(
        &state,
        ArchiveKind::Month,
        DateRange::for_month(year, month),
    )?))
}

// The second segment is a month for day/month archives and a week number for
// week archives; matchit needs one parameter name per position.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/archive/{year}/{period}/week", get(week_archive))
        .route("/archive/{year}/{period}/{day}", get(day_archive))
        .route("/archive/{year}/{period}", get(month_archive))
}
