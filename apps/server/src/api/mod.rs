use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{config::Config, main_lib::AppState, models};

pub mod archive;
pub mod budgets;
pub mod categories;
pub mod expenses;
pub mod home;

#[utoipa::path(get, path = "/api/v1/healthz", responses((status = 200, description = "OK")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/api/v1/readyz", responses((status = 200, description = "Ready")))]
pub async fn readyz() -> &'static str {
    "ok"
}

#[derive(OpenApi)]
#[openapi(
    paths(
        healthz,
        readyz,
        home::home,
        expenses::create_expense_page,
        expenses::create_expense,
        expenses::create_previous_expense_page,
        expenses::create_previous_expense,
        expenses::update_expense_page,
        expenses::update_expense,
        expenses::delete_expense_page,
        expenses::delete_expense,
        categories::create_category_page,
        categories::create_category,
        categories::update_category_page,
        categories::update_category,
        categories::delete_category_page,
        categories::delete_category,
        budgets::create_budget_page,
        budgets::create_budget,
        budgets::update_budget_page,
        budgets::update_budget,
        archive::day_archive,
        archive::week_archive,
        archive::month_archive,
    ),
    components(schemas(
        models::Category,
        models::Expense,
        models::Budget,
        models::Report,
        models::PeriodReports,
        models::Dashboard,
        models::DateRange,
        models::CategoryForm,
        models::ExpenseForm,
        models::PreviousExpenseForm,
        models::BudgetForm,
        models::CategoryPage,
        models::ExpensePage,
        models::BudgetPage,
        models::ExpenseContext,
        models::CategoryContext,
        models::BudgetContext,
        models::CategoryDeletion,
        models::ArchiveContext,
    )),
    tags((name = "spendwise"))
)]
pub struct ApiDoc;

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin {:?}", o);
                    None
                }
            })
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let openapi = ApiDoc::openapi();

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .merge(home::router())
        .merge(expenses::router())
        .merge(categories::router())
        .merge(budgets::router())
        .merge(archive::router());

    Router::new()
        .nest("/api/v1", api)
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(config.request_timeout))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(cors),
        )
}
