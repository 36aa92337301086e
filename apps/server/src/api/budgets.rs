use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{
    error::{ApiResult, FormJson},
    main_lib::AppState,
    models::{Budget, BudgetContext, BudgetForm, PageQuery},
};

const ADD_BUDGET: &str = "Add Budget Expense";
const UPDATE_BUDGET: &str = "Update Budget Expense";

fn budget_context(
    state: &AppState,
    query: &PageQuery,
    page_name: &str,
    object: Option<Budget>,
) -> ApiResult<BudgetContext> {
    let page = state.budget_service.list_budgets(query.page.as_deref())?;
    Ok(BudgetContext {
        page_obj: page.into(),
        page_name: page_name.to_string(),
        is_budget_expense: true,
        object,
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/expense/budget/create",
    params(PageQuery),
    responses((status = 200, body = BudgetContext))
)]
pub async fn create_budget_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<BudgetContext>> {
    Ok(Json(budget_context(&state, &query, ADD_BUDGET, None)?))
}

#[utoipa::path(
    post,
    path = "/api/v1/expense/budget/create",
    params(PageQuery),
    request_body = BudgetForm,
    responses(
        (status = 201, body = BudgetContext),
        (status = 422, description = "Field validation failed")
    )
)]
pub async fn create_budget(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
    FormJson(form): FormJson<BudgetForm>,
) -> ApiResult<(StatusCode, Json<BudgetContext>)> {
    let budget = state.budget_service.create_budget(form.into()).await?;
    tracing::info!(
        budget_id = budget.id,
        deadline = %budget.deadline,
        "budget created"
    );
    let context = budget_context(&state, &query, ADD_BUDGET, Some(budget.into()))?;
    Ok((StatusCode::CREATED, Json(context)))
}

#[utoipa::path(
    get,
    path = "/api/v1/expense/budget/{id}/update",
    params(("id" = i32, Path, description = "Budget id"), PageQuery),
    responses((status = 200, body = BudgetContext), (status = 404, description = "Not found"))
)]
pub async fn update_budget_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<BudgetContext>> {
    let budget = state.budget_service.get_budget(id)?;
    Ok(Json(budget_context(
        &state,
        &query,
        UPDATE_BUDGET,
        Some(budget.into()),
    )?))
}

#[utoipa::path(
    put,
    path = "/api/v1/expense/budget/{id}/update",
    params(("id" = i32, Path, description = "Budget id"), PageQuery),
    request_body = BudgetForm,
    responses(
        (status = 200, body = BudgetContext),
        (status = 404, description = "Not found"),
        (status = 422, description = "Field validation failed")
    )
)]
pub async fn update_budget(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(query): Query<PageQuery>,
    FormJson(form): FormJson<BudgetForm>,
) -> ApiResult<Json<BudgetContext>> {
    let budget = state.budget_service.update_budget(id, form.into()).await?;
    Ok(Json(budget_context(
        &state,
        &query,
        UPDATE_BUDGET,
        Some(budget.into()),
    )?))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/expense/budget/create",
            get(create_budget_page).post(create_budget),
        )
        .route(
            "/expense/budget/{id}/update",
            get(update_budget_page).put(update_budget).post(update_budget),
        )
}
