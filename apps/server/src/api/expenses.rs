use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use spendwise_core::utils::time_utils::local_today;

use crate::{
    error::{ApiResult, FormJson},
    main_lib::AppState,
    models::{Expense, ExpenseContext, ExpenseForm, PageQuery, PreviousExpenseForm},
};

const ADD_EXPENSE: &str = "Add Expense";
const ADD_PREVIOUS_EXPENSE: &str = "Add Previous Expense";
const UPDATE_EXPENSE: &str = "Update Expense";

/// Today's expenses (paged) with their report, shared by every entry page.
fn expense_context(
    state: &AppState,
    query: &PageQuery,
    page_name: &str,
    is_expense: bool,
    is_previous: bool,
    object: Option<Expense>,
) -> ApiResult<ExpenseContext> {
    let today = local_today();
    let page = state
        .expense_service
        .list_expenses_on(today, query.page.as_deref())?;
    let report = state.report_service.get_day_report(today)?;
    Ok(ExpenseContext {
        page_obj: page.into(),
        page_name: page_name.to_string(),
        report: report.into(),
        is_expense,
        is_previous,
        object,
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/expense/create",
    params(PageQuery),
    responses((status = 200, body = ExpenseContext))
)]
pub async fn create_expense_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<ExpenseContext>> {
    Ok(Json(expense_context(&state, &query, ADD_EXPENSE, true, true, None)?))
}

#[utoipa::path(
    post,
    path = "/api/v1/expense/create",
    params(PageQuery),
    request_body = ExpenseForm,
    responses(
        (status = 201, body = ExpenseContext),
        (status = 422, description = "Field validation failed")
    )
)]
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
    FormJson(form): FormJson<ExpenseForm>,
) -> ApiResult<(StatusCode, Json<ExpenseContext>)> {
    let expense = state.expense_service.create_expense(form.into()).await?;
    tracing::info!(expense_id = expense.id, "expense created");
    let context = expense_context(&state, &query, ADD_EXPENSE, true, true, Some(expense.into()))?;
    Ok((StatusCode::CREATED, Json(context)))
}

#[utoipa::path(
    get,
    path = "/api/v1/expense/previous/create",
    params(PageQuery),
    responses((status = 200, body = ExpenseContext))
)]
pub async fn create_previous_expense_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<ExpenseContext>> {
    Ok(Json(expense_context(
        &state,
        &query,
        ADD_PREVIOUS_EXPENSE,
        true,
        false,
        None,
    )?))
}

#[utoipa::path(
    post,
    path = "/api/v1/expense/previous/create",
    params(PageQuery),
    request_body = PreviousExpenseForm,
    responses(
        (status = 201, body = ExpenseContext),
        (status = 422, description = "Field validation failed")
    )
)]
pub async fn create_previous_expense(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
    FormJson(form): FormJson<PreviousExpenseForm>,
) -> ApiResult<(StatusCode, Json<ExpenseContext>)> {
    let expense = state
        .expense_service
        .create_previous_expense(form.into())
        .await?;
    tracing::info!(
        expense_id = expense.id,
        created_at = %expense.created_at,
        "backdated expense created"
    );
    let context = expense_context(
        &state,
        &query,
        ADD_PREVIOUS_EXPENSE,
        true,
        false,
        Some(expense.into()),
    )?;
    Ok((StatusCode::CREATED, Json(context)))
}

#[utoipa::path(
    get,
    path = "/api/v1/expense/{id}/update",
    params(("id" = i32, Path, description = "Expense id"), PageQuery),
    responses((status = 200, body = ExpenseContext), (status = 404, description = "Not found"))
)]
pub async fn update_expense_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<ExpenseContext>> {
    let expense = state.expense_service.get_expense(id)?;
    Ok(Json(expense_context(
        &state,
        &query,
        UPDATE_EXPENSE,
        false,
        false,
        Some(expense.into()),
    )?))
}

#[utoipa::path(
    put,
    path = "/api/v1/expense/{id}/update",
    params(("id" = i32, Path, description = "Expense id"), PageQuery),
    request_body = ExpenseForm,
    responses(
        (status = 200, body = ExpenseContext),
        (status = 404, description = "Not found"),
        (status = 422, description = "Field validation failed")
    )
)]
pub async fn update_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(query): Query<PageQuery>,
    FormJson(form): FormJson<ExpenseForm>,
) -> ApiResult<Json<ExpenseContext>> {
    let expense = state.expense_service.update_expense(id, form.into()).await?;
    Ok(Json(expense_context(
        &state,
        &query,
        UPDATE_EXPENSE,
        false,
        false,
        Some(expense.into()),
    )?))
}

#[utoipa::path(
    get,
    path = "/api/v1/expense/{id}/delete",
    params(("id" = i32, Path, description = "Expense id")),
    responses((status = 200, body = Expense), (status = 404, description = "Not found"))
)]
pub async fn delete_expense_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Expense>> {
    Ok(Json(state.expense_service.get_expense(id)?.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/expense/{id}/delete",
    params(("id" = i32, Path, description = "Expense id")),
    responses((status = 204, description = "Deleted"), (status = 404, description = "Not found"))
)]
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    state.expense_service.delete_expense(id).await?;
    tracing::info!(expense_id = id, "expense deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/expense/create",
            get(create_expense_page).post(create_expense),
        )
        .route(
            "/expense/previous/create",
            get(create_previous_expense_page).post(create_previous_expense),
        )
        .route(
            "/expense/{id}/update",
            get(update_expense_page).put(update_expense).post(update_expense),
        )
        .route(
            "/expense/{id}/delete",
            get(delete_expense_page).delete(delete_expense).post(delete_expense),
        )
}
