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
    models::{Category, CategoryContext, CategoryDeletion, CategoryForm, PageQuery},
};

const ADD_CATEGORY: &str = "Add Expense Category";
const UPDATE_CATEGORY: &str = "Update Expense Category";

fn category_context(
    state: &AppState,
    query: &PageQuery,
    page_name: &str,
    object: Option<Category>,
) -> ApiResult<CategoryContext> {
    let page = state
        .category_service
        .list_categories(query.page.as_deref())?;
    Ok(CategoryContext {
        page_obj: page.into(),
        page_name: page_name.to_string(),
        is_category_expense: true,
        object,
    })
}

#[utoipa::path(
    get,
    path = "/api/v1/expense/category/create",
    params(PageQuery),
    responses((status = 200, body = CategoryContext))
)]
pub async fn create_category_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<CategoryContext>> {
    Ok(Json(category_context(&state, &query, ADD_CATEGORY, None)?))
}

#[utoipa::path(
    post,
    path = "/api/v1/expense/category/create",
    params(PageQuery),
    request_body = CategoryForm,
    responses(
        (status = 201, body = CategoryContext),
        (status = 422, description = "Field validation failed")
    )
)]
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
    FormJson(form): FormJson<CategoryForm>,
) -> ApiResult<(StatusCode, Json<CategoryContext>)> {
    let category = state.category_service.create_category(form.into()).await?;
    tracing::info!(category_id = category.id, "category created");
    let context = category_context(&state, &query, ADD_CATEGORY, Some(category.into()))?;
    Ok((StatusCode::CREATED, Json(context)))
}

#[utoipa::path(
    get,
    path = "/api/v1/expense/category/{id}/update",
    params(("id" = i32, Path, description = "Category id"), PageQuery),
    responses((status = 200, body = CategoryContext), (status = 404, description = "Not found"))
)]
pub async fn update_category_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Json<CategoryContext>> {
    let category = state.category_service.get_category(id)?;
    Ok(Json(category_context(
        &state,
        &query,
        UPDATE_CATEGORY,
        Some(category.into()),
    )?))
}

#[utoipa::path(
    put,
    path = "/api/v1/expense/category/{id}/update",
    params(("id" = i32, Path, description = "Category id"), PageQuery),
    request_body = CategoryForm,
    responses(
        (status = 200, body = CategoryContext),
        (status = 404, description = "Not found"),
        (status = 422, description = "Field validation failed")
    )
)]
pub async fn update_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(query): Query<PageQuery>,
    FormJson(form): FormJson<CategoryForm>,
) -> ApiResult<Json<CategoryContext>> {
    let category = state
        .category_service
        .update_category(id, form.into())
        .await?;
    Ok(Json(category_context(
        &state,
        &query,
        UPDATE_CATEGORY,
        Some(category.into()),
    )?))
}

#[utoipa::path(
    get,
    path = "/api/v1/expense/category/{id}/delete",
    params(("id" = i32, Path, description = "Category id")),
    responses((status = 200, body = Category), (status = 404, description = "Not found"))
)]
pub async fn delete_category_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Category>> {
    Ok(Json(state.category_service.get_category(id)?.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/expense/category/{id}/delete",
    params(("id" = i32, Path, description = "Category id")),
    responses((status = 200, body = CategoryDeletion), (status = 404, description = "Not found"))
)]
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> ApiResult<Json<CategoryDeletion>> {
    let deletion = state.category_service.delete_category(id).await?;
    tracing::info!(
        category_id = id,
        expenses_deleted = deletion.expenses_deleted,
        "category deleted"
    );
    Ok(Json(deletion.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/expense/category/create",
            get(create_category_page).post(create_category),
        )
        .route(
            "/expense/category/{id}/update",
            get(update_category_page)
                .put(update_category)
                .post(update_category),
        )
        .route(
            "/expense/category/{id}/delete",
            get(delete_category_page)
                .delete(delete_category)
                .post(delete_category),
        )
}
