//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use family_budget_core::error::CoreError;
use family_budget_core::types::DbId;
use family_budget_db::models::category::{Category, CreateCategory, UpdateCategory};
use family_budget_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, PathId};
use crate::response::{DataResponse, ListResponse, MessageResponse};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// GET /api/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ListResponse<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(ListResponse::new(categories)))
}

/// POST /api/categories
///
/// A missing or empty `color` is stored as the default gray.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<(StatusCode, Json<DataResponse<Category>>)> {
    let new_category = input.validate()?;
    let category = CategoryRepo::create(&state.pool, &new_category).await?;

    tracing::info!(
        category_id = category.id,
        category_type = %category.category_type,
        "Category created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// GET /api/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<DataResponse<Category>>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: category }))
}

/// PUT /api/categories/{id}
///
/// The category must exist before the body is looked at, so an unknown ID
/// is reported as 404 even when the payload is also malformed. Empty fields
/// in the payload leave the stored values untouched.
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    payload: Result<AppJson<UpdateCategory>, AppError>,
) -> AppResult<Json<DataResponse<Category>>> {
    CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let AppJson(input) = payload?;
    let changes = input.validate()?;

    // The row can be soft-deleted between the lookup and the update.
    let category = CategoryRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(category_id = id, "Category updated");
    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/categories/{id}
///
/// Soft delete. An unknown ID and an already-deleted ID are both 404.
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<MessageResponse>> {
    if !CategoryRepo::soft_delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(category_id = id, "Category deleted");
    Ok(Json(MessageResponse {
        message: "Category deleted successfully",
    }))
}
