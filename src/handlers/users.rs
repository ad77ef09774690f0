use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::{AppError, Result};
use crate::extract::JsonOrForm;
use crate::models::{CreateUser, ExerciseLog, LogQuery, User};
use crate::repositories::{ExerciseRepository, UserRepository};

#[derive(Clone)]
pub struct UsersState {
    pub user_repo: UserRepository,
    pub exercise_repo: ExerciseRepository,
}

pub async fn list(State(state): State<UsersState>) -> Result<Json<Vec<User>>> {
    let users = state.user_repo.find_all().await?;
    Ok(Json(users))
}

pub async fn create(
    State(state): State<UsersState>,
    JsonOrForm(payload): JsonOrForm<CreateUser>,
) -> Result<Json<User>> {
    // Mirrors the NOT NULL column; the value itself is stored untouched
    let username = payload
        .username
        .ok_or_else(|| AppError::Validation("username is required".to_string()))?;

    // Store rejections are reported to the client as-is on this route
    let user = state
        .user_repo
        .create(&username)
        .await
        .map_err(|e| match e {
            AppError::Database(e) => AppError::Validation(e.to_string()),
            other => other,
        })?;

    tracing::info!(user_id = %user.id, username = %user.username, "Created user");
    Ok(Json(user))
}

pub async fn logs(
    State(state): State<UsersState>,
    Path(id): Path<String>,
    Query(query): Query<LogQuery>,
) -> Result<Json<ExerciseLog>> {
    let user = state
        .user_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let filter = query.into_filter()?;
    let exercises = state.exercise_repo.find_log(&user.id, &filter).await?;

    Ok(Json(ExerciseLog::new(user, exercises)))
}
