use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use crate::error::{AppError, Result};
use crate::extract::JsonOrForm;
use crate::models::{CreateExercise, ExerciseCreated};
use crate::repositories::{ExerciseRepository, UserRepository};

#[derive(Clone)]
pub struct ExercisesState {
    pub user_repo: UserRepository,
    pub exercise_repo: ExerciseRepository,
}

pub async fn create(
    State(state): State<ExercisesState>,
    Path(user_id): Path<String>,
    payload: std::result::Result<JsonOrForm<CreateExercise>, AppError>,
) -> Result<Json<ExerciseCreated>> {
    // The owner is resolved before the body is judged, so an unknown user is
    // always a 404.
    let user = state
        .user_repo
        .find_by_id(&user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    let JsonOrForm(form) = payload?;

    let date = form.date.unwrap_or_else(|| Utc::now().date_naive());
    let exercise = state
        .exercise_repo
        .create(&user.id, &form.description, form.duration, date)
        .await?;

    tracing::info!(user_id = %user.id, exercise_id = %exercise.id, "Logged exercise");
    Ok(Json(ExerciseCreated::new(user, exercise)))
}
