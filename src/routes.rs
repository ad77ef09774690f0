use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::{exercises, home, users};

pub fn create_router(
    users_state: users::UsersState,
    exercises_state: exercises::ExercisesState,
    public_dir: impl AsRef<Path>,
) -> Router {
    Router::new()
        // Landing page
        .route("/", get(home::index))
        .route("/health", get(home::health_check))
        // User routes
        .route("/api/users", get(users::list).post(users::create))
        .route("/api/users/{id}/logs", get(users::logs))
        .with_state(users_state)
        // Exercise routes
        .route("/api/users/{id}/exercises", post(exercises::create))
        .with_state(exercises_state)
        // Anything else is looked up in the public directory
        .fallback_service(ServeDir::new(public_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
