pub mod date;
pub mod exercise;
pub mod from_row;
pub mod log;
pub mod user;

pub use exercise::{CreateExercise, Exercise, ExerciseCreated};
pub use from_row::FromSqliteRow;
pub use log::{ExerciseLog, LogEntry, LogFilter, LogFilterError, LogQuery, DEFAULT_LOG_LIMIT};
pub use user::{CreateUser, User};
