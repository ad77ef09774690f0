use chrono::{NaiveDate, Utc};
use rusqlite::types::Value;
use uuid::Uuid;

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{Exercise, FromSqliteRow, LogFilter};

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        user_id: &str,
        description: &str,
        duration: f64,
        date: NaiveDate,
    ) -> Result<Exercise> {
        let exercise = Exercise {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            description: description.to_string(),
            duration,
            date,
            created_at: Utc::now(),
        };
        let exercise_clone = exercise.clone();

        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> Result<()> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO exercises (id, user_id, description, duration, date, created_at)
                 VALUES (?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    exercise_clone.id,
                    exercise_clone.user_id,
                    exercise_clone.description,
                    exercise_clone.duration,
                    exercise_clone.date,
                    exercise_clone.created_at
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        Ok(exercise)
    }

    /// A user's entries matching `filter`, oldest date first.
    pub async fn find_log(&self, user_id: &str, filter: &LogFilter) -> Result<Vec<Exercise>> {
        let (sql, params) = build_log_query(user_id, filter);
        tracing::debug!(%sql, "Querying exercise log");

        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(&sql)?;
            let exercises = stmt
                .query_map(rusqlite::params_from_iter(params), Exercise::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}

/// Compose the log query and its positional parameters.
///
/// Both date bounds are inclusive. Dates are stored as `YYYY-MM-DD` text, so
/// string comparison orders them chronologically.
pub fn build_log_query(user_id: &str, filter: &LogFilter) -> (String, Vec<Value>) {
    let mut sql = String::from("SELECT * FROM exercises WHERE user_id = ?");
    let mut params = vec![Value::Text(user_id.to_string())];

    if let Some(from) = filter.from {
        sql.push_str(" AND date >= ?");
        params.push(Value::Text(from.format("%Y-%m-%d").to_string()));
    }
    if let Some(to) = filter.to {
        sql.push_str(" AND date <= ?");
        params.push(Value::Text(to.format("%Y-%m-%d").to_string()));
    }

    sql.push_str(" ORDER BY date ASC, created_at ASC, rowid ASC LIMIT ?");
    params.push(Value::Integer(filter.limit));

    (sql, params)
}
