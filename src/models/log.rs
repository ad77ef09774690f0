use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::date::{format_calendar_date, parse_date};
use super::exercise::serialize_duration;
use super::{Exercise, User};

/// Number of entries returned when `limit` is absent or unusable.
pub const DEFAULT_LOG_LIMIT: i64 = 500;

/// Raw `?from=&to=&limit=` parameters, kept as strings so a malformed
/// `limit` never rejects the request.
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogFilterError {
    #[error("Invalid '{field}' date: {value}")]
    InvalidDate { field: &'static str, value: String },
}

impl Default for LogFilter {
    fn default() -> Self {
        Self {
            from: None,
            to: None,
            limit: DEFAULT_LOG_LIMIT,
        }
    }
}

impl LogQuery {
    pub fn into_filter(self) -> Result<LogFilter, LogFilterError> {
        Ok(LogFilter {
            from: parse_bound("from", self.from)?,
            to: parse_bound("to", self.to)?,
            limit: parse_limit(self.limit.as_deref()),
        })
    }
}

fn parse_bound(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<NaiveDate>, LogFilterError> {
    match value {
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => parse_date(&value)
            .map(Some)
            .ok_or(LogFilterError::InvalidDate { field, value }),
        None => Ok(None),
    }
}

/// Any finite number is accepted and truncated, so `1.5` caps at one entry
/// and `1e1` at ten. Anything that truncates below one falls back to the default.
fn parse_limit(value: Option<&str>) -> i64 {
    value
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|limit| limit.is_finite())
        .map(|limit| limit.trunc() as i64)
        .filter(|limit| *limit > 0)
        .unwrap_or(DEFAULT_LOG_LIMIT)
}

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: format_calendar_date(exercise.date),
        }
    }
}

/// A user's exercise log as returned by `GET /api/users/{id}/logs`.
#[derive(Debug, Serialize)]
pub struct ExerciseLog {
    pub id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

impl ExerciseLog {
    pub fn new(user: User, exercises: Vec<Exercise>) -> Self {
        let log: Vec<LogEntry> = exercises.into_iter().map(LogEntry::from).collect();
        Self {
            id: user.id,
            username: user.username,
            count: log.len(),
            log,
        }
    }
}
