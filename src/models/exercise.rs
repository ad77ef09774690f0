use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Row;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::date::{format_calendar_date, parse_date};
use super::{FromSqliteRow, User};

#[derive(Debug, Clone, Serialize)]
pub struct Exercise {
    pub id: String,
    pub user_id: String,
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            description: row.get("description")?,
            duration: row.get("duration")?,
            date: row.get("date")?,
            created_at: row.get("created_at")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateExercise {
    pub description: String,
    #[serde(deserialize_with = "deserialize_duration")]
    pub duration: f64,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date: Option<NaiveDate>,
}

/// Response for a newly logged exercise, echoed alongside its owner.
#[derive(Debug, Serialize)]
pub struct ExerciseCreated {
    pub id: String,
    pub username: String,
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: String,
}

impl ExerciseCreated {
    pub fn new(user: User, exercise: Exercise) -> Self {
        Self {
            id: user.id,
            username: user.username,
            description: exercise.description,
            duration: exercise.duration,
            date: format_calendar_date(exercise.date),
        }
    }
}

/// Whole durations go out as integers so `30` round-trips as `30`, not `30.0`.
pub(crate) fn serialize_duration<S>(duration: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if duration.fract() == 0.0 && duration.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*duration as i64)
    } else {
        serializer.serialize_f64(*duration)
    }
}

/// Accept a JSON number or a numeric string (form fields are always strings).
fn deserialize_duration<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    let duration = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => n,
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid duration: {:?}", s)))?,
    };

    if !duration.is_finite() {
        return Err(de::Error::custom("duration must be a finite number"));
    }
    Ok(duration)
}

/// Empty strings mean "not supplied"; anything else must parse as a date.
fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_date(&s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid date: {:?}", s))),
        None => Ok(None),
    }
}
