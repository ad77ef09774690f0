use rusqlite::Row;

/// Maps a row selected with `SELECT *` onto a model, reading columns by name.
pub trait FromSqliteRow: Sized {
    fn from_row(row: &Row) -> rusqlite::Result<Self>;
}
