use super::{BookmarkExtractor, ExtractOptions};
use crate::error::{MeteorError, Result};
use crate::models::bookmark::{Bookmark, NO_TITLE};
use log::debug;
use rusqlite::{Connection, ErrorCode, OpenFlags};
use std::collections::HashMap;
use std::path::Path;

const TITLES_QUERY: &str = "SELECT id, title FROM moz_bookmarks";

const BOOKMARKS_QUERY: &str = "SELECT moz_bookmarks.id, moz_bookmarks.title, moz_places.url, moz_bookmarks.parent
     FROM moz_bookmarks
     JOIN moz_places ON moz_bookmarks.fk = moz_places.id
     WHERE moz_places.url IS NOT NULL AND moz_bookmarks.type = 1
     ORDER BY moz_bookmarks.dateAdded DESC";

/// Firefox SQLite bookmark extractor
///
/// Expects a path to a private copy of `places.sqlite`; see
/// [`crate::snapshot::PlacesSnapshot`].
pub struct FirefoxExtractor;

impl BookmarkExtractor for FirefoxExtractor {
    fn extract(&self, path: &Path, options: &ExtractOptions) -> Result<Vec<Bookmark>> {
        extract_bookmarks(path, options)
    }
}

/// Read every URL bookmark, newest first
///
/// Only `type = 1` rows are selected, so every record is a leaf and
/// `include_folders` has nothing to add here.
pub fn extract_bookmarks(db_path: &Path, _options: &ExtractOptions) -> Result<Vec<Bookmark>> {
    let conn = open_places(db_path)?;
    let titles = load_titles(&conn)?;

    let mut stmt = conn.prepare(BOOKMARKS_QUERY)?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, Option<String>>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, i64>(3)?,
        ))
    })?;

    let mut bookmarks = Vec::new();
    for row in rows {
        let (id, title, url, parent_id) = row?;
        let name = match title {
            Some(t) if !t.is_empty() => t,
            _ => NO_TITLE.to_string(),
        };
        let parent = titles.get(&parent_id).cloned().unwrap_or_default();

        bookmarks.push(
            Bookmark::new(id.to_string(), name, url, parent).with_parent_id(parent_id.to_string()),
        );
    }

    debug!("Read {} bookmarks from {}", bookmarks.len(), db_path.display());
    Ok(bookmarks)
}

fn open_places(db_path: &Path) -> Result<Connection> {
    // No CREATE flag: a missing file must not turn into an empty database
    let conn = Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )
    .map_err(|e| MeteorError::unavailable(db_path, e))?;

    // The header is only read on first use; reject non-database files here
    conn.pragma_query_value(None, "schema_version", |row| row.get::<_, i64>(0))
        .map_err(|e| match e.sqlite_error_code() {
            Some(ErrorCode::NotADatabase) => MeteorError::unavailable(db_path, e),
            _ => MeteorError::QueryFailure(e),
        })?;
    Ok(conn)
}

/// Map every `moz_bookmarks` row id to its title, for parent lookups
fn load_titles(conn: &Connection) -> Result<HashMap<i64, String>> {
    let mut stmt = conn.prepare(TITLES_QUERY)?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, Option<String>>(1)?))
    })?;

    let mut titles = HashMap::new();
    for row in rows {
        let (id, title) = row?;
        titles.insert(id, title.unwrap_or_default());
    }
    Ok(titles)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use rusqlite::{params, Connection};
    use std::path::Path;

    pub const SCHEMA: &str = "
        CREATE TABLE moz_places (id INTEGER PRIMARY KEY, url LONGVARCHAR);
        CREATE TABLE moz_bookmarks (
            id INTEGER PRIMARY KEY,
            type INTEGER,
            fk INTEGER DEFAULT NULL,
            parent INTEGER,
            position INTEGER,
            title LONGVARCHAR,
            dateAdded INTEGER
        );";

    /// Build a small places database resembling a real profile
    pub fn create_places(path: &Path) {
        let conn = Connection::open(path).unwrap();
        conn.execute_batch(SCHEMA).unwrap();

        for (id, url) in [
            (1, Some("https://www.mozilla.org/")),
            (2, Some("https://www.rust-lang.org/")),
            (3, Some("https://example.com/untitled")),
            (4, Some("https://example.com/orphan")),
            (5, None),
        ] {
            conn.execute(
                "INSERT INTO moz_places (id, url) VALUES (?1, ?2)",
                params![id, url],
            )
            .unwrap();
        }

        // (id, type, fk, parent, title, dateAdded)
        let rows: [(i64, i64, Option<i64>, i64, Option<&str>, i64); 9] = [
            (1, 2, None, 0, Some(""), 0),
            (2, 2, None, 1, Some("menu"), 0),
            (3, 2, None, 1, Some("toolbar"), 0),
            (10, 2, None, 3, Some("Dev"), 5),
            (20, 1, Some(1), 2, Some("Mozilla"), 100),
            (21, 1, Some(2), 10, Some("Rust"), 300),
            (22, 1, Some(3), 3, None, 200),
            (23, 1, Some(4), 999, Some("Orphan"), 50),
            (24, 1, Some(5), 3, Some("No URL"), 400),
        ];
        for (id, kind, fk, parent, title, added) in rows {
            conn.execute(
                "INSERT INTO moz_bookmarks (id, type, fk, parent, title, dateAdded)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![id, kind, fk, parent, title, added],
            )
            .unwrap();
        }
    }
}
