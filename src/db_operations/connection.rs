use std::path::Path;

use rusqlite::Connection;

/// Opens a short-lived handle. Callers drop it before returning, so nothing
/// holds the database between operations.
pub(super) fn open(path: &Path) -> rusqlite::Result<Connection> {
    Connection::open(path)
}
