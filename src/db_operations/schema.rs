use rusqlite::Connection;

pub(super) fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS `reservations`(
            `flight_number` TEXT PRIMARY KEY NOT NULL,
            `name` TEXT NOT NULL,
            `departure` TEXT NOT NULL,
            `destination` TEXT NOT NULL,
            `date` TEXT NOT NULL,
            `seat_number` TEXT NOT NULL
        );",
        (),
    )?;

    Ok(())
}
