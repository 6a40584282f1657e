use rusqlite::Connection;

use super::{Reservation, StoreError, SELECT_COLUMNS};

/// All rows in storage order; no `ORDER BY` is applied.
pub(super) fn get_reservations(conn: &Connection) -> Result<Vec<Reservation>, StoreError> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS};"))?;

    let reservation_iter = stmt.query_map([], Reservation::from_row)?;
    let reservations: rusqlite::Result<Vec<Reservation>> = reservation_iter.collect();

    Ok(reservations?)
}

pub(super) fn get_reservation(conn: &Connection, flight_number: &str) -> Result<Option<Reservation>, StoreError> {
    let found = conn
        .query_row(
            &format!("{SELECT_COLUMNS} WHERE `flight_number` = ?1 LIMIT 1;"),
            (flight_number,),
            Reservation::from_row,
        )
        .map(Some)
        .or_else(|e| {
            if let rusqlite::Error::QueryReturnedNoRows = e {
                Ok(None)
            } else {
                Err(e)
            }
        })?;

    Ok(found)
}
