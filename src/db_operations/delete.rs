use rusqlite::Connection;

use super::StoreError;

pub(super) fn delete_reservation(conn: &Connection, flight_number: &str) -> Result<(), StoreError> {
    let affected = conn.execute(
        "DELETE FROM `reservations` WHERE `flight_number` = ?1;",
        (flight_number,),
    )?;

    if affected == 0 {
        return Err(StoreError::NotFound(flight_number.to_string()));
    }

    Ok(())
}
