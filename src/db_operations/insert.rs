use rusqlite::Connection;

use super::{Reservation, StoreError};

pub(super) fn insert_reservation(conn: &Connection, reservation: &Reservation) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO `reservations`(`flight_number`, `name`, `departure`, `destination`, `date`, `seat_number`)
         VALUES(?1, ?2, ?3, ?4, ?5, ?6);",
        (
            &reservation.flight_number,
            &reservation.name,
            &reservation.departure,
            &reservation.destination,
            &reservation.date,
            &reservation.seat_number,
        ),
    )
    .map_err(|e| StoreError::from_write(e, &reservation.flight_number))?;

    Ok(())
}
