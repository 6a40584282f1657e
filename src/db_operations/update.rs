use rusqlite::Connection;

use super::{Reservation, StoreError};

/// Rewrites every column of the row keyed by `old_flight_number`, the key included.
pub(super) fn update_reservation(
    conn: &Connection,
    old_flight_number: &str,
    reservation: &Reservation,
) -> Result<(), StoreError> {
    let affected = conn
        .execute(
            "UPDATE `reservations`
             SET `flight_number` = ?2, `name` = ?3, `departure` = ?4, `destination` = ?5, `date` = ?6, `seat_number` = ?7
             WHERE `flight_number` = ?1;",
            (
                old_flight_number,
                &reservation.flight_number,
                &reservation.name,
                &reservation.departure,
                &reservation.destination,
                &reservation.date,
                &reservation.seat_number,
            ),
        )
        .map_err(|e| StoreError::from_write(e, &reservation.flight_number))?;

    if affected == 0 {
        return Err(StoreError::NotFound(old_flight_number.to_string()));
    }

    Ok(())
}
