use rusqlite::Row;

/// One booked flight. `flight_number` is the only key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub flight_number: String,
    pub name: String,
    pub departure: String,
    pub destination: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub seat_number: String,
}

impl Reservation {
    pub(in crate::db_operations) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Reservation {
            flight_number: row.get(0)?,
            name: row.get(1)?,
            departure: row.get(2)?,
            destination: row.get(3)?,
            date: row.get(4)?,
            seat_number: row.get(5)?,
        })
    }
}

pub(in crate::db_operations) const SELECT_COLUMNS: &str =
    "SELECT `flight_number`, `name`, `departure`, `destination`, `date`, `seat_number` FROM `reservations`";
