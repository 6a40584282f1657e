//! Reservation store.
//!
//! One SQLite table (`reservations`) keyed by `flight_number`. Every public
//! operation opens its own connection, runs a single statement and drops the
//! connection before returning.

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

mod connection;
mod delete;
mod error;
mod insert;
mod path;
mod queries;
mod schema;
mod types;
mod update;

pub use error::StoreError;
pub use path::default_db_path;
pub use types::Reservation;

use types::SELECT_COLUMNS;

#[derive(Debug, Clone)]
pub struct ReservationStore {
    path: PathBuf,
}

impl ReservationStore {
    /// Prepares the database file at `path` and makes sure the table exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            create_dir_all(dir)?;
        }

        let conn = connection::open(&path)?;
        schema::ensure_schema(&conn)?;
        debug!(path = %path.display(), "reservation table ready");

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn create(&self, reservation: &Reservation) -> Result<(), StoreError> {
        let conn = connection::open(&self.path)?;
        insert::insert_reservation(&conn, reservation)?;
        info!(flight_number = %reservation.flight_number, "reservation created");
        Ok(())
    }

    pub fn update(&self, old_flight_number: &str, reservation: &Reservation) -> Result<(), StoreError> {
        let conn = connection::open(&self.path)?;
        update::update_reservation(&conn, old_flight_number, reservation)?;
        info!(
            old = old_flight_number,
            flight_number = %reservation.flight_number,
            "reservation updated"
        );
        Ok(())
    }

    pub fn delete(&self, flight_number: &str) -> Result<(), StoreError> {
        let conn = connection::open(&self.path)?;
        delete::delete_reservation(&conn, flight_number)?;
        info!(flight_number, "reservation deleted");
        Ok(())
    }

    pub fn get_by_key(&self, flight_number: &str) -> Result<Option<Reservation>, StoreError> {
        let conn = connection::open(&self.path)?;
        queries::get_reservation(&conn, flight_number)
    }

    pub fn get_all(&self) -> Result<Vec<Reservation>, StoreError> {
        let conn = connection::open(&self.path)?;
        queries::get_reservations(&conn)
    }
}
