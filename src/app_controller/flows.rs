use tracing::{debug, warn};

use crate::db_operations::{Reservation, StoreError};

use super::{
    BookingForm, EditingMode, FlowError, Notice, ReservationController, ReservationView, RowAction, Screen,
};

impl<V: ReservationView> ReservationController<V> {
    /// Resolves a click on a row's actions cell. Indices that are no longer
    /// on screen are ignored.
    pub fn dispatch_click(&mut self, row: usize, action: RowAction) -> Result<(), FlowError> {
        let Some(flight_number) = self.displayed.get(row).map(|r| r.flight_number.clone()) else {
            debug!(row, "click on a row that is not displayed");
            return Ok(());
        };

        debug!(row, %flight_number, ?action, "row action");
        match action {
            RowAction::Edit => self.edit_flow(&flight_number),
            RowAction::Delete => {
                self.view.confirm_delete(&flight_number);
                Ok(())
            }
        }
    }

    /// Opens the booking form pre-filled with `flight_number`'s reservation.
    pub fn edit_flow(&mut self, flight_number: &str) -> Result<(), FlowError> {
        let reservation = match self.store.get_by_key(flight_number) {
            Ok(Some(reservation)) => reservation,
            Ok(None) => {
                warn!(flight_number, "reservation to edit is gone");
                self.view.notify(Notice::error(
                    "Error",
                    "Could not retrieve reservation details from database.",
                ));
                return Err(StoreError::NotFound(flight_number.to_string()).into());
            }
            Err(e) => {
                warn!(flight_number, "couldn't load reservation to edit: {e}");
                self.view.notify(Notice::error(
                    "Database Error",
                    format!("Error fetching reservation by Flight Number: {e}"),
                ));
                return Err(e.into());
            }
        };

        self.editing = EditingMode::Editing(flight_number.to_string());
        self.view
            .show_booking_form(&BookingForm::from(&reservation), self.editing.is_editing());
        self.view.show_screen(Screen::Booking);
        Ok(())
    }

    /// Deletes `flight_number`. Only called once the user confirmed.
    pub fn delete_flow(&mut self, flight_number: &str) -> Result<(), FlowError> {
        match self.store.delete(flight_number) {
            Ok(()) => {
                self.view.notify(Notice::info(
                    "Deletion Successful",
                    "Reservation deleted from database.",
                ));
                // Failures are already surfaced to the user by `refresh`.
                let _ = self.refresh();
                Ok(())
            }
            Err(e) => {
                warn!(flight_number, "delete failed: {e}");
                self.view.notify(Notice::error(
                    "Deletion Failed",
                    format!("Could not delete reservation from database. {e}"),
                ));
                Err(e.into())
            }
        }
    }

    /// Validates the form and creates or updates a reservation depending on
    /// the editing mode. An invalid form leaves the form open and the
    /// editing mode untouched; otherwise the mode is cleared and the list is
    /// shown whatever the store said.
    pub fn submit_flow(&mut self, form: &BookingForm) -> Result<Reservation, FlowError> {
        let reservation = match form.validate() {
            Ok(reservation) => reservation,
            Err(e) => {
                debug!("booking form rejected: {e}");
                self.view.notify(Notice::error("Booking Error", e.to_string()));
                return Err(e.into());
            }
        };

        let result = match self.editing.take() {
            EditingMode::Editing(old_flight_number) => self
                .store
                .update(&old_flight_number, &reservation)
                .map(|()| {
                    Notice::info(
                        "Reservation Updated",
                        format!(
                            "Reservation for {} on flight {} has been updated!",
                            reservation.name, reservation.flight_number
                        ),
                    )
                })
                .map_err(|e| (e, "Update Error")),
            EditingMode::Idle => self
                .store
                .create(&reservation)
                .map(|()| {
                    Notice::info(
                        "Booking Confirmed",
                        format!(
                            "Booking for {} on flight {} from {} to {} on {} (Seat: {}) has been submitted!",
                            reservation.name,
                            reservation.flight_number,
                            reservation.departure,
                            reservation.destination,
                            reservation.date,
                            reservation.seat_number
                        ),
                    )
                })
                .map_err(|e| (e, "Booking Error")),
        };

        let outcome = match result {
            Ok(notice) => {
                self.view.notify(notice);
                Ok(reservation)
            }
            Err((e, title)) => {
                warn!(flight_number = %reservation.flight_number, "submit failed: {e}");
                let title = match e {
                    StoreError::DuplicateKey(_) => title,
                    _ => "Database Error",
                };
                self.view.notify(Notice::error(title, e.to_string()));
                Err(e.into())
            }
        };

        if outcome.is_ok() {
            self.show_reservations();
        } else {
            // Keep the submit's own notice on screen.
            self.view.show_screen(Screen::Reservations);
            let _ = self.reload();
        }
        outcome
    }
}
