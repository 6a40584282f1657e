use tracing::{debug, error};

use crate::db_operations::{Reservation, StoreError};

use super::filter::search_key;
use super::{DisplayRow, Listing, Notice, ReservationController, ReservationView};

impl<V: ReservationView> ReservationController<V> {
    /// Reloads every reservation into the table. Returns the number of rows shown.
    pub fn refresh(&mut self) -> Result<usize, StoreError> {
        let result = self.reload();
        if let Err(e) = &result {
            self.view.notify(Notice::error(
                "Database Error",
                format!("Error fetching reservations: {e}"),
            ));
        }
        result
    }

    /// `refresh` without the notice. A failure still empties the table.
    pub(super) fn reload(&mut self) -> Result<usize, StoreError> {
        match self.store.get_all() {
            Ok(reservations) => {
                debug!(rows = reservations.len(), "refresh");
                Ok(self.display(reservations, Listing::All))
            }
            Err(e) => {
                error!("Error fetching reservations: {e}");
                self.display(Vec::new(), Listing::All);
                Err(e)
            }
        }
    }

    /// Shows the single reservation keyed by `input`, or falls back to the
    /// full list when the search box is blank.
    pub fn search(&mut self, input: &str) -> Result<usize, StoreError> {
        let Some(key) = search_key(input) else {
            self.view.notify(Notice::warning(
                "Search",
                "Please enter a Flight Number to search.",
            ));
            return self.refresh();
        };

        match self.store.get_by_key(key) {
            Ok(Some(found)) => {
                debug!(flight_number = key, "search hit");
                Ok(self.display(vec![found], Listing::SearchResult))
            }
            Ok(None) => {
                debug!(flight_number = key, "search miss");
                self.display(Vec::new(), Listing::SearchResult);
                self.view.notify(Notice::info(
                    "Search Results",
                    format!("No reservation found for Flight Number: {key}"),
                ));
                Ok(0)
            }
            Err(e) => {
                error!("Error fetching reservation by Flight Number: {e}");
                self.display(Vec::new(), Listing::SearchResult);
                self.view.notify(Notice::error(
                    "Database Error",
                    format!("Error fetching reservation by Flight Number: {e}"),
                ));
                Err(e)
            }
        }
    }

    fn display(&mut self, reservations: Vec<Reservation>, listing: Listing) -> usize {
        let rows: Vec<DisplayRow> = reservations.iter().cloned().map(DisplayRow::from).collect();
        self.view.show_rows(&rows, listing);
        self.displayed = reservations;
        rows.len()
    }
}
