//! UI-side application controller.
//!
//! `ReservationController` keeps the reservations table in sync with the
//! store and runs the booking form's edit/submit cycle. It only talks to the
//! window through the `ReservationView` trait; `install` plugs the Slint
//! window in as that view and wires the Slint callbacks.
//!
//! Design notes:
//! - The editing key lives in `EditingMode`, owned by the controller.
//! - `displayed` caches the rows currently on screen so a row index coming
//!   from a click resolves to the flight number that was actually shown.

use std::{cell::RefCell, rc::Rc};

use slint::ComponentHandle;
use thiserror::Error;
use tracing::debug;

use crate::db_operations::{Reservation, ReservationStore, StoreError};
use crate::MainWindow;

mod editing;
mod filter;
mod flows;
mod form;
mod handlers;
mod refresh;
mod slint_view;
mod view;

#[cfg(test)]
mod tests;

pub use editing::EditingMode;
pub use form::{BookingForm, Field, ValidationError, DATE_PLACEHOLDER};
pub use view::{DisplayRow, Listing, Notice, NoticeLevel, ReservationView, RowAction, Screen, ACTION_MARKER};

#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct ReservationController<V> {
    store: ReservationStore,
    view: V,
    editing: EditingMode,
    displayed: Vec<Reservation>,
}

impl<V: ReservationView> ReservationController<V> {
    pub fn new(store: ReservationStore, view: V) -> Self {
        Self {
            store,
            view,
            editing: EditingMode::Idle,
            displayed: Vec::new(),
        }
    }

    pub fn show_home(&mut self) {
        debug!("navigate: home");
        self.view.show_screen(Screen::Home);
    }

    /// Leaves the booking form without submitting it.
    pub fn cancel_booking(&mut self) {
        debug!("booking cancelled");
        self.editing = EditingMode::Idle;
        self.show_home();
    }

    /// Opens an empty booking form; any pending edit is dropped.
    pub fn open_new_booking(&mut self) {
        debug!("navigate: new booking");
        self.editing = EditingMode::Idle;
        self.view.show_booking_form(&BookingForm::default(), self.editing.is_editing());
        self.view.show_screen(Screen::Booking);
    }

    /// Switches to the list and reloads it from the store.
    pub fn show_reservations(&mut self) {
        debug!("navigate: reservations");
        self.editing = EditingMode::Idle;
        self.view.show_screen(Screen::Reservations);
        // Failures are already surfaced to the user by `refresh`.
        let _ = self.refresh();
    }

    #[cfg(test)]
    pub(crate) fn editing(&self) -> &EditingMode {
        &self.editing
    }

    #[cfg(test)]
    pub(crate) fn view(&self) -> &V {
        &self.view
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &ReservationStore {
        &self.store
    }
}

pub fn install(app: &MainWindow, store: ReservationStore) {
    let view = slint_view::SlintView::new(app.as_weak());
    let controller = Rc::new(RefCell::new(ReservationController::new(store, view)));

    controller.borrow_mut().show_home();

    handlers::wire_navigate(app, controller.clone());
    handlers::wire_search(app, controller.clone());
    handlers::wire_row_action(app, controller.clone());
    handlers::wire_delete_confirmed(app, controller.clone());
    handlers::wire_submit_booking(app, controller.clone());
    handlers::wire_cancel_booking(app, controller);
}
