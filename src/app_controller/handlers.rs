use std::{cell::RefCell, rc::Rc};

use tracing::debug;

use crate::{ActionKind, AppScreen, MainWindow};

use super::slint_view::SlintView;
use super::{BookingForm, ReservationController, RowAction};

type SharedController = Rc<RefCell<ReservationController<SlintView>>>;

// Every flow reports its own failures to the user through the view; the
// handlers only drop the returned error.

pub(super) fn wire_navigate(app: &MainWindow, controller: SharedController) {
    app.on_navigate(move |screen| {
        let mut controller = controller.borrow_mut();
        match screen {
            AppScreen::Home => controller.show_home(),
            AppScreen::Booking => controller.open_new_booking(),
            AppScreen::Reservations => controller.show_reservations(),
        }
    });
}

pub(super) fn wire_search(app: &MainWindow, controller: SharedController) {
    app.on_search(move |query| {
        let _ = controller.borrow_mut().search(query.as_str());
    });
}

pub(super) fn wire_row_action(app: &MainWindow, controller: SharedController) {
    app.on_row_action(move |row, kind| {
        let Ok(row) = usize::try_from(row) else {
            debug!(row, "negative row index");
            return;
        };
        let action = match kind {
            ActionKind::Edit => RowAction::Edit,
            ActionKind::Delete => RowAction::Delete,
        };
        let _ = controller.borrow_mut().dispatch_click(row, action);
    });
}

pub(super) fn wire_delete_confirmed(app: &MainWindow, controller: SharedController) {
    app.on_delete_confirmed(move |flight_number| {
        let _ = controller.borrow_mut().delete_flow(flight_number.as_str());
    });
}

pub(super) fn wire_submit_booking(app: &MainWindow, controller: SharedController) {
    app.on_submit_booking(move |name, flight_number, departure, destination, date, seat_number| {
        let form = BookingForm {
            name: name.to_string(),
            flight_number: flight_number.to_string(),
            departure: departure.to_string(),
            destination: destination.to_string(),
            date: date.to_string(),
            seat_number: seat_number.to_string(),
        };
        let _ = controller.borrow_mut().submit_flow(&form);
    });
}

pub(super) fn wire_cancel_booking(app: &MainWindow, controller: SharedController) {
    app.on_cancel_booking(move || {
        controller.borrow_mut().cancel_booking();
    });
}
