use slint::{ModelRc, SharedString, VecModel};

use crate::{AppScreen, MainWindow, NoticeKind, ReservationData};

use super::{BookingForm, DisplayRow, Listing, Notice, NoticeLevel, ReservationView, Screen};

/// `ReservationView` backed by the Slint main window.
pub(super) struct SlintView {
    app: slint::Weak<MainWindow>,
}

impl SlintView {
    pub(super) fn new(app: slint::Weak<MainWindow>) -> Self {
        Self { app }
    }
}

impl ReservationView for SlintView {
    fn show_screen(&self, screen: Screen) {
        let Some(app) = self.app.upgrade() else {
            return;
        };

        app.set_screen(match screen {
            Screen::Home => AppScreen::Home,
            Screen::Booking => AppScreen::Booking,
            Screen::Reservations => AppScreen::Reservations,
        });
    }

    fn show_rows(&self, rows: &[DisplayRow], listing: Listing) {
        let Some(app) = self.app.upgrade() else {
            return;
        };

        let model: Vec<ReservationData> = rows.iter().map(row_to_reservation_data).collect();
        app.set_reservations(ModelRc::new(VecModel::from(model)));
        app.set_search_result(listing == Listing::SearchResult);
    }

    fn show_booking_form(&self, form: &BookingForm, editing: bool) {
        let Some(app) = self.app.upgrade() else {
            return;
        };

        app.set_form_name(SharedString::from(form.name.as_str()));
        app.set_form_flight_number(SharedString::from(form.flight_number.as_str()));
        app.set_form_departure(SharedString::from(form.departure.as_str()));
        app.set_form_destination(SharedString::from(form.destination.as_str()));
        app.set_form_date(SharedString::from(form.date.as_str()));
        app.set_form_seat_number(SharedString::from(form.seat_number.as_str()));
        app.set_editing(editing);
    }

    fn notify(&self, notice: Notice) {
        let Some(app) = self.app.upgrade() else {
            return;
        };

        app.set_notice_kind(match notice.level {
            NoticeLevel::Info => NoticeKind::Info,
            NoticeLevel::Warning => NoticeKind::Warning,
            NoticeLevel::Error => NoticeKind::Error,
        });
        app.set_notice_title(SharedString::from(notice.title));
        app.set_notice_message(SharedString::from(notice.message));
        app.set_notice_visible(true);
    }

    fn confirm_delete(&self, flight_number: &str) {
        let Some(app) = self.app.upgrade() else {
            return;
        };

        app.set_pending_delete(SharedString::from(flight_number));
        app.set_confirm_visible(true);
    }
}

fn row_to_reservation_data(row: &DisplayRow) -> ReservationData {
    let r = &row.reservation;
    ReservationData {
        flight_number: SharedString::from(r.flight_number.as_str()),
        name: SharedString::from(r.name.as_str()),
        departure: SharedString::from(r.departure.as_str()),
        destination: SharedString::from(r.destination.as_str()),
        date: SharedString::from(r.date.as_str()),
        seat: SharedString::from(r.seat_number.as_str()),
        actions: SharedString::from(row.actions),
    }
}
