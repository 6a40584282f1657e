use crate::db_operations::Reservation;

use super::form::BookingForm;

/// Edit and delete glyphs shown in the last column of every row.
pub const ACTION_MARKER: &str = "✏️  🗑️";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Booking,
    Reservations,
}

/// The two click targets of a row's actions cell. Edit sits on the left
/// half, delete on the right half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

/// What the table is listing. Decides the empty-state text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    All,
    SearchResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }

    fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub reservation: Reservation,
    pub actions: &'static str,
}

impl From<Reservation> for DisplayRow {
    fn from(reservation: Reservation) -> Self {
        Self {
            reservation,
            actions: ACTION_MARKER,
        }
    }
}

/// Everything the controller needs from the window.
pub trait ReservationView {
    fn show_screen(&self, screen: Screen);

    /// Replaces the table contents. An empty slice means the empty state.
    fn show_rows(&self, rows: &[DisplayRow], listing: Listing);

    fn show_booking_form(&self, form: &BookingForm, editing: bool);

    fn notify(&self, notice: Notice);

    /// Ask the user to confirm deleting `flight_number`. A "yes" comes back
    /// through `ReservationController::delete_flow`.
    fn confirm_delete(&self, flight_number: &str);
}
