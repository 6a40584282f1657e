use std::cell::RefCell;

use tempfile::TempDir;

use crate::db_operations::{Reservation, ReservationStore, StoreError};

use super::*;

/// Records every call so tests can assert on what the window was told.
#[derive(Default)]
struct RecordingView {
    screens: RefCell<Vec<Screen>>,
    rows: RefCell<Vec<DisplayRow>>,
    listing: RefCell<Option<Listing>>,
    forms: RefCell<Vec<(BookingForm, bool)>>,
    notices: RefCell<Vec<Notice>>,
    confirmations: RefCell<Vec<String>>,
}

impl RecordingView {
    fn last_screen(&self) -> Option<Screen> {
        self.screens.borrow().last().copied()
    }

    fn last_notice(&self) -> Option<Notice> {
        self.notices.borrow().last().cloned()
    }

    fn shown(&self) -> Vec<Reservation> {
        self.rows.borrow().iter().map(|r| r.reservation.clone()).collect()
    }
}

impl ReservationView for RecordingView {
    fn show_screen(&self, screen: Screen) {
        self.screens.borrow_mut().push(screen);
    }

    fn show_rows(&self, rows: &[DisplayRow], listing: Listing) {
        *self.rows.borrow_mut() = rows.to_vec();
        *self.listing.borrow_mut() = Some(listing);
    }

    fn show_booking_form(&self, form: &BookingForm, editing: bool) {
        self.forms.borrow_mut().push((form.clone(), editing));
    }

    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }

    fn confirm_delete(&self, flight_number: &str) {
        self.confirmations.borrow_mut().push(flight_number.to_string());
    }
}

fn controller() -> (TempDir, ReservationController<RecordingView>) {
    let dir = TempDir::new().unwrap();
    let store = ReservationStore::open(dir.path().join("flights.db")).unwrap();
    (dir, ReservationController::new(store, RecordingView::default()))
}

/// Replaces the database file with bytes SQLite can't read.
fn break_database(c: &ReservationController<RecordingView>) {
    std::fs::write(c.store().path(), b"not a sqlite database ".repeat(200)).unwrap();
}

fn jane() -> Reservation {
    Reservation {
        flight_number: "FS123".into(),
        name: "Jane Doe".into(),
        departure: "New York".into(),
        destination: "London".into(),
        date: "2025-08-15".into(),
        seat_number: "12A".into(),
    }
}

fn john() -> Reservation {
    Reservation {
        flight_number: "FS456".into(),
        name: "John Roe".into(),
        departure: "Paris".into(),
        destination: "Tokyo".into(),
        date: "2025-09-01".into(),
        seat_number: "3C".into(),
    }
}

#[test_log::test]
fn refresh_with_empty_store_shows_no_rows() {
    let (_dir, mut c) = controller();

    assert_eq!(c.refresh().unwrap(), 0);
    assert!(c.view().rows.borrow().is_empty());
}

#[test_log::test]
fn refresh_shows_exactly_the_stored_rows_with_action_marker() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    c.store().create(&john()).unwrap();

    assert_eq!(c.refresh().unwrap(), 2);
    assert_eq!(c.view().shown(), c.store().get_all().unwrap());
    assert!(c.view().rows.borrow().iter().all(|r| r.actions == ACTION_MARKER));
}

#[test_log::test]
fn show_reservations_switches_screen_and_leaves_editing() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    c.edit_flow("FS123").unwrap();

    c.show_reservations();

    assert_eq!(c.view().last_screen(), Some(Screen::Reservations));
    assert_eq!(c.editing(), &EditingMode::Idle);
    assert_eq!(c.view().shown(), vec![jane()]);
}

#[test_log::test]
fn submit_new_booking_creates_and_returns_to_list() {
    let (_dir, mut c) = controller();
    c.open_new_booking();
    assert_eq!(c.view().forms.borrow().last(), Some(&(BookingForm::default(), false)));

    let created = c.submit_flow(&BookingForm::from(&jane())).unwrap();

    assert_eq!(created, jane());
    assert_eq!(c.store().get_all().unwrap(), vec![jane()]);
    assert_eq!(c.view().shown(), vec![jane()]);
    assert_eq!(c.view().last_screen(), Some(Screen::Reservations));
    let notice = c.view().notices.borrow()[0].clone();
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.title, "Booking Confirmed");
}

#[test_log::test]
fn submit_with_unpicked_date_is_rejected_and_store_unchanged() {
    let (_dir, mut c) = controller();
    let form = BookingForm {
        date: DATE_PLACEHOLDER.into(),
        ..BookingForm::from(&jane())
    };

    let err = c.submit_flow(&form).unwrap_err();

    assert!(matches!(err, FlowError::Validation(ValidationError::DateNotPicked)));
    assert!(c.store().get_all().unwrap().is_empty());
    let notice = c.view().last_notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.title, "Booking Error");
    assert!(c.view().screens.borrow().is_empty());
}

#[test_log::test]
fn invalid_submit_keeps_the_editing_key() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    c.edit_flow("FS123").unwrap();

    let form = BookingForm {
        seat_number: String::new(),
        ..BookingForm::from(&jane())
    };
    let err = c.submit_flow(&form).unwrap_err();

    assert!(matches!(
        err,
        FlowError::Validation(ValidationError::MissingField(Field::SeatNumber))
    ));
    assert_eq!(c.editing(), &EditingMode::Editing("FS123".into()));
}

#[test_log::test]
fn edit_then_submit_updates_in_place() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    c.refresh().unwrap();

    c.dispatch_click(0, RowAction::Edit).unwrap();
    assert_eq!(c.editing(), &EditingMode::Editing("FS123".into()));
    assert_eq!(c.view().last_screen(), Some(Screen::Booking));
    assert_eq!(c.view().forms.borrow().last(), Some(&(BookingForm::from(&jane()), true)));

    let changed = BookingForm {
        seat_number: "1A".into(),
        ..BookingForm::from(&jane())
    };
    c.submit_flow(&changed).unwrap();

    let expected = Reservation {
        seat_number: "1A".into(),
        ..jane()
    };
    assert_eq!(c.store().get_all().unwrap(), vec![expected.clone()]);
    assert_eq!(c.view().shown(), vec![expected]);
    assert_eq!(c.editing(), &EditingMode::Idle);
    assert!(c
        .view()
        .notices
        .borrow()
        .iter()
        .any(|n| n.title == "Reservation Updated"));
}

#[test_log::test]
fn editing_can_rename_the_flight_number() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    c.edit_flow("FS123").unwrap();

    let renamed = BookingForm {
        flight_number: "FS777".into(),
        ..BookingForm::from(&jane())
    };
    c.submit_flow(&renamed).unwrap();

    assert_eq!(c.store().get_by_key("FS123").unwrap(), None);
    assert_eq!(c.store().get_by_key("FS777").unwrap().unwrap().name, "Jane Doe");
}

#[test_log::test]
fn submit_duplicate_reports_error_and_clears_editing() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    c.store().create(&john()).unwrap();
    c.edit_flow("FS456").unwrap();

    let clash = BookingForm {
        flight_number: "FS123".into(),
        ..BookingForm::from(&john())
    };
    let err = c.submit_flow(&clash).unwrap_err();

    assert!(matches!(err, FlowError::Store(StoreError::DuplicateKey(_))));
    assert_eq!(c.editing(), &EditingMode::Idle);
    assert_eq!(c.store().get_by_key("FS123").unwrap(), Some(jane()));
    assert_eq!(c.store().get_by_key("FS456").unwrap(), Some(john()));
    assert_eq!(c.view().last_screen(), Some(Screen::Reservations));
    assert!(c
        .view()
        .notices
        .borrow()
        .iter()
        .any(|n| n.level == NoticeLevel::Error && n.title == "Update Error"));
}

#[test_log::test]
fn new_booking_with_taken_flight_number_is_rejected() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    c.open_new_booking();

    let other = BookingForm {
        name: "Someone Else".into(),
        ..BookingForm::from(&jane())
    };
    let err = c.submit_flow(&other).unwrap_err();

    assert!(matches!(err, FlowError::Store(StoreError::DuplicateKey(_))));
    assert_eq!(c.store().get_all().unwrap(), vec![jane()]);
}

#[test_log::test]
fn open_new_booking_drops_pending_edit() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    c.edit_flow("FS123").unwrap();

    c.open_new_booking();
    assert_eq!(c.editing(), &EditingMode::Idle);

    c.submit_flow(&BookingForm::from(&john())).unwrap();
    assert_eq!(c.store().get_all().unwrap().len(), 2);
}

#[test_log::test]
fn edit_of_missing_reservation_reports_not_found() {
    let (_dir, mut c) = controller();

    let err = c.edit_flow("FS999").unwrap_err();

    assert!(matches!(err, FlowError::Store(StoreError::NotFound(_))));
    assert_eq!(c.editing(), &EditingMode::Idle);
    assert_eq!(c.view().last_notice().unwrap().level, NoticeLevel::Error);
}

#[test_log::test]
fn delete_click_asks_for_confirmation_without_deleting() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    c.store().create(&john()).unwrap();
    c.refresh().unwrap();

    let second = c.view().shown()[1].flight_number.clone();
    c.dispatch_click(1, RowAction::Delete).unwrap();

    assert_eq!(*c.view().confirmations.borrow(), vec![second]);
    assert_eq!(c.store().get_all().unwrap().len(), 2);
}

#[test_log::test]
fn confirmed_delete_removes_and_refreshes() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    c.store().create(&john()).unwrap();
    c.refresh().unwrap();

    c.delete_flow("FS123").unwrap();

    assert_eq!(c.store().get_by_key("FS123").unwrap(), None);
    assert_eq!(c.view().shown(), vec![john()]);
    assert_eq!(c.view().last_notice().unwrap().title, "Deletion Successful");
}

#[test_log::test]
fn delete_of_missing_reservation_reports_failure() {
    let (_dir, mut c) = controller();

    let err = c.delete_flow("FS999").unwrap_err();

    assert!(matches!(err, FlowError::Store(StoreError::NotFound(_))));
    assert_eq!(c.view().last_notice().unwrap().title, "Deletion Failed");
}

#[test_log::test]
fn click_on_stale_row_is_ignored() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    c.refresh().unwrap();

    c.dispatch_click(5, RowAction::Edit).unwrap();
    c.dispatch_click(5, RowAction::Delete).unwrap();

    assert_eq!(c.editing(), &EditingMode::Idle);
    assert!(c.view().confirmations.borrow().is_empty());
    assert!(c.view().screens.borrow().is_empty());
}

#[test_log::test]
fn search_hit_shows_single_row() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    c.store().create(&john()).unwrap();

    assert_eq!(c.search("  FS456 ").unwrap(), 1);
    assert_eq!(c.view().shown(), vec![john()]);
    assert!(c.view().notices.borrow().is_empty());
}

#[test_log::test]
fn search_miss_shows_empty_result_and_notice() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();

    assert_eq!(c.search("FS999").unwrap(), 0);

    assert!(c.view().rows.borrow().is_empty());
    let notice = c.view().last_notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.message, "No reservation found for Flight Number: FS999");
    assert_eq!(c.store().get_all().unwrap(), vec![jane()]);
}

#[test_log::test]
fn blank_or_placeholder_search_lists_everything() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    c.store().create(&john()).unwrap();

    assert_eq!(c.search("").unwrap(), 2);
    assert_eq!(c.search("Search by Flight Number...").unwrap(), 2);
    assert_eq!(c.view().notices.borrow().len(), 2);
    assert!(c
        .view()
        .notices
        .borrow()
        .iter()
        .all(|n| n.level == NoticeLevel::Warning));
}

#[test_log::test]
fn rows_clicked_after_search_resolve_against_the_search_result() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    c.store().create(&john()).unwrap();
    c.search("FS456").unwrap();

    c.dispatch_click(0, RowAction::Delete).unwrap();

    assert_eq!(*c.view().confirmations.borrow(), vec!["FS456".to_string()]);
}

#[test_log::test]
fn refresh_on_unreadable_database_clears_rows_and_reports_error() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    c.refresh().unwrap();
    assert_eq!(c.view().shown(), vec![jane()]);

    break_database(&c);
    let err = c.refresh().unwrap_err();

    assert!(matches!(err, StoreError::StorageUnavailable(_)));
    assert!(c.view().rows.borrow().is_empty());
    let notice = c.view().last_notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.title, "Database Error");

    c.dispatch_click(0, RowAction::Edit).unwrap();
    assert_eq!(c.editing(), &EditingMode::Idle);
}

#[test_log::test]
fn search_on_unreadable_database_reports_error() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    break_database(&c);

    let err = c.search("FS123").unwrap_err();

    assert!(matches!(err, StoreError::StorageUnavailable(_)));
    assert!(c.view().rows.borrow().is_empty());
    assert_eq!(c.view().last_notice().unwrap().title, "Database Error");
}

#[test_log::test]
fn submit_on_unreadable_database_shows_only_the_store_error_and_clears_editing() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    c.edit_flow("FS123").unwrap();
    break_database(&c);

    let changed = BookingForm {
        seat_number: "1A".into(),
        ..BookingForm::from(&jane())
    };
    let err = c.submit_flow(&changed).unwrap_err();

    assert!(matches!(err, FlowError::Store(StoreError::StorageUnavailable(_))));
    assert_eq!(c.editing(), &EditingMode::Idle);
    assert_eq!(c.view().last_screen(), Some(Screen::Reservations));
    assert!(c.view().rows.borrow().is_empty());

    let notices = c.view().notices.borrow();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert_eq!(notices[0].title, "Database Error");
    assert!(notices[0].message.starts_with("database error:"));
}

#[test_log::test]
fn cancelling_the_form_drops_pending_edit() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();
    c.edit_flow("FS123").unwrap();

    c.cancel_booking();

    assert_eq!(c.editing(), &EditingMode::Idle);
    assert_eq!(c.view().last_screen(), Some(Screen::Home));
}

#[test_log::test]
fn search_results_are_marked_apart_from_the_full_list() {
    let (_dir, mut c) = controller();
    c.store().create(&jane()).unwrap();

    c.search("FS999").unwrap();
    assert_eq!(*c.view().listing.borrow(), Some(Listing::SearchResult));

    c.refresh().unwrap();
    assert_eq!(*c.view().listing.borrow(), Some(Listing::All));
}
