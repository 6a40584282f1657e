use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::db_operations::Reservation;

/// Legacy "no date yet" marker. Treated the same as a blank date.
pub const DATE_PLACEHOLDER: &str = "Pick a date";

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    FlightNumber,
    Departure,
    Destination,
    Date,
    SeatNumber,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::FlightNumber => "Flight Number",
            Field::Departure => "Departure",
            Field::Destination => "Destination",
            Field::Date => "Date",
            Field::SeatNumber => "Seat Number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields ({0} is empty).")]
    MissingField(Field),

    #[error("Please pick a date.")]
    DateNotPicked,

    #[error("Date '{0}' is not a valid YYYY-MM-DD date.")]
    InvalidDate(String),
}

/// Raw booking form text as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub flight_number: String,
    pub departure: String,
    pub destination: String,
    pub date: String,
    pub seat_number: String,
}


impl From<&Reservation> for BookingForm {
    fn from(r: &Reservation) -> Self {
        Self {
            name: r.name.clone(),
            flight_number: r.flight_number.clone(),
            departure: r.departure.clone(),
            destination: r.destination.clone(),
            date: r.date.clone(),
            seat_number: r.seat_number.clone(),
        }
    }
}

impl BookingForm {
    /// Trims every field and checks the form can become a reservation.
    /// The date is normalized to `YYYY-MM-DD`.
    pub fn validate(&self) -> Result<Reservation, ValidationError> {
        let name = required(&self.name, Field::Name)?;
        let flight_number = required(&self.flight_number, Field::FlightNumber)?;
        let departure = required(&self.departure, Field::Departure)?;
        let destination = required(&self.destination, Field::Destination)?;
        let date = parse_date(&self.date)?;
        let seat_number = required(&self.seat_number, Field::SeatNumber)?;

        Ok(Reservation {
            flight_number,
            name,
            departure,
            destination,
            date,
            seat_number,
        })
    }
}

fn required(value: &str, field: Field) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(value.to_string())
}

fn parse_date(value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() || value == DATE_PLACEHOLDER {
        return Err(ValidationError::DateNotPicked);
    }

    NaiveDate::parse_from_str(&value, DATE_FORMAT)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}
