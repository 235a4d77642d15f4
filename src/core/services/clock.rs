use chrono::{Local, NaiveDate};

/// The user's local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
