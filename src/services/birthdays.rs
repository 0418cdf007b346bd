//! Upcoming birthday query
//!
//! Selects contacts whose next birthday falls within a forward-looking
//! window of days, inclusive at both ends.

use chrono::{Datelike, NaiveDate};

use crate::models::{AddressBook, Birthday};

/// Window used when none is given
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A contact with a birthday inside the window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,
    /// The stored date of birth
    pub birthday: Birthday,
    /// The date the birthday is next celebrated
    pub celebrated_on: NaiveDate,
    /// Whole days from today until `celebrated_on`
    pub days_left: i64,
}

/// Contacts whose birthday occurs between `today` and `today + window_days`
///
/// Results are ordered by `days_left`, then by name.
pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    window_days: u32,
) -> Vec<UpcomingBirthday> {
    let window = i64::from(window_days);

    let mut upcoming: Vec<_> = book
        .records()
        .filter_map(|record| {
            let birthday = *record.birthday()?;
            let celebrated_on = next_occurrence(&birthday, today);
            let days_left = (celebrated_on - today).num_days();

            (days_left <= window).then(|| UpcomingBirthday {
                name: record.name().to_string(),
                birthday,
                celebrated_on,
                days_left,
            })
        })
        .collect();

    upcoming.sort_by(|a, b| a.days_left.cmp(&b.days_left).then_with(|| a.name.cmp(&b.name)));
    upcoming
}

/// The first anniversary of `birthday` on or after `today`
///
/// When this year's date has already passed, the following year is used.
pub fn next_occurrence(birthday: &Birthday, today: NaiveDate) -> NaiveDate {
    let this_year = anniversary_in(birthday, today.year());
    if this_year >= today {
        this_year
    } else {
        anniversary_in(birthday, today.year() + 1)
    }
}

/// The anniversary in a given year; Feb 29 falls back to Feb 28 in common years
fn anniversary_in(birthday: &Birthday, year: i32) -> NaiveDate {
    let day = if birthday.is_leap_day() && NaiveDate::from_ymd_opt(year, 2, 29).is_none() {
        28
    } else {
        birthday.day()
    };

    NaiveDate::from_ymd_opt(year, birthday.month(), day).unwrap_or(NaiveDate::MAX)
}
