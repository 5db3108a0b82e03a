use chrono::{Datelike, NaiveDate};

use super::super::domain::{ErrorCode, FieldError, Role, FIELD_BIRTH_DATE};
use super::config::AgeWindow;

/// Completed years between `birth_date` and `as_of`.
///
/// A birth date after `as_of` counts as age zero.
pub fn age_on(birth_date: NaiveDate, as_of: NaiveDate) -> u32 {
    if birth_date > as_of {
        return 0;
    }

    let mut years = as_of.year() - birth_date.year();
    if (as_of.month(), as_of.day()) < (birth_date.month(), birth_date.day()) {
        years -= 1;
    }

    u32::try_from(years).unwrap_or(0)
}

/// Compare an age against a window, attributing any failure to `birthDate`.
///
/// At most one error: the minimum is checked first so an inverted window
/// never reports both.
pub(crate) fn evaluate_window(age: u32, window: AgeWindow, role: Role) -> Option<FieldError> {
    if age < window.min_age {
        return Some(FieldError::new(
            FIELD_BIRTH_DATE,
            ErrorCode::TooYoungError,
            format!(
                "age {age} is below the minimum of {} for {}",
                window.min_age,
                role.label()
            ),
        ));
    }

    match window.max_age {
        Some(max) if age > max => Some(FieldError::new(
            FIELD_BIRTH_DATE,
            ErrorCode::TooOldError,
            format!("age {age} exceeds the maximum of {max} for {}", role.label()),
        )),
        _ => None,
    }
}
