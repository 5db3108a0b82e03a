use chrono::{Days, NaiveDate};

pub const MAX_DAY_OF_YEAR: u16 = 366;

/// Day-of-year values that cannot be placed on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("day-of-year {day} is outside 1..=366")]
    DayOutOfRange { day: u16 },
    #[error("day-of-year {day} does not exist in {year} ({days_in_year} days)")]
    BeyondYear {
        year: i32,
        day: u16,
        days_in_year: u16,
    },
    #[error("year {year} cannot be represented as a calendar date")]
    UnsupportedYear { year: i32 },
}

pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Place a day-of-year on the calendar. Day 1 is January 1st.
pub fn resolve_birth_date(year: i32, day_of_year: u16) -> Result<NaiveDate, RangeError> {
    let days = days_in_year(year);
    if day_of_year == 0 || day_of_year > days {
        return Err(RangeError::BeyondYear {
            year,
            day: day_of_year,
            days_in_year: days,
        });
    }

    let january_first =
        NaiveDate::from_ymd_opt(year, 1, 1).ok_or(RangeError::UnsupportedYear { year })?;

    january_first
        .checked_add_days(Days::new(u64::from(day_of_year - 1)))
        .ok_or(RangeError::UnsupportedYear { year })
}
