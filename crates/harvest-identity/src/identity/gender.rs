use super::calendar::{RangeError, MAX_DAY_OF_YEAR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Added to the day-of-year field for female holders.
pub const FEMALE_OFFSET: u16 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Split the encoded day-of-year into gender and the de-offset day.
///
/// The split is total; range checking the returned day is left to
/// [`check_day_of_year`] so callers can still use the gender when the day is bad.
pub fn resolve_gender(encoded_day_of_year: u16) -> (Gender, u16) {
    if encoded_day_of_year > FEMALE_OFFSET {
        (Gender::Female, encoded_day_of_year - FEMALE_OFFSET)
    } else {
        (Gender::Male, encoded_day_of_year)
    }
}

/// Inverse of [`resolve_gender`].
pub fn encode_day_of_year(gender: Gender, day_of_year: u16) -> u16 {
    match gender {
        Gender::Male => day_of_year,
        Gender::Female => day_of_year + FEMALE_OFFSET,
    }
}

/// Accept a de-offset day only when it lies in 1..=366.
///
/// Whether day 366 exists is a per-year question answered by
/// [`resolve_birth_date`](super::calendar::resolve_birth_date).
pub fn check_day_of_year(day_of_year: u16) -> Result<u16, RangeError> {
    if day_of_year == 0 || day_of_year > MAX_DAY_OF_YEAR {
        return Err(RangeError::DayOutOfRange { day: day_of_year });
    }
    Ok(day_of_year)
}
