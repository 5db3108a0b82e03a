//! National identity number (NIC) decoding and eligibility validation.
//!
//! Every registration form (staff, drivers, QA inspectors, farmers) goes
//! through [`ConsistencyValidator::validate`]: classify the raw string, decode
//! birth year and day-of-year, split off the gender offset, place the day on
//! the calendar, then compare against what the user typed and the role's age
//! window. Nothing here performs I/O.

pub mod calendar;
pub mod decoder;
pub mod domain;
pub mod eligibility;
pub mod format;
pub mod gender;
pub mod router;
pub mod validator;

#[cfg(test)]
mod tests;

pub use calendar::{days_in_year, is_leap_year, resolve_birth_date, RangeError};
pub use decoder::{decode, DecodeError, RawFields};
pub use domain::{
    EligibilityContext, ErrorCode, FieldError, IdentityNumber, ResolvedIdentity, Role,
    ValidationResult, VoterMarker, FIELD_BIRTH_DATE, FIELD_GENDER, FIELD_NIC,
};
pub use eligibility::{age_on, AgeWindow, EligibilityPolicy, PolicyConfig};
pub use format::{classify, IdentityFormat};
pub use gender::{resolve_gender, Gender};
pub use router::{identity_router, ValidationRequest};
pub use validator::{validate, ConsistencyValidator};
