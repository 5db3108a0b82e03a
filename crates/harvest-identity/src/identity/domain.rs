use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::calendar::{self, RangeError};
use super::decoder::{self, DecodeError, RawFields, LEGACY_CENTURY};
use super::format::{self, IdentityFormat};
use super::gender::{self, Gender};

pub const FIELD_NIC: &str = "nic";
pub const FIELD_BIRTH_DATE: &str = "birthDate";
pub const FIELD_GENDER: &str = "gender";

/// Trailing letter of a legacy NIC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoterMarker {
    /// `V`: registered to vote.
    Voter,
    /// `X`: not registered.
    NonVoter,
}

/// A NIC whose shape has been checked and whose fields have been split out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityNumber {
    raw: String,
    format: IdentityFormat,
    fields: RawFields,
    voter_marker: Option<VoterMarker>,
}

impl IdentityNumber {
    pub fn parse(raw: &str) -> Result<Self, DecodeError> {
        let format = format::classify(raw);
        let normalized = format::normalize(raw).ok_or(DecodeError::InvalidFormat)?;
        let fields = decoder::decode(&normalized, format)?;

        let voter_marker = match normalized.as_bytes().last() {
            Some(b'V') if format == IdentityFormat::Legacy => Some(VoterMarker::Voter),
            Some(b'X') if format == IdentityFormat::Legacy => Some(VoterMarker::NonVoter),
            _ => None,
        };

        Ok(Self {
            raw: normalized,
            format,
            fields,
            voter_marker,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn format(&self) -> IdentityFormat {
        self.format
    }

    pub fn fields(&self) -> &RawFields {
        &self.fields
    }

    pub fn birth_year(&self) -> i32 {
        self.fields.birth_year
    }

    pub fn encoded_day_of_year(&self) -> u16 {
        self.fields.encoded_day_of_year
    }

    pub fn voter_marker(&self) -> Option<VoterMarker> {
        self.voter_marker
    }

    pub fn gender(&self) -> Gender {
        gender::resolve_gender(self.fields.encoded_day_of_year).0
    }

    /// Resolve birth date and gender; fails when the day-of-year has no date.
    pub fn resolve(&self) -> Result<ResolvedIdentity, RangeError> {
        let (gender, day) = gender::resolve_gender(self.fields.encoded_day_of_year);
        let day_of_year = gender::check_day_of_year(day)?;
        let birth_date = calendar::resolve_birth_date(self.fields.birth_year, day_of_year)?;

        Ok(ResolvedIdentity {
            birth_date,
            gender,
            day_of_year,
        })
    }

    pub fn masked(&self) -> String {
        format::mask(&self.raw)
    }

    /// Twelve digit form of the number. Legacy numbers gain the century and a
    /// zero ahead of the serial; the voter letter is dropped.
    pub fn to_modern(&self) -> String {
        match self.format {
            IdentityFormat::Legacy => format!(
                "{:04}{:03}0{}",
                LEGACY_CENTURY + i32::from(self.fields.year_digits),
                self.fields.encoded_day_of_year,
                self.fields.serial
            ),
            _ => self.raw.clone(),
        }
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

/// Birth date and gender derived from a NIC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedIdentity {
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub day_of_year: u16,
}

/// Registration roles with distinct age windows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub enum Role {
    Staff,
    Driver,
    #[serde(alias = "QAMember")]
    QaMember,
    Farmer,
    #[default]
    Generic,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Staff,
        Role::Driver,
        Role::QaMember,
        Role::Farmer,
        Role::Generic,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Role::Staff => "staff",
            Role::Driver => "driver",
            Role::QaMember => "QA member",
            Role::Farmer => "farmer",
            Role::Generic => "registrant",
        }
    }

    /// Suffix used by the `ELIGIBILITY_<ROLE>_*` environment variables.
    pub const fn env_key(self) -> &'static str {
        match self {
            Role::Staff => "STAFF",
            Role::Driver => "DRIVER",
            Role::QaMember => "QA_MEMBER",
            Role::Farmer => "FARMER",
            Role::Generic => "GENERIC",
        }
    }
}

/// Caller supplied inputs for the eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityContext {
    pub role: Role,
    /// Evaluation date; today's local date when absent.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    #[serde(default)]
    pub min_age: Option<u32>,
    #[serde(default)]
    pub max_age: Option<u32>,
}

impl EligibilityContext {
    pub fn for_role(role: Role) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    FormatError,
    RangeError,
    ConsistencyError,
    TooYoungError,
    TooOldError,
}

/// A single problem attributed to a form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub code: ErrorCode,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            code,
            message: message.into(),
        }
    }
}

/// Outcome of one validation call. Only an empty `errors` list means valid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub resolved: Option<ResolvedIdentity>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub age: Option<u32>,
    pub errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |error| error.field == field)
    }

    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|error| error.code == code)
    }
}
