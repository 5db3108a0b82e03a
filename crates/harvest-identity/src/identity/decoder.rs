use super::format::{classify, IdentityFormat};
use serde::{Deserialize, Serialize};

/// Legacy numbers carry no century marker and the scheme was retired before 2000.
pub const LEGACY_CENTURY: i32 = 1900;

/// Sub-fields split out of a classified NIC, before any semantic checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFields {
    /// Year digits exactly as written (two for legacy, four for modern).
    pub year_digits: u16,
    /// Full birth year after century resolution.
    pub birth_year: i32,
    /// Day-of-year field including the gender offset.
    pub encoded_day_of_year: u16,
    /// Serial and check characters, not interpreted here.
    pub serial: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("identity number does not match a supported format")]
    InvalidFormat,
    #[error("identity number is {found:?} but was decoded as {expected:?}")]
    FormatMismatch {
        expected: IdentityFormat,
        found: IdentityFormat,
    },
    #[error("identity number field '{field}' is not numeric")]
    NonNumeric { field: &'static str },
}

/// Split a classified NIC into its raw fields.
///
/// `raw` must have the shape `format` claims; the decoder re-checks it so that a
/// mismatched pair is reported rather than sliced.
pub fn decode(raw: &str, format: IdentityFormat) -> Result<RawFields, DecodeError> {
    let (year_len, serial_end, century) = match format {
        IdentityFormat::Legacy => (2, 9, LEGACY_CENTURY),
        IdentityFormat::Modern => (4, 12, 0),
        IdentityFormat::Invalid => return Err(DecodeError::InvalidFormat),
    };

    let found = classify(raw);
    if found != format {
        return Err(DecodeError::FormatMismatch {
            expected: format,
            found,
        });
    }

    let digits = raw.trim();
    let year_digits = numeric(&digits[..year_len], "year")?;
    let encoded_day_of_year = numeric(&digits[year_len..year_len + 3], "day_of_year")?;
    let serial = digits[year_len + 3..serial_end].to_string();

    Ok(RawFields {
        year_digits,
        birth_year: century + i32::from(year_digits),
        encoded_day_of_year,
        serial,
    })
}

fn numeric(slice: &str, field: &'static str) -> Result<u16, DecodeError> {
    slice
        .parse::<u16>()
        .map_err(|_| DecodeError::NonNumeric { field })
}
