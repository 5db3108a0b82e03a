use serde::{Deserialize, Serialize};

pub const LEGACY_LENGTH: usize = 10;
pub const MODERN_LENGTH: usize = 12;

/// The two fixed-width NIC encodings accepted by registration forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentityFormat {
    /// Nine digits and a trailing `V`/`X`, two-digit birth year.
    Legacy,
    /// Twelve digits, four-digit birth year.
    Modern,
    Invalid,
}

impl IdentityFormat {
    pub const fn label(self) -> &'static str {
        match self {
            IdentityFormat::Legacy => "legacy",
            IdentityFormat::Modern => "modern",
            IdentityFormat::Invalid => "invalid",
        }
    }
}

/// Classify a raw NIC string by shape alone.
///
/// Surrounding whitespace is ignored and the trailing letter of a legacy
/// number may be either case. Nothing else is coerced: a nine digit string
/// without its letter is `Invalid`.
pub fn classify(raw: &str) -> IdentityFormat {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();

    match bytes.len() {
        MODERN_LENGTH if bytes.iter().all(u8::is_ascii_digit) => IdentityFormat::Modern,
        LEGACY_LENGTH => {
            let (digits, letter) = bytes.split_at(LEGACY_LENGTH - 1);
            let letter_ok = matches!(letter[0].to_ascii_uppercase(), b'V' | b'X');
            if letter_ok && digits.iter().all(u8::is_ascii_digit) {
                IdentityFormat::Legacy
            } else {
                IdentityFormat::Invalid
            }
        }
        _ => IdentityFormat::Invalid,
    }
}

/// Trimmed NIC with the legacy letter uppercased, or `None` when the shape is invalid.
pub fn normalize(raw: &str) -> Option<String> {
    match classify(raw) {
        IdentityFormat::Invalid => None,
        IdentityFormat::Modern => Some(raw.trim().to_string()),
        IdentityFormat::Legacy => Some(raw.trim().to_ascii_uppercase()),
    }
}

/// Redact a NIC for log output, keeping the first four and the last character.
pub fn mask(raw: &str) -> String {
    let chars: Vec<char> = raw.trim().chars().collect();
    if chars.len() <= 5 {
        return "*".repeat(chars.len());
    }

    let last = chars.len() - 1;
    chars
        .iter()
        .enumerate()
        .map(|(index, ch)| if index < 4 || index == last { *ch } else { '*' })
        .collect()
}
