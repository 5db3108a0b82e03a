use chrono::{Local, NaiveDate};
use tracing::debug;

use super::domain::{
    EligibilityContext, ErrorCode, FieldError, IdentityNumber, ValidationResult, FIELD_BIRTH_DATE,
    FIELD_GENDER, FIELD_NIC,
};
use super::eligibility::{age_on, EligibilityPolicy, PolicyConfig};
use super::format::mask;
use super::gender::Gender;

const FORMAT_MESSAGE: &str = "NIC must be 9 digits followed by V or X, or 12 digits";

/// Single entry point for NIC checks on registration forms.
///
/// Every independent check runs, so one call reports every problem with the
/// submitted fields.
#[derive(Debug, Clone, Default)]
pub struct ConsistencyValidator {
    policy: EligibilityPolicy,
}

impl ConsistencyValidator {
    pub fn new(policy: EligibilityPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: PolicyConfig) -> Self {
        Self::new(EligibilityPolicy::new(config))
    }

    pub fn policy(&self) -> &EligibilityPolicy {
        &self.policy
    }

    pub fn validate(
        &self,
        raw: &str,
        supplied_birth_date: Option<NaiveDate>,
        supplied_gender: Option<Gender>,
        context: &EligibilityContext,
    ) -> ValidationResult {
        let identity = match IdentityNumber::parse(raw) {
            Ok(identity) => identity,
            Err(err) => {
                debug!(nic = %mask(raw), error = %err, "rejected identity number format");
                return ValidationResult {
                    resolved: None,
                    age: None,
                    errors: vec![FieldError::new(
                        FIELD_NIC,
                        ErrorCode::FormatError,
                        FORMAT_MESSAGE,
                    )],
                };
            }
        };

        let mut errors = Vec::new();

        let resolved = match identity.resolve() {
            Ok(resolved) => Some(resolved),
            Err(err) => {
                errors.push(FieldError::new(
                    FIELD_NIC,
                    ErrorCode::RangeError,
                    err.to_string(),
                ));
                None
            }
        };

        if let (Some(supplied), Some(resolved)) = (supplied_birth_date, resolved) {
            if supplied != resolved.birth_date {
                errors.push(FieldError::new(
                    FIELD_BIRTH_DATE,
                    ErrorCode::ConsistencyError,
                    format!(
                        "birth date {supplied} does not match {} encoded in the NIC",
                        resolved.birth_date
                    ),
                ));
            }
        }

        let derived_gender = identity.gender();
        if let Some(supplied) = supplied_gender {
            if supplied != derived_gender {
                errors.push(FieldError::new(
                    FIELD_GENDER,
                    ErrorCode::ConsistencyError,
                    format!("gender {supplied} does not match {derived_gender} encoded in the NIC"),
                ));
            }
        }

        let mut age = None;
        if let Some(resolved) = resolved {
            let as_of = context
                .as_of
                .unwrap_or_else(|| Local::now().date_naive());
            let window = self.policy.window_for_context(context);
            age = Some(age_on(resolved.birth_date, as_of));
            errors.extend(
                self.policy
                    .check_within(resolved.birth_date, context.role, window, as_of),
            );
        }

        debug!(
            nic = %identity,
            nic_format = identity.format().label(),
            role = context.role.label(),
            errors = errors.len(),
            "validated identity number"
        );

        ValidationResult {
            resolved,
            age,
            errors,
        }
    }
}

/// Validate with the default role table.
pub fn validate(
    raw: &str,
    supplied_birth_date: Option<NaiveDate>,
    supplied_gender: Option<Gender>,
    context: &EligibilityContext,
) -> ValidationResult {
    ConsistencyValidator::default().validate(raw, supplied_birth_date, supplied_gender, context)
}
