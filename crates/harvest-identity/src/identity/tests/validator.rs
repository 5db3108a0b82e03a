use super::common::*;
use crate::identity::calendar::days_in_year;
use crate::identity::domain::{
    EligibilityContext, ErrorCode, Role, FIELD_BIRTH_DATE, FIELD_GENDER, FIELD_NIC,
};
use crate::identity::gender::Gender;

#[test]
fn valid_modern_staff_number_has_no_errors() {
    let result = validator().validate("198501512345", None, None, &staff_context(date(2025, 1, 1)));

    let resolved = result.resolved.expect("resolved identity");
    assert_eq!(resolved.birth_date, date(1985, 1, 15));
    assert_eq!(resolved.gender, Gender::Male);
    assert_eq!(resolved.day_of_year, 15);
    assert_eq!(result.age, Some(39));
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert!(result.is_valid());
}

#[test]
fn legacy_female_number_resolves() {
    let result = validator().validate("855511234V", None, None, &generic_context());

    let resolved = result.resolved.expect("resolved identity");
    assert_eq!(resolved.birth_date, date(1985, 2, 20));
    assert_eq!(resolved.gender, Gender::Female);
    assert!(result.is_valid());
}

#[test]
fn gender_mismatch_is_a_single_consistency_error() {
    let result = validator().validate("855511234V", None, Some(Gender::Male), &generic_context());

    assert!(result.resolved.is_some());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::ConsistencyError);
    assert_eq!(result.errors[0].field, FIELD_GENDER);
}

#[test]
fn birth_date_mismatch_is_reported_on_birth_date() {
    let result = validator().validate(
        "855511234V",
        Some(date(1985, 2, 21)),
        Some(Gender::Female),
        &generic_context(),
    );

    assert_eq!(result.errors.len(), 1);
    let error = &result.errors[0];
    assert_eq!(error.field, FIELD_BIRTH_DATE);
    assert_eq!(error.code, ErrorCode::ConsistencyError);
    assert!(error.message.contains("1985-02-20"));
}

#[test]
fn matching_supplied_values_pass() {
    let result = validator().validate(
        "855511234v",
        Some(date(1985, 2, 20)),
        Some(Gender::Female),
        &generic_context(),
    );
    assert!(result.is_valid(), "{:?}", result.errors);
}

#[test]
fn retirement_age_staff_are_too_old_without_consistency_errors() {
    let result = validator().validate("195001012345", None, None, &staff_context(date(2025, 6, 1)));

    assert!(result.resolved.is_some());
    assert_eq!(result.age, Some(75));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::TooOldError);
    assert!(!result.has_code(ErrorCode::ConsistencyError));
}

#[test]
fn minors_are_too_young_for_drivers() {
    let context = EligibilityContext::for_role(Role::Driver).as_of(date(2025, 6, 1));
    let result = validator().validate("201001012345", None, None, &context);

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::TooYoungError);
    assert_eq!(result.errors[0].field, FIELD_BIRTH_DATE);
}

#[test]
fn malformed_input_short_circuits_with_format_error() {
    let result = validator().validate(
        "not-a-nic",
        Some(date(1985, 1, 1)),
        Some(Gender::Male),
        &staff_context(date(2025, 1, 1)),
    );

    assert!(result.resolved.is_none());
    assert_eq!(result.age, None);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::FormatError);
    assert_eq!(result.errors[0].field, FIELD_NIC);
}

#[test]
fn nine_digits_without_letter_is_not_coerced() {
    let result = validator().validate("855511234", None, None, &generic_context());
    assert_eq!(result.errors[0].code, ErrorCode::FormatError);
}

#[test]
fn day_366_in_common_year_is_a_range_error() {
    let result = validator().validate("873661234V", None, None, &staff_context(date(2025, 1, 1)));

    assert!(result.resolved.is_none());
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::RangeError);
    assert_eq!(result.errors[0].field, FIELD_NIC);
}

#[test]
fn day_366_in_leap_year_is_new_years_eve() {
    let result = validator().validate("883661234V", None, None, &generic_context());
    assert_eq!(
        result.resolved.map(|resolved| resolved.birth_date),
        Some(date(1988, 12, 31))
    );
}

#[test]
fn range_errors_still_check_gender() {
    // 000 de-offsets to day zero for a male holder
    let result = validator().validate(
        "198500012345",
        Some(date(1985, 1, 1)),
        Some(Gender::Female),
        &staff_context(date(2025, 1, 1)),
    );

    assert!(result.resolved.is_none());
    let codes: Vec<_> = result.errors.iter().map(|error| error.code).collect();
    assert_eq!(
        codes,
        vec![ErrorCode::RangeError, ErrorCode::ConsistencyError]
    );
    assert_eq!(result.errors[1].field, FIELD_GENDER);
}

#[test]
fn gender_threshold_boundary() {
    // 500 is male but has no calendar day
    let male = validator().validate("198550012345", None, Some(Gender::Male), &generic_context());
    assert_eq!(male.errors.len(), 1);
    assert_eq!(male.errors[0].code, ErrorCode::RangeError);

    let female = validator().validate("198550112345", None, None, &generic_context());
    let resolved = female.resolved.expect("resolved");
    assert_eq!(resolved.gender, Gender::Female);
    assert_eq!(resolved.day_of_year, 1);
    assert_eq!(resolved.birth_date, date(1985, 1, 1));
}

#[test]
fn every_independent_failure_is_collected() {
    let result = validator().validate(
        "195055112345",
        Some(date(1950, 1, 1)),
        Some(Gender::Male),
        &staff_context(date(2025, 6, 1)),
    );

    let codes: Vec<_> = result.errors.iter().map(|error| error.code).collect();
    assert_eq!(
        codes,
        vec![
            ErrorCode::ConsistencyError,
            ErrorCode::ConsistencyError,
            ErrorCode::TooOldError,
        ]
    );
}

#[test]
fn validation_is_idempotent() {
    let context = staff_context(date(2025, 1, 1));
    let first = validator().validate("195055112345", None, Some(Gender::Male), &context);
    let second = validator().validate("195055112345", None, Some(Gender::Male), &context);
    assert_eq!(first, second);
}

fn assert_round_trip(nic: &str, year: i32, day: u16, gender: Gender) {
    let result = validator().validate(nic, None, None, &generic_context());
    let resolved = result
        .resolved
        .unwrap_or_else(|| panic!("{nic} resolves, got {:?}", result.errors));
    assert_eq!(
        Some(resolved.birth_date),
        chrono::NaiveDate::from_yo_opt(year, u32::from(day)),
        "{nic}"
    );
    assert_eq!(resolved.day_of_year, day, "{nic}");
    assert_eq!(resolved.gender, gender, "{nic}");
    assert!(result.errors.is_empty(), "{nic}: {:?}", result.errors);
}

fn assert_range_error(nic: &str) {
    let result = validator().validate(nic, None, None, &generic_context());
    assert!(result.resolved.is_none(), "{nic}");
    assert_eq!(result.errors.len(), 1, "{nic}");
    assert_eq!(result.errors[0].code, ErrorCode::RangeError, "{nic}");
}

#[test]
fn modern_numbers_round_trip_every_day_from_1900_to_2099() {
    for year in 1900..=2099 {
        for day in 1..=days_in_year(year) {
            for gender in [Gender::Male, Gender::Female] {
                assert_round_trip(&modern_nic(year, day, gender), year, day, gender);
            }
        }
    }
}

#[test]
fn legacy_numbers_round_trip_every_day_of_the_twentieth_century() {
    for year in 1900..=1999 {
        for day in 1..=days_in_year(year) {
            for gender in [Gender::Male, Gender::Female] {
                assert_round_trip(&legacy_nic(year, day, gender), year, day, gender);
            }
        }
    }
}

#[test]
fn day_366_of_every_common_year_is_a_range_error() {
    for year in (1900..=2099).filter(|year| days_in_year(*year) == 365) {
        for gender in [Gender::Male, Gender::Female] {
            assert_range_error(&modern_nic(year, 366, gender));
            if year <= 1999 {
                assert_range_error(&legacy_nic(year, 366, gender));
            }
        }
    }
}

#[test]
fn explicit_age_bounds_override_role_table() {
    let context = EligibilityContext {
        role: Role::Farmer,
        as_of: Some(date(2025, 1, 1)),
        min_age: Some(45),
        max_age: None,
    };
    let result = validator().validate("198501512345", None, None, &context);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, ErrorCode::TooYoungError);
}
