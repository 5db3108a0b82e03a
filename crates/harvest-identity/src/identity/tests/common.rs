use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::identity::domain::{EligibilityContext, Role};
use crate::identity::gender::{encode_day_of_year, Gender};
use crate::identity::router::identity_router;
use crate::identity::validator::ConsistencyValidator;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn staff_context(as_of: NaiveDate) -> EligibilityContext {
    EligibilityContext::for_role(Role::Staff).as_of(as_of)
}

pub(super) fn generic_context() -> EligibilityContext {
    EligibilityContext::for_role(Role::Generic).as_of(date(2025, 1, 1))
}

pub(super) fn validator() -> ConsistencyValidator {
    ConsistencyValidator::default()
}

/// Twelve digit NIC for the given birth year, day and gender.
pub(super) fn modern_nic(year: i32, day_of_year: u16, gender: Gender) -> String {
    format!(
        "{year:04}{:03}12345",
        encode_day_of_year(gender, day_of_year)
    )
}

/// Ten character NIC; `year` must fall in 1900..=1999.
pub(super) fn legacy_nic(year: i32, day_of_year: u16, gender: Gender) -> String {
    format!(
        "{:02}{:03}1234V",
        year - 1900,
        encode_day_of_year(gender, day_of_year)
    )
}

pub(super) fn router() -> axum::Router {
    identity_router(Arc::new(validator()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
