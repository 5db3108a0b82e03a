use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{EligibilityContext, Role, ValidationResult};
use super::gender::Gender;
use super::validator::ConsistencyValidator;

/// JSON body posted by registration forms on change or blur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    pub nic: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub gender: Option<Gender>,
    pub role: Role,
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    #[serde(default)]
    pub min_age: Option<u32>,
    #[serde(default)]
    pub max_age: Option<u32>,
}

impl ValidationRequest {
    pub fn context(&self) -> EligibilityContext {
        EligibilityContext {
            role: self.role,
            as_of: self.as_of,
            min_age: self.min_age,
            max_age: self.max_age,
        }
    }
}

/// Router exposing the validator. Validation failures are returned as data with `200 OK`.
pub fn identity_router(validator: Arc<ConsistencyValidator>) -> Router {
    Router::new()
        .route("/api/v1/identity/validate", post(validate_handler))
        .with_state(validator)
}

pub(crate) async fn validate_handler(
    State(validator): State<Arc<ConsistencyValidator>>,
    Json(request): Json<ValidationRequest>,
) -> Json<ValidationResult> {
    let context = request.context();
    Json(validator.validate(&request.nic, request.birth_date, request.gender, &context))
}
