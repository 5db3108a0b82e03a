use chrono::NaiveDate;
use harvest_identity::identity::{Gender, Role};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_gender(raw: &str) -> Result<Gender, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "male" | "m" => Ok(Gender::Male),
        "female" | "f" => Ok(Gender::Female),
        _ => Err(format!("unknown gender '{raw}' (expected male or female)")),
    }
}

pub(crate) fn parse_role(raw: &str) -> Result<Role, String> {
    let key = raw.trim().to_ascii_lowercase().replace(['-', ' '], "_");
    match key.as_str() {
        "staff" => Ok(Role::Staff),
        "driver" => Ok(Role::Driver),
        "qa_member" | "qamember" | "qa" => Ok(Role::QaMember),
        "farmer" => Ok(Role::Farmer),
        "generic" => Ok(Role::Generic),
        _ => Err(format!(
            "unknown role '{raw}' (expected staff, driver, qa-member, farmer or generic)"
        )),
    }
}
