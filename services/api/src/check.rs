use crate::infra::{parse_date, parse_gender, parse_role};
use chrono::NaiveDate;
use clap::Args;
use harvest_identity::config::AppConfig;
use harvest_identity::error::AppError;
use harvest_identity::identity::{
    ConsistencyValidator, EligibilityContext, Gender, Role, ValidationResult,
};
use harvest_identity::telemetry;
use std::process::ExitCode;

/// Exit status when the NIC was checked but failed validation.
const INVALID_EXIT: u8 = 2;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// National identity number (9 digits + V/X, or 12 digits)
    #[arg(long)]
    pub(crate) nic: String,
    /// Birth date entered on the form (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) birth_date: Option<NaiveDate>,
    /// Gender entered on the form (male or female)
    #[arg(long, value_parser = parse_gender)]
    pub(crate) gender: Option<Gender>,
    /// Registration role: staff, driver, qa-member, farmer or generic
    #[arg(long, value_parser = parse_role, default_value = "generic")]
    pub(crate) role: Role,
    /// Evaluation date for age checks (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Override the role's minimum age
    #[arg(long)]
    pub(crate) min_age: Option<u32>,
    /// Override the role's maximum age
    #[arg(long)]
    pub(crate) max_age: Option<u32>,
}

impl CheckArgs {
    fn context(&self) -> EligibilityContext {
        EligibilityContext {
            role: self.role,
            as_of: self.as_of,
            min_age: self.min_age,
            max_age: self.max_age,
        }
    }
}

pub(crate) fn run_check(args: CheckArgs) -> Result<ExitCode, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let validator = ConsistencyValidator::from_config(config.policy);
    let result = check(&validator, &args);

    println!("{}", serde_json::to_string_pretty(&result)?);

    if result.is_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(INVALID_EXIT))
    }
}

fn check(validator: &ConsistencyValidator, args: &CheckArgs) -> ValidationResult {
    validator.validate(&args.nic, args.birth_date, args.gender, &args.context())
}
