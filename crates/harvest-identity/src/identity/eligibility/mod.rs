mod config;
mod policy;

pub use config::{AgeWindow, PolicyConfig, DEFAULT_MINIMUM_AGE, DEFAULT_RETIREMENT_AGE};
pub use policy::age_on;

use super::domain::{EligibilityContext, FieldError, Role};
use chrono::NaiveDate;
use policy::evaluate_window;

/// Stateless age-window checks for each registration role.
#[derive(Debug, Clone, Default)]
pub struct EligibilityPolicy {
    config: PolicyConfig,
}

impl EligibilityPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn window_for(&self, role: Role) -> AgeWindow {
        self.config.window(role)
    }

    /// Role window with any explicit caller overrides applied.
    pub fn window_for_context(&self, context: &EligibilityContext) -> AgeWindow {
        let base = self.window_for(context.role);
        AgeWindow {
            min_age: context.min_age.unwrap_or(base.min_age),
            max_age: context.max_age.or(base.max_age),
        }
    }

    pub fn check_age(
        &self,
        birth_date: NaiveDate,
        role: Role,
        as_of: NaiveDate,
    ) -> Vec<FieldError> {
        self.check_within(birth_date, role, self.window_for(role), as_of)
    }

    pub fn check_within(
        &self,
        birth_date: NaiveDate,
        role: Role,
        window: AgeWindow,
        as_of: NaiveDate,
    ) -> Vec<FieldError> {
        let age = age_on(birth_date, as_of);
        evaluate_window(age, window, role).into_iter().collect()
    }
}
