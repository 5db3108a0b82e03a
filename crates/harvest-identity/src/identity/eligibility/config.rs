use serde::{Deserialize, Serialize};

use super::super::domain::Role;

pub const DEFAULT_MINIMUM_AGE: u32 = 18;
pub const DEFAULT_RETIREMENT_AGE: u32 = 60;

/// Inclusive age range; `max_age: None` means no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeWindow {
    pub min_age: u32,
    pub max_age: Option<u32>,
}

impl AgeWindow {
    pub const fn new(min_age: u32, max_age: Option<u32>) -> Self {
        Self { min_age, max_age }
    }

    pub const fn unbounded() -> Self {
        Self::new(0, None)
    }

    pub fn is_inverted(&self) -> bool {
        self.max_age.map(|max| max < self.min_age).unwrap_or(false)
    }
}

/// Per-role age windows backing the eligibility policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfig {
    pub staff: AgeWindow,
    pub driver: AgeWindow,
    pub qa_member: AgeWindow,
    pub farmer: AgeWindow,
    pub generic: AgeWindow,
}

impl PolicyConfig {
    pub fn window(&self, role: Role) -> AgeWindow {
        match role {
            Role::Staff => self.staff,
            Role::Driver => self.driver,
            Role::QaMember => self.qa_member,
            Role::Farmer => self.farmer,
            Role::Generic => self.generic,
        }
    }

    pub fn window_mut(&mut self, role: Role) -> &mut AgeWindow {
        match role {
            Role::Staff => &mut self.staff,
            Role::Driver => &mut self.driver,
            Role::QaMember => &mut self.qa_member,
            Role::Farmer => &mut self.farmer,
            Role::Generic => &mut self.generic,
        }
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        let working_age = AgeWindow::new(DEFAULT_MINIMUM_AGE, Some(DEFAULT_RETIREMENT_AGE));
        let adult = AgeWindow::new(DEFAULT_MINIMUM_AGE, None);

        Self {
            staff: working_age,
            driver: working_age,
            qa_member: adult,
            farmer: adult,
            generic: AgeWindow::unbounded(),
        }
    }
}
