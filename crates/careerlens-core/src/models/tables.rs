use serde::{Deserialize, Serialize};

use super::{OutcomeRecord, SalaryRecord, SupportRecord};

/// The structured tables of one dataset load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tables {
    pub outcomes: Vec<OutcomeRecord>,
    pub salaries: Vec<SalaryRecord>,
    pub support: Vec<SupportRecord>,
}

impl Tables {
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty() && self.salaries.is_empty() && self.support.is_empty()
    }
}
