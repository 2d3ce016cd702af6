//! PageBudget - how many result positions a search may scan

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Upper bound on the number of result positions inspected by one search.
///
/// The default of 100 covers the ten pages of ten results that the search
/// provider serves for a single query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct PageBudget(u64);

impl PageBudget {
    const DEFAULT: u64 = 100;

    /// Create a budget; zero is rejected.
    pub fn new(positions: u64) -> Result<Self, DomainError> {
        if positions == 0 {
            return Err(DomainError::Validation(
                "page budget must be greater than zero".to_string(),
            ));
        }
        Ok(Self(positions))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for PageBudget {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u64> for PageBudget {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageBudget> for u64 {
    fn from(budget: PageBudget) -> Self {
        budget.0
    }
}

impl std::str::FromStr for PageBudget {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let positions = s.trim().parse::<u64>().map_err(|e| {
            DomainError::Validation(format!("invalid page budget '{}': {}", s, e))
        })?;
        Self::new(positions)
    }
}

impl std::fmt::Display for PageBudget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
