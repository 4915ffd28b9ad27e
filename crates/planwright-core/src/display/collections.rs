//! Collection wrapper types for displaying groups of plans.

use std::{fmt, ops::Index};

use crate::models::PlanSummary;

/// Newtype wrapper for displaying the plan list.
///
/// An empty list renders as `No plans found.`
///
/// # Examples
///
/// ```rust
/// use planwright_core::display::PlanSummaries;
///
/// let output = PlanSummaries(vec![]).to_string();
/// assert_eq!(output, "No plans found.\n");
/// ```
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }
        writeln!(f, "{} plan(s)", self.0.len())?;
        writeln!(f)?;
        self.0.iter().try_for_each(|plan| write!(f, "{plan}"))
    }
}
