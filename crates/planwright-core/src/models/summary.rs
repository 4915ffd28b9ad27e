//! Plan summary types for the list view.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Currency, NumericInput, PackagePlan, PlanDuration, PlanStatus};

/// Row-sized view of a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    pub id: String,
    pub name: String,
    pub status: PlanStatus,
    pub enabled: bool,
    pub price: NumericInput,
    pub currency: Currency,
    pub duration: PlanDuration,
    /// Number of rubric checkpoints
    pub checkpoint_count: usize,
    /// Whether a scoring prompt has been attached
    pub has_scoring_prompt: bool,
    pub updated_at: Timestamp,
}

impl From<&PackagePlan> for PlanSummary {
    fn from(plan: &PackagePlan) -> Self {
        Self {
            id: plan.id.clone(),
            name: plan.name.clone(),
            status: plan.status,
            enabled: plan.enabled,
            price: plan.package_details.price.clone(),
            currency: plan.package_details.currency.clone(),
            duration: plan.package_details.duration.clone(),
            checkpoint_count: plan.checkpoints.len(),
            has_scoring_prompt: plan
                .scoring_prompt
                .as_deref()
                .is_some_and(|prompt| !prompt.trim().is_empty()),
            updated_at: plan.updated_at,
        }
    }
}
