//! Filter types for the plan list view.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PackagePlan;

/// Tri-state filter on the `enabled` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnabledFilter {
    /// Show every plan
    #[default]
    All,

    /// Only plans currently switched on
    Enabled,

    /// Only plans currently switched off
    Disabled,
}

impl EnabledFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnabledFilter::All => "all",
            EnabledFilter::Enabled => "enabled",
            EnabledFilter::Disabled => "disabled",
        }
    }

    pub fn accepts(&self, enabled: bool) -> bool {
        match self {
            EnabledFilter::All => true,
            EnabledFilter::Enabled => enabled,
            EnabledFilter::Disabled => !enabled,
        }
    }
}

impl FromStr for EnabledFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(EnabledFilter::All),
            "enabled" => Ok(EnabledFilter::Enabled),
            "disabled" => Ok(EnabledFilter::Disabled),
            _ => Err(format!("Invalid enabled filter: {s}")),
        }
    }
}

/// Filter options for listing plans.
#[derive(Debug, Clone, Default)]
pub struct PlanFilter {
    /// Filter by enabled flag
    pub enabled: EnabledFilter,

    /// Filter by plan name (case-insensitive partial match)
    pub name_contains: Option<String>,
}

impl PlanFilter {
    /// Whether `plan` passes every configured predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jiff::Timestamp;
    /// use planwright_core::models::{EnabledFilter, PackagePlan, PlanFilter, PlanStatus};
    ///
    /// let plan = PackagePlan {
    ///     id: "plan-1".to_string(),
    ///     name: "Starter Trial".to_string(),
    ///     description: "Thirty free days".to_string(),
    ///     status: PlanStatus::Draft,
    ///     enabled: false,
    ///     package_details: Default::default(),
    ///     checkpoints: vec![],
    ///     scoring_prompt: None,
    ///     created_at: Timestamp::UNIX_EPOCH,
    ///     updated_at: Timestamp::UNIX_EPOCH,
    /// };
    ///
    /// let filter = PlanFilter {
    ///     enabled: EnabledFilter::Disabled,
    ///     name_contains: Some("TRIAL".to_string()),
    /// };
    /// assert!(filter.matches(&plan));
    ///
    /// let enabled_only = PlanFilter {
    ///     enabled: EnabledFilter::Enabled,
    ///     ..filter
    /// };
    /// assert!(!enabled_only.matches(&plan));
    /// ```
    pub fn matches(&self, plan: &PackagePlan) -> bool {
        if !self.enabled.accepts(plan.enabled) {
            return false;
        }

        match self.name_contains.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => plan
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        }
    }
}

impl From<&crate::params::ListPlans> for PlanFilter {
    fn from(params: &crate::params::ListPlans) -> Self {
        Self {
            enabled: params.status,
            name_contains: params.search.clone(),
        }
    }
}
