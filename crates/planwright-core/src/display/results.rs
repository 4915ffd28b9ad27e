//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::PackagePlan;

/// Wrapper type for displaying a newly created plan.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use planwright_core::{display::CreateResult, models::{PackagePlan, PlanStatus}};
///
/// let plan = PackagePlan {
///     id: "plan-1".to_string(),
///     name: "Trial".to_string(),
///     description: "Thirty free days".to_string(),
///     status: PlanStatus::Draft,
///     enabled: false,
///     package_details: Default::default(),
///     checkpoints: vec![],
///     scoring_prompt: None,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let output = CreateResult::new(plan).to_string();
/// assert!(output.starts_with("Created plan with ID: plan-1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<PackagePlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying an updated plan together with what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl UpdateResult<PackagePlan> {
    /// Describe the top-level differences between two versions of a plan.
    pub fn between(before: &PackagePlan, after: PackagePlan) -> Self {
        let mut changes = Vec::new();
        if before.name != after.name {
            changes.push(format!("Renamed to \"{}\"", after.name));
        }
        if before.description != after.description {
            changes.push("Updated description".to_string());
        }
        if before.package_details != after.package_details {
            changes.push("Updated package details".to_string());
        }
        if before.checkpoints != after.checkpoints {
            changes.push(format!("Checkpoints: {}", after.checkpoints.len()));
        }
        if before.scoring_prompt != after.scoring_prompt {
            changes.push("Updated scoring prompt".to_string());
        }
        if before.enabled != after.enabled {
            changes.push(if after.enabled { "Enabled" } else { "Disabled" }.to_string());
        }
        Self {
            resource: after,
            changes,
        }
    }
}

impl fmt::Display for UpdateResult<PackagePlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}
