//! Saved package plan.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Checkpoint, PackageDetails, PlanStatus};

/// A package plan as held by the plan store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackagePlan {
    /// Unique identifier, assigned at first save and never changed
    pub id: String,

    pub name: String,

    pub description: String,

    /// Lifecycle status (draft or published)
    #[serde(default)]
    pub status: PlanStatus,

    /// Whether the plan is offered; independent of status
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub package_details: PackageDetails,

    /// Evaluation rubric in insertion order
    #[serde(default)]
    pub checkpoints: Vec<Checkpoint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_prompt: Option<String>,

    /// Timestamp when the plan was first saved (UTC)
    #[serde(default = "Timestamp::now")]
    pub created_at: Timestamp,

    /// Timestamp of the last full save (UTC)
    #[serde(default = "Timestamp::now")]
    pub updated_at: Timestamp,
}
