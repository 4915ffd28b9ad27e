//! Editable plan state owned by the wizard.

use serde::{Deserialize, Serialize};

use super::{Checkpoint, PackageDetails, PackagePlan};

/// Everything the operator edits in the wizard.
///
/// Identity, status and enablement are deliberately absent: they belong to
/// the saved [`PackagePlan`] and are assigned by the controller on save.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDraft {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub package_details: PackageDetails,

    #[serde(default)]
    pub checkpoints: Vec<Checkpoint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_prompt: Option<String>,
}

impl PlanDraft {
    pub fn checkpoint(&self, id: &str) -> Option<&Checkpoint> {
        self.checkpoints.iter().find(|cp| cp.id == id)
    }
}

impl From<&PackagePlan> for PlanDraft {
    fn from(plan: &PackagePlan) -> Self {
        Self {
            name: plan.name.clone(),
            description: plan.description.clone(),
            package_details: plan.package_details.clone(),
            checkpoints: plan.checkpoints.clone(),
            scoring_prompt: plan.scoring_prompt.clone(),
        }
    }
}
