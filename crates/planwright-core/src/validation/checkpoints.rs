//! Checkpoints step: the evaluation rubric.
//!
//! Checkpoints are optional: an empty rubric passes. When present, every
//! checkpoint is checked field by field and all failures are reported in
//! rubric order, tagged with the checkpoint ID so they can be shown inline.
//! Checkpoint IDs must be unique within the plan.

use super::{bounds, check_text, CheckpointErrors, ValidationErrors};
use crate::models::{duplicate_ids, Checkpoint, CriteriaField, PlanDraft};

const CRITERIA_REQUIRED: &str = "Criteria is required.";

pub fn validate_checkpoints(draft: &PlanDraft) -> ValidationErrors {
    let checkpoints = draft
        .checkpoints
        .iter()
        .map(|cp| (cp.id.clone(), validate_checkpoint(cp)))
        .filter(|(_, errors)| !errors.is_empty())
        .collect();

    let duplicates = duplicate_ids(&draft.checkpoints);
    let checkpoints_error = (!duplicates.is_empty())
        .then(|| format!("Checkpoint IDs must be unique: {}.", duplicates.join(", ")));

    ValidationErrors {
        checkpoints,
        checkpoints_error,
        ..Default::default()
    }
}

fn validate_checkpoint(cp: &Checkpoint) -> CheckpointErrors {
    let tier = |field: CriteriaField| {
        check_text(cp.criteria.get(field), bounds::CRITERIA, CRITERIA_REQUIRED)
    };

    CheckpointErrors {
        category: check_text(&cp.category, bounds::CATEGORY, "Category name is required."),
        very_good: tier(CriteriaField::VeryGood),
        good: tier(CriteriaField::Good),
        bad: tier(CriteriaField::Bad),
        very_bad: tier(CriteriaField::VeryBad),
    }
}
