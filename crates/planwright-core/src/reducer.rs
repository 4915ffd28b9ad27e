//! Action-based mutation protocol for the wizard state.
//!
//! [`reduce`] is the only way a [`PlanDraft`] changes while the wizard is
//! open. It takes the current state by value and returns the next one; it
//! performs no I/O and never fails. Actions addressed to a checkpoint that
//! does not exist leave the state unchanged.
//!
//! # Examples
//!
//! ```rust
//! use planwright_core::{
//!     ids::SequentialIds,
//!     models::PlanDraft,
//!     reducer::{reduce, Action, DetailsPatch},
//! };
//!
//! let ids = SequentialIds::new("cp");
//! let state = reduce(
//!     PlanDraft::default(),
//!     Action::UpdateDetails(DetailsPatch::name("Trial Plan")),
//!     &ids,
//! );
//! let state = reduce(state, Action::AddCheckpoint, &ids);
//!
//! assert_eq!(state.name, "Trial Plan");
//! assert_eq!(state.checkpoints[0].id, "cp-1");
//! ```

use std::collections::BTreeSet;

use crate::{
    ids::IdGenerator,
    models::{
        Checkpoint, CheckpointField, CriteriaField, Currency, DurationUnit, Market, NumericInput,
        PlanDraft, Refinements,
    },
};

/// Partial update of the top-level scalar fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailsPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl DetailsPatch {
    pub fn name(value: impl Into<String>) -> Self {
        Self {
            name: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn description(value: impl Into<String>) -> Self {
        Self {
            description: Some(value.into()),
            ..Default::default()
        }
    }
}

/// Partial update of [`crate::models::PackageDetails`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageDetailsPatch {
    pub target_market: Option<BTreeSet<Market>>,
    pub price: Option<NumericInput>,
    pub currency: Option<Currency>,
    pub duration_magnitude: Option<NumericInput>,
    pub duration_unit: Option<DurationUnit>,
    pub benefits: Option<String>,
    pub selling_points: Option<String>,
}

/// Every mutation the wizard can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    UpdateDetails(DetailsPatch),
    UpdatePackageDetails(PackageDetailsPatch),
    AddCheckpoint,
    RemoveCheckpoint {
        id: String,
    },
    UpdateCheckpoint {
        id: String,
        field: CheckpointField,
        value: String,
    },
    UpdateCriteria {
        id: String,
        field: CriteriaField,
        value: String,
    },
    UpdateRefinements(Refinements),
    UpdateScoringPrompt(String),
    ResetState,
}

/// Produce the next wizard state.
///
/// `ids` is only consulted by [`Action::AddCheckpoint`].
pub fn reduce(mut state: PlanDraft, action: Action, ids: &dyn IdGenerator) -> PlanDraft {
    match action {
        Action::UpdateDetails(patch) => {
            if let Some(name) = patch.name {
                state.name = name;
            }
            if let Some(description) = patch.description {
                state.description = description;
            }
        }
        Action::UpdatePackageDetails(patch) => {
            let details = &mut state.package_details;
            if let Some(target_market) = patch.target_market {
                details.target_market = target_market;
            }
            if let Some(price) = patch.price {
                details.price = price;
            }
            if let Some(currency) = patch.currency {
                details.currency = currency;
            }
            if let Some(magnitude) = patch.duration_magnitude {
                details.duration.magnitude = magnitude;
            }
            if let Some(unit) = patch.duration_unit {
                details.duration.unit = unit;
            }
            if let Some(benefits) = patch.benefits {
                details.benefits = benefits;
            }
            if let Some(selling_points) = patch.selling_points {
                details.selling_points = selling_points;
            }
        }
        Action::AddCheckpoint => {
            state.checkpoints.push(Checkpoint::empty(ids.next_id()));
        }
        Action::RemoveCheckpoint { id } => {
            state.checkpoints.retain(|cp| cp.id != id);
        }
        Action::UpdateCheckpoint { id, field, value } => {
            if let Some(cp) = state.checkpoints.iter_mut().find(|cp| cp.id == id) {
                cp.set(field, value);
            }
        }
        Action::UpdateCriteria { id, field, value } => {
            if let Some(cp) = state.checkpoints.iter_mut().find(|cp| cp.id == id) {
                cp.criteria.set(field, value);
            }
        }
        Action::UpdateRefinements(refinements) => {
            state.package_details.refined.merge(refinements);
        }
        Action::UpdateScoringPrompt(prompt) => {
            state.scoring_prompt = Some(prompt);
        }
        Action::ResetState => {
            state = PlanDraft::default();
        }
    }
    state
}
