//! Wizard steps and navigation outcomes.

use std::str::FromStr;

use jiff::Timestamp;
use serde::Serialize;

use crate::{models::PlanStatus, validation::ValidationErrors};

/// The four screens of the guided flow, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum WizardStep {
    Details,
    Checkpoints,
    Refinement,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Details,
        WizardStep::Checkpoints,
        WizardStep::Refinement,
        WizardStep::Review,
    ];

    /// 1-based position in the flow.
    pub fn number(&self) -> usize {
        *self as usize + 1
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Details => "Details",
            WizardStep::Checkpoints => "Checkpoints",
            WizardStep::Refinement => "AI Refinement",
            WizardStep::Review => "Review",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        Self::ALL.get(self.number()).copied()
    }

    pub fn prev(&self) -> Option<WizardStep> {
        (*self as usize)
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

/// Whether the wizard creates a new plan or edits a stored one.
///
/// Edit mode carries the identity and lifecycle fields of the stored plan,
/// which the wizard never edits and hands back unchanged on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardMode {
    Create,
    Edit {
        id: String,
        status: PlanStatus,
        enabled: bool,
        created_at: Timestamp,
    },
}

impl WizardMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, WizardMode::Edit { .. })
    }
}

/// Tunables for a wizard session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardOptions {
    /// Add one blank checkpoint on first entry into an empty Checkpoints step
    pub seed_first_checkpoint: bool,
}

impl Default for WizardOptions {
    fn default() -> Self {
        Self {
            seed_first_checkpoint: true,
        }
    }
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Moved { from: WizardStep, to: WizardStep },
    /// The gate for `step` failed; the wizard stayed put.
    Blocked {
        step: WizardStep,
        errors: ValidationErrors,
    },
    /// Already on the first step.
    AtStart,
    /// Already on the last step.
    AtEnd,
}

/// Result of [`super::Wizard::finish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finish {
    /// Every gate passed; the draft is ready to store.
    Ready(Box<crate::models::PlanDraft>),
    /// Revalidation failed; the wizard moved to `step`.
    Blocked {
        step: WizardStep,
        errors: ValidationErrors,
    },
}

/// A piece of marketing copy that has a refinement suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefinedField {
    Description,
    Benefits,
    SellingPoints,
}

impl RefinedField {
    pub const ALL: [RefinedField; 3] = [
        RefinedField::Description,
        RefinedField::Benefits,
        RefinedField::SellingPoints,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RefinedField::Description => "Description",
            RefinedField::Benefits => "Benefits",
            RefinedField::SellingPoints => "Key Selling Points",
        }
    }
}

impl FromStr for RefinedField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(|c: char| matches!(c, '-' | '_' | ' '), "").as_str() {
            "description" => Ok(RefinedField::Description),
            "benefits" => Ok(RefinedField::Benefits),
            "sellingpoints" => Ok(RefinedField::SellingPoints),
            _ => Err(format!("Invalid refined field: {s}")),
        }
    }
}
