//! Per-step validation of the wizard state.
//!
//! Validation never raises: every entry point returns a
//! [`ValidationErrors`] report whose shape mirrors the editable fields of a
//! plan. A present message is a visible violation; an absent one means the
//! field is valid. Calling a validator twice on the same state yields the
//! same report.
//!
//! The two gates are [`validate_details`] (leaving the Details step) and
//! [`validate_checkpoints`] (leaving the Checkpoints step).
//! [`validate_plan`] runs both and is used on save.

mod checkpoints;
mod details;

use serde::{Deserialize, Serialize};

pub use checkpoints::validate_checkpoints;
pub use details::validate_details;

use crate::models::PlanDraft;

/// Inclusive character-count band for a text field, measured after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBand {
    pub min: usize,
    pub max: usize,
}

impl LengthBand {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, text: &str) -> bool {
        let len = text.trim().chars().count();
        len >= self.min && len <= self.max
    }

    fn message(&self) -> String {
        format!("Must be between {} and {} characters.", self.min, self.max)
    }
}

/// The canonical bounds applied by every validator.
pub mod bounds {
    use super::LengthBand;

    pub const NAME: LengthBand = LengthBand::new(3, 50);
    pub const DESCRIPTION: LengthBand = LengthBand::new(10, 500);
    pub const BENEFITS: LengthBand = LengthBand::new(10, 1000);
    pub const SELLING_POINTS: LengthBand = LengthBand::new(10, 1000);
    pub const CATEGORY: LengthBand = LengthBand::new(5, 100);
    pub const CRITERIA: LengthBand = LengthBand::new(20, 300);
    /// Largest accepted duration magnitude
    pub const MAX_DURATION: u32 = 999;
}

/// Check a required text field against its band.
///
/// Returns the message to show, or `None` when the value is acceptable.
fn check_text(value: &str, band: LengthBand, required: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some(required.to_string())
    } else if !band.contains(value) {
        Some(band.message())
    } else {
        None
    }
}

/// Field errors of the package details section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDetailsErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_market: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_points: Option<String>,
}

impl PackageDetailsErrors {
    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    /// `(field, message)` pairs in form order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("targetMarket", &self.target_market),
            ("price", &self.price),
            ("duration", &self.duration),
            ("benefits", &self.benefits),
            ("sellingPoints", &self.selling_points),
        ]
        .into_iter()
        .filter_map(|(field, message)| message.as_deref().map(|m| (field, m)))
    }
}

/// Field errors of one checkpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub very_good: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub good: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bad: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub very_bad: Option<String>,
}

impl CheckpointErrors {
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.entries().count()
    }

    /// `(field, message)` pairs in form order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("category", &self.category),
            ("veryGood", &self.very_good),
            ("good", &self.good),
            ("bad", &self.bad),
            ("veryBad", &self.very_bad),
        ]
        .into_iter()
        .filter_map(|(field, message)| message.as_deref().map(|m| (field, m)))
    }
}

/// Structured validation report mirroring the plan's editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_details: Option<PackageDetailsErrors>,
    /// Per-checkpoint errors as `(checkpoint ID, errors)`, in rubric order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checkpoints: Vec<(String, CheckpointErrors)>,
    /// Collection-level failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkpoints_error: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        !self.has_detail_errors() && !self.has_checkpoint_errors()
    }

    /// Whether anything on the Details step failed.
    pub fn has_detail_errors(&self) -> bool {
        self.name.is_some() || self.description.is_some() || self.package_details.is_some()
    }

    /// Whether anything on the Checkpoints step failed.
    pub fn has_checkpoint_errors(&self) -> bool {
        !self.checkpoints.is_empty() || self.checkpoints_error.is_some()
    }

    /// Errors reported for one checkpoint.
    pub fn for_checkpoint(&self, id: &str) -> Option<&CheckpointErrors> {
        self.checkpoints
            .iter()
            .find(|(cp_id, _)| cp_id == id)
            .map(|(_, errors)| errors)
    }

    /// Fold another report into this one; fields set in `other` win.
    pub fn merge(&mut self, other: ValidationErrors) {
        if other.name.is_some() {
            self.name = other.name;
        }
        if other.description.is_some() {
            self.description = other.description;
        }
        if other.package_details.is_some() {
            self.package_details = other.package_details;
        }
        if !other.checkpoints.is_empty() {
            self.checkpoints = other.checkpoints;
        }
        if other.checkpoints_error.is_some() {
            self.checkpoints_error = other.checkpoints_error;
        }
    }
}

/// Run every gate; used when saving.
pub fn validate_plan(draft: &PlanDraft) -> ValidationErrors {
    let mut errors = validate_details(draft);
    errors.merge(validate_checkpoints(draft));
    errors
}
