//! Checkpoint model: one evaluated category of a plan's rubric.

use std::{collections::HashSet, str::FromStr};

use serde::{Deserialize, Serialize};

/// Four-tier qualitative rubric, ordered from best to worst performance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    #[serde(default)]
    pub very_good: String,
    #[serde(default)]
    pub good: String,
    #[serde(default)]
    pub bad: String,
    #[serde(default)]
    pub very_bad: String,
}

impl Criteria {
    pub fn get(&self, field: CriteriaField) -> &str {
        match field {
            CriteriaField::VeryGood => &self.very_good,
            CriteriaField::Good => &self.good,
            CriteriaField::Bad => &self.bad,
            CriteriaField::VeryBad => &self.very_bad,
        }
    }

    pub fn set(&mut self, field: CriteriaField, value: String) {
        match field {
            CriteriaField::VeryGood => self.very_good = value,
            CriteriaField::Good => self.good = value,
            CriteriaField::Bad => self.bad = value,
            CriteriaField::VeryBad => self.very_bad = value,
        }
    }
}

/// One tier of [`Criteria`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CriteriaField {
    VeryGood,
    Good,
    Bad,
    VeryBad,
}

impl CriteriaField {
    /// All tiers, best first.
    pub const ALL: [CriteriaField; 4] = [
        CriteriaField::VeryGood,
        CriteriaField::Good,
        CriteriaField::Bad,
        CriteriaField::VeryBad,
    ];

    /// Human-readable tier label.
    pub fn label(&self) -> &'static str {
        match self {
            CriteriaField::VeryGood => "Very Good",
            CriteriaField::Good => "Good",
            CriteriaField::Bad => "Bad",
            CriteriaField::VeryBad => "Very Bad",
        }
    }

    /// What a rating in this tier means for the evaluated agent.
    pub fn meaning(&self) -> &'static str {
        match self {
            CriteriaField::VeryGood => "Excellent Performance",
            CriteriaField::Good => "Competent Performance",
            CriteriaField::Bad => "Poor Performance",
            CriteriaField::VeryBad => "Complete Failure",
        }
    }

    /// Wire name, matching the serialized `Criteria` keys.
    pub fn key(&self) -> &'static str {
        match self {
            CriteriaField::VeryGood => "veryGood",
            CriteriaField::Good => "good",
            CriteriaField::Bad => "bad",
            CriteriaField::VeryBad => "veryBad",
        }
    }
}

impl FromStr for CriteriaField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match folded.as_str() {
            "verygood" => Ok(CriteriaField::VeryGood),
            "good" => Ok(CriteriaField::Good),
            "bad" => Ok(CriteriaField::Bad),
            "verybad" => Ok(CriteriaField::VeryBad),
            _ => Err(format!(
                "Invalid criteria tier: {s}. Must be 'very-good', 'good', 'bad', or 'very-bad'"
            )),
        }
    }
}

/// Scalar fields of a [`Checkpoint`] that can be edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckpointField {
    Category,
}

impl FromStr for CheckpointField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "category" => Ok(CheckpointField::Category),
            _ => Err(format!("Invalid checkpoint field: {s}")),
        }
    }
}

/// One evaluated category within a plan's rubric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Unique within the plan; never renumbered
    pub id: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub criteria: Criteria,
}

impl Checkpoint {
    /// A blank checkpoint with the given identifier.
    pub fn empty(id: String) -> Self {
        Self {
            id,
            category: String::new(),
            criteria: Criteria::default(),
        }
    }

    pub fn set(&mut self, field: CheckpointField, value: String) {
        match field {
            CheckpointField::Category => self.category = value,
        }
    }
}

/// Checkpoint IDs that occur more than once, each listed once in the order
/// its first repeat appears.
pub fn duplicate_ids(checkpoints: &[Checkpoint]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for cp in checkpoints {
        let id = cp.id.as_str();
        if !seen.insert(id) && !duplicates.contains(&id) {
            duplicates.push(id);
        }
    }
    duplicates
}
