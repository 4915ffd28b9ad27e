//! Data models for package plans and their evaluation rubrics.
//!
//! This module contains the domain models of the console: the saved
//! [`PackagePlan`], the editable [`PlanDraft`] the wizard works on, and the
//! value types they are built from. Display implementations for these models
//! are located in [`crate::display::models`] to keep data structures apart
//! from presentation logic.
//!
//! # Shape
//!
//! ```text
//! PackagePlan
//! ├── id, name, description, status, enabled
//! ├── package_details: PackageDetails
//! │   ├── target_market: {Market}
//! │   ├── price: NumericInput + currency
//! │   ├── duration: PlanDuration (magnitude + unit)
//! │   ├── benefits / selling_points (newline-delimited)
//! │   └── refined: Refinements (AI suggestions)
//! ├── checkpoints: [Checkpoint { id, category, criteria }]
//! └── scoring_prompt
//! ```
//!
//! # Examples
//!
//! ```rust
//! use planwright_core::models::{Market, NumericInput, PlanDraft};
//!
//! let mut draft = PlanDraft::default();
//! draft.name = "Starter".to_string();
//! draft.package_details.target_market.insert(Market::Sme);
//! draft.package_details.price = NumericInput::from("0");
//!
//! assert!(!draft.package_details.price.is_empty());
//! assert_eq!(draft.package_details.price.as_f64(), Some(0.0));
//! ```

pub mod checkpoint;
pub mod details;
pub mod draft;
pub mod filters;
pub mod plan;
pub mod status;
pub mod summary;


pub use checkpoint::{duplicate_ids, Checkpoint, CheckpointField, Criteria, CriteriaField};
pub use details::{
    split_items, Currency, DurationUnit, Market, NumericInput, PackageDetails, PlanDuration,
    Refinements,
};
pub use draft::PlanDraft;
pub use filters::{EnabledFilter, PlanFilter};
pub use plan::PackagePlan;
pub use status::PlanStatus;
pub use summary::PlanSummary;
