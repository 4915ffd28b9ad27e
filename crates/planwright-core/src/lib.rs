//! Core library for the Planwright package-plan console.
//!
//! This crate holds the business logic for authoring commercial package plans
//! and the rubrics used to score sales agents against them: the wizard and
//! its state reducer, the validation gates, the scoring-prompt compiler, and
//! the collaborator seams for AI refinement and plan persistence.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Lists, creation and update results
//! - **Terminal Rendering**: Markdown output via the CLI's terminal renderer
//!
//! # Quick Start
//!
//! ```rust
//! use planwright_core::{
//!     models::{CheckpointField, CriteriaField, Market, NumericInput},
//!     reducer::{Action, DetailsPatch, PackageDetailsPatch},
//!     ConsoleBuilder, SaveOutcome,
//! };
//!
//! # async fn example() -> planwright_core::Result<()> {
//! let console = ConsoleBuilder::new().build()?;
//! let mut wizard = console.start_create();
//!
//! wizard.dispatch(Action::UpdateDetails(DetailsPatch {
//!     name: Some("Starter".to_string()),
//!     description: Some("Entry level package for small teams".to_string()),
//! }))?;
//! wizard.dispatch(Action::UpdatePackageDetails(PackageDetailsPatch {
//!     target_market: Some([Market::Sme].into_iter().collect()),
//!     price: Some(NumericInput::from("0")),
//!     duration_magnitude: Some(NumericInput::from("30")),
//!     benefits: Some("Free onboarding".to_string()),
//!     selling_points: Some("No commitment".to_string()),
//!     ..Default::default()
//! }))?;
//! wizard.next()?;
//!
//! let id = wizard.state().checkpoints[0].id.clone();
//! wizard.dispatch(Action::UpdateCheckpoint {
//!     id: id.clone(),
//!     field: CheckpointField::Category,
//!     value: "Rapport".to_string(),
//! })?;
//! for tier in CriteriaField::ALL {
//!     wizard.dispatch(Action::UpdateCriteria {
//!         id: id.clone(),
//!         field: tier,
//!         value: format!("{} rapport with the customer", tier.label()),
//!     })?;
//! }
//! wizard.next()?;
//! wizard.next()?;
//!
//! if let SaveOutcome::Created(plan) = console.save(&mut wizard).await? {
//!     println!("{plan}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod assistant;
pub mod config;
pub mod console;
pub mod display;
pub mod error;
pub mod ids;
pub mod models;
pub mod params;
pub mod prompt;
pub mod reducer;
pub mod store;
pub mod validation;
pub mod wizard;

pub use assistant::{Assistant, DisabledAssistant, GeminiAssistant, RefinementRequest};
pub use config::AssistantConfig;
pub use console::{Console, ConsoleBuilder, SaveOutcome};
pub use display::{CreateResult, OperationStatus, PlanSummaries, UpdateResult};
pub use error::{PlanwrightError, Result};
pub use models::{
    Checkpoint, EnabledFilter, Market, PackageDetails, PackagePlan, PlanDraft, PlanFilter,
    PlanStatus, PlanSummary,
};
pub use params::{Id, ListPlans};
pub use prompt::compile_scoring_prompt;
pub use store::{MemoryStore, PlanStore};
pub use validation::{validate_plan, ValidationErrors};
pub use wizard::{Wizard, WizardStep};
