//! High-level console API for managing package plans.
//!
//! [`Console`] is the coordinator between an interface (the CLI, a session
//! loop) and the collaborators: the [`PlanStore`], the [`Assistant`] and the
//! ID generators. It owns no plan data itself.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │     Wizard      │    │   Collaborators │
//! │ (list, show,    │───▶│ (reducer, gates,│───▶│ (PlanStore,     │
//! │  toggle, save)  │    │  compiler)      │    │  Assistant)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for [`Console`] instances
//! - [`handlers`]: List, show, toggle, wizard start and save operations
//!
//! # Examples
//!
//! ```rust
//! use planwright_core::{params::ListPlans, ConsoleBuilder};
//!
//! # async fn example() -> planwright_core::Result<()> {
//! let console = ConsoleBuilder::new().build()?;
//!
//! let wizard = console.start_create();
//! assert_eq!(wizard.state().checkpoints.len(), 0);
//!
//! let plans = console.list_plans(&ListPlans::default()).await?;
//! assert!(plans.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod handlers;

#[cfg(test)]
mod tests;

use std::sync::Arc;

pub use builder::ConsoleBuilder;

use crate::{
    assistant::Assistant,
    ids::IdGenerator,
    models::{PackagePlan, PlanStatus},
    store::PlanStore,
    validation::ValidationErrors,
    wizard::{WizardOptions, WizardStep},
};

/// Entry point for plan management.
pub struct Console {
    store: Arc<dyn PlanStore>,
    assistant: Arc<dyn Assistant>,
    plan_ids: Arc<dyn IdGenerator>,
    checkpoint_ids: Arc<dyn IdGenerator>,
    wizard_options: WizardOptions,
    creation_status: PlanStatus,
    creation_enabled: bool,
}

impl Console {
    /// The assistant wizards of this console should talk to.
    pub fn assistant(&self) -> &dyn Assistant {
        self.assistant.as_ref()
    }

    pub fn store(&self) -> &dyn PlanStore {
        self.store.as_ref()
    }
}

/// Outcome of [`Console::save`].
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    Created(PackagePlan),
    /// The stored version before the save, and the one that replaced it.
    Updated {
        before: PackagePlan,
        after: PackagePlan,
    },
    /// Revalidation failed; the wizard stays open on `step`.
    Blocked {
        step: WizardStep,
        errors: ValidationErrors,
    },
}
