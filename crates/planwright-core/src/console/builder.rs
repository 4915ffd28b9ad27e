//! Builder for creating and configuring Console instances.

use std::sync::Arc;

use super::Console;
use crate::{
    assistant::{self, Assistant, DisabledAssistant},
    config::AssistantConfig,
    error::Result,
    ids::{IdGenerator, UuidGenerator},
    models::{PackagePlan, PlanStatus},
    store::{MemoryStore, PlanStore},
    wizard::WizardOptions,
};

/// Builder for [`Console`].
///
/// Every collaborator has a working default: an empty in-memory store, the
/// disabled assistant and UUID identifiers.
pub struct ConsoleBuilder {
    store: Option<Arc<dyn PlanStore>>,
    seed_plans: Vec<PackagePlan>,
    assistant: Option<Arc<dyn Assistant>>,
    assistant_config: Option<AssistantConfig>,
    plan_ids: Option<Arc<dyn IdGenerator>>,
    checkpoint_ids: Option<Arc<dyn IdGenerator>>,
    wizard_options: WizardOptions,
    creation_status: PlanStatus,
    creation_enabled: bool,
}

impl ConsoleBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            seed_plans: Vec::new(),
            assistant: None,
            assistant_config: None,
            plan_ids: None,
            checkpoint_ids: None,
            wizard_options: WizardOptions::default(),
            creation_status: PlanStatus::Draft,
            creation_enabled: false,
        }
    }

    /// Use an existing store. Seed plans are ignored when a store is given.
    pub fn with_store(mut self, store: Arc<dyn PlanStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Preload the default in-memory store.
    pub fn with_seed_plans(mut self, plans: impl IntoIterator<Item = PackagePlan>) -> Self {
        self.seed_plans.extend(plans);
        self
    }

    pub fn with_assistant(mut self, assistant: Arc<dyn Assistant>) -> Self {
        self.assistant = Some(assistant);
        self
    }

    /// Pick the assistant from configuration when none is set explicitly.
    pub fn with_assistant_config(mut self, config: AssistantConfig) -> Self {
        self.assistant_config = Some(config);
        self
    }

    pub fn with_plan_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.plan_ids = Some(ids);
        self
    }

    pub fn with_checkpoint_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.checkpoint_ids = Some(ids);
        self
    }

    pub fn with_wizard_options(mut self, options: WizardOptions) -> Self {
        self.wizard_options = options;
        self
    }

    /// Status and enabled flag given to newly created plans.
    pub fn with_creation_defaults(mut self, status: PlanStatus, enabled: bool) -> Self {
        self.creation_status = status;
        self.creation_enabled = enabled;
        self
    }

    /// Builds the configured console.
    ///
    /// # Errors
    ///
    /// Returns `PlanwrightError::Configuration` or `PlanwrightError::Http`
    /// if an assistant configuration with an API key cannot produce a client,
    /// and `PlanwrightError::InvalidInput` if a seed plan repeats a
    /// checkpoint ID.
    pub fn build(self) -> Result<Console> {
        let store = match self.store {
            Some(store) => store,
            None => Arc::new(MemoryStore::with_plans(self.seed_plans)?),
        };

        let assistant: Arc<dyn Assistant> = match (self.assistant, self.assistant_config) {
            (Some(assistant), _) => assistant,
            (None, Some(config)) => Arc::from(assistant::from_config(&config)?),
            (None, None) => Arc::new(DisabledAssistant::default()),
        };

        Ok(Console {
            store,
            assistant,
            plan_ids: self.plan_ids.unwrap_or_else(|| Arc::new(UuidGenerator)),
            checkpoint_ids: self.checkpoint_ids.unwrap_or_else(|| Arc::new(UuidGenerator)),
            wizard_options: self.wizard_options,
            creation_status: self.creation_status,
            creation_enabled: self.creation_enabled,
        })
    }
}

impl Default for ConsoleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
