#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use planwright_core::{
    ids::SequentialIds,
    models::{CheckpointField, CriteriaField, DurationUnit, Market, NumericInput, Refinements},
    reducer::{Action, DetailsPatch, PackageDetailsPatch},
    Assistant, Console, ConsoleBuilder, PackagePlan, PlanStore, PlanwrightError,
    RefinementRequest, Result, Wizard,
};

/// Assistant double with canned answers and call counters.
#[derive(Default)]
pub struct CannedAssistant {
    pub refine_calls: AtomicUsize,
    pub prompt_calls: AtomicUsize,
}

impl CannedAssistant {
    pub fn refine_calls(&self) -> usize {
        self.refine_calls.load(Ordering::SeqCst)
    }

    pub fn prompt_calls(&self) -> usize {
        self.prompt_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Assistant for CannedAssistant {
    fn name(&self) -> &'static str {
        "canned"
    }

    async fn refine(&self, request: &RefinementRequest) -> Result<Refinements> {
        self.refine_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Refinements {
            description: Some(format!("{} Now with guided onboarding.", request.description)),
            benefits: Some("Faster shortlisting\nFewer missed candidates".to_string()),
            selling_points: Some("Pays for itself in one hire".to_string()),
        })
    }

    async fn generate_scoring_prompt(&self, compiled: &str) -> Result<String> {
        self.prompt_calls.fetch_add(1, Ordering::SeqCst);
        let first_line = compiled.lines().next().unwrap_or_default();
        Ok(format!("Evaluator instructions based on: {first_line}"))
    }
}

/// Store that rejects every write.
#[derive(Default)]
pub struct ReadOnlyStore;

#[async_trait]
impl PlanStore for ReadOnlyStore {
    async fn list(&self) -> Result<Vec<PackagePlan>> {
        Ok(Vec::new())
    }

    async fn get(&self, id: &str) -> Result<PackagePlan> {
        Err(PlanwrightError::PlanNotFound { id: id.to_string() })
    }

    async fn create(&self, _plan: PackagePlan) -> Result<PackagePlan> {
        Err(PlanwrightError::Configuration {
            message: "store is read-only".to_string(),
        })
    }

    async fn update(&self, _id: &str, _plan: PackagePlan) -> Result<PackagePlan> {
        Err(PlanwrightError::Configuration {
            message: "store is read-only".to_string(),
        })
    }

    async fn toggle_enabled(&self, id: &str) -> Result<bool> {
        Err(PlanwrightError::PlanNotFound { id: id.to_string() })
    }
}

/// Console with deterministic IDs and the canned assistant.
pub fn create_test_console() -> (Console, Arc<CannedAssistant>) {
    let assistant = Arc::new(CannedAssistant::default());
    let console = ConsoleBuilder::new()
        .with_assistant(assistant.clone())
        .with_plan_ids(Arc::new(SequentialIds::new("plan")))
        .with_checkpoint_ids(Arc::new(SequentialIds::new("cp")))
        .build()
        .expect("Failed to build console");
    (console, assistant)
}

/// Fill the Details step with a free 30-day SME trial.
pub fn fill_details(wizard: &mut Wizard) {
    wizard
        .dispatch(Action::UpdateDetails(DetailsPatch {
            name: Some("AI Job Folder Trial".to_string()),
            description: Some("Thirty days of automated candidate screening.".to_string()),
        }))
        .expect("Failed to update details");
    wizard
        .dispatch(Action::UpdatePackageDetails(PackageDetailsPatch {
            target_market: Some([Market::Sme].into_iter().collect()),
            price: Some(NumericInput::from("0")),
            duration_magnitude: Some(NumericInput::from("30")),
            duration_unit: Some(DurationUnit::Day),
            benefits: Some("Automated candidate sorting\nShared shortlists".to_string()),
            selling_points: Some("No credit card required".to_string()),
            ..Default::default()
        }))
        .expect("Failed to update package details");
}

/// Complete one checkpoint with valid category and criteria text.
pub fn fill_checkpoint(wizard: &mut Wizard, id: &str, category: &str) {
    wizard
        .dispatch(Action::UpdateCheckpoint {
            id: id.to_string(),
            field: CheckpointField::Category,
            value: category.to_string(),
        })
        .expect("Failed to update checkpoint");
    let text = [
        "Explains the trial terms fully and accurately",
        "Covers the trial terms with small omissions",
        "Leaves out the duration or the price entirely",
        "Misstates what the customer gets or pays for",
    ];
    for (field, value) in CriteriaField::ALL.into_iter().zip(text) {
        wizard
            .dispatch(Action::UpdateCriteria {
                id: id.to_string(),
                field,
                value: value.to_string(),
            })
            .expect("Failed to update criteria");
    }
}
