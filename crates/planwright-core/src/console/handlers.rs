//! Console handler operations.

use jiff::Timestamp;
use log::{debug, info};

use super::{Console, SaveOutcome};
use crate::{
    display::PlanSummaries,
    error::Result,
    models::{NumericInput, PackagePlan, PlanDraft, PlanFilter, PlanStatus, PlanSummary},
    params::{Id, ListPlans},
    wizard::{Finish, Wizard, WizardMode},
};

impl Console {
    /// Handle listing plans with the enabled filter and name search applied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use planwright_core::{models::EnabledFilter, params::ListPlans, ConsoleBuilder};
    /// # async fn example() -> planwright_core::Result<()> {
    /// let console = ConsoleBuilder::new().build()?;
    /// let params = ListPlans {
    ///     status: EnabledFilter::Enabled,
    ///     search: Some("trial".to_string()),
    /// };
    /// let summaries = console.list_plans(&params).await?;
    /// assert!(summaries.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_plans(&self, params: &ListPlans) -> Result<PlanSummaries> {
        debug!("list_plans: {params:?}");
        let filter = PlanFilter::from(params);
        let summaries: Vec<PlanSummary> = self
            .store
            .list()
            .await?
            .iter()
            .filter(|plan| filter.matches(plan))
            .map(Into::into)
            .collect();
        Ok(PlanSummaries(summaries))
    }

    /// Handle showing one plan in full.
    pub async fn show_plan(&self, params: &Id) -> Result<PackagePlan> {
        debug!("show_plan: {params:?}");
        self.store.get(&params.id).await
    }

    /// Flip a plan's enabled flag and return the plan as stored afterwards.
    pub async fn toggle_plan(&self, params: &Id) -> Result<PackagePlan> {
        debug!("toggle_plan: {params:?}");
        self.store.toggle_enabled(&params.id).await?;
        self.store.get(&params.id).await
    }

    /// Open a wizard for a new plan.
    pub fn start_create(&self) -> Wizard {
        Wizard::create(self.checkpoint_ids.clone(), self.wizard_options)
    }

    /// Open a wizard pre-filled from a stored plan.
    pub async fn start_edit(&self, params: &Id) -> Result<Wizard> {
        let plan = self.store.get(&params.id).await?;
        Ok(Wizard::edit(
            &plan,
            self.checkpoint_ids.clone(),
            self.wizard_options,
        ))
    }

    /// Revalidate the wizard and hand the assembled plan to the store.
    ///
    /// New plans get a fresh ID and the configured creation defaults; edited
    /// plans keep their ID, status, enabled flag and creation time. The
    /// wizard is closed only after the store accepts the plan, so a store
    /// failure leaves it open for another attempt.
    pub async fn save(&self, wizard: &mut Wizard) -> Result<SaveOutcome> {
        let draft = match wizard.finish()? {
            Finish::Ready(draft) => *draft,
            Finish::Blocked { step, errors } => {
                return Ok(SaveOutcome::Blocked { step, errors });
            }
        };

        let outcome = match wizard.mode().clone() {
            WizardMode::Create => {
                let plan = assemble(
                    self.plan_ids.next_id(),
                    draft,
                    self.creation_status,
                    self.creation_enabled,
                    Timestamp::now(),
                );
                SaveOutcome::Created(self.store.create(plan).await?)
            }
            WizardMode::Edit {
                id,
                status,
                enabled,
                created_at,
            } => {
                let before = self.store.get(&id).await?;
                let plan = assemble(id.clone(), draft, status, enabled, created_at);
                let after = self.store.update(&id, plan).await?;
                SaveOutcome::Updated { before, after }
            }
        };

        wizard.close();
        info!("Wizard saved and closed");
        Ok(outcome)
    }
}

/// Build the stored record from a validated draft.
///
/// The price and duration magnitude are stored in canonical numeric form.
fn assemble(
    id: String,
    draft: PlanDraft,
    status: PlanStatus,
    enabled: bool,
    created_at: Timestamp,
) -> PackagePlan {
    let mut package_details = draft.package_details;
    package_details.price = package_details.price.normalized();
    if let Some(magnitude) = package_details.duration.magnitude.as_whole() {
        package_details.duration.magnitude = NumericInput::from(magnitude);
    }

    PackagePlan {
        id,
        name: draft.name.trim().to_string(),
        description: draft.description,
        status,
        enabled,
        package_details,
        checkpoints: draft.checkpoints,
        scoring_prompt: draft.scoring_prompt,
        created_at,
        updated_at: Timestamp::now(),
    }
}
