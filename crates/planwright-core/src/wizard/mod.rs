//! Guided create/edit flow for a package plan.
//!
//! A [`Wizard`] owns one [`PlanDraft`] and walks it through
//! Details → Checkpoints → AI Refinement → Review. Forward moves are gated by
//! the validation engine; going back is always allowed and never loses
//! data. Review is read-only, and its prompt compilation refuses any draft
//! that fails validation.
//!
//! The two network-bound operations (refinement and scoring-prompt
//! generation) use a split protocol: `begin_*` hands out the request and
//! marks it in flight, `complete_*` applies the outcome. While a request is
//! in flight a second `begin_*` yields nothing. Failures become a
//! dismissible banner and never change plan data. Outcomes delivered after
//! the wizard is closed are discarded. The async helpers ([`Wizard::advance`],
//! [`Wizard::refine`], [`Wizard::generate_scoring_prompt`]) run both halves
//! against an [`Assistant`].

mod step;


use std::sync::Arc;

use log::{debug, info, warn};

pub use step::{Finish, RefinedField, Transition, WizardMode, WizardOptions, WizardStep};

use crate::{
    assistant::{Assistant, RefinementRequest},
    error::{PlanwrightError, Result},
    ids::IdGenerator,
    models::{PackagePlan, PlanDraft, Refinements},
    prompt::compile_scoring_prompt,
    reducer::{reduce, Action, DetailsPatch, PackageDetailsPatch},
    validation::{validate_checkpoints, validate_details, validate_plan, ValidationErrors},
};

/// State machine for one create or edit session.
pub struct Wizard {
    mode: WizardMode,
    options: WizardOptions,
    ids: Arc<dyn IdGenerator>,
    state: PlanDraft,
    step: WizardStep,
    errors: ValidationErrors,
    banner: Option<String>,
    entered_checkpoints: bool,
    entered_refinement: bool,
    refinement_due: bool,
    refining: bool,
    generating: bool,
    closed: bool,
}

impl Wizard {
    /// Start a wizard for a brand-new plan.
    pub fn create(ids: Arc<dyn IdGenerator>, options: WizardOptions) -> Self {
        Self::open(WizardMode::Create, PlanDraft::default(), ids, options)
    }

    /// Start a wizard pre-filled from a stored plan.
    pub fn edit(plan: &PackagePlan, ids: Arc<dyn IdGenerator>, options: WizardOptions) -> Self {
        let mode = WizardMode::Edit {
            id: plan.id.clone(),
            status: plan.status,
            enabled: plan.enabled,
            created_at: plan.created_at,
        };
        Self::open(mode, PlanDraft::from(plan), ids, options)
    }

    fn open(
        mode: WizardMode,
        state: PlanDraft,
        ids: Arc<dyn IdGenerator>,
        options: WizardOptions,
    ) -> Self {
        debug!("Opening wizard in {mode:?}");
        Self {
            mode,
            options,
            ids,
            state,
            step: WizardStep::Details,
            errors: ValidationErrors::default(),
            banner: None,
            entered_checkpoints: false,
            entered_refinement: false,
            refinement_due: false,
            refining: false,
            generating: false,
            closed: false,
        }
    }

    pub fn mode(&self) -> &WizardMode {
        &self.mode
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn state(&self) -> &PlanDraft {
        &self.state
    }

    /// Errors from the most recent failed gate.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Message of the last assistant failure, until dismissed.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn is_refining(&self) -> bool {
        self.refining
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            Err(PlanwrightError::wizard_state("the wizard is closed"))
        } else {
            Ok(())
        }
    }

    fn ensure_step(&self, expected: WizardStep, what: &str) -> Result<()> {
        self.ensure_open()?;
        if self.step == expected {
            Ok(())
        } else {
            Err(PlanwrightError::wizard_state(format!(
                "{what} is only available on the {} step",
                expected.title()
            )))
        }
    }

    fn apply(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action, self.ids.as_ref());
    }

    /// Run an edit through the reducer.
    ///
    /// Review is read-only; go back to change anything.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        self.ensure_open()?;
        if self.step == WizardStep::Review {
            return Err(PlanwrightError::wizard_state(
                "the Review step is read-only, go back to edit",
            ));
        }
        self.apply(action);
        Ok(())
    }

    /// Move forward one step, enforcing the gate of the current step.
    pub fn next(&mut self) -> Result<Transition> {
        self.ensure_open()?;
        let from = self.step;
        let Some(to) = from.next() else {
            return Ok(Transition::AtEnd);
        };

        let errors = match from {
            WizardStep::Details => validate_details(&self.state),
            WizardStep::Checkpoints => validate_checkpoints(&self.state),
            WizardStep::Refinement | WizardStep::Review => ValidationErrors::default(),
        };
        if !errors.is_empty() {
            debug!("Blocked leaving {}", from.title());
            self.errors = errors.clone();
            return Ok(Transition::Blocked { step: from, errors });
        }

        self.errors = ValidationErrors::default();
        self.enter(to);
        info!("Wizard moved {} -> {}", from.title(), to.title());
        Ok(Transition::Moved { from, to })
    }

    fn enter(&mut self, to: WizardStep) {
        self.step = to;
        match to {
            WizardStep::Checkpoints if !self.entered_checkpoints => {
                self.entered_checkpoints = true;
                if self.options.seed_first_checkpoint && self.state.checkpoints.is_empty() {
                    self.apply(Action::AddCheckpoint);
                }
            }
            WizardStep::Refinement if !self.entered_refinement => {
                self.entered_refinement = true;
                self.refinement_due = true;
            }
            _ => {}
        }
    }

    /// Move back one step. No validation runs.
    pub fn back(&mut self) -> Result<Transition> {
        self.ensure_open()?;
        let from = self.step;
        match from.prev() {
            Some(to) => {
                self.step = to;
                debug!("Wizard moved back {} -> {}", from.title(), to.title());
                Ok(Transition::Moved { from, to })
            }
            None => Ok(Transition::AtStart),
        }
    }

    /// Claim the pending refinement request, if one is due.
    ///
    /// A request becomes due on first entry into the Refinement step and on
    /// [`Wizard::refine_again`].
    pub fn begin_refinement(&mut self) -> Option<RefinementRequest> {
        if self.closed || self.refining || !self.refinement_due {
            return None;
        }
        if self.step != WizardStep::Refinement {
            return None;
        }
        self.refinement_due = false;
        self.refining = true;
        info!("Refinement requested");
        Some(RefinementRequest::from(&self.state))
    }

    /// Explicitly request a fresh refinement.
    pub fn refine_again(&mut self) -> Result<Option<RefinementRequest>> {
        self.ensure_step(WizardStep::Refinement, "Refinement")?;
        if !self.refining {
            self.refinement_due = true;
        }
        Ok(self.begin_refinement())
    }

    /// Apply the outcome of a refinement request.
    pub fn complete_refinement(&mut self, result: Result<Refinements>) {
        if self.closed {
            debug!("Discarding refinement result for closed wizard");
            return;
        }
        self.refining = false;
        match result {
            Ok(refinements) => {
                info!("Refinement completed");
                self.banner = None;
                self.apply(Action::UpdateRefinements(refinements));
            }
            Err(e) => {
                warn!("Refinement failed: {e}");
                self.banner = Some(failure_banner("AI refinement failed", &e));
            }
        }
    }

    /// Copy a refinement suggestion over the original copy.
    ///
    /// Returns `false` when there is no suggestion for `field`.
    pub fn apply_refinement(&mut self, field: RefinedField) -> Result<bool> {
        self.ensure_step(WizardStep::Refinement, "Applying a suggestion")?;
        let refined = &self.state.package_details.refined;
        let action = match field {
            RefinedField::Description => refined
                .description
                .clone()
                .map(|text| Action::UpdateDetails(DetailsPatch::description(text))),
            RefinedField::Benefits => refined.benefits.clone().map(|text| {
                Action::UpdatePackageDetails(PackageDetailsPatch {
                    benefits: Some(text),
                    ..Default::default()
                })
            }),
            RefinedField::SellingPoints => refined.selling_points.clone().map(|text| {
                Action::UpdatePackageDetails(PackageDetailsPatch {
                    selling_points: Some(text),
                    ..Default::default()
                })
            }),
        };

        match action {
            Some(action) => {
                self.apply(action);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Clear the assistant error banner.
    pub fn dismiss_error(&mut self) {
        self.banner = None;
    }

    /// Local preview of the compiled scoring instructions.
    ///
    /// Refuses a draft that fails validation, so no incomplete plan ever
    /// reaches the compiler or the assistant.
    pub fn compiled_prompt(&self) -> Result<String> {
        self.ensure_step(WizardStep::Review, "Prompt compilation")?;
        let errors = validate_plan(&self.state);
        if !errors.is_empty() {
            return Err(PlanwrightError::wizard_state(format!(
                "cannot compile an invalid plan:\n{errors}"
            )));
        }
        Ok(compile_scoring_prompt(&self.state))
    }

    /// Claim a prompt-generation request.
    ///
    /// Returns the compiled instructions to send, or `None` while a request
    /// is already in flight.
    pub fn begin_prompt_generation(&mut self) -> Result<Option<String>> {
        let compiled = self.compiled_prompt()?;
        if self.generating {
            return Ok(None);
        }
        self.generating = true;
        info!("Scoring prompt generation requested");
        Ok(Some(compiled))
    }

    /// Apply the outcome of a prompt-generation request.
    pub fn complete_prompt_generation(&mut self, result: Result<String>) {
        if self.closed {
            debug!("Discarding generated prompt for closed wizard");
            return;
        }
        self.generating = false;
        match result {
            Ok(prompt) => {
                info!("Scoring prompt generated ({} chars)", prompt.len());
                self.banner = None;
                self.apply(Action::UpdateScoringPrompt(prompt));
            }
            Err(e) => {
                warn!("Scoring prompt generation failed: {e}");
                self.banner = Some(failure_banner("Scoring prompt generation failed", &e));
            }
        }
    }

    /// Revalidate everything before saving.
    ///
    /// On failure the wizard jumps to the first step whose gate fails and
    /// shows all errors.
    pub fn finish(&mut self) -> Result<Finish> {
        self.ensure_step(WizardStep::Review, "Saving")?;

        let details = validate_details(&self.state);
        let checkpoints = validate_checkpoints(&self.state);
        let step = if !details.is_empty() {
            Some(WizardStep::Details)
        } else if !checkpoints.is_empty() {
            Some(WizardStep::Checkpoints)
        } else {
            None
        };

        match step {
            Some(step) => {
                let mut errors = details;
                errors.merge(checkpoints);
                warn!("Save blocked, returning to {}", step.title());
                self.step = step;
                self.errors = errors.clone();
                Ok(Finish::Blocked { step, errors })
            }
            None => Ok(Finish::Ready(Box::new(self.state.clone()))),
        }
    }

    /// Close the wizard. Late async results are dropped from now on.
    pub fn close(&mut self) {
        if !self.closed {
            debug!("Closing wizard");
        }
        self.closed = true;
        self.refining = false;
        self.generating = false;
    }

    /// [`Wizard::next`], then run any refinement the move made due.
    pub async fn advance(&mut self, assistant: &dyn Assistant) -> Result<Transition> {
        let transition = self.next()?;
        if let Some(request) = self.begin_refinement() {
            let result = assistant.refine(&request).await;
            self.complete_refinement(result);
        }
        Ok(transition)
    }

    /// Explicit refinement round trip. Assistant failures land in the banner.
    pub async fn refine(&mut self, assistant: &dyn Assistant) -> Result<()> {
        if let Some(request) = self.refine_again()? {
            let result = assistant.refine(&request).await;
            self.complete_refinement(result);
        }
        Ok(())
    }

    /// Prompt-generation round trip. Assistant failures land in the banner.
    pub async fn generate_scoring_prompt(&mut self, assistant: &dyn Assistant) -> Result<()> {
        if let Some(compiled) = self.begin_prompt_generation()? {
            let result = assistant.generate_scoring_prompt(&compiled).await;
            self.complete_prompt_generation(result);
        }
        Ok(())
    }
}

/// Banner text for a failed assistant call.
fn failure_banner(what: &str, e: &PlanwrightError) -> String {
    if e.is_retryable() {
        format!("{what}: {e}")
    } else {
        format!("{what}: {e}. Retrying will not help until this is fixed.")
    }
}
