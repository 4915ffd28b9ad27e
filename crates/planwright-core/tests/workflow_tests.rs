mod common;

use std::sync::Arc;

use common::{create_test_console, fill_checkpoint, fill_details, ReadOnlyStore};
use planwright_core::{
    models::EnabledFilter,
    reducer::{Action, DetailsPatch},
    wizard::{RefinedField, Transition, WizardMode},
    ConsoleBuilder, Id, ListPlans, PlanStatus, PlanwrightError, SaveOutcome, WizardStep,
};

#[tokio::test]
async fn test_create_plan_end_to_end() {
    let (console, assistant) = create_test_console();
    let mut wizard = console.start_create();
    assert_eq!(wizard.step(), WizardStep::Details);

    // Details gate
    fill_details(&mut wizard);
    let transition = wizard
        .advance(console.assistant())
        .await
        .expect("Failed to leave details");
    assert_eq!(
        transition,
        Transition::Moved {
            from: WizardStep::Details,
            to: WizardStep::Checkpoints,
        }
    );

    // The first checkpoint is seeded on entry
    assert_eq!(wizard.state().checkpoints.len(), 1);
    let cp_id = wizard.state().checkpoints[0].id.clone();
    assert_eq!(cp_id, "cp-1");
    fill_checkpoint(&mut wizard, &cp_id, "Trial Terms Accuracy");

    // Entering refinement triggers exactly one assistant call
    wizard
        .advance(console.assistant())
        .await
        .expect("Failed to leave checkpoints");
    assert_eq!(wizard.step(), WizardStep::Refinement);
    assert_eq!(assistant.refine_calls(), 1);
    assert!(wizard.banner().is_none());

    let refined = wizard.state().package_details.refined.clone();
    assert!(refined.description.is_some());
    assert!(wizard
        .apply_refinement(RefinedField::SellingPoints)
        .expect("Failed to apply suggestion"));
    assert_eq!(
        wizard.state().package_details.selling_points,
        "Pays for itself in one hire"
    );
    // The suggestion itself stays available
    assert_eq!(wizard.state().package_details.refined, refined);

    wizard
        .advance(console.assistant())
        .await
        .expect("Failed to leave refinement");
    assert_eq!(wizard.step(), WizardStep::Review);
    assert_eq!(assistant.refine_calls(), 1);

    let compiled = wizard.compiled_prompt().expect("Failed to compile prompt");
    assert!(compiled.contains("0 MYR for 30 days"));
    assert!(compiled.contains("**Checkpoint: \"Trial Terms Accuracy\"**"));

    wizard
        .generate_scoring_prompt(console.assistant())
        .await
        .expect("Failed to generate prompt");
    assert_eq!(assistant.prompt_calls(), 1);

    let outcome = console.save(&mut wizard).await.expect("Failed to save");
    let SaveOutcome::Created(plan) = outcome else {
        panic!("expected a created plan");
    };
    assert!(wizard.is_closed());

    assert_eq!(plan.id, "plan-1");
    assert_eq!(plan.status, PlanStatus::Draft);
    assert!(!plan.enabled);
    assert_eq!(plan.checkpoints.len(), 1);
    assert!(plan
        .scoring_prompt
        .as_deref()
        .is_some_and(|p| p.starts_with("Evaluator instructions based on:")));

    let plans = console
        .list_plans(&ListPlans::default())
        .await
        .expect("Failed to list plans");
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].id, "plan-1");
}

#[tokio::test]
async fn test_edit_keeps_identity_and_flags() {
    let (console, _assistant) = create_test_console();

    let mut wizard = console.start_create();
    fill_details(&mut wizard);
    wizard.next().expect("Failed to leave details");
    fill_checkpoint(&mut wizard, "cp-1", "Trial Terms Accuracy");
    wizard.next().expect("Failed to leave checkpoints");
    wizard.next().expect("Failed to leave refinement");
    let SaveOutcome::Created(created) = console.save(&mut wizard).await.expect("Failed to save")
    else {
        panic!("expected a created plan");
    };

    let toggled = console
        .toggle_plan(&Id::new(&created.id))
        .await
        .expect("Failed to toggle");
    assert!(toggled.enabled);

    let mut editor = console
        .start_edit(&Id::new(&created.id))
        .await
        .expect("Failed to start edit");
    assert!(editor.mode().is_edit());
    assert!(matches!(editor.mode(), WizardMode::Edit { id, .. } if *id == created.id));
    assert_eq!(editor.state().name, "AI Job Folder Trial");

    editor
        .dispatch(Action::UpdateDetails(DetailsPatch::name("AI Job Folder Pro")))
        .expect("Failed to rename");
    editor.next().expect("Failed to leave details");
    // Existing rubric is kept; nothing is seeded on top
    assert_eq!(editor.state().checkpoints.len(), 1);
    editor.next().expect("Failed to leave checkpoints");
    editor.next().expect("Failed to leave refinement");

    let SaveOutcome::Updated {
        before,
        after: updated,
    } = console.save(&mut editor).await.expect("Failed to save")
    else {
        panic!("expected an updated plan");
    };
    assert_eq!(before.name, "AI Job Folder Trial");
    assert!(before.enabled);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "AI Job Folder Pro");
    assert!(updated.enabled);
    assert_eq!(updated.created_at, created.created_at);

    let enabled_only = console
        .list_plans(&ListPlans {
            status: EnabledFilter::Enabled,
            search: Some("pro".to_string()),
        })
        .await
        .expect("Failed to list plans");
    assert_eq!(enabled_only.len(), 1);
}

#[tokio::test]
async fn test_save_revalidates_and_jumps_back() {
    let (console, _assistant) = create_test_console();
    let mut wizard = console.start_create();
    fill_details(&mut wizard);
    wizard.next().expect("Failed to leave details");
    fill_checkpoint(&mut wizard, "cp-1", "Trial Terms Accuracy");
    wizard.next().expect("Failed to leave checkpoints");

    // Break the name after the gates have already passed
    wizard
        .dispatch(Action::UpdateDetails(DetailsPatch::name("AB")))
        .expect("Failed to rename");
    wizard.next().expect("Failed to leave refinement");
    assert!(wizard.compiled_prompt().is_err());

    let outcome = console.save(&mut wizard).await.expect("Failed to save");
    let SaveOutcome::Blocked { step, errors } = outcome else {
        panic!("expected save to be blocked");
    };
    assert_eq!(step, WizardStep::Details);
    assert!(errors.name.is_some());
    assert!(!wizard.is_closed());
    assert_eq!(wizard.step(), WizardStep::Details);

    let plans = console
        .list_plans(&ListPlans::default())
        .await
        .expect("Failed to list plans");
    assert!(plans.is_empty());
}

#[tokio::test]
async fn test_store_failure_leaves_wizard_open() {
    let console = ConsoleBuilder::new()
        .with_store(Arc::new(ReadOnlyStore))
        .build()
        .expect("Failed to build console");

    let mut wizard = console.start_create();
    fill_details(&mut wizard);
    wizard.next().expect("Failed to leave details");
    let cp_id = wizard.state().checkpoints[0].id.clone();
    fill_checkpoint(&mut wizard, &cp_id, "Trial Terms Accuracy");
    wizard.next().expect("Failed to leave checkpoints");
    wizard.next().expect("Failed to leave refinement");

    let err = console
        .save(&mut wizard)
        .await
        .expect_err("save should fail");
    assert!(matches!(err, PlanwrightError::Configuration { .. }));
    assert!(!wizard.is_closed());
    assert_eq!(wizard.step(), WizardStep::Review);
}

#[tokio::test]
async fn test_disabled_assistant_surfaces_banner() {
    let console = ConsoleBuilder::new().build().expect("Failed to build console");
    let mut wizard = console.start_create();
    fill_details(&mut wizard);
    wizard
        .advance(console.assistant())
        .await
        .expect("Failed to leave details");
    let cp_id = wizard.state().checkpoints[0].id.clone();
    fill_checkpoint(&mut wizard, &cp_id, "Trial Terms Accuracy");
    wizard
        .advance(console.assistant())
        .await
        .expect("Failed to leave checkpoints");

    assert_eq!(wizard.step(), WizardStep::Refinement);
    assert!(!wizard.is_refining());
    let banner = wizard.banner().expect("banner should be set");
    assert!(banner.starts_with("AI refinement failed:"));
    assert!(banner.ends_with("Retrying will not help until this is fixed."));

    // Refinement failures never block progress
    wizard
        .advance(console.assistant())
        .await
        .expect("Failed to leave refinement");
    assert_eq!(wizard.step(), WizardStep::Review);

    let outcome = console.save(&mut wizard).await.expect("Failed to save");
    assert!(matches!(outcome, SaveOutcome::Created(_)));
}
