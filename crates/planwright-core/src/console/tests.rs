use std::sync::Arc;

use jiff::Timestamp;

use super::*;
use crate::{
    display::UpdateResult,
    error::PlanwrightError,
    ids::SequentialIds,
    models::{
        CheckpointField, CriteriaField, DurationUnit, EnabledFilter, Market, NumericInput,
        PackageDetails, PlanDuration,
    },
    params::{Id, ListPlans},
    reducer::{Action, DetailsPatch, PackageDetailsPatch},
    store::MemoryStore,
    wizard::{Transition, Wizard},
};

fn stored(id: &str, name: &str, enabled: bool) -> PackagePlan {
    PackagePlan {
        id: id.to_string(),
        name: name.to_string(),
        description: "Stored plan used by console tests".to_string(),
        status: PlanStatus::Published,
        enabled,
        package_details: PackageDetails {
            target_market: [Market::Enterprise].into_iter().collect(),
            price: NumericInput::from("250"),
            duration: PlanDuration::new(12, DurationUnit::Month),
            benefits: "Dedicated account manager".to_string(),
            selling_points: "White-glove onboarding".to_string(),
            ..Default::default()
        },
        checkpoints: Vec::new(),
        scoring_prompt: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn console_with(plans: Vec<PackagePlan>) -> Console {
    ConsoleBuilder::new()
        .with_seed_plans(plans)
        .with_plan_ids(Arc::new(SequentialIds::new("plan")))
        .with_checkpoint_ids(Arc::new(SequentialIds::new("cp")))
        .build()
        .unwrap()
}

fn fill(wizard: &mut Wizard, price: &str) {
    wizard
        .dispatch(Action::UpdateDetails(DetailsPatch {
            name: Some("Starter Trial".to_string()),
            description: Some("Thirty days of the AI job folder at no cost.".to_string()),
        }))
        .unwrap();
    wizard
        .dispatch(Action::UpdatePackageDetails(PackageDetailsPatch {
            target_market: Some([Market::Sme].into_iter().collect()),
            price: Some(NumericInput::from(price)),
            duration_magnitude: Some(NumericInput::from(30u32)),
            duration_unit: Some(DurationUnit::Day),
            benefits: Some("Automated candidate sorting\nSkill matching".to_string()),
            selling_points: Some("Save hours on every hire".to_string()),
            ..Default::default()
        }))
        .unwrap();
}

fn fill_checkpoints(wizard: &mut Wizard) {
    let ids: Vec<String> = wizard.state().checkpoints.iter().map(|cp| cp.id.clone()).collect();
    for id in ids {
        wizard
            .dispatch(Action::UpdateCheckpoint {
                id: id.clone(),
                field: CheckpointField::Category,
                value: "Product knowledge".to_string(),
            })
            .unwrap();
        for field in CriteriaField::ALL {
            wizard
                .dispatch(Action::UpdateCriteria {
                    id: id.clone(),
                    field,
                    value: format!("{} handling of product questions", field.label()),
                })
                .unwrap();
        }
    }
}

/// Drive a wizard to Review with valid data.
fn to_review(wizard: &mut Wizard, price: &str) {
    fill(wizard, price);
    assert!(matches!(wizard.next().unwrap(), Transition::Moved { .. }));
    fill_checkpoints(wizard);
    assert!(matches!(wizard.next().unwrap(), Transition::Moved { .. }));
    assert!(matches!(wizard.next().unwrap(), Transition::Moved { .. }));
}

#[tokio::test]
async fn test_list_applies_filter_and_search() {
    let console = console_with(vec![
        stored("a", "Free Trial", false),
        stored("b", "Gold Tier", true),
        stored("c", "Trial Extension", true),
    ]);

    let all = console.list_plans(&ListPlans::default()).await.unwrap();
    assert_eq!(all.len(), 3);

    let enabled_trials = console
        .list_plans(&ListPlans {
            status: EnabledFilter::Enabled,
            search: Some("TRIAL".to_string()),
        })
        .await
        .unwrap();
    let ids: Vec<&str> = enabled_trials.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["c"]);

    let disabled = console
        .list_plans(&ListPlans {
            status: EnabledFilter::Disabled,
            search: None,
        })
        .await
        .unwrap();
    assert_eq!(disabled[0].name, "Free Trial");
}

#[tokio::test]
async fn test_toggle_returns_updated_plan() {
    let console = console_with(vec![stored("a", "Free Trial", false)]);

    let toggled = console.toggle_plan(&Id::new("a")).await.unwrap();
    assert!(toggled.enabled);
    assert_eq!(toggled.status, PlanStatus::Published);
    assert_eq!(toggled.updated_at, Timestamp::UNIX_EPOCH);

    let err = console.toggle_plan(&Id::new("nope")).await.unwrap_err();
    assert!(matches!(err, PlanwrightError::PlanNotFound { .. }));
}

#[tokio::test]
async fn test_save_new_plan_uses_creation_defaults() {
    let console = console_with(Vec::new());
    let mut wizard = console.start_create();
    to_review(&mut wizard, "49.90");

    let SaveOutcome::Created(plan) = console.save(&mut wizard).await.unwrap() else {
        panic!("expected a created plan");
    };
    assert_eq!(plan.id, "plan-1");
    assert_eq!(plan.status, PlanStatus::Draft);
    assert!(!plan.enabled);
    assert_eq!(plan.package_details.price.as_text(), Some("49.9"));
    assert_eq!(plan.checkpoints.len(), 1);
    assert!(wizard.is_closed());

    let listed = console.list_plans(&ListPlans::default()).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_creation_defaults_are_configurable() {
    let console = ConsoleBuilder::new()
        .with_creation_defaults(PlanStatus::Published, true)
        .build()
        .unwrap();
    let mut wizard = console.start_create();
    to_review(&mut wizard, "0");

    let SaveOutcome::Created(plan) = console.save(&mut wizard).await.unwrap() else {
        panic!("expected a created plan");
    };
    assert_eq!(plan.status, PlanStatus::Published);
    assert!(plan.enabled);
    assert_eq!(plan.id.len(), 36, "uuid by default");
}

#[tokio::test]
async fn test_save_edit_replaces_in_place() {
    let console = console_with(vec![stored("a", "Gold Tier", true), stored("b", "Other", false)]);
    let mut wizard = console.start_edit(&Id::new("a")).await.unwrap();
    assert_eq!(wizard.state().name, "Gold Tier");

    wizard
        .dispatch(Action::UpdateDetails(DetailsPatch::name("Gold Tier Plus")))
        .unwrap();
    wizard.next().unwrap();
    fill_checkpoints(&mut wizard);
    wizard.next().unwrap();
    wizard.next().unwrap();

    let SaveOutcome::Updated { before, after: plan } = console.save(&mut wizard).await.unwrap()
    else {
        panic!("expected an updated plan");
    };
    assert_eq!(before.name, "Gold Tier");
    assert_eq!(plan.id, "a");
    assert_eq!(plan.name, "Gold Tier Plus");
    assert_eq!(plan.status, PlanStatus::Published);
    assert!(plan.enabled);
    assert_eq!(plan.created_at, Timestamp::UNIX_EPOCH);
    assert!(plan.updated_at > Timestamp::UNIX_EPOCH);

    let report = UpdateResult::between(&before, plan).to_string();
    assert!(report.contains("- Renamed to \"Gold Tier Plus\""));
    assert!(report.contains("- Checkpoints: 1"));
    assert!(!report.contains("- Disabled"));

    let listed = console.list_plans(&ListPlans::default()).await.unwrap();
    let names: Vec<&str> = listed.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Gold Tier Plus", "Other"]);
}

#[tokio::test]
async fn test_save_stores_canonical_numbers() {
    let console = console_with(Vec::new());
    let mut wizard = console.start_create();
    fill(&mut wizard, "49.90");
    wizard
        .dispatch(Action::UpdatePackageDetails(PackageDetailsPatch {
            duration_magnitude: Some(NumericInput::from("1.0")),
            duration_unit: Some(DurationUnit::Month),
            ..Default::default()
        }))
        .unwrap();
    wizard.next().unwrap();
    fill_checkpoints(&mut wizard);
    wizard.next().unwrap();
    wizard.next().unwrap();
    assert!(wizard.compiled_prompt().unwrap().contains("49.90 MYR for 1 month"));

    let SaveOutcome::Created(plan) = console.save(&mut wizard).await.unwrap() else {
        panic!("expected a created plan");
    };
    let details = &plan.package_details;
    assert_eq!(details.price.as_text(), Some("49.9"));
    assert_eq!(details.duration.magnitude.as_text(), Some("1"));
    assert_eq!(details.duration.to_string(), "1 month");
}

#[tokio::test]
async fn test_save_blocked_keeps_wizard_open() {
    let console = console_with(Vec::new());
    let mut wizard = console.start_create();
    fill(&mut wizard, "10");
    wizard.next().unwrap();
    fill_checkpoints(&mut wizard);
    wizard.next().unwrap();
    // Refinement has no gate; the broken price is only caught on save.
    wizard
        .dispatch(Action::UpdatePackageDetails(PackageDetailsPatch {
            price: Some(NumericInput::from("-1")),
            ..Default::default()
        }))
        .unwrap();
    wizard.next().unwrap();
    assert_eq!(wizard.step(), WizardStep::Review);

    let outcome = console.save(&mut wizard).await.unwrap();
    let SaveOutcome::Blocked { step, errors } = outcome else {
        panic!("expected save to be blocked");
    };
    assert_eq!(step, WizardStep::Details);
    assert!(errors.package_details.unwrap().price.is_some());
    assert!(!wizard.is_closed());
    assert!(console.list_plans(&ListPlans::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_start_edit_unknown_plan() {
    let console = console_with(Vec::new());
    let err = console.start_edit(&Id::new("ghost")).await.err().unwrap();
    assert!(matches!(err, PlanwrightError::PlanNotFound { .. }));
}

#[tokio::test]
async fn test_explicit_store_wins_over_seed() {
    let store = Arc::new(MemoryStore::with_plans([stored("x", "Explicit", true)]).unwrap());
    let console = ConsoleBuilder::new()
        .with_store(store)
        .with_seed_plans([stored("y", "Seeded", true)])
        .build()
        .unwrap();

    let plans = console.list_plans(&ListPlans::default()).await.unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].id, "x");
    assert_eq!(console.assistant().name(), "disabled");
}
