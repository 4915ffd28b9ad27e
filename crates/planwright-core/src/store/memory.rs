//! Process-local plan store.

use async_trait::async_trait;
use jiff::Timestamp;
use log::{debug, info};
use tokio::sync::RwLock;

use super::PlanStore;
use crate::{
    error::{PlanwrightError, Result},
    models::{duplicate_ids, PackagePlan},
};

/// In-memory [`PlanStore`]. Contents live as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    plans: RwLock<Vec<PackagePlan>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given plans. Later duplicates of an ID are dropped.
    ///
    /// # Errors
    ///
    /// Returns `PlanwrightError::InvalidInput` if a plan repeats a
    /// checkpoint ID.
    pub fn with_plans(plans: impl IntoIterator<Item = PackagePlan>) -> Result<Self> {
        let mut seeded: Vec<PackagePlan> = Vec::new();
        for plan in plans {
            if seeded.iter().any(|p| p.id == plan.id) {
                debug!("Skipping duplicate seed plan {}", plan.id);
                continue;
            }
            check_checkpoint_ids(&plan)?;
            seeded.push(plan);
        }
        Ok(Self {
            plans: RwLock::new(seeded),
        })
    }

    fn not_found(id: &str) -> PlanwrightError {
        PlanwrightError::PlanNotFound { id: id.to_string() }
    }
}

fn check_checkpoint_ids(plan: &PackagePlan) -> Result<()> {
    let duplicates = duplicate_ids(&plan.checkpoints);
    if duplicates.is_empty() {
        return Ok(());
    }
    Err(PlanwrightError::invalid_input("checkpoints").with_reason(format!(
        "plan {} repeats checkpoint ID(s) {}",
        plan.id,
        duplicates.join(", ")
    )))
}

#[async_trait]
impl PlanStore for MemoryStore {
    async fn list(&self) -> Result<Vec<PackagePlan>> {
        Ok(self.plans.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<PackagePlan> {
        self.plans
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create(&self, plan: PackagePlan) -> Result<PackagePlan> {
        check_checkpoint_ids(&plan)?;
        let mut plans = self.plans.write().await;
        if plans.iter().any(|p| p.id == plan.id) {
            return Err(PlanwrightError::DuplicatePlan { id: plan.id });
        }
        info!("Created plan {} ({})", plan.id, plan.name);
        plans.push(plan.clone());
        Ok(plan)
    }

    async fn update(&self, id: &str, mut plan: PackagePlan) -> Result<PackagePlan> {
        if plan.id != id {
            return Err(PlanwrightError::invalid_input("id")
                .with_reason(format!("plan ID {} does not match {id}", plan.id)));
        }
        check_checkpoint_ids(&plan)?;

        let mut plans = self.plans.write().await;
        let slot = plans
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        plan.created_at = slot.created_at;
        plan.updated_at = Timestamp::now();
        *slot = plan.clone();
        info!("Updated plan {id}");
        Ok(plan)
    }

    async fn toggle_enabled(&self, id: &str) -> Result<bool> {
        let mut plans = self.plans.write().await;
        let plan = plans
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Self::not_found(id))?;

        plan.enabled = !plan.enabled;
        info!("Plan {id} enabled={}", plan.enabled);
        Ok(plan.enabled)
    }
}
