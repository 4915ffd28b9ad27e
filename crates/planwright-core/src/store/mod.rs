//! Persistence collaborator for package plans.
//!
//! The console only ever talks to a [`PlanStore`]; it never assumes storage
//! is synchronous or local. Writes are whole-record: `update` replaces the
//! stored plan, and there is no partial update and no delete.

mod memory;

use async_trait::async_trait;

pub use memory::MemoryStore;

use crate::{error::Result, models::PackagePlan};

#[async_trait]
pub trait PlanStore: Send + Sync {
    /// Every stored plan, in insertion order.
    async fn list(&self) -> Result<Vec<PackagePlan>>;

    /// Fetch one plan by ID.
    async fn get(&self, id: &str) -> Result<PackagePlan>;

    /// Insert a new plan. Fails with `DuplicatePlan` if the ID is taken.
    async fn create(&self, plan: PackagePlan) -> Result<PackagePlan>;

    /// Replace the plan stored under `id`.
    ///
    /// The creation timestamp of the stored record is kept and the update
    /// timestamp is refreshed.
    async fn update(&self, id: &str, plan: PackagePlan) -> Result<PackagePlan>;

    /// Flip the enabled flag and return the new value.
    ///
    /// No other field changes.
    async fn toggle_enabled(&self, id: &str) -> Result<bool>;
}
