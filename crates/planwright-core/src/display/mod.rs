//! Display formatting for plans, drafts and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and for the outcome of
//! an operation, so the same plan can render as a list entry, a creation
//! confirmation or a full page.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Wrappers and   │    │    Markdown     │
//! │ (PackagePlan,   │───▶│  Result Types   │───▶│     Output      │
//! │  PlanDraft)     │    │                 │    │   (terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: [`PlanSummaries`]
//! - [`results`]: [`CreateResult`], [`UpdateResult`]
//! - [`status`]: [`OperationStatus`]
//! - [`datetime`]: [`LocalDateTime`]
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage
//!
//! ```rust
//! use planwright_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Plan plan-1 is now enabled");
//! assert!(status.to_string().starts_with("Success:"));
//! ```
//!
//! All output is markdown so the CLI can pass it through its terminal
//! renderer unchanged.

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::PlanSummaries;
pub use datetime::LocalDateTime;
pub use models::NumberedCheckpoint;
pub use results::{CreateResult, UpdateResult};
pub use status::OperationStatus;
