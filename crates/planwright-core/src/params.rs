//! Parameter structures for console operations
//!
//! These structures are shared by every interface (one-shot CLI commands and
//! the interactive console session) without framework-specific derives.
//! Interface layers wrap them with their own argument types and convert via
//! `From`, keeping clap concerns out of the core:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │  (clap derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::models::EnabledFilter;

/// Generic parameters for operations requiring just a plan ID.
///
/// Used for show, edit and toggle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: String,
}

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Parameters for listing plans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPlans {
    /// Which plans to show by enabled flag
    #[serde(default)]
    pub status: EnabledFilter,
    /// Case-insensitive substring to match against plan names
    #[serde(default)]
    pub search: Option<String>,
}
