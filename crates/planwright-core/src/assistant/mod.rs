//! AI collaborators used by the wizard.
//!
//! The wizard talks to a single [`Assistant`] for both network-bound
//! operations: rewriting marketing copy (refinement) and turning the
//! compiled scoring instructions into the final scoring prompt. Both are
//! fallible and recoverable; the wizard records failures as a banner and
//! never changes plan data on error.

mod gemini;
mod json;

use std::collections::BTreeSet;

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

pub use gemini::GeminiAssistant;
pub use json::{extract_json_object, parse_refinements};

use crate::{
    config::AssistantConfig,
    error::{PlanwrightError, Result},
    models::{Market, PlanDraft, Refinements},
};

/// Text-generation collaborator.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Rewrite the plan's marketing copy.
    async fn refine(&self, request: &RefinementRequest) -> Result<Refinements>;

    /// Produce the final scoring prompt from the compiled instructions.
    ///
    /// The returned text is stored verbatim.
    async fn generate_scoring_prompt(&self, compiled: &str) -> Result<String>;
}

/// The copy sent for refinement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinementRequest {
    pub name: String,
    pub description: String,
    pub target_market: BTreeSet<Market>,
    pub benefits: String,
    pub selling_points: String,
}

impl From<&PlanDraft> for RefinementRequest {
    fn from(draft: &PlanDraft) -> Self {
        let details = &draft.package_details;
        Self {
            name: draft.name.clone(),
            description: draft.description.clone(),
            target_market: details.target_market.clone(),
            benefits: details.benefits.clone(),
            selling_points: details.selling_points.clone(),
        }
    }
}

/// Structured-output shape expected back from a refinement call.
///
/// List-shaped fields are newline-delimited text. Providers that answer with
/// a JSON array instead are accepted and joined with `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RefinementResponse {
    /// The improved package description
    pub refined_description: String,
    /// The improved benefits, one per line
    #[serde(deserialize_with = "lines_or_list")]
    #[schemars(with = "String")]
    pub refined_benefits: String,
    /// The improved key selling points, one per line
    #[serde(deserialize_with = "lines_or_list")]
    #[schemars(with = "String")]
    pub refined_selling_points: String,
}

impl RefinementResponse {
    /// JSON schema sent as the provider's structured-output contract.
    pub fn json_schema() -> serde_json::Value {
        serde_json::to_value(schemars::schema_for!(RefinementResponse)).unwrap_or_default()
    }
}

impl From<RefinementResponse> for Refinements {
    fn from(response: RefinementResponse) -> Self {
        let keep = |text: String| {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };
        Refinements {
            description: keep(response.refined_description),
            benefits: keep(response.refined_benefits),
            selling_points: keep(response.refined_selling_points),
        }
    }
}

fn lines_or_list<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum LinesOrList {
        Lines(String),
        List(Vec<String>),
    }

    Ok(match LinesOrList::deserialize(deserializer)? {
        LinesOrList::Lines(text) => text,
        LinesOrList::List(items) => items.join("\n"),
    })
}

/// Assistant used when no provider is configured.
///
/// Every call fails with [`PlanwrightError::AssistantUnavailable`], which the
/// wizard shows as an ordinary error banner.
#[derive(Debug, Clone)]
pub struct DisabledAssistant {
    reason: String,
}

impl DisabledAssistant {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn unavailable(&self) -> PlanwrightError {
        PlanwrightError::AssistantUnavailable {
            reason: self.reason.clone(),
        }
    }
}

impl Default for DisabledAssistant {
    fn default() -> Self {
        Self::new("no API key configured (set PLANWRIGHT_API_KEY)")
    }
}

#[async_trait]
impl Assistant for DisabledAssistant {
    fn name(&self) -> &'static str {
        "disabled"
    }

    async fn refine(&self, _request: &RefinementRequest) -> Result<Refinements> {
        Err(self.unavailable())
    }

    async fn generate_scoring_prompt(&self, _compiled: &str) -> Result<String> {
        Err(self.unavailable())
    }
}

/// Pick the assistant for a session: Gemini when a key is configured,
/// otherwise the disabled fallback.
pub fn from_config(config: &AssistantConfig) -> Result<Box<dyn Assistant>> {
    if config.api_key().is_some() {
        Ok(Box::new(GeminiAssistant::new(config.clone())?))
    } else {
        Ok(Box::new(DisabledAssistant::default()))
    }
}
