//! Lenient JSON extraction from model output.

use crate::{
    error::{PlanwrightError, Result},
    models::Refinements,
};

use super::RefinementResponse;

/// Locate the JSON object in a model answer.
///
/// Tries, in order: a ```` ```json ```` fence, any other fence whose body
/// starts with `{`, then the span from the first `{` to the last `}`.
pub fn extract_json_object(text: &str) -> Option<&str> {
    if let Some((_, rest)) = text.split_once("```json") {
        if let Some((body, _)) = rest.split_once("```") {
            return Some(body.trim());
        }
    }

    if let Some((_, rest)) = text.split_once("```") {
        // First line of a fence may carry a language tag.
        let body = rest.split_once('\n').map_or(rest, |(_, body)| body);
        if let Some((inner, _)) = body.split_once("```") {
            let inner = inner.trim();
            if inner.starts_with('{') {
                return Some(inner);
            }
        }
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

/// Parse a refinement answer into suggestions.
pub fn parse_refinements(text: &str) -> Result<Refinements> {
    let json = extract_json_object(text).ok_or_else(|| PlanwrightError::MalformedResponse {
        message: "no JSON object in refinement response".to_string(),
    })?;

    let response: RefinementResponse =
        serde_json::from_str(json).map_err(|e| PlanwrightError::MalformedResponse {
            message: format!("refinement response did not match the expected shape: {e}"),
        })?;

    Ok(response.into())
}
