//! Compilation of wizard state into prompt text.
//!
//! Both prompts are rendered through `Display` wrappers so the text is built
//! in one pass and is byte-for-byte reproducible: identical input always
//! yields identical output, with no timestamps or unordered collections
//! involved. Target markets iterate in their declaration order.
//!
//! # Examples
//!
//! ```rust
//! use planwright_core::{
//!     models::{DurationUnit, PlanDraft, PlanDuration},
//!     prompt::compile_scoring_prompt,
//! };
//!
//! let mut draft = PlanDraft::default();
//! draft.name = "Trial Plan".to_string();
//! draft.package_details.duration = PlanDuration::new(1, DurationUnit::Month);
//!
//! let prompt = compile_scoring_prompt(&draft);
//! assert!(prompt.contains("for 1 month\n"));
//! assert_eq!(prompt, compile_scoring_prompt(&draft));
//! ```

use std::fmt;

use crate::{
    assistant::RefinementRequest,
    models::{split_items, CriteriaField, Market, PlanDraft},
};

const SCORING_PREAMBLE: &str = "You are an AI assistant tasked with creating a detailed scoring prompt for evaluating customer service or sales interactions. Based on the following structured data, generate a single, comprehensive \"Scoring Prompt\". This prompt will be used by another AI to analyze and score a conversation transcript.";

const SCORING_CLOSING: &str = "Synthesize all of the above information. Your output should be a single, detailed scoring prompt. This prompt should clearly instruct an AI on what to look for, how to score the conversation against each checkpoint using the provided criteria, and how to interpret the context of the product being sold. Be clear and direct.";

/// Compile the instructions handed to the prompt-generation collaborator.
pub fn compile_scoring_prompt(draft: &PlanDraft) -> String {
    ScoringPrompt(draft).to_string()
}

/// Compile the instructions handed to the refinement collaborator.
pub fn compile_refinement_prompt(request: &RefinementRequest) -> String {
    RefinementPrompt(request).to_string()
}

/// Join markets with `", "` in declaration order.
pub(crate) fn market_list<'a>(markets: impl IntoIterator<Item = &'a Market>) -> String {
    markets
        .into_iter()
        .map(Market::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_bullets(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for item in split_items(text) {
        writeln!(f, "  - {item}")?;
    }
    Ok(())
}

/// Scoring-prompt renderer.
pub struct ScoringPrompt<'a>(pub &'a PlanDraft);

impl fmt::Display for ScoringPrompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let draft = self.0;
        let details = &draft.package_details;

        writeln!(f, "{SCORING_PREAMBLE}")?;
        writeln!(f)?;
        writeln!(f, "**Package: {}**", draft.name)?;
        writeln!(f, "*Description: {}*", draft.description)?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)?;

        writeln!(f, "**CONTEXT: PRODUCT/PACKAGE DETAILS**")?;
        writeln!(
            f,
            "The agent is selling or discussing the following package. The evaluation AI must understand this context."
        )?;
        writeln!(f)?;
        writeln!(f, "- **Package Name:** {}", draft.name)?;
        writeln!(f, "- **Target Market:** {}", market_list(&details.target_market))?;
        writeln!(
            f,
            "- **Price and Duration:** {} {} for {}",
            details.price.as_text().unwrap_or_default(),
            details.currency.code(),
            details.duration
        )?;
        writeln!(f, "- **Benefits:**")?;
        write_bullets(f, &details.benefits)?;
        writeln!(f, "- **Key Selling Points to Emphasize:**")?;
        write_bullets(f, &details.selling_points)?;
        writeln!(f)?;
        writeln!(f, "---")?;
        writeln!(f)?;

        writeln!(f, "**EVALUATION CHECKPOINTS**")?;
        if draft.checkpoints.is_empty() {
            writeln!(
                f,
                "No checkpoints were defined. The AI must score the conversation against the package context alone."
            )?;
            writeln!(f)?;
        } else {
            writeln!(
                f,
                "The AI must evaluate the conversation based on these specific checkpoints."
            )?;
            writeln!(f)?;
            for cp in &draft.checkpoints {
                writeln!(f, "**Checkpoint: \"{}\"**", cp.category)?;
                writeln!(
                    f,
                    "*This checkpoint assesses the agent's ability to effectively communicate the category of \"{}\".*",
                    cp.category
                )?;
                writeln!(f)?;
                writeln!(f, "Rating Criteria:")?;
                for tier in CriteriaField::ALL {
                    writeln!(
                        f,
                        "- **{} ({}):** {}",
                        tier.label(),
                        tier.meaning(),
                        cp.criteria.get(tier)
                    )?;
                }
                writeln!(f)?;
            }
        }

        writeln!(f, "---")?;
        writeln!(f)?;
        writeln!(f, "**FINAL INSTRUCTION FOR EVALUATION AI:**")?;
        write!(f, "{SCORING_CLOSING}")
    }
}

/// Refinement-prompt renderer.
pub struct RefinementPrompt<'a>(pub &'a RefinementRequest);

impl fmt::Display for RefinementPrompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let request = self.0;

        writeln!(
            f,
            "You are a marketing copy editor for subscription packages. Rewrite the copy below so it is clearer, more persuasive and concise. Do not invent features, prices or guarantees that are not already stated."
        )?;
        writeln!(f)?;
        writeln!(f, "Package name: {}", request.name)?;
        writeln!(f, "Target market: {}", market_list(&request.target_market))?;
        writeln!(f)?;
        writeln!(f, "Description:")?;
        writeln!(f, "{}", request.description.trim())?;
        writeln!(f)?;
        writeln!(f, "Benefits (one per line):")?;
        for item in split_items(&request.benefits) {
            writeln!(f, "{item}")?;
        }
        writeln!(f)?;
        writeln!(f, "Key selling points (one per line):")?;
        for item in split_items(&request.selling_points) {
            writeln!(f, "{item}")?;
        }
        writeln!(f)?;
        writeln!(f, "Respond with a JSON object containing exactly these string fields:")?;
        writeln!(f, "- \"refinedDescription\": the improved description")?;
        writeln!(
            f,
            "- \"refinedBenefits\": the improved benefits, one per line separated by \\n"
        )?;
        write!(
            f,
            "- \"refinedSellingPoints\": the improved selling points, one per line separated by \\n"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Checkpoint, Criteria, Currency, DurationUnit, NumericInput, PlanDuration,
    };

    fn sample_draft() -> PlanDraft {
        let mut draft = PlanDraft {
            name: "Trial Plan".to_string(),
            description: "A free trial of the AI job folder.".to_string(),
            ..Default::default()
        };
        let details = &mut draft.package_details;
        details.target_market = [Market::Startup, Market::Sme].into_iter().collect();
        details.price = NumericInput::from("0");
        details.currency = Currency::Sgd;
        details.duration = PlanDuration::new(3, DurationUnit::Month);
        details.benefits = "Automated sorting\n\n  AI skill matching  \n".to_string();
        details.selling_points = "Save time\nTry the future".to_string();
        draft.checkpoints = vec![
            Checkpoint {
                id: "cp-1".to_string(),
                category: "Info Accuracy".to_string(),
                criteria: Criteria {
                    very_good: "VG text".to_string(),
                    good: "G text".to_string(),
                    bad: "B text".to_string(),
                    very_bad: "VB text".to_string(),
                },
            },
            Checkpoint {
                id: "cp-2".to_string(),
                category: "Clarity".to_string(),
                criteria: Criteria::default(),
            },
        ];
        draft
    }

    #[test]
    fn test_duration_pluralization() {
        let mut draft = sample_draft();
        draft.package_details.duration = PlanDuration::new(1, DurationUnit::Month);
        let singular = compile_scoring_prompt(&draft);
        assert!(singular.contains("for 1 month\n"));
        assert!(!singular.contains("1 months"));

        draft.package_details.duration = PlanDuration::new(3, DurationUnit::Month);
        assert!(compile_scoring_prompt(&draft).contains("for 3 months\n"));
    }

    #[test]
    fn test_context_block() {
        let prompt = compile_scoring_prompt(&sample_draft());
        assert!(prompt.contains("**Package: Trial Plan**"));
        assert!(prompt.contains("- **Target Market:** SME, Startup\n"));
        assert!(prompt.contains("- **Price and Duration:** 0 SGD for 3 months\n"));
        assert!(prompt.contains(
            "- **Benefits:**\n  - Automated sorting\n  - AI skill matching\n- **Key Selling Points"
        ));
        assert!(prompt.contains("  - Save time\n  - Try the future\n"));
    }

    #[test]
    fn test_checkpoints_rendered_in_order_with_tiers() {
        let prompt = compile_scoring_prompt(&sample_draft());

        let first = prompt.find("**Checkpoint: \"Info Accuracy\"**").unwrap();
        let second = prompt.find("**Checkpoint: \"Clarity\"**").unwrap();
        assert!(first < second);

        let tiers = [
            "- **Very Good (Excellent Performance):** VG text",
            "- **Good (Competent Performance):** G text",
            "- **Bad (Poor Performance):** B text",
            "- **Very Bad (Complete Failure):** VB text",
        ];
        let positions: Vec<usize> = tiers.iter().map(|t| prompt.find(t).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_section_order_and_closing() {
        let prompt = compile_scoring_prompt(&sample_draft());
        let header = prompt.find("**Package:").unwrap();
        let context = prompt.find("**CONTEXT: PRODUCT/PACKAGE DETAILS**").unwrap();
        let checkpoints = prompt.find("**EVALUATION CHECKPOINTS**").unwrap();
        let closing = prompt.find("**FINAL INSTRUCTION FOR EVALUATION AI:**").unwrap();
        assert!(header < context && context < checkpoints && checkpoints < closing);
        assert!(prompt.ends_with("Be clear and direct."));
    }

    #[test]
    fn test_compilation_is_byte_identical() {
        let draft = sample_draft();
        let first = compile_scoring_prompt(&draft);
        let second = compile_scoring_prompt(&draft.clone());
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn test_empty_rubric_note() {
        let mut draft = sample_draft();
        draft.checkpoints.clear();
        let prompt = compile_scoring_prompt(&draft);
        assert!(prompt.contains("No checkpoints were defined."));
        assert!(!prompt.contains("Rating Criteria:"));
    }

    #[test]
    fn test_refinement_prompt_lists_copy() {
        let request = RefinementRequest::from(&sample_draft());
        let prompt = compile_refinement_prompt(&request);
        assert!(prompt.contains("Package name: Trial Plan"));
        assert!(prompt.contains("Target market: SME, Startup"));
        assert!(prompt.contains("Benefits (one per line):\nAutomated sorting\nAI skill matching\n"));
        assert!(prompt.contains("\"refinedSellingPoints\""));
        assert_eq!(prompt, compile_refinement_prompt(&request));
    }
}
