//! Display implementations for domain models.
//!
//! Kept apart from the model definitions. Everything renders as markdown so
//! the CLI can pass it straight to the terminal renderer.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{
        Checkpoint, CriteriaField, Currency, DurationUnit, Market, NumericInput, PackageDetails,
        PackagePlan, PlanDraft, PlanDuration, PlanStatus, PlanSummary, Refinements, split_items,
    },
    prompt::market_list,
    validation::ValidationErrors,
    wizard::WizardStep,
};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for NumericInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text().unwrap_or_default())
    }
}

/// `1 month`, `3 months`; the unit is pluralized unless the magnitude is 1.
impl fmt::Display for PlanDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(text) = self.magnitude.as_text() else {
            return write!(f, "unspecified {}s", self.unit);
        };
        match self.magnitude.as_whole() {
            Some(1) => write!(f, "1 {}", self.unit),
            // "007" and "3.0" read as 7 and 3
            Some(n) => write!(f, "{n} {}s", self.unit),
            None => write!(f, "{text} {}s", self.unit),
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Step {} of {}: {}",
            self.number(),
            WizardStep::ALL.len(),
            self.title()
        )
    }
}

fn fmt_price(f: &mut fmt::Formatter<'_>, details: &PackageDetails) -> fmt::Result {
    match details.price.as_text() {
        Some(price) => writeln!(
            f,
            "- Price: {price} {} for {}",
            details.currency, details.duration
        ),
        None => writeln!(f, "- Price: not set ({})", details.duration),
    }
}

fn fmt_list(f: &mut fmt::Formatter<'_>, heading: &str, items: &str) -> fmt::Result {
    writeln!(f, "## {heading}")?;
    writeln!(f)?;
    let mut any = false;
    for item in split_items(items) {
        writeln!(f, "- {item}")?;
        any = true;
    }
    if !any {
        writeln!(f, "_None yet._")?;
    }
    writeln!(f)
}

fn fmt_checkpoints(f: &mut fmt::Formatter<'_>, checkpoints: &[Checkpoint]) -> fmt::Result {
    writeln!(f, "## Checkpoints")?;
    writeln!(f)?;
    if checkpoints.is_empty() {
        return writeln!(f, "No checkpoints in this plan.");
    }
    for (n, cp) in checkpoints.iter().enumerate() {
        write!(f, "{}", NumberedCheckpoint(n + 1, cp))?;
    }
    Ok(())
}

/// A checkpoint with its position in the rubric.
pub struct NumberedCheckpoint<'a>(pub usize, pub &'a Checkpoint);

impl fmt::Display for NumberedCheckpoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let NumberedCheckpoint(n, cp) = self;
        let category = if cp.category.trim().is_empty() {
            "(unnamed)"
        } else {
            cp.category.as_str()
        };
        writeln!(f, "### {n}. {category} (ID: {})", cp.id)?;
        writeln!(f)?;
        for tier in CriteriaField::ALL {
            let text = cp.criteria.get(tier);
            writeln!(
                f,
                "- **{}**: {}",
                tier.label(),
                if text.trim().is_empty() { "_empty_" } else { text }
            )?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", NumberedCheckpoint(1, self))
    }
}

impl fmt::Display for Refinements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("Description", &self.description),
            ("Benefits", &self.benefits),
            ("Key Selling Points", &self.selling_points),
        ];
        for (label, value) in fields {
            writeln!(f, "### {label}")?;
            writeln!(f)?;
            match value {
                Some(text) => writeln!(f, "{text}")?,
                None => writeln!(f, "_No suggestion._")?,
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for PackagePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details = &self.package_details;
        writeln!(f, "# {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status)?;
        writeln!(
            f,
            "- Enabled: {}",
            if self.enabled { "yes" } else { "no" }
        )?;
        writeln!(f, "- Target market: {}", market_list(&details.target_market))?;
        fmt_price(f, details)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        fmt_list(f, "Benefits", &details.benefits)?;
        fmt_list(f, "Key Selling Points", &details.selling_points)?;
        fmt_checkpoints(f, &self.checkpoints)?;

        if let Some(prompt) = &self.scoring_prompt {
            writeln!(f)?;
            writeln!(f, "## Scoring Prompt")?;
            writeln!(f)?;
            writeln!(f, "{prompt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details = &self.package_details;
        let name = if self.name.trim().is_empty() {
            "Untitled plan"
        } else {
            self.name.as_str()
        };
        writeln!(f, "# {name}")?;
        writeln!(f)?;

        let markets = market_list(&details.target_market);
        writeln!(
            f,
            "- Target market: {}",
            if markets.is_empty() { "none selected" } else { markets.as_str() }
        )?;
        fmt_price(f, details)?;
        writeln!(f)?;
        if !self.description.trim().is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }

        fmt_list(f, "Benefits", &details.benefits)?;
        fmt_list(f, "Key Selling Points", &details.selling_points)?;
        fmt_checkpoints(f, &self.checkpoints)?;

        if !details.refined.is_empty() {
            writeln!(f)?;
            writeln!(f, "## AI Suggestions")?;
            writeln!(f)?;
            write!(f, "{}", details.refined)?;
        }
        if let Some(prompt) = &self.scoring_prompt {
            writeln!(f)?;
            writeln!(f, "## Scoring Prompt")?;
            writeln!(f)?;
            writeln!(f, "{prompt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.name, self.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Status**: {}, {}",
            self.status,
            if self.enabled { "enabled" } else { "disabled" }
        )?;
        match self.price.as_text() {
            Some(price) => writeln!(
                f,
                "- **Price**: {price} {} for {}",
                self.currency, self.duration
            )?,
            None => writeln!(f, "- **Price**: not set")?,
        }
        writeln!(f, "- **Checkpoints**: {}", self.checkpoint_count)?;
        if self.has_scoring_prompt {
            writeln!(f, "- **Scoring prompt**: ready")?;
        }
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)
    }
}

/// One bullet per failing field.
impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = &self.name {
            writeln!(f, "- name: {message}")?;
        }
        if let Some(message) = &self.description {
            writeln!(f, "- description: {message}")?;
        }
        if let Some(package) = &self.package_details {
            for (field, message) in package.entries() {
                writeln!(f, "- {field}: {message}")?;
            }
        }
        if let Some(message) = &self.checkpoints_error {
            writeln!(f, "- checkpoints: {message}")?;
        }
        for (id, errors) in &self.checkpoints {
            for (field, message) in errors.entries() {
                writeln!(f, "- checkpoint {id} {field}: {message}")?;
            }
        }
        Ok(())
    }
}
