//! Handlers for the one-shot subcommands.

use std::path::Path;

use anyhow::{bail, Context, Result};
use planwright_core::{
    compile_scoring_prompt, models::PackagePlan, validate_plan, Console, Id, ListPlans,
    PlanDraft,
};

use crate::renderer::TerminalRenderer;

/// Runs one subcommand against a console and renders the result.
pub struct Cli<'a> {
    console: &'a Console,
    renderer: &'a TerminalRenderer,
}

impl<'a> Cli<'a> {
    pub fn new(console: &'a Console, renderer: &'a TerminalRenderer) -> Self {
        Self { console, renderer }
    }

    /// Run every wizard gate over a draft file.
    pub fn validate(&self, path: &Path) -> Result<()> {
        let draft = read_draft(path)?;
        let errors = validate_plan(&draft);
        if errors.is_empty() {
            return self
                .renderer
                .render(&format!("Plan draft **{}** is valid.\n", draft.name.trim()));
        }

        self.renderer
            .render(&format!("# Validation failed\n\n{errors}"))?;
        bail!("{} has validation errors", path.display())
    }

    /// Print the compiled scoring instructions for a draft file.
    ///
    /// The draft must pass validation first; compiling an incomplete plan
    /// would produce instructions with holes in them.
    pub fn compile(&self, path: &Path) -> Result<()> {
        let draft = read_draft(path)?;
        let errors = validate_plan(&draft);
        if !errors.is_empty() {
            self.renderer
                .render(&format!("# Validation failed\n\n{errors}"))?;
            bail!("Cannot compile {}: fix the validation errors first", path.display());
        }
        self.renderer.raw(&compile_scoring_prompt(&draft))
    }

    pub async fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let plans = self
            .console
            .list_plans(params)
            .await
            .context("Failed to list plans")?;
        self.renderer.render(&plans.to_string())
    }

    pub async fn show_plan(&self, params: &Id) -> Result<()> {
        let plan = self
            .console
            .show_plan(params)
            .await
            .with_context(|| format!("Failed to show plan {}", params.id))?;
        self.renderer.render(&plan.to_string())
    }
}

/// Read a draft from JSON. A saved plan parses too; its identity fields are
/// ignored.
pub fn read_draft(path: &Path) -> Result<PlanDraft> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse plan draft from {}", path.display()))
}

/// Read the plans used to preload the in-memory store.
pub fn read_seed_plans(path: &Path) -> Result<Vec<PackagePlan>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse seed plans from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_read_draft_accepts_saved_plan_shape() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"id": "plan-1", "name": "Gold", "status": "Published", "enabled": true,
                "packageDetails": {{"price": 10, "currency": "usd"}}}}"#
        )
        .unwrap();

        let draft = read_draft(file.path()).unwrap();
        assert_eq!(draft.name, "Gold");
        assert_eq!(draft.package_details.price.as_f64(), Some(10.0));
    }

    #[test]
    fn test_read_seed_plans_rejects_non_array() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"id": "plan-1"}}"#).unwrap();
        assert!(read_seed_plans(file.path()).is_err());
    }
}
