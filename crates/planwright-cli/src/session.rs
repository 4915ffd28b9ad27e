//! Interactive wizard session over stdin.
//!
//! Each input line is one command. Outside a wizard the session manages the
//! plan list; `new` and `edit` open the wizard, and `save` or `cancel`
//! closes it again.

use std::{collections::BTreeSet, str::FromStr};

use anyhow::{anyhow, bail, Context, Result};
use log::debug;
use planwright_core::{
    display::{CreateResult, OperationStatus, UpdateResult},
    models::{CheckpointField, CriteriaField, Currency, DurationUnit, EnabledFilter, Market},
    reducer::{Action, DetailsPatch, PackageDetailsPatch},
    wizard::{RefinedField, Transition},
    Console, Id, ListPlans, SaveOutcome, Wizard,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt};

use crate::renderer::TerminalRenderer;

const HELP: &str = "\
# Commands

## Plans

- `list [all|enabled|disabled] [search]`: list plans
- `view <id>`: show a saved plan
- `toggle <id>`: switch a plan on or off
- `new`: start the wizard for a new plan
- `edit <id>`: start the wizard on a saved plan

## Wizard

- `set name|description <text>`
- `set market <SME,Startup,...>`
- `set price <amount>`, `set currency <code>`
- `set duration <n> [day|month|year]`
- `set benefits|selling-points <item> | <item> | ...`
- `checkpoint add`, `checkpoint remove <id>`
- `checkpoint category <id> <text>`
- `checkpoint criteria <id> <very-good|good|bad|very-bad> <text>`
- `next`, `back`: move between steps
- `refine`: ask the assistant for fresh suggestions
- `apply <description|benefits|selling-points>`: use a suggestion
- `dismiss`: clear the assistant error
- `prompt`: preview the compiled scoring instructions
- `generate`: have the assistant write the final scoring prompt
- `show`: show the current step and draft
- `save`, `cancel`

A checkpoint `<id>` may also be its position, starting at 1.
Review is read-only: go `back` to change the draft.

`help` shows this list, `quit` ends the session.
";

/// Draft fields settable with `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
    Market,
    Price,
    Currency,
    Duration,
    Benefits,
    SellingPoints,
}

impl FromStr for DraftField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "name" => Ok(DraftField::Name),
            "description" => Ok(DraftField::Description),
            "market" | "markets" => Ok(DraftField::Market),
            "price" => Ok(DraftField::Price),
            "currency" => Ok(DraftField::Currency),
            "duration" => Ok(DraftField::Duration),
            "benefits" => Ok(DraftField::Benefits),
            "selling-points" | "sellingpoints" => Ok(DraftField::SellingPoints),
            _ => Err(anyhow!("Unknown field: {s}")),
        }
    }
}

impl DraftField {
    /// Turn typed text into the reducer action for this field.
    pub fn action(self, value: &str) -> Result<Action> {
        let package = |patch: PackageDetailsPatch| -> Result<Action> {
            Ok(Action::UpdatePackageDetails(patch))
        };
        match self {
            DraftField::Name => Ok(Action::UpdateDetails(DetailsPatch::name(value))),
            DraftField::Description => {
                Ok(Action::UpdateDetails(DetailsPatch::description(value)))
            }
            DraftField::Market => {
                let markets = value
                    .split(',')
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(|m| m.parse::<Market>().map_err(|e| anyhow!(e)))
                    .collect::<Result<BTreeSet<_>>>()?;
                package(PackageDetailsPatch {
                    target_market: Some(markets),
                    ..Default::default()
                })
            }
            DraftField::Price => package(PackageDetailsPatch {
                price: Some(value.into()),
                ..Default::default()
            }),
            DraftField::Currency => package(PackageDetailsPatch {
                currency: Some(value.parse::<Currency>().map_err(|e| anyhow!(e))?),
                ..Default::default()
            }),
            DraftField::Duration => {
                let mut parts = value.split_whitespace();
                let magnitude = parts.next().unwrap_or_default();
                let unit = parts
                    .next()
                    .map(|u| u.parse::<DurationUnit>().map_err(|e| anyhow!(e)))
                    .transpose()?;
                package(PackageDetailsPatch {
                    duration_magnitude: Some(magnitude.into()),
                    duration_unit: unit,
                    ..Default::default()
                })
            }
            DraftField::Benefits => package(PackageDetailsPatch {
                benefits: Some(join_items(value)),
                ..Default::default()
            }),
            DraftField::SellingPoints => package(PackageDetailsPatch {
                selling_points: Some(join_items(value)),
                ..Default::default()
            }),
        }
    }
}

/// `a | b | c` becomes one item per line.
fn join_items(value: &str) -> String {
    value
        .split('|')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Help,
    Quit,
    List(ListPlans),
    View(String),
    Toggle(String),
    New,
    Edit(String),
    Set(DraftField, String),
    AddCheckpoint,
    RemoveCheckpoint(String),
    Category { id: String, value: String },
    Criteria { id: String, tier: CriteriaField, value: String },
    Next,
    Back,
    Refine,
    Apply(RefinedField),
    Dismiss,
    Prompt,
    Generate,
    Show,
    Save,
    Cancel,
}

/// Split off the first whitespace-delimited word.
fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}

fn require<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    if value.is_empty() {
        bail!("Missing {what}");
    }
    Ok(value)
}

impl FromStr for SessionCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let (command, rest) = split_word(line);
        let command = match command.to_lowercase().as_str() {
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            "list" | "ls" => {
                let (first, remainder) = split_word(rest);
                match first.parse::<EnabledFilter>() {
                    Ok(status) => SessionCommand::List(ListPlans {
                        status,
                        search: (!remainder.is_empty()).then(|| remainder.to_string()),
                    }),
                    Err(_) => SessionCommand::List(ListPlans {
                        status: EnabledFilter::All,
                        search: (!rest.is_empty()).then(|| rest.to_string()),
                    }),
                }
            }
            "view" => SessionCommand::View(require(rest, "plan ID")?.to_string()),
            "toggle" => SessionCommand::Toggle(require(rest, "plan ID")?.to_string()),
            "new" => SessionCommand::New,
            "edit" => SessionCommand::Edit(require(rest, "plan ID")?.to_string()),
            "set" => {
                let (field, value) = split_word(rest);
                let field = require(field, "field name")?.parse()?;
                SessionCommand::Set(field, value.to_string())
            }
            "checkpoint" | "cp" => {
                let (sub, args) = split_word(rest);
                match sub.to_lowercase().as_str() {
                    "add" => SessionCommand::AddCheckpoint,
                    "remove" | "rm" => {
                        SessionCommand::RemoveCheckpoint(require(args, "checkpoint ID")?.to_string())
                    }
                    "category" => {
                        let (id, value) = split_word(args);
                        SessionCommand::Category {
                            id: require(id, "checkpoint ID")?.to_string(),
                            value: value.to_string(),
                        }
                    }
                    "criteria" => {
                        let (id, args) = split_word(args);
                        let (tier, value) = split_word(args);
                        SessionCommand::Criteria {
                            id: require(id, "checkpoint ID")?.to_string(),
                            tier: require(tier, "criteria tier")?
                                .parse()
                                .map_err(|e: String| anyhow!(e))?,
                            value: value.to_string(),
                        }
                    }
                    other => bail!("Unknown checkpoint command: {other}"),
                }
            }
            "next" | "n" => SessionCommand::Next,
            "back" | "b" => SessionCommand::Back,
            "refine" => SessionCommand::Refine,
            "apply" => SessionCommand::Apply(
                require(rest, "field")?
                    .parse()
                    .map_err(|e: String| anyhow!(e))?,
            ),
            "dismiss" => SessionCommand::Dismiss,
            "prompt" => SessionCommand::Prompt,
            "generate" => SessionCommand::Generate,
            "show" => SessionCommand::Show,
            "save" => SessionCommand::Save,
            "cancel" => SessionCommand::Cancel,
            other => bail!("Unknown command: {other}. Type `help` for a list."),
        };
        Ok(command)
    }
}

/// Checkpoints can be addressed by ID or by 1-based position.
fn resolve_checkpoint(wizard: &Wizard, reference: &str) -> String {
    let checkpoints = &wizard.state().checkpoints;
    if checkpoints.iter().any(|cp| cp.id == reference) {
        return reference.to_string();
    }
    reference
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| checkpoints.get(index))
        .map_or_else(|| reference.to_string(), |cp| cp.id.clone())
}

/// Line-oriented console session.
pub struct Session<'a> {
    console: &'a Console,
    renderer: &'a TerminalRenderer,
    wizard: Option<Wizard>,
}

impl<'a> Session<'a> {
    pub fn new(console: &'a Console, renderer: &'a TerminalRenderer) -> Self {
        Self {
            console,
            renderer,
            wizard: None,
        }
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Command errors are reported and the session continues.
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        let mut stdout = tokio::io::stdout();
        self.renderer
            .render("Planwright console. Type `help` for commands.\n")?;

        loop {
            stdout
                .write_all(self.prompt().as_bytes())
                .await
                .context("Failed to write prompt")?;
            stdout.flush().await.context("Failed to flush stdout")?;

            let Some(line) = lines.next_line().await.context("Failed to read input")? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            debug!("session input: {line}");
            let outcome = match line.parse::<SessionCommand>() {
                Ok(SessionCommand::Quit) => break,
                Ok(command) => self.execute(command).await,
                Err(e) => Err(e),
            };
            if let Err(e) = outcome {
                self.renderer
                    .render(&OperationStatus::failure(format!("{e:#}")).to_string())?;
            }
        }
        Ok(())
    }

    fn prompt(&self) -> String {
        match &self.wizard {
            Some(wizard) => format!("pw [{}/4]> ", wizard.step().number()),
            None => "pw> ".to_string(),
        }
    }

    fn wizard(&mut self) -> Result<&mut Wizard> {
        self.wizard
            .as_mut()
            .ok_or_else(|| anyhow!("No wizard is open. Use `new` or `edit <id>` first."))
    }

    fn ensure_no_wizard(&self) -> Result<()> {
        if self.wizard.is_some() {
            bail!("A wizard is already open. `save` or `cancel` it first.");
        }
        Ok(())
    }

    pub async fn execute(&mut self, command: SessionCommand) -> Result<()> {
        let console = self.console;
        match command {
            SessionCommand::Help => self.renderer.render(HELP),
            SessionCommand::Quit => Ok(()),
            SessionCommand::List(params) => {
                let plans = console.list_plans(&params).await?;
                self.renderer.render(&plans.to_string())
            }
            SessionCommand::View(id) => {
                let plan = console.show_plan(&Id::new(id)).await?;
                self.renderer.render(&plan.to_string())
            }
            SessionCommand::Toggle(id) => {
                let plan = console.toggle_plan(&Id::new(id)).await?;
                let state = if plan.enabled { "enabled" } else { "disabled" };
                self.renderer.render(
                    &OperationStatus::success(format!("Plan {} is now {state}", plan.id))
                        .to_string(),
                )
            }
            SessionCommand::New => {
                self.ensure_no_wizard()?;
                self.wizard = Some(console.start_create());
                self.render_wizard()
            }
            SessionCommand::Edit(id) => {
                self.ensure_no_wizard()?;
                self.wizard = Some(console.start_edit(&Id::new(id)).await?);
                self.render_wizard()
            }
            SessionCommand::Set(field, value) => {
                let action = field.action(&value)?;
                self.wizard()?.dispatch(action)?;
                Ok(())
            }
            SessionCommand::AddCheckpoint => {
                let wizard = self.wizard()?;
                wizard.dispatch(Action::AddCheckpoint)?;
                let id = wizard
                    .state()
                    .checkpoints
                    .last()
                    .map(|cp| cp.id.clone())
                    .unwrap_or_default();
                self.renderer
                    .render(&OperationStatus::success(format!("Added checkpoint {id}")).to_string())
            }
            SessionCommand::RemoveCheckpoint(id) => {
                let wizard = self.wizard()?;
                let id = resolve_checkpoint(wizard, &id);
                wizard.dispatch(Action::RemoveCheckpoint { id })?;
                Ok(())
            }
            SessionCommand::Category { id, value } => {
                let wizard = self.wizard()?;
                let id = resolve_checkpoint(wizard, &id);
                wizard.dispatch(Action::UpdateCheckpoint {
                    id,
                    field: CheckpointField::Category,
                    value,
                })?;
                Ok(())
            }
            SessionCommand::Criteria { id, tier, value } => {
                let wizard = self.wizard()?;
                let id = resolve_checkpoint(wizard, &id);
                wizard.dispatch(Action::UpdateCriteria {
                    id,
                    field: tier,
                    value,
                })?;
                Ok(())
            }
            SessionCommand::Next => {
                let transition = self.wizard()?.advance(console.assistant()).await?;
                self.render_transition(&transition)
            }
            SessionCommand::Back => {
                let transition = self.wizard()?.back()?;
                self.render_transition(&transition)
            }
            SessionCommand::Refine => {
                self.wizard()?.refine(console.assistant()).await?;
                self.render_wizard()
            }
            SessionCommand::Apply(field) => {
                let applied = self.wizard()?.apply_refinement(field)?;
                let message = if applied {
                    OperationStatus::success(format!("Applied suggested {}", field.label()))
                } else {
                    OperationStatus::failure(format!("No suggestion for {}", field.label()))
                };
                self.renderer.render(&message.to_string())
            }
            SessionCommand::Dismiss => {
                self.wizard()?.dismiss_error();
                Ok(())
            }
            SessionCommand::Prompt => {
                let compiled = self.wizard()?.compiled_prompt()?;
                self.renderer.raw(&compiled)
            }
            SessionCommand::Generate => {
                self.wizard()?
                    .generate_scoring_prompt(console.assistant())
                    .await?;
                self.render_wizard()
            }
            SessionCommand::Show => self.render_wizard(),
            SessionCommand::Save => self.save().await,
            SessionCommand::Cancel => {
                if let Some(mut wizard) = self.wizard.take() {
                    wizard.close();
                }
                self.renderer
                    .render(&OperationStatus::success("Wizard closed without saving").to_string())
            }
        }
    }

    async fn save(&mut self) -> Result<()> {
        let console = self.console;
        let wizard = self.wizard()?;
        match console.save(wizard).await? {
            SaveOutcome::Created(plan) => {
                self.wizard = None;
                self.renderer.render(&CreateResult::new(plan).to_string())
            }
            SaveOutcome::Updated { before, after } => {
                self.wizard = None;
                self.renderer
                    .render(&UpdateResult::between(&before, after).to_string())
            }
            SaveOutcome::Blocked { step, errors } => self.renderer.render(&format!(
                "# Cannot save yet\n\nReturned to {step}.\n\n{errors}"
            )),
        }
    }

    fn render_transition(&self, transition: &Transition) -> Result<()> {
        match transition {
            Transition::Moved { .. } => self.render_wizard(),
            Transition::Blocked { step, errors } => self
                .renderer
                .render(&format!("# Fix these before leaving {step}\n\n{errors}")),
            Transition::AtStart => self.renderer.render("Already at the first step.\n"),
            Transition::AtEnd => self
                .renderer
                .render("Already at the last step. Use `save` to finish.\n"),
        }
    }

    fn render_wizard(&self) -> Result<()> {
        let Some(wizard) = &self.wizard else {
            return self.renderer.render("No wizard is open.\n");
        };

        let mut out = format!("# {}\n\n", wizard.step());
        if let Some(banner) = wizard.banner() {
            out.push_str(&format!("**{banner}** (`refine` to retry, `dismiss` to hide)\n\n"));
        }
        out.push_str(&wizard.state().to_string());
        if !wizard.errors().is_empty() {
            out.push_str(&format!("\n## Errors\n\n{}", wizard.errors()));
        }
        self.renderer.render(&out)
    }
}
