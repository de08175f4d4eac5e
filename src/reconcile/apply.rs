//! Confirmation gating and dispatch of a staged [`UpdatePlan`].

use anyhow::Result;

use crate::confirm::Prompt;
use crate::output;

use super::{Gateway, UpdatePlan};

/// Terminal state of one update command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The plan was applied; lists the labels of state actions the
    /// operator declined individually.
    Applied { skipped_actions: Vec<&'static str> },
    /// Empty change set; no prompt shown, no remote call made.
    NothingToChange,
    /// The operator declined the aggregate confirmation.
    Declined,
}

/// Canonical ordering: aggregate confirmation, then each state action
/// behind its own secondary confirmation, then the generic save. A
/// declined secondary skips only that action; the save still runs.
pub fn apply_plan(
    gateway: &impl Gateway,
    prompt: &mut impl Prompt,
    plan: &UpdatePlan,
    subject: &str,
) -> Result<Outcome> {
    if plan.change_set.is_empty() {
        return Ok(Outcome::NothingToChange);
    }

    output::render_change_set(&plan.change_set);

    if !prompt.ask(&format!("Do you want to update {subject}? (yes/no): "))? {
        return Ok(Outcome::Declined);
    }

    let mut skipped_actions = Vec::new();
    for action in &plan.actions {
        let question = format!(
            "Are you sure you want to {}? (yes/no): ",
            action.describe()
        );
        if prompt.ask(&question)? {
            gateway.perform(action)?;
        } else {
            skipped_actions.push(action.label());
        }
    }

    if let Some(save) = &plan.save {
        gateway.save(save)?;
    }

    Ok(Outcome::Applied { skipped_actions })
}

#[cfg(test)]
#[path = "../tests/reconcile/apply_tests.rs"]
mod tests;
