//! Change reconciliation: diff the operator's flags against the fetched
//! resource, validate references, and stage a plan to apply.

use std::fmt;

use anyhow::Result;

use crate::model::{ProjectPath, Visibility};
use crate::remote::types::{GroupEdit, ProjectEdit, UserEdit};

mod apply;
mod group;
mod project;
mod user;

pub use self::apply::{Outcome, apply_plan};
pub use self::group::{GroupChanges, path_from_name, reconcile_group};
pub use self::project::{ProjectChanges, reconcile_project};
pub use self::user::{UserChanges, UserState, reconcile_user};

/// A field value in a form comparable and printable across resource kinds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Number(u64),
    Absent,
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    pub fn opt_text(s: Option<&str>) -> Self {
        match s {
            Some(s) => FieldValue::Text(s.to_string()),
            None => FieldValue::Absent,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Flag(b) => write!(f, "{b}"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Absent => f.write_str("(unset)"),
        }
    }
}

/// One accepted field difference. Exists only when `after != before`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeEntry {
    pub field: &'static str,
    pub before: FieldValue,
    pub after: FieldValue,
}

/// The result of one reconciliation pass: accepted changes plus the
/// per-field validation failures that did not block the rest.
#[derive(Clone, Debug, Default)]
pub struct ChangeSet {
    pub changes: Vec<ChangeEntry>,
    pub failures: Vec<String>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub(crate) fn record(&mut self, field: &'static str, before: FieldValue, after: FieldValue) {
        self.changes.push(ChangeEntry {
            field,
            before,
            after,
        });
    }
}

/// A dedicated remote state transition, staged separately from the
/// generic save and gated by its own confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StateAction {
    ArchiveProject(ProjectPath),
    UnarchiveProject(ProjectPath),
    BlockUser { id: u64, username: String },
    UnblockUser { id: u64, username: String },
}

impl StateAction {
    /// Prompt wording for the secondary confirmation.
    pub fn describe(&self) -> String {
        match self {
            StateAction::ArchiveProject(p) => format!("archive the project <{p}>"),
            StateAction::UnarchiveProject(p) => format!("unarchive the project <{p}>"),
            StateAction::BlockUser { username, .. } => format!("block the user <{username}>"),
            StateAction::UnblockUser { username, .. } => format!("unblock the user <{username}>"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StateAction::ArchiveProject(_) => "archive",
            StateAction::UnarchiveProject(_) => "unarchive",
            StateAction::BlockUser { .. } => "block",
            StateAction::UnblockUser { .. } => "unblock",
        }
    }
}

/// The generic save staged by reconciliation, holding only the fields
/// that actually changed.
#[derive(Clone, Debug)]
pub enum StagedSave {
    Project { path: ProjectPath, edit: ProjectEdit },
    Group { path: String, edit: GroupEdit },
    User { id: u64, edit: UserEdit },
}

/// Everything one reconciliation pass produced; nothing has been sent to
/// the remote yet.
#[derive(Clone, Debug)]
pub struct UpdatePlan {
    pub change_set: ChangeSet,
    pub actions: Vec<StateAction>,
    pub save: Option<StagedSave>,
}

/// The slice of the remote API the reconciler and dispatcher consume.
/// Existence probes report "missing" as `Ok(false)`/`Ok(None)`; transport
/// and permission failures propagate as errors.
pub trait Gateway {
    fn branch_exists(&self, project: &ProjectPath, branch: &str) -> Result<bool>;
    fn user_exists(&self, user_id: u64) -> Result<bool>;
    fn group_visibility(&self, full_path: &str) -> Result<Option<Visibility>>;
    fn group_visibility_by_id(&self, id: u64) -> Result<Option<Visibility>>;
    fn save(&self, save: &StagedSave) -> Result<()>;
    fn perform(&self, action: &StateAction) -> Result<()>;
}
