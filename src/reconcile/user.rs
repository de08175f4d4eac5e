//! User reconciliation, including the block/unblock state transitions.

use anyhow::Result;

use crate::remote::types::{User, UserEdit};

use super::{ChangeSet, FieldValue, StagedSave, StateAction, UpdatePlan};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum UserState {
    Active,
    Blocked,
}

impl UserState {
    pub fn as_str(self) -> &'static str {
        match self {
            UserState::Active => "active",
            UserState::Blocked => "blocked",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub admin: Option<bool>,
    pub state: Option<UserState>,
}

/// No gateway lookups are needed here: none of the user fields require
/// pre-validation against the remote.
pub fn reconcile_user(user: &User, desired: &UserChanges) -> Result<UpdatePlan> {
    let mut set = ChangeSet::default();
    let mut edit = UserEdit::default();
    let mut actions = Vec::new();

    if let Some(name) = &desired.name
        && *name != user.name
    {
        set.record("name", FieldValue::text(&user.name), FieldValue::text(name));
        edit.name = Some(name.clone());
    }

    if let Some(email) = &desired.email
        && user.email.as_deref() != Some(email)
    {
        set.record(
            "email",
            FieldValue::opt_text(user.email.as_deref()),
            FieldValue::text(email),
        );
        edit.email = Some(email.clone());
    }

    if let Some(admin) = desired.admin {
        let current = user.is_admin.unwrap_or(false);
        if admin != current {
            set.record("admin", FieldValue::Flag(current), FieldValue::Flag(admin));
            edit.admin = Some(admin);
        }
    }

    // Blocking is a dedicated endpoint, not a field of the generic save.
    if let Some(state) = desired.state
        && state.as_str() != user.state
    {
        set.record(
            "state",
            FieldValue::text(&user.state),
            FieldValue::text(state.as_str()),
        );
        actions.push(match state {
            UserState::Blocked => StateAction::BlockUser {
                id: user.id,
                username: user.username.clone(),
            },
            UserState::Active => StateAction::UnblockUser {
                id: user.id,
                username: user.username.clone(),
            },
        });
    }

    let save = if edit.is_empty() {
        None
    } else {
        Some(StagedSave::User { id: user.id, edit })
    };

    Ok(UpdatePlan {
        change_set: set,
        actions,
        save,
    })
}

#[cfg(test)]
#[path = "../tests/reconcile/user_tests.rs"]
mod tests;
