//! Group reconciliation, including the name/path rename sync.

use anyhow::Result;

use crate::model::Visibility;
use crate::remote::types::{Group, GroupEdit};

use super::{ChangeSet, FieldValue, Gateway, StagedSave, UpdatePlan};

#[derive(Clone, Debug, Default)]
pub struct GroupChanges {
    pub name: Option<String>,
    pub path: Option<String>,
    /// Keep name and path in step when only one of them is supplied.
    pub sync: bool,
    pub description: Option<String>,
    pub visibility: Option<Visibility>,
}

/// Derive a URL-safe path from a display name, the way the create
/// command defaults it.
pub fn path_from_name(name: &str) -> String {
    name.replace(' ', "-").to_lowercase()
}

pub fn reconcile_group(
    gateway: &impl Gateway,
    group: &Group,
    desired: &GroupChanges,
) -> Result<UpdatePlan> {
    let mut set = ChangeSet::default();
    let mut edit = GroupEdit::default();

    if let Some(name) = &desired.name
        && *name != group.name
    {
        set.record(
            "name",
            FieldValue::text(&group.name),
            FieldValue::text(name),
        );
        edit.name = Some(name.clone());

        // Path follows the rename only when asked to, and only when the
        // derived path actually differs.
        if desired.sync && desired.path.is_none() {
            let derived = path_from_name(name);
            if derived != group.path {
                set.record(
                    "path",
                    FieldValue::text(&group.path),
                    FieldValue::text(&derived),
                );
                edit.path = Some(derived);
            }
        }
    }

    if let Some(path) = &desired.path
        && *path != group.path
    {
        set.record(
            "path",
            FieldValue::text(&group.path),
            FieldValue::text(path),
        );
        edit.path = Some(path.clone());

        if desired.sync && desired.name.is_none() && *path != group.name {
            set.record("name", FieldValue::text(&group.name), FieldValue::text(path));
            edit.name = Some(path.clone());
        }
    }

    if let Some(description) = &desired.description
        && group.description.as_deref() != Some(description)
    {
        set.record(
            "description",
            FieldValue::opt_text(group.description.as_deref()),
            FieldValue::text(description),
        );
        edit.description = Some(description.clone());
    }

    if let Some(visibility) = desired.visibility
        && visibility != group.visibility
    {
        let parent = match group.parent_id {
            Some(id) => gateway.group_visibility_by_id(id)?,
            None => None,
        };
        match parent {
            Some(parent) if !visibility.allowed_under(parent) => {
                set.failures.push(format!(
                    "could not edit visibility: <{visibility}> is not allowed under the \
                     <{parent}> parent group"
                ));
            }
            _ => {
                set.record(
                    "visibility",
                    FieldValue::text(group.visibility.as_str()),
                    FieldValue::text(visibility.as_str()),
                );
                edit.visibility = Some(visibility);
            }
        }
    }

    let save = if edit.is_empty() {
        None
    } else {
        Some(StagedSave::Group {
            path: group.full_path.clone(),
            edit,
        })
    };

    Ok(UpdatePlan {
        change_set: set,
        actions: Vec::new(),
        save,
    })
}

#[cfg(test)]
#[path = "../tests/reconcile/group_tests.rs"]
mod tests;
