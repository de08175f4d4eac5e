//! Project reconciliation: walk the declared field order, validate
//! references through the gateway, stage the sparse edit.

use anyhow::Result;

use crate::model::{ProjectPath, Visibility};
use crate::remote::types::{Project, ProjectEdit};

use super::{ChangeSet, FieldValue, Gateway, StagedSave, StateAction, UpdatePlan};

/// Desired values collected from CLI flags; `None` means "leave alone".
#[derive(Clone, Debug, Default)]
pub struct ProjectChanges {
    pub description: Option<String>,
    pub default_branch: Option<String>,
    pub visibility: Option<Visibility>,
    pub owner: Option<u64>,
    pub lfs_enabled: Option<bool>,
    pub request_access_enabled: Option<bool>,
    pub container_registry_enabled: Option<bool>,
    pub issues_enabled: Option<bool>,
    pub merge_requests_enabled: Option<bool>,
    pub wiki_enabled: Option<bool>,
    pub jobs_enabled: Option<bool>,
    pub snippets_enabled: Option<bool>,
    pub shared_runners_enabled: Option<bool>,
    pub public_jobs: Option<bool>,
    pub archived: Option<bool>,
}

fn stage_flag(
    set: &mut ChangeSet,
    field: &'static str,
    current: bool,
    desired: Option<bool>,
    slot: &mut Option<bool>,
) {
    if let Some(wanted) = desired
        && wanted != current
    {
        set.record(field, FieldValue::Flag(current), FieldValue::Flag(wanted));
        *slot = Some(wanted);
    }
}

/// Pure diff computation plus read-only validation lookups; no mutation
/// reaches the remote here.
pub fn reconcile_project(
    gateway: &impl Gateway,
    path: &ProjectPath,
    project: &Project,
    desired: &ProjectChanges,
) -> Result<UpdatePlan> {
    let mut set = ChangeSet::default();
    let mut edit = ProjectEdit::default();
    let mut actions = Vec::new();

    if let Some(description) = &desired.description
        && project.description.as_deref() != Some(description)
    {
        set.record(
            "description",
            FieldValue::opt_text(project.description.as_deref()),
            FieldValue::text(description),
        );
        edit.description = Some(description.clone());
    }

    if let Some(branch) = &desired.default_branch
        && project.default_branch.as_deref() != Some(branch)
    {
        if gateway.branch_exists(path, branch)? {
            set.record(
                "default_branch",
                FieldValue::opt_text(project.default_branch.as_deref()),
                FieldValue::text(branch),
            );
            edit.default_branch = Some(branch.clone());
        } else {
            set.failures.push(format!(
                "could not edit default_branch: the branch <{branch}> does not exist in this project"
            ));
        }
    }

    if let Some(visibility) = desired.visibility
        && visibility != project.visibility
    {
        let parent = match &project.namespace {
            Some(ns) if ns.kind == "group" => gateway.group_visibility(&ns.full_path)?,
            _ => None,
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
                    FieldValue::text(project.visibility.as_str()),
                    FieldValue::text(visibility.as_str()),
                );
                edit.visibility = Some(visibility);
            }
        }
    }

    if let Some(owner) = desired.owner
        && project.owner.as_ref().map(|o| o.id) != Some(owner)
    {
        if gateway.user_exists(owner)? {
            set.record(
                "owner",
                match &project.owner {
                    Some(o) => FieldValue::Number(o.id),
                    None => FieldValue::Absent,
                },
                FieldValue::Number(owner),
            );
            edit.owner_id = Some(owner);
        } else {
            set.failures.push(format!(
                "could not edit owner: the user id <{owner}> does not exist"
            ));
        }
    }

    stage_flag(
        &mut set,
        "lfs_enabled",
        project.lfs_enabled,
        desired.lfs_enabled,
        &mut edit.lfs_enabled,
    );
    stage_flag(
        &mut set,
        "request_access_enabled",
        project.request_access_enabled,
        desired.request_access_enabled,
        &mut edit.request_access_enabled,
    );
    stage_flag(
        &mut set,
        "container_registry_enabled",
        project.container_registry_enabled,
        desired.container_registry_enabled,
        &mut edit.container_registry_enabled,
    );
    stage_flag(
        &mut set,
        "issues_enabled",
        project.issues_enabled,
        desired.issues_enabled,
        &mut edit.issues_enabled,
    );
    stage_flag(
        &mut set,
        "merge_requests_enabled",
        project.merge_requests_enabled,
        desired.merge_requests_enabled,
        &mut edit.merge_requests_enabled,
    );
    stage_flag(
        &mut set,
        "wiki_enabled",
        project.wiki_enabled,
        desired.wiki_enabled,
        &mut edit.wiki_enabled,
    );
    stage_flag(
        &mut set,
        "jobs_enabled",
        project.jobs_enabled,
        desired.jobs_enabled,
        &mut edit.jobs_enabled,
    );
    stage_flag(
        &mut set,
        "snippets_enabled",
        project.snippets_enabled,
        desired.snippets_enabled,
        &mut edit.snippets_enabled,
    );
    stage_flag(
        &mut set,
        "shared_runners_enabled",
        project.shared_runners_enabled,
        desired.shared_runners_enabled,
        &mut edit.shared_runners_enabled,
    );
    stage_flag(
        &mut set,
        "public_jobs",
        project.public_jobs,
        desired.public_jobs,
        &mut edit.public_jobs,
    );

    // Archiving is a dedicated endpoint, not a field of the generic save.
    if let Some(archived) = desired.archived
        && archived != project.archived
    {
        set.record(
            "archived",
            FieldValue::Flag(project.archived),
            FieldValue::Flag(archived),
        );
        actions.push(if archived {
            StateAction::ArchiveProject(path.clone())
        } else {
            StateAction::UnarchiveProject(path.clone())
        });
    }

    let save = if edit.is_empty() {
        None
    } else {
        Some(StagedSave::Project {
            path: path.clone(),
            edit,
        })
    };

    Ok(UpdatePlan {
        change_set: set,
        actions,
        save,
    })
}

#[cfg(test)]
#[path = "../tests/reconcile/project_tests.rs"]
mod tests;
