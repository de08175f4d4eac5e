use super::*;

struct StubGateway {
    branches: Vec<&'static str>,
    users: Vec<u64>,
    parent_visibility: Option<Visibility>,
}

impl Default for StubGateway {
    fn default() -> Self {
        Self {
            branches: vec!["master"],
            users: vec![1],
            parent_visibility: None,
        }
    }
}

impl Gateway for StubGateway {
    fn branch_exists(&self, _project: &ProjectPath, branch: &str) -> Result<bool> {
        Ok(self.branches.iter().any(|b| *b == branch))
    }

    fn user_exists(&self, user_id: u64) -> Result<bool> {
        Ok(self.users.contains(&user_id))
    }

    fn group_visibility(&self, _full_path: &str) -> Result<Option<Visibility>> {
        Ok(self.parent_visibility)
    }

    fn group_visibility_by_id(&self, _id: u64) -> Result<Option<Visibility>> {
        Ok(self.parent_visibility)
    }

    fn save(&self, _save: &StagedSave) -> Result<()> {
        panic!("reconciliation must not mutate the remote");
    }

    fn perform(&self, _action: &StateAction) -> Result<()> {
        panic!("reconciliation must not mutate the remote");
    }
}

fn project() -> Project {
    serde_json::from_value(serde_json::json!({
        "id": 10,
        "name": "infra",
        "path_with_namespace": "ops/infra",
        "description": "old",
        "default_branch": "master",
        "visibility": "private",
        "archived": false,
        "lfs_enabled": true,
        "issues_enabled": true,
        "owner": {"id": 1},
        "namespace": {"id": 3, "kind": "group", "full_path": "ops"},
    }))
    .unwrap()
}

fn path() -> ProjectPath {
    "ops/infra".parse().unwrap()
}

#[test]
fn description_change_is_recorded_and_staged() {
    let desired = ProjectChanges {
        description: Some("new".into()),
        ..Default::default()
    };
    let plan =
        reconcile_project(&StubGateway::default(), &path(), &project(), &desired).unwrap();

    assert_eq!(plan.change_set.changes.len(), 1);
    let entry = &plan.change_set.changes[0];
    assert_eq!(entry.field, "description");
    assert_eq!(entry.before, FieldValue::text("old"));
    assert_eq!(entry.after, FieldValue::text("new"));
    assert!(plan.change_set.failures.is_empty());
    assert!(plan.actions.is_empty());

    match plan.save {
        Some(StagedSave::Project { edit, .. }) => {
            assert_eq!(edit.description.as_deref(), Some("new"));
            assert!(edit.default_branch.is_none());
        }
        other => panic!("expected a staged project save, got {other:?}"),
    }
}

#[test]
fn matching_values_yield_an_empty_plan() {
    let desired = ProjectChanges {
        description: Some("old".into()),
        default_branch: Some("master".into()),
        lfs_enabled: Some(true),
        issues_enabled: Some(true),
        archived: Some(false),
        ..Default::default()
    };
    let plan =
        reconcile_project(&StubGateway::default(), &path(), &project(), &desired).unwrap();

    assert!(plan.change_set.is_empty());
    assert!(plan.change_set.failures.is_empty());
    assert!(plan.actions.is_empty());
    assert!(plan.save.is_none());
}

#[test]
fn missing_branch_fails_that_field_only() {
    let desired = ProjectChanges {
        description: Some("new".into()),
        default_branch: Some("develop".into()),
        ..Default::default()
    };
    let plan =
        reconcile_project(&StubGateway::default(), &path(), &project(), &desired).unwrap();

    assert_eq!(plan.change_set.changes.len(), 1);
    assert_eq!(plan.change_set.changes[0].field, "description");
    assert_eq!(plan.change_set.failures.len(), 1);
    assert!(plan.change_set.failures[0].contains("develop"));

    match plan.save {
        Some(StagedSave::Project { edit, .. }) => assert!(edit.default_branch.is_none()),
        other => panic!("expected a staged project save, got {other:?}"),
    }
}

#[test]
fn unknown_owner_fails_without_staging() {
    let desired = ProjectChanges {
        owner: Some(999),
        ..Default::default()
    };
    let plan =
        reconcile_project(&StubGateway::default(), &path(), &project(), &desired).unwrap();

    assert!(plan.change_set.is_empty());
    assert_eq!(plan.change_set.failures.len(), 1);
    assert!(plan.change_set.failures[0].contains("999"));
    assert!(plan.save.is_none());
}

#[test]
fn known_owner_change_is_staged() {
    let gateway = StubGateway {
        users: vec![1, 5],
        ..Default::default()
    };
    let desired = ProjectChanges {
        owner: Some(5),
        ..Default::default()
    };
    let plan = reconcile_project(&gateway, &path(), &project(), &desired).unwrap();

    assert_eq!(plan.change_set.changes.len(), 1);
    assert_eq!(plan.change_set.changes[0].before, FieldValue::Number(1));
    assert_eq!(plan.change_set.changes[0].after, FieldValue::Number(5));
}

#[test]
fn public_visibility_is_blocked_under_a_private_parent() {
    let gateway = StubGateway {
        parent_visibility: Some(Visibility::Private),
        ..Default::default()
    };
    let desired = ProjectChanges {
        visibility: Some(Visibility::Public),
        ..Default::default()
    };
    let plan = reconcile_project(&gateway, &path(), &project(), &desired).unwrap();

    assert!(plan.change_set.is_empty());
    assert_eq!(plan.change_set.failures.len(), 1);
    assert!(plan.change_set.failures[0].contains("public"));
    assert!(plan.save.is_none());
}

#[test]
fn tighter_visibility_is_allowed_under_a_public_parent() {
    let gateway = StubGateway {
        parent_visibility: Some(Visibility::Public),
        ..Default::default()
    };
    let mut current = project();
    current.visibility = Visibility::Public;
    let desired = ProjectChanges {
        visibility: Some(Visibility::Internal),
        ..Default::default()
    };
    let plan = reconcile_project(&gateway, &path(), &current, &desired).unwrap();

    assert_eq!(plan.change_set.changes.len(), 1);
    assert_eq!(plan.change_set.changes[0].field, "visibility");
}

#[test]
fn archiving_stages_an_action_instead_of_an_edit() {
    let desired = ProjectChanges {
        archived: Some(true),
        ..Default::default()
    };
    let plan =
        reconcile_project(&StubGateway::default(), &path(), &project(), &desired).unwrap();

    assert_eq!(plan.change_set.changes.len(), 1);
    assert_eq!(plan.change_set.changes[0].field, "archived");
    assert_eq!(plan.actions, vec![StateAction::ArchiveProject(path())]);
    assert!(plan.save.is_none(), "archived must not enter the generic save");
}

#[test]
fn unarchiving_stages_the_opposite_action() {
    let mut current = project();
    current.archived = true;
    let desired = ProjectChanges {
        archived: Some(false),
        ..Default::default()
    };
    let plan = reconcile_project(&StubGateway::default(), &path(), &current, &desired).unwrap();

    assert_eq!(plan.actions, vec![StateAction::UnarchiveProject(path())]);
}

#[test]
fn flag_toggles_stage_only_real_differences() {
    let desired = ProjectChanges {
        lfs_enabled: Some(false),
        wiki_enabled: Some(false),
        ..Default::default()
    };
    let plan =
        reconcile_project(&StubGateway::default(), &path(), &project(), &desired).unwrap();

    // wiki_enabled is already false on the fetched project.
    assert_eq!(plan.change_set.changes.len(), 1);
    assert_eq!(plan.change_set.changes[0].field, "lfs_enabled");
    match plan.save {
        Some(StagedSave::Project { edit, .. }) => {
            assert_eq!(edit.lfs_enabled, Some(false));
            assert!(edit.wiki_enabled.is_none());
        }
        other => panic!("expected a staged project save, got {other:?}"),
    }
}
