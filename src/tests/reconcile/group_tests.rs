use super::*;
use crate::reconcile::{StagedSave, StateAction};

struct StubGateway {
    parent_visibility: Option<Visibility>,
}

impl Gateway for StubGateway {
    fn branch_exists(&self, _project: &crate::model::ProjectPath, _branch: &str) -> Result<bool> {
        unreachable!("groups never validate branches")
    }

    fn user_exists(&self, _user_id: u64) -> Result<bool> {
        unreachable!("groups never validate users")
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

fn gateway() -> StubGateway {
    StubGateway {
        parent_visibility: None,
    }
}

fn group() -> Group {
    serde_json::from_value(serde_json::json!({
        "id": 3,
        "name": "Ops Team",
        "path": "ops-team",
        "full_path": "ops-team",
        "description": "old",
        "visibility": "private",
    }))
    .unwrap()
}

#[test]
fn rename_with_sync_derives_the_path() {
    let desired = GroupChanges {
        name: Some("Platform Team".into()),
        sync: true,
        ..Default::default()
    };
    let plan = reconcile_group(&gateway(), &group(), &desired).unwrap();

    let fields: Vec<_> = plan.change_set.changes.iter().map(|c| c.field).collect();
    assert_eq!(fields, vec!["name", "path"]);
    assert_eq!(
        plan.change_set.changes[1].after,
        FieldValue::text("platform-team")
    );
}

#[test]
fn rename_without_sync_leaves_the_path_alone() {
    let desired = GroupChanges {
        name: Some("Platform Team".into()),
        ..Default::default()
    };
    let plan = reconcile_group(&gateway(), &group(), &desired).unwrap();

    let fields: Vec<_> = plan.change_set.changes.iter().map(|c| c.field).collect();
    assert_eq!(fields, vec!["name"]);
}

#[test]
fn sync_skips_a_derived_path_that_already_matches() {
    let desired = GroupChanges {
        name: Some("Ops Team X".into()),
        sync: true,
        ..Default::default()
    };
    let mut current = group();
    current.path = "ops-team-x".into();
    let plan = reconcile_group(&gateway(), &current, &desired).unwrap();

    let fields: Vec<_> = plan.change_set.changes.iter().map(|c| c.field).collect();
    assert_eq!(fields, vec!["name"]);
}

#[test]
fn explicit_path_wins_over_sync_derivation() {
    let desired = GroupChanges {
        name: Some("Platform Team".into()),
        path: Some("plat".into()),
        sync: true,
        ..Default::default()
    };
    let plan = reconcile_group(&gateway(), &group(), &desired).unwrap();

    let fields: Vec<_> = plan.change_set.changes.iter().map(|c| c.field).collect();
    assert_eq!(fields, vec!["name", "path"]);
    assert_eq!(plan.change_set.changes[1].after, FieldValue::text("plat"));
}

#[test]
fn path_change_pulls_the_name_along_when_synced() {
    let desired = GroupChanges {
        path: Some("platform".into()),
        sync: true,
        ..Default::default()
    };
    let plan = reconcile_group(&gateway(), &group(), &desired).unwrap();

    let fields: Vec<_> = plan.change_set.changes.iter().map(|c| c.field).collect();
    assert_eq!(fields, vec!["path", "name"]);
    assert_eq!(
        plan.change_set.changes[1].after,
        FieldValue::text("platform")
    );
}

#[test]
fn visibility_conflict_under_the_parent_is_a_failure() {
    let gateway = StubGateway {
        parent_visibility: Some(Visibility::Private),
    };
    let mut current = group();
    current.parent_id = Some(1);
    let desired = GroupChanges {
        visibility: Some(Visibility::Public),
        ..Default::default()
    };
    let plan = reconcile_group(&gateway, &current, &desired).unwrap();

    assert!(plan.change_set.is_empty());
    assert_eq!(plan.change_set.failures.len(), 1);
    assert!(plan.save.is_none());
}

#[test]
fn top_level_group_visibility_changes_freely() {
    let desired = GroupChanges {
        visibility: Some(Visibility::Public),
        ..Default::default()
    };
    let plan = reconcile_group(&gateway(), &group(), &desired).unwrap();

    assert_eq!(plan.change_set.changes.len(), 1);
    assert_eq!(plan.change_set.changes[0].field, "visibility");
}

#[test]
fn no_supplied_fields_means_nothing_to_change() {
    let plan = reconcile_group(&gateway(), &group(), &GroupChanges::default()).unwrap();
    assert!(plan.change_set.is_empty());
    assert!(plan.save.is_none());
}
