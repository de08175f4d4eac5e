use super::*;

fn user() -> User {
    serde_json::from_value(serde_json::json!({
        "id": 7,
        "username": "jdoe",
        "name": "J. Doe",
        "email": "jdoe@example.com",
        "state": "active",
        "is_admin": false,
    }))
    .unwrap()
}

#[test]
fn blocking_stages_an_action_instead_of_an_edit() {
    let desired = UserChanges {
        state: Some(UserState::Blocked),
        ..Default::default()
    };
    let plan = reconcile_user(&user(), &desired).unwrap();

    assert_eq!(plan.change_set.changes.len(), 1);
    assert_eq!(plan.change_set.changes[0].field, "state");
    assert_eq!(
        plan.actions,
        vec![StateAction::BlockUser {
            id: 7,
            username: "jdoe".into()
        }]
    );
    assert!(plan.save.is_none(), "state must not enter the generic save");
}

#[test]
fn unblocking_a_blocked_user_stages_the_opposite_action() {
    let mut current = user();
    current.state = "blocked".into();
    let desired = UserChanges {
        state: Some(UserState::Active),
        ..Default::default()
    };
    let plan = reconcile_user(&current, &desired).unwrap();

    assert_eq!(
        plan.actions,
        vec![StateAction::UnblockUser {
            id: 7,
            username: "jdoe".into()
        }]
    );
}

#[test]
fn requesting_the_current_state_is_a_no_op() {
    let desired = UserChanges {
        state: Some(UserState::Active),
        ..Default::default()
    };
    let plan = reconcile_user(&user(), &desired).unwrap();

    assert!(plan.change_set.is_empty());
    assert!(plan.actions.is_empty());
}

#[test]
fn admin_grant_and_profile_edits_share_one_save() {
    let desired = UserChanges {
        name: Some("Jane Doe".into()),
        admin: Some(true),
        ..Default::default()
    };
    let plan = reconcile_user(&user(), &desired).unwrap();

    let fields: Vec<_> = plan.change_set.changes.iter().map(|c| c.field).collect();
    assert_eq!(fields, vec!["name", "admin"]);
    match plan.save {
        Some(StagedSave::User { id, edit }) => {
            assert_eq!(id, 7);
            assert_eq!(edit.name.as_deref(), Some("Jane Doe"));
            assert_eq!(edit.admin, Some(true));
            assert!(edit.email.is_none());
        }
        other => panic!("expected a staged user save, got {other:?}"),
    }
}

#[test]
fn matching_email_produces_no_entry() {
    let desired = UserChanges {
        email: Some("jdoe@example.com".into()),
        ..Default::default()
    };
    let plan = reconcile_user(&user(), &desired).unwrap();
    assert!(plan.change_set.is_empty());
}
