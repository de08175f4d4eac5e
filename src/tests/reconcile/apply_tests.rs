use std::cell::RefCell;
use std::collections::VecDeque;

use super::*;
use crate::model::{ProjectPath, Visibility};
use crate::reconcile::{ChangeSet, FieldValue, StagedSave, StateAction};
use crate::remote::types::ProjectEdit;

#[derive(Default)]
struct RecordingGateway {
    calls: RefCell<Vec<String>>,
}

impl Gateway for RecordingGateway {
    fn branch_exists(&self, _project: &ProjectPath, _branch: &str) -> Result<bool> {
        unreachable!("apply never validates")
    }

    fn user_exists(&self, _user_id: u64) -> Result<bool> {
        unreachable!("apply never validates")
    }

    fn group_visibility(&self, _full_path: &str) -> Result<Option<Visibility>> {
        unreachable!("apply never validates")
    }

    fn group_visibility_by_id(&self, _id: u64) -> Result<Option<Visibility>> {
        unreachable!("apply never validates")
    }

    fn save(&self, _save: &StagedSave) -> Result<()> {
        self.calls.borrow_mut().push("save".to_string());
        Ok(())
    }

    fn perform(&self, action: &StateAction) -> Result<()> {
        self.calls.borrow_mut().push(action.label().to_string());
        Ok(())
    }
}

/// Prompt fed from a fixed list of answers; panics when the gate asks
/// more questions than the test scripted.
struct ScriptedPrompt {
    answers: VecDeque<bool>,
}

impl ScriptedPrompt {
    fn new(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&mut self, _question: &str) -> Result<bool> {
        Ok(self.answers.pop_front().expect("unexpected prompt"))
    }
}

fn path() -> ProjectPath {
    "ops/infra".parse().unwrap()
}

fn save_with_description() -> StagedSave {
    StagedSave::Project {
        path: path(),
        edit: ProjectEdit {
            description: Some("new".into()),
            ..Default::default()
        },
    }
}

fn description_change() -> ChangeSet {
    let mut set = ChangeSet::default();
    set.record("description", FieldValue::text("old"), FieldValue::text("new"));
    set
}

#[test]
fn empty_change_set_short_circuits_without_prompting() {
    let gateway = RecordingGateway::default();
    let mut prompt = ScriptedPrompt::new(&[]);
    let plan = UpdatePlan {
        change_set: ChangeSet::default(),
        actions: Vec::new(),
        save: None,
    };

    let outcome = apply_plan(&gateway, &mut prompt, &plan, "the project <ops/infra>").unwrap();
    assert_eq!(outcome, Outcome::NothingToChange);
    assert!(gateway.calls.borrow().is_empty());
}

#[test]
fn declining_the_aggregate_confirmation_makes_no_remote_calls() {
    let gateway = RecordingGateway::default();
    let mut prompt = ScriptedPrompt::new(&[false]);
    let plan = UpdatePlan {
        change_set: description_change(),
        actions: vec![StateAction::ArchiveProject(path())],
        save: Some(save_with_description()),
    };

    let outcome = apply_plan(&gateway, &mut prompt, &plan, "the project <ops/infra>").unwrap();
    assert_eq!(outcome, Outcome::Declined);
    assert!(gateway.calls.borrow().is_empty());
}

#[test]
fn declined_secondary_skips_the_action_but_keeps_the_save() {
    let gateway = RecordingGateway::default();
    // yes to the aggregate, no to the archive action
    let mut prompt = ScriptedPrompt::new(&[true, false]);
    let mut change_set = description_change();
    change_set.record("archived", FieldValue::Flag(false), FieldValue::Flag(true));
    let plan = UpdatePlan {
        change_set,
        actions: vec![StateAction::ArchiveProject(path())],
        save: Some(save_with_description()),
    };

    let outcome = apply_plan(&gateway, &mut prompt, &plan, "the project <ops/infra>").unwrap();
    assert_eq!(
        outcome,
        Outcome::Applied {
            skipped_actions: vec!["archive"]
        }
    );
    assert_eq!(*gateway.calls.borrow(), vec!["save".to_string()]);
}

#[test]
fn actions_run_before_the_generic_save() {
    let gateway = RecordingGateway::default();
    let mut prompt = ScriptedPrompt::new(&[true, true]);
    let mut change_set = description_change();
    change_set.record("archived", FieldValue::Flag(false), FieldValue::Flag(true));
    let plan = UpdatePlan {
        change_set,
        actions: vec![StateAction::ArchiveProject(path())],
        save: Some(save_with_description()),
    };

    let outcome = apply_plan(&gateway, &mut prompt, &plan, "the project <ops/infra>").unwrap();
    assert_eq!(
        outcome,
        Outcome::Applied {
            skipped_actions: vec![]
        }
    );
    assert_eq!(
        *gateway.calls.borrow(),
        vec!["archive".to_string(), "save".to_string()]
    );
}

#[test]
fn action_only_plans_skip_the_generic_save() {
    let gateway = RecordingGateway::default();
    let mut prompt = ScriptedPrompt::new(&[true, true]);
    let mut change_set = ChangeSet::default();
    change_set.record("state", FieldValue::text("active"), FieldValue::text("blocked"));
    let plan = UpdatePlan {
        change_set,
        actions: vec![StateAction::BlockUser {
            id: 7,
            username: "jdoe".into(),
        }],
        save: None,
    };

    let outcome = apply_plan(&gateway, &mut prompt, &plan, "the user <jdoe>").unwrap();
    assert_eq!(
        outcome,
        Outcome::Applied {
            skipped_actions: vec![]
        }
    );
    assert_eq!(*gateway.calls.borrow(), vec!["block".to_string()]);
}
