use anyhow::Result;
use crossterm::style::Color;

use gitlabctl::confirm::StdinPrompt;
use gitlabctl::model::{GitlabConfig, ProjectPath};
use gitlabctl::output;
use gitlabctl::reconcile::{
    GroupChanges, Outcome, ProjectChanges, UpdatePlan, UserChanges, apply_plan, reconcile_group,
    reconcile_project, reconcile_user,
};
use gitlabctl::remote::GitlabClient;

use crate::cli_runtime::CommandStatus;
use crate::cli_subcommands::UpdateCommands;

pub(crate) fn handle(config: GitlabConfig, command: UpdateCommands) -> Result<CommandStatus> {
    let client = GitlabClient::new(config)?;

    match command {
        UpdateCommands::Project {
            project_name,
            description,
            default_branch,
            visibility,
            owner,
            lfs,
            access_request,
            container_registry,
            issues,
            merge_requests,
            wiki,
            jobs,
            snippets,
            shared_runners,
            public_jobs,
            archive,
            yes,
        } => {
            let path: ProjectPath = project_name.parse()?;
            let project = client.get_project(&path)?;
            let desired = ProjectChanges {
                description,
                default_branch,
                visibility,
                owner,
                lfs_enabled: lfs,
                request_access_enabled: access_request,
                container_registry_enabled: container_registry,
                issues_enabled: issues,
                merge_requests_enabled: merge_requests,
                wiki_enabled: wiki,
                jobs_enabled: jobs,
                snippets_enabled: snippets,
                shared_runners_enabled: shared_runners,
                public_jobs,
                archived: archive,
            };

            output::tagged(
                "VALIDATING...",
                Color::Yellow,
                "The process of checking your changes is being done.",
            );
            let plan = reconcile_project(&client, &path, &project, &desired)?;
            run_plan(&client, plan, &format!("the project <{path}>"), yes)
        }

        UpdateCommands::Group {
            group_path,
            name,
            path,
            sync,
            description,
            visibility,
            yes,
        } => {
            let group = client.get_group(&group_path)?;
            let desired = GroupChanges {
                name,
                path,
                sync,
                description,
                visibility,
            };

            output::tagged(
                "VALIDATING...",
                Color::Yellow,
                "The process of checking your changes is being done.",
            );
            let plan = reconcile_group(&client, &group, &desired)?;
            run_plan(&client, plan, &format!("the group <{group_path}>"), yes)
        }

        UpdateCommands::User {
            username,
            name,
            email,
            admin,
            state,
            yes,
        } => {
            let user = client.get_user_by_username(&username)?;
            let desired = UserChanges {
                name,
                email,
                admin,
                state,
            };

            output::tagged(
                "VALIDATING...",
                Color::Yellow,
                "The process of checking your changes is being done.",
            );
            let plan = reconcile_user(&user, &desired)?;
            run_plan(&client, plan, &format!("the user <{username}>"), yes)
        }
    }
}

fn run_plan(
    client: &GitlabClient,
    plan: UpdatePlan,
    subject: &str,
    auto_confirm: bool,
) -> Result<CommandStatus> {
    if !plan.change_set.is_empty() {
        output::tagged(
            "NEW STATE",
            Color::Yellow,
            &format!("The parameters of {subject} are about to change. Please, validate the list!"),
        );
    }

    let mut prompt = StdinPrompt { auto_confirm };
    match apply_plan(client, &mut prompt, &plan, subject)? {
        Outcome::Applied { skipped_actions } => {
            output::ok("Your changes have been applied correctly.");
            for action in skipped_actions {
                output::warn(&format!(
                    "The <{action}> action was skipped on your request."
                ));
            }
            Ok(CommandStatus::Done)
        }
        Outcome::NothingToChange => {
            if plan.change_set.failures.is_empty() {
                output::ok("The changes history is empty. There is nothing to change.");
            } else {
                // All requested changes failed validation; show why.
                for failure in &plan.change_set.failures {
                    output::warn(failure);
                }
            }
            Ok(CommandStatus::NoOp)
        }
        Outcome::Declined => {
            output::tagged(
                "TERMINATING...",
                Color::Red,
                "You decided not to save the modifications.",
            );
            Ok(CommandStatus::NoOp)
        }
    }
}
