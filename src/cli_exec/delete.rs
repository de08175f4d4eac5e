use anyhow::{Result, bail};
use crossterm::style::Color;

use gitlabctl::confirm::{Prompt, StdinPrompt};
use gitlabctl::model::{GitlabConfig, ProjectPath};
use gitlabctl::output;
use gitlabctl::remote::GitlabClient;

use crate::cli_runtime::CommandStatus;
use crate::cli_subcommands::DeleteCommands;

fn confirmed(prompt: &mut StdinPrompt, kind: &str, identifier: &str) -> Result<bool> {
    output::warn(&format!("You are about to delete the {kind} <{identifier}>"));
    let accepted = prompt.ask("Are you sure you want to do this? (yes/no): ")?;
    if !accepted {
        output::tagged(
            "TERMINATING...",
            Color::Red,
            &format!("You decided not to delete the {kind}."),
        );
    }
    Ok(accepted)
}

pub(crate) fn handle(config: GitlabConfig, command: DeleteCommands) -> Result<CommandStatus> {
    let client = GitlabClient::new(config)?;

    match command {
        DeleteCommands::Project { project_name, yes } => {
            let path: ProjectPath = project_name.parse()?;
            // Existence check up front, so the prompt never names a
            // project that is not there.
            client.get_project(&path)?;
            let mut prompt = StdinPrompt { auto_confirm: yes };
            if !confirmed(&mut prompt, "project", path.as_str())? {
                return Ok(CommandStatus::NoOp);
            }
            client.delete_project(&path)?;
            output::ok("Project has been deleted successfully");
        }

        DeleteCommands::Branch {
            branch_name,
            project_name,
            yes,
        } => {
            let path: ProjectPath = project_name.parse()?;
            if !client.branch_exists(&path, &branch_name)? {
                bail!("the branch <{branch_name}> does not exist in project <{path}>");
            }
            let mut prompt = StdinPrompt { auto_confirm: yes };
            if !confirmed(&mut prompt, "branch", &branch_name)? {
                return Ok(CommandStatus::NoOp);
            }
            client.delete_branch(&path, &branch_name)?;
            output::ok("Branch has been deleted successfully");
        }

        DeleteCommands::Tag {
            tag_name,
            project_name,
            yes,
        } => {
            let path: ProjectPath = project_name.parse()?;
            if !client.tag_exists(&path, &tag_name)? {
                bail!("the tag <{tag_name}> does not exist in project <{path}>");
            }
            let mut prompt = StdinPrompt { auto_confirm: yes };
            if !confirmed(&mut prompt, "tag", &tag_name)? {
                return Ok(CommandStatus::NoOp);
            }
            client.delete_tag(&path, &tag_name)?;
            output::ok("Tag has been deleted successfully");
        }

        DeleteCommands::User { username, yes } => {
            let user = client.get_user_by_username(&username)?;
            let mut prompt = StdinPrompt { auto_confirm: yes };
            if !confirmed(&mut prompt, "user", &username)? {
                return Ok(CommandStatus::NoOp);
            }
            client.delete_user(user.id)?;
            output::ok("User has been deleted successfully");
        }

        DeleteCommands::Group { group_path, yes } => {
            client.get_group(&group_path)?;
            let mut prompt = StdinPrompt { auto_confirm: yes };
            if !confirmed(&mut prompt, "group", &group_path)? {
                return Ok(CommandStatus::NoOp);
            }
            client.delete_group(&group_path)?;
            output::ok("Group has been deleted successfully");
        }
    }

    Ok(CommandStatus::Done)
}
