use anyhow::Result;

use gitlabctl::model::{GitlabConfig, ProjectPath};
use gitlabctl::output;
use gitlabctl::remote::GitlabClient;

use crate::cli_runtime::CommandStatus;
use crate::cli_subcommands::GetCommands;

pub(crate) fn handle(config: GitlabConfig, command: GetCommands) -> Result<CommandStatus> {
    let client = GitlabClient::new(config)?;

    match command {
        GetCommands::Projects {
            group,
            with_namespace,
            display,
        } => {
            let projects = match group {
                Some(group) => client.list_group_projects(&group)?,
                None => client.list_projects()?,
            };
            let key = if with_namespace {
                "path_with_namespace"
            } else {
                "name"
            };
            for project in &projects {
                output::print_resource(project, key, display.opts())?;
            }
        }

        GetCommands::Project {
            project_name,
            parameter,
            sub_parameter,
            pretty,
        } => {
            let path: ProjectPath = project_name.parse()?;
            let project = client.get_project_raw(&path)?;
            output::print_parameter(&project, &parameter, sub_parameter.as_deref(), pretty)?;
        }

        GetCommands::Branches {
            project_name,
            display,
        } => {
            let path: ProjectPath = project_name.parse()?;
            for branch in &client.list_branches(&path)? {
                output::print_resource(branch, "name", display.opts())?;
            }
        }

        GetCommands::Tags {
            project_name,
            display,
        } => {
            let path: ProjectPath = project_name.parse()?;
            for tag in &client.list_tags(&path)? {
                output::print_resource(tag, "name", display.opts())?;
            }
        }

        GetCommands::Users {
            username,
            output_username,
            display,
        } => {
            let key = if output_username { "username" } else { "name" };
            for user in &client.list_users(username.as_deref())? {
                output::print_resource(user, key, display.opts())?;
            }
        }

        GetCommands::User {
            username,
            parameter,
            pretty,
        } => {
            let user = client.get_user_raw(&username)?;
            output::print_parameter(&user, &parameter, None, pretty)?;
        }

        GetCommands::Groups {
            group_name,
            path,
            display,
        } => {
            let key = if path { "path" } else { "name" };
            match group_name {
                Some(name) => {
                    let group = client.get_group_raw(&name)?;
                    output::print_resource(&group, key, display.opts())?;
                }
                None => {
                    for group in &client.list_groups()? {
                        output::print_resource(group, key, display.opts())?;
                    }
                }
            }
        }

        GetCommands::Group {
            group_name,
            parameter,
            pretty,
        } => {
            let group = client.get_group_raw(&group_name)?;
            output::print_parameter(&group, &parameter, None, pretty)?;
        }
    }

    Ok(CommandStatus::Done)
}
