use anyhow::{Context, Result};
use crossterm::style::Color;

use gitlabctl::confirm::{Prompt, StdinPrompt};
use gitlabctl::model::{GitlabConfig, ProjectPath};
use gitlabctl::output;
use gitlabctl::reconcile::path_from_name;
use gitlabctl::remote::GitlabClient;
use gitlabctl::remote::types::{
    CreateFileRequest, CreateGroupRequest, CreateProjectRequest, CreateUserRequest,
};

use crate::cli_runtime::CommandStatus;
use crate::cli_subcommands::CreateCommands;

pub(crate) fn handle(config: GitlabConfig, command: CreateCommands) -> Result<CommandStatus> {
    let client = GitlabClient::new(config)?;

    match command {
        CreateCommands::Project {
            project_name,
            description,
            default_branch,
            group,
            visibility,
            initialize,
        } => create_project(
            &client,
            project_name,
            description,
            default_branch,
            group,
            visibility,
            initialize,
        ),

        CreateCommands::Branch {
            branch_name,
            project_name,
            reference,
        } => {
            let path: ProjectPath = project_name.parse()?;
            client.create_branch(&path, &branch_name, &reference)?;
            output::ok(&format!(
                "Branch <{branch_name}> was created correctly in project <{path}>"
            ));
            Ok(CommandStatus::Done)
        }

        CreateCommands::Tag {
            tag_name,
            project_name,
            reference,
        } => {
            let path: ProjectPath = project_name.parse()?;
            output::tagged(
                "TAGGING",
                Color::Yellow,
                &format!("Creating the tag <{tag_name}> in the project <{path}>... Please, wait."),
            );
            client.create_tag(&path, &tag_name, &reference)?;
            output::ok("Tag created successfully!");
            Ok(CommandStatus::Done)
        }

        CreateCommands::User {
            username,
            email,
            password,
            name,
            admin,
            external,
            group_creator,
            private,
            skip_confirmation,
            reset_password,
            yes,
        } => {
            let mut prompt = StdinPrompt { auto_confirm: yes };
            let mut grant_admin = false;
            if admin {
                output::warn("You are about to grant the <admin role> to this user...");
                if prompt.ask("Are you sure you want to do this? (yes/no): ")? {
                    grant_admin = true;
                } else {
                    output::warn(&format!(
                        "The user <{username}> will be created without the admin role."
                    ));
                }
            }

            let name = name.unwrap_or_else(|| capitalize(&username));
            output::tagged(
                "PROCESSING",
                Color::Yellow,
                &format!("Creating the user <{username}>"),
            );
            client.create_user(&CreateUserRequest {
                username,
                name,
                email,
                password,
                admin: grant_admin,
                can_create_group: group_creator,
                external,
                private_profile: private,
                skip_confirmation,
                reset_password,
            })?;
            output::ok("User created successfully!");
            Ok(CommandStatus::Done)
        }

        CreateCommands::Group {
            group_name,
            path,
            description,
            visibility,
            enable_lfs,
            enable_access_request,
            parent_id,
        } => {
            let path = path.unwrap_or_else(|| path_from_name(&group_name));
            output::tagged(
                "CREATING",
                Color::Yellow,
                &format!("Creating the group <{group_name}>"),
            );
            client.create_group(&CreateGroupRequest {
                name: group_name,
                path,
                description,
                visibility,
                lfs_enabled: enable_lfs.then_some(true),
                request_access_enabled: enable_access_request.then_some(true),
                parent_id,
            })?;
            output::ok("Group created successfully!");
            Ok(CommandStatus::Done)
        }
    }
}

fn create_project(
    client: &GitlabClient,
    project_name: String,
    description: Option<String>,
    default_branch: Option<String>,
    group: Option<String>,
    visibility: Option<gitlabctl::model::Visibility>,
    initialize: bool,
) -> Result<CommandStatus> {
    // Resolve the namespace first so a bad group name fails before any
    // mutation.
    let namespace_id = match &group {
        Some(group) => {
            let found = client
                .find_group(group)?
                .with_context(|| format!("the group <{group}> does not exist"))?;
            Some(found.id)
        }
        None => None,
    };

    output::tagged(
        "CREATING",
        Color::Yellow,
        &format!("Project <{project_name}> is being created, please wait..."),
    );
    let created = client.create_project(&CreateProjectRequest {
        name: project_name.clone(),
        namespace_id,
        description,
        default_branch: default_branch.clone(),
        visibility,
    })?;
    output::ok("Your project has been created! Please, check your Gitlab UI!");

    if initialize {
        let path: ProjectPath = created.path_with_namespace.parse()?;
        let branch = default_branch.unwrap_or_else(|| "master".to_string());

        output::tagged(
            "INITIALIZING",
            Color::Yellow,
            &format!("Initializing your project with a README.md on the <{branch}> branch"),
        );
        client.create_file(
            &path,
            "README.md",
            &CreateFileRequest {
                branch,
                content: format!("# Initial README of project {project_name}"),
                commit_message: "Initial commit".to_string(),
            },
        )?;
        output::ok("The project has been initialized!");
    }

    Ok(CommandStatus::Done)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
