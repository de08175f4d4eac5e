use clap::{Args, Subcommand};

use gitlabctl::model::Visibility;
use gitlabctl::output::DisplayOpts;
use gitlabctl::reconcile::UserState;

/// Output-mode flags shared by the listing commands.
#[derive(Args)]
pub(crate) struct DisplayArgs {
    /// Display results in raw format (just text), for pipeline usage
    #[arg(long)]
    pub(crate) raw: bool,

    /// Output the full JSON object of each result
    #[arg(long, short = 'v')]
    pub(crate) verbose: bool,

    /// Show the full JSON beautifully
    #[arg(long)]
    pub(crate) pretty: bool,
}

impl DisplayArgs {
    pub(crate) fn opts(&self) -> DisplayOpts {
        DisplayOpts {
            raw: self.raw,
            verbose: self.verbose,
            pretty: self.pretty,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum GetCommands {
    /// List all projects in Gitlab
    Projects {
        /// Specific group to search in
        #[arg(long, short = 'g')]
        group: Option<String>,
        /// Show project names in namespace form
        #[arg(long)]
        with_namespace: bool,
        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Get a specific parameter from one project
    Project {
        /// The project to use, as <namespace>/<project_name>
        #[arg(long, short = 'p')]
        project_name: String,
        /// Parameter to return; `all` dumps the whole object
        parameter: String,
        sub_parameter: Option<String>,
        /// Show the `all` output beautifully
        #[arg(long)]
        pretty: bool,
    },

    /// List all branches inside a project
    Branches {
        /// The project to use, as <namespace>/<project_name>
        project_name: String,
        #[command(flatten)]
        display: DisplayArgs,
    },

    /// List all tags inside a project
    Tags {
        /// The project to use, as <namespace>/<project_name>
        project_name: String,
        #[command(flatten)]
        display: DisplayArgs,
    },

    /// List registered users
    Users {
        /// Username to search
        #[arg(long, short = 'n')]
        username: Option<String>,
        /// Output results using the username instead of the display name
        #[arg(long)]
        output_username: bool,
        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Get a specific parameter from one user
    User {
        /// The username to search with
        #[arg(long, short = 'n')]
        username: String,
        /// Parameter to return; `all` dumps the whole object
        parameter: String,
        /// Show the `all` output beautifully
        #[arg(long)]
        pretty: bool,
    },

    /// List groups created on Gitlab
    Groups {
        /// Single group to look up instead of listing all of them
        #[arg(long, short = 'g')]
        group_name: Option<String>,
        /// Return the path parameter instead of the name one
        #[arg(long)]
        path: bool,
        #[command(flatten)]
        display: DisplayArgs,
    },

    /// Get a specific parameter from one group
    Group {
        /// Group path to search with
        #[arg(long, short = 'g')]
        group_name: String,
        /// Parameter to return; `all` dumps the whole object
        parameter: String,
        /// Show the `all` output beautifully
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum CreateCommands {
    /// Create a project
    Project {
        project_name: String,
        /// Description for the project
        #[arg(long)]
        description: Option<String>,
        /// Default branch to use
        #[arg(long)]
        default_branch: Option<String>,
        /// Group/namespace to create the project under
        #[arg(long, short = 'g')]
        group: Option<String>,
        /// Visibility of the project
        #[arg(long, value_enum)]
        visibility: Option<Visibility>,
        /// Initialize the project with a README.md
        #[arg(long, visible_alias = "init")]
        initialize: bool,
    },

    /// Create a branch from another one
    Branch {
        branch_name: String,
        /// The project to use, as <namespace>/<project_name>
        #[arg(long, short = 'p')]
        project_name: String,
        /// Branch to use as a reference
        #[arg(long = "ref", short = 'r', default_value = "master")]
        reference: String,
    },

    /// Create a tag inside a project
    Tag {
        tag_name: String,
        /// The project to use, as <namespace>/<project_name>
        #[arg(long, short = 'p')]
        project_name: String,
        /// Branch to use as a reference
        #[arg(long = "ref", short = 'r', default_value = "master")]
        reference: String,
    },

    /// Create a user account
    User {
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Display name (defaults to the capitalized username)
        #[arg(long)]
        name: Option<String>,
        /// Grant the admin role (asks for confirmation)
        #[arg(long)]
        admin: bool,
        /// Mark the account as external
        #[arg(long)]
        external: bool,
        /// Allow the user to create groups
        #[arg(long)]
        group_creator: bool,
        /// Make the profile private
        #[arg(long)]
        private: bool,
        /// Skip the account confirmation email
        #[arg(long)]
        skip_confirmation: bool,
        /// Send a password-reset link
        #[arg(long)]
        reset_password: bool,
        /// Answer yes to every confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Create a group
    Group {
        group_name: String,
        /// Group path (defaults to the lowercased, dash-joined name)
        #[arg(long)]
        path: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_enum)]
        visibility: Option<Visibility>,
        /// Enable Git LFS for the group
        #[arg(long)]
        enable_lfs: bool,
        /// Enable the request-access option
        #[arg(long)]
        enable_access_request: bool,
        /// Parent group id, for subgroups
        #[arg(long)]
        parent_id: Option<u64>,
    },
}

#[derive(Subcommand)]
pub(crate) enum UpdateCommands {
    /// Update configurable values of a project
    Project {
        /// The project to update, as <namespace>/<project_name>
        project_name: String,
        /// Edit the project's description
        #[arg(long)]
        description: Option<String>,
        /// Edit the default branch (must exist in the project)
        #[arg(long)]
        default_branch: Option<String>,
        /// Change the project's visibility
        #[arg(long, value_enum)]
        visibility: Option<Visibility>,
        /// Change the project's owner to this user id
        #[arg(long)]
        owner: Option<u64>,
        /// Toggle Git LFS
        #[arg(long, value_name = "BOOL")]
        lfs: Option<bool>,
        /// Toggle the request-access option
        #[arg(long, value_name = "BOOL")]
        access_request: Option<bool>,
        /// Toggle the container registry
        #[arg(long, value_name = "BOOL")]
        container_registry: Option<bool>,
        /// Toggle the creation of issues
        #[arg(long, value_name = "BOOL")]
        issues: Option<bool>,
        /// Toggle the creation of merge requests
        #[arg(long, value_name = "BOOL")]
        merge_requests: Option<bool>,
        /// Toggle the wiki
        #[arg(long, value_name = "BOOL")]
        wiki: Option<bool>,
        /// Toggle jobs
        #[arg(long, value_name = "BOOL")]
        jobs: Option<bool>,
        /// Toggle snippets
        #[arg(long, value_name = "BOOL")]
        snippets: Option<bool>,
        /// Toggle shared runners
        #[arg(long, value_name = "BOOL")]
        shared_runners: Option<bool>,
        /// Toggle jobs visibility
        #[arg(long, value_name = "BOOL")]
        public_jobs: Option<bool>,
        /// Archive (true) or unarchive (false) the project
        #[arg(long, value_name = "BOOL")]
        archive: Option<bool>,
        /// Answer yes to every confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Update values of a group
    Group {
        /// The full path of the group to update
        group_path: String,
        /// Rename the group
        #[arg(long)]
        name: Option<String>,
        /// Change the group path
        #[arg(long)]
        path: Option<String>,
        /// Keep name and path in step when only one of them is given
        #[arg(long)]
        sync: bool,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_enum)]
        visibility: Option<Visibility>,
        /// Answer yes to every confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Update values of a user account
    User {
        username: String,
        /// Change the display name
        #[arg(long)]
        name: Option<String>,
        /// Change the email address
        #[arg(long)]
        email: Option<String>,
        /// Grant or revoke the admin role
        #[arg(long, value_name = "BOOL")]
        admin: Option<bool>,
        /// Block or reactivate the account
        #[arg(long, value_enum)]
        state: Option<UserState>,
        /// Answer yes to every confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum DeleteCommands {
    /// Delete a project from Gitlab
    Project {
        /// The project to delete, as <namespace>/<project_name>
        project_name: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Delete a branch from a project
    Branch {
        branch_name: String,
        /// The project to use, as <namespace>/<project_name>
        #[arg(long, short = 'p')]
        project_name: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Delete a tag from a project
    Tag {
        tag_name: String,
        /// The project to use, as <namespace>/<project_name>
        #[arg(long, short = 'p')]
        project_name: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Delete a user account
    User {
        username: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Delete a group
    Group {
        group_path: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
