use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Resolved connection settings, threaded into [`crate::remote::GitlabClient`]
/// at construction and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct GitlabConfig {
    pub base_url: String,
    pub token: String,
}

impl GitlabConfig {
    pub fn resolve(url: Option<String>, token: Option<String>) -> Result<Self> {
        let base_url = url.context("no Gitlab URL configured (pass --url or set GITLABCTL_URL)")?;
        let token =
            token.context("no private token configured (pass --token or set GITLABCTL_TOKEN)")?;
        Ok(Self { base_url, token })
    }
}

/// A project identifier in `<namespace>/<name>` form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectPath(String);

impl ProjectPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `<namespace>` half of the path.
    pub fn namespace(&self) -> &str {
        self.0.split('/').next().unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.0.split('/').nth(1).unwrap_or_default()
    }
}

impl FromStr for ProjectPath {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
            anyhow::bail!("the project must be defined as <namespace>/<project_name>, got `{s}`");
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Gitlab visibility levels, ordered from most restrictive to loosest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
    Internal,
    Public,
}

impl Visibility {
    fn rank(self) -> u8 {
        match self {
            Visibility::Private => 0,
            Visibility::Internal => 1,
            Visibility::Public => 2,
        }
    }

    /// Whether a resource with this visibility may live under a parent
    /// namespace of `parent` visibility. A child can never be looser than
    /// its parent.
    pub fn allowed_under(self, parent: Visibility) -> bool {
        self.rank() <= parent.rank()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Internal => "internal",
            Visibility::Public => "public",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
