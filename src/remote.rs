use anyhow::{Context, Result};

use crate::model::GitlabConfig;

mod http_client;

pub mod types;

mod gateway;
mod groups;
mod projects;
mod repository;
mod users;

/// Blocking client for the Gitlab REST API (v4). One instance per
/// command invocation; nothing is cached between calls.
pub struct GitlabClient {
    config: GitlabConfig,
    client: reqwest::blocking::Client,
}

impl GitlabClient {
    pub fn new(config: GitlabConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("gitlabctl")
            .build()
            .context("build reqwest client")?;
        Ok(Self { config, client })
    }
}
