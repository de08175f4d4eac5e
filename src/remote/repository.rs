//! Branch and tag operations within a project's repository.

use super::http_client::encode_path;
use super::types::{CreateBranchRequest, CreateTagRequest};
use super::*;
use crate::model::ProjectPath;

impl GitlabClient {
    pub fn list_branches(&self, path: &ProjectPath) -> Result<Vec<serde_json::Value>> {
        let resp = self
            .get(&format!(
                "/projects/{}/repository/branches",
                encode_path(path.as_str())
            ))
            .send()
            .context("list branches")?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("the project <{path}> does not exist in this Gitlab");
        }
        let branches = self
            .ensure_ok(resp, "list branches")?
            .json()
            .context("parse branches")?;
        Ok(branches)
    }

    pub fn branch_exists(&self, path: &ProjectPath, branch: &str) -> Result<bool> {
        let probe = self.probe(
            &format!(
                "/projects/{}/repository/branches/{}",
                encode_path(path.as_str()),
                encode_path(branch)
            ),
            "get branch",
        )?;
        Ok(probe.is_some())
    }

    pub fn create_branch(&self, path: &ProjectPath, branch: &str, reference: &str) -> Result<()> {
        let resp = self
            .post(&format!(
                "/projects/{}/repository/branches",
                encode_path(path.as_str())
            ))
            .json(&CreateBranchRequest {
                branch: branch.to_string(),
                reference: reference.to_string(),
            })
            .send()
            .context("create branch request")?;
        self.ensure_ok(resp, "create branch")?;
        Ok(())
    }

    pub fn delete_branch(&self, path: &ProjectPath, branch: &str) -> Result<()> {
        let resp = self
            .delete(&format!(
                "/projects/{}/repository/branches/{}",
                encode_path(path.as_str()),
                encode_path(branch)
            ))
            .send()
            .context("delete branch request")?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("the branch <{branch}> does not exist in project <{path}>");
        }
        self.ensure_ok(resp, "delete branch")?;
        Ok(())
    }

    pub fn list_tags(&self, path: &ProjectPath) -> Result<Vec<serde_json::Value>> {
        let resp = self
            .get(&format!(
                "/projects/{}/repository/tags",
                encode_path(path.as_str())
            ))
            .send()
            .context("list tags")?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("the project <{path}> does not exist in this Gitlab");
        }
        let tags = self
            .ensure_ok(resp, "list tags")?
            .json()
            .context("parse tags")?;
        Ok(tags)
    }

    pub fn tag_exists(&self, path: &ProjectPath, tag: &str) -> Result<bool> {
        let probe = self.probe(
            &format!(
                "/projects/{}/repository/tags/{}",
                encode_path(path.as_str()),
                encode_path(tag)
            ),
            "get tag",
        )?;
        Ok(probe.is_some())
    }

    pub fn create_tag(&self, path: &ProjectPath, tag: &str, reference: &str) -> Result<()> {
        let resp = self
            .post(&format!(
                "/projects/{}/repository/tags",
                encode_path(path.as_str())
            ))
            .json(&CreateTagRequest {
                tag_name: tag.to_string(),
                reference: reference.to_string(),
            })
            .send()
            .context("create tag request")?;
        self.ensure_ok(resp, "create tag")?;
        Ok(())
    }

    pub fn delete_tag(&self, path: &ProjectPath, tag: &str) -> Result<()> {
        let resp = self
            .delete(&format!(
                "/projects/{}/repository/tags/{}",
                encode_path(path.as_str()),
                encode_path(tag)
            ))
            .send()
            .context("delete tag request")?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("the tag <{tag}> does not exist in project <{path}>");
        }
        self.ensure_ok(resp, "delete tag")?;
        Ok(())
    }
}
