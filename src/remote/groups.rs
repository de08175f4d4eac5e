//! Group fetch/create/update/delete and namespace lookups.

use super::http_client::encode_path;
use super::types::{CreateGroupRequest, Group, GroupEdit};
use super::*;
use crate::model::Visibility;

impl GitlabClient {
    pub fn get_group(&self, path: &str) -> Result<Group> {
        let resp = self
            .get(&format!("/groups/{}", encode_path(path)))
            .send()
            .context("get group")?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("the group <{path}> does not exist in this Gitlab");
        }
        let group = self
            .ensure_ok(resp, "get group")?
            .json()
            .context("parse group")?;
        Ok(group)
    }

    pub fn get_group_raw(&self, path: &str) -> Result<serde_json::Value> {
        let resp = self
            .get(&format!("/groups/{}", encode_path(path)))
            .send()
            .context("get group")?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("the group <{path}> does not exist in this Gitlab");
        }
        let group = self
            .ensure_ok(resp, "get group")?
            .json()
            .context("parse group")?;
        Ok(group)
    }

    pub fn list_groups(&self) -> Result<Vec<serde_json::Value>> {
        let resp = self.get("/groups").send().context("list groups")?;
        let groups = self
            .ensure_ok(resp, "list groups")?
            .json()
            .context("parse groups")?;
        Ok(groups)
    }

    /// First group whose path matches `name`, if any. Used to resolve a
    /// namespace id before creating a project in a group.
    pub fn find_group(&self, name: &str) -> Result<Option<Group>> {
        let resp = self
            .get(&format!("/groups?search={}", encode_path(name)))
            .send()
            .context("search groups")?;
        let groups: Vec<Group> = self
            .ensure_ok(resp, "search groups")?
            .json()
            .context("parse group search")?;
        Ok(groups.into_iter().find(|g| g.path == name || g.full_path == name))
    }

    pub fn group_visibility(&self, full_path: &str) -> Result<Option<Visibility>> {
        let probe = self.probe(&format!("/groups/{}", encode_path(full_path)), "get group")?;
        match probe {
            Some(value) => {
                let group: Group = serde_json::from_value(value).context("parse group")?;
                Ok(Some(group.visibility))
            }
            None => Ok(None),
        }
    }

    pub fn group_visibility_by_id(&self, id: u64) -> Result<Option<Visibility>> {
        let probe = self.probe(&format!("/groups/{id}"), "get group")?;
        match probe {
            Some(value) => {
                let group: Group = serde_json::from_value(value).context("parse group")?;
                Ok(Some(group.visibility))
            }
            None => Ok(None),
        }
    }

    pub fn create_group(&self, req: &CreateGroupRequest) -> Result<Group> {
        let resp = self
            .post("/groups")
            .json(req)
            .send()
            .context("create group request")?;
        let group = self
            .ensure_ok(resp, "create group")?
            .json()
            .context("parse create group response")?;
        Ok(group)
    }

    pub fn save_group(&self, path: &str, edit: &GroupEdit) -> Result<()> {
        let resp = self
            .put(&format!("/groups/{}", encode_path(path)))
            .json(edit)
            .send()
            .context("update group request")?;
        self.ensure_ok(resp, "update group")?;
        Ok(())
    }

    pub fn delete_group(&self, path: &str) -> Result<()> {
        let resp = self
            .delete(&format!("/groups/{}", encode_path(path)))
            .send()
            .context("delete group request")?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("the group <{path}> does not exist in this Gitlab");
        }
        self.ensure_ok(resp, "delete group")?;
        Ok(())
    }
}
