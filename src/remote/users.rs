//! User fetch/create/update/delete and the block/unblock transitions.

use super::http_client::encode_path;
use super::types::{CreateUserRequest, User, UserEdit};
use super::*;

impl GitlabClient {
    pub fn list_users(&self, username: Option<&str>) -> Result<Vec<serde_json::Value>> {
        let path = match username {
            Some(u) => format!("/users?username={}", encode_path(u)),
            None => "/users".to_string(),
        };
        let resp = self.get(&path).send().context("list users")?;
        let users = self
            .ensure_ok(resp, "list users")?
            .json()
            .context("parse users")?;
        Ok(users)
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<User> {
        let resp = self
            .get(&format!("/users?username={}", encode_path(username)))
            .send()
            .context("get user")?;
        let mut users: Vec<User> = self
            .ensure_ok(resp, "get user")?
            .json()
            .context("parse users")?;
        if users.is_empty() {
            anyhow::bail!("the user <{username}> does not exist in this Gitlab");
        }
        Ok(users.remove(0))
    }

    pub fn get_user_raw(&self, username: &str) -> Result<serde_json::Value> {
        let resp = self
            .get(&format!("/users?username={}", encode_path(username)))
            .send()
            .context("get user")?;
        let mut users: Vec<serde_json::Value> = self
            .ensure_ok(resp, "get user")?
            .json()
            .context("parse users")?;
        if users.is_empty() {
            anyhow::bail!("the user <{username}> does not exist in this Gitlab");
        }
        Ok(users.remove(0))
    }

    pub fn user_exists(&self, user_id: u64) -> Result<bool> {
        let probe = self.probe(&format!("/users/{user_id}"), "get user")?;
        Ok(probe.is_some())
    }

    pub fn create_user(&self, req: &CreateUserRequest) -> Result<User> {
        let resp = self
            .post("/users")
            .json(req)
            .send()
            .context("create user request")?;
        let user = self
            .ensure_ok(resp, "create user")?
            .json()
            .context("parse create user response")?;
        Ok(user)
    }

    pub fn save_user(&self, user_id: u64, edit: &UserEdit) -> Result<()> {
        let resp = self
            .put(&format!("/users/{user_id}"))
            .json(edit)
            .send()
            .context("update user request")?;
        self.ensure_ok(resp, "update user")?;
        Ok(())
    }

    pub fn block_user(&self, user_id: u64) -> Result<()> {
        let resp = self
            .post(&format!("/users/{user_id}/block"))
            .send()
            .context("block user request")?;
        self.ensure_ok(resp, "block user")?;
        Ok(())
    }

    pub fn unblock_user(&self, user_id: u64) -> Result<()> {
        let resp = self
            .post(&format!("/users/{user_id}/unblock"))
            .send()
            .context("unblock user request")?;
        self.ensure_ok(resp, "unblock user")?;
        Ok(())
    }

    pub fn delete_user(&self, user_id: u64) -> Result<()> {
        let resp = self
            .delete(&format!("/users/{user_id}"))
            .send()
            .context("delete user request")?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("the user id <{user_id}> does not exist in this Gitlab");
        }
        self.ensure_ok(resp, "delete user")?;
        Ok(())
    }
}
