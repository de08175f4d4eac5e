//! Project fetch/create/update/delete plus the archive state transitions.

use super::http_client::encode_path;
use super::types::{CreateFileRequest, CreateProjectRequest, Project, ProjectEdit};
use super::*;
use crate::model::ProjectPath;

impl GitlabClient {
    pub fn get_project(&self, path: &ProjectPath) -> Result<Project> {
        let value = self.get_project_raw(path)?;
        serde_json::from_value(value).context("parse project")
    }

    /// Raw JSON form of a project, for display commands and as the single
    /// fetch behind [`Self::get_project`].
    pub fn get_project_raw(&self, path: &ProjectPath) -> Result<serde_json::Value> {
        let resp = self
            .get(&format!("/projects/{}", encode_path(path.as_str())))
            .send()
            .context("get project")?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("the project <{path}> does not exist in this Gitlab");
        }
        let project = self
            .ensure_ok(resp, "get project")?
            .json()
            .context("parse project")?;
        Ok(project)
    }

    pub fn list_projects(&self) -> Result<Vec<serde_json::Value>> {
        let resp = self.get("/projects").send().context("list projects")?;
        let projects = self
            .ensure_ok(resp, "list projects")?
            .json()
            .context("parse projects")?;
        Ok(projects)
    }

    pub fn list_group_projects(&self, group: &str) -> Result<Vec<serde_json::Value>> {
        let resp = self
            .get(&format!("/groups/{}/projects", encode_path(group)))
            .send()
            .context("list group projects")?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("the group <{group}> does not exist in this Gitlab");
        }
        let projects = self
            .ensure_ok(resp, "list group projects")?
            .json()
            .context("parse group projects")?;
        Ok(projects)
    }

    pub fn create_project(&self, req: &CreateProjectRequest) -> Result<Project> {
        let resp = self
            .post("/projects")
            .json(req)
            .send()
            .context("create project request")?;
        let project = self
            .ensure_ok(resp, "create project")?
            .json()
            .context("parse create project response")?;
        Ok(project)
    }

    /// Commit a new file to the project's repository (used to bootstrap a
    /// README on freshly created projects).
    pub fn create_file(
        &self,
        path: &ProjectPath,
        file_path: &str,
        req: &CreateFileRequest,
    ) -> Result<()> {
        let resp = self
            .post(&format!(
                "/projects/{}/repository/files/{}",
                encode_path(path.as_str()),
                encode_path(file_path)
            ))
            .json(req)
            .send()
            .context("create repository file request")?;
        self.ensure_ok(resp, "create repository file")?;
        Ok(())
    }

    pub fn save_project(&self, path: &ProjectPath, edit: &ProjectEdit) -> Result<()> {
        let resp = self
            .put(&format!("/projects/{}", encode_path(path.as_str())))
            .json(edit)
            .send()
            .context("update project request")?;
        self.ensure_ok(resp, "update project")?;
        Ok(())
    }

    pub fn archive_project(&self, path: &ProjectPath) -> Result<()> {
        let resp = self
            .post(&format!("/projects/{}/archive", encode_path(path.as_str())))
            .send()
            .context("archive project request")?;
        self.ensure_ok(resp, "archive project")?;
        Ok(())
    }

    pub fn unarchive_project(&self, path: &ProjectPath) -> Result<()> {
        let resp = self
            .post(&format!(
                "/projects/{}/unarchive",
                encode_path(path.as_str())
            ))
            .send()
            .context("unarchive project request")?;
        self.ensure_ok(resp, "unarchive project")?;
        Ok(())
    }

    pub fn delete_project(&self, path: &ProjectPath) -> Result<()> {
        let resp = self
            .delete(&format!("/projects/{}", encode_path(path.as_str())))
            .send()
            .context("delete project request")?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("the project <{path}> does not exist in this Gitlab");
        }
        self.ensure_ok(resp, "delete project")?;
        Ok(())
    }
}
