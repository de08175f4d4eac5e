//! [`Gateway`] implementation backed by the live Gitlab API.

use super::*;
use crate::model::{ProjectPath, Visibility};
use crate::reconcile::{Gateway, StagedSave, StateAction};

impl Gateway for GitlabClient {
    fn branch_exists(&self, project: &ProjectPath, branch: &str) -> Result<bool> {
        GitlabClient::branch_exists(self, project, branch)
    }

    fn user_exists(&self, user_id: u64) -> Result<bool> {
        GitlabClient::user_exists(self, user_id)
    }

    fn group_visibility(&self, full_path: &str) -> Result<Option<Visibility>> {
        GitlabClient::group_visibility(self, full_path)
    }

    fn group_visibility_by_id(&self, id: u64) -> Result<Option<Visibility>> {
        GitlabClient::group_visibility_by_id(self, id)
    }

    fn save(&self, save: &StagedSave) -> Result<()> {
        match save {
            StagedSave::Project { path, edit } => self.save_project(path, edit),
            StagedSave::Group { path, edit } => self.save_group(path, edit),
            StagedSave::User { id, edit } => self.save_user(*id, edit),
        }
    }

    fn perform(&self, action: &StateAction) -> Result<()> {
        match action {
            StateAction::ArchiveProject(path) => self.archive_project(path),
            StateAction::UnarchiveProject(path) => self.unarchive_project(path),
            StateAction::BlockUser { id, .. } => self.block_user(*id),
            StateAction::UnblockUser { id, .. } => self.unblock_user(*id),
        }
    }
}
