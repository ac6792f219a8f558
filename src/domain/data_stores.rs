use super::{
    Email, MemberId, MemberUpdate, NewMembership, Project, ProjectId,
    ProjectMember, ProjectName, ProjectUpdate, Reconciliation,
};
use color_eyre::eyre::Report;
use thiserror::Error;

#[async_trait::async_trait]
pub trait ProjectStore {
    async fn add_project(
        &mut self,
        name: &ProjectName,
    ) -> Result<Project, ProjectStoreError>;
    async fn get_projects(&self) -> Result<Vec<Project>, ProjectStoreError>;
    async fn get_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Project, ProjectStoreError>;
    async fn update_project(
        &mut self,
        project_id: &ProjectId,
        update: &ProjectUpdate,
    ) -> Result<Project, ProjectStoreError>;
    /// Deletes the project and its memberships. Members are kept.
    async fn delete_project(
        &mut self,
        project_id: &ProjectId,
    ) -> Result<(), ProjectStoreError>;

    /// Creates the member or associates an existing one with the project,
    /// as decided by [`reconcile`](super::reconcile). Applied atomically.
    async fn add_member(
        &mut self,
        membership: &NewMembership,
    ) -> Result<(ProjectMember, Reconciliation), ProjectStoreError>;
    async fn get_members(
        &self,
    ) -> Result<Vec<ProjectMember>, ProjectStoreError>;
    async fn get_member(
        &self,
        member_id: &MemberId,
    ) -> Result<ProjectMember, ProjectStoreError>;
    async fn update_member(
        &mut self,
        member_id: &MemberId,
        update: &MemberUpdate,
    ) -> Result<ProjectMember, ProjectStoreError>;
    /// Deletes the member along with every one of their memberships.
    async fn delete_member(
        &mut self,
        member_id: &MemberId,
    ) -> Result<(), ProjectStoreError>;
    /// Removes a single membership. The member row is kept.
    async fn remove_member_from_project(
        &mut self,
        project_id: &ProjectId,
        member_id: &MemberId,
    ) -> Result<(), ProjectStoreError>;
}

#[derive(Debug, Error)]
pub enum ProjectStoreError {
    #[error("Project ID not found: {0}")]
    ProjectIDNotFound(ProjectId),
    #[error("Member ID not found: {0}")]
    MemberIDNotFound(MemberId),
    #[error("Member {member_id} is not in project {project_id}")]
    MemberNotInProject {
        project_id: ProjectId,
        member_id: MemberId,
    },
    #[error("Member is already in project {project_id}")]
    AlreadyMember { project_id: ProjectId, email: Email },
    #[error("Email already in use")]
    EmailExists(Email),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
}

impl PartialEq for ProjectStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ProjectIDNotFound(a), Self::ProjectIDNotFound(b)) => a == b,
            (Self::MemberIDNotFound(a), Self::MemberIDNotFound(b)) => a == b,
            (
                Self::MemberNotInProject {
                    project_id: p1,
                    member_id: m1,
                },
                Self::MemberNotInProject {
                    project_id: p2,
                    member_id: m2,
                },
            ) => p1 == p2 && m1 == m2,
            (
                Self::AlreadyMember {
                    project_id: p1,
                    email: e1,
                },
                Self::AlreadyMember {
                    project_id: p2,
                    email: e2,
                },
            ) => p1 == p2 && e1 == e2,
            (Self::EmailExists(a), Self::EmailExists(b)) => a == b,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}
