use color_eyre::eyre::Report;
use thiserror::Error;

use super::{Email, MemberId, ProjectId, ProjectStoreError};

#[derive(Debug, Error)]
pub enum ProjectAPIError {
    #[error("Project with ID {0} not found")]
    ProjectNotFound(ProjectId),
    #[error("Project member with ID {0} not found")]
    MemberNotFound(MemberId),
    #[error("Project member {member_id} is not associated with project {project_id}")]
    MemberNotInProject {
        project_id: ProjectId,
        member_id: MemberId,
    },
    #[error("Project member with email {} is already a member of project {project_id}", .email.as_ref())]
    AlreadyMember { project_id: ProjectId, email: Email },
    #[error("Email already in use: {}", .0.as_ref())]
    EmailExists(Email),
    #[error("Unexpected error")]
    UnexpectedError(#[source] Report),
    #[error("Validation error")]
    ValidationError(#[from] ValidationError),
}

impl From<ProjectStoreError> for ProjectAPIError {
    fn from(e: ProjectStoreError) -> Self {
        match e {
            ProjectStoreError::ProjectIDNotFound(id) => {
                Self::ProjectNotFound(id)
            }
            ProjectStoreError::MemberIDNotFound(id) => Self::MemberNotFound(id),
            ProjectStoreError::MemberNotInProject {
                project_id,
                member_id,
            } => Self::MemberNotInProject {
                project_id,
                member_id,
            },
            ProjectStoreError::AlreadyMember { project_id, email } => {
                Self::AlreadyMember { project_id, email }
            }
            ProjectStoreError::EmailExists(email) => Self::EmailExists(email),
            ProjectStoreError::UnexpectedError(report) => {
                Self::UnexpectedError(report)
            }
        }
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Validation error: {0}")]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: String) -> Self {
        Self(message)
    }

    pub fn as_ref(&self) -> &String {
        &self.0
    }
}
