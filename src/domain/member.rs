use serde::Serialize;

use super::{Email, MemberId, MemberName, ProjectId, ProjectName, Role};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectMember {
    pub id: MemberId,
    pub name: MemberName,
    pub email: Email,
    /// Default role, used when the member joins a project without one.
    pub role: Option<Role>,
    pub projects: Vec<AssignedProject>,
}

impl ProjectMember {
    pub fn is_in_project(&self, project_id: &ProjectId) -> bool {
        self.projects.iter().any(|p| &p.id == project_id)
    }
}

/// A project as seen from one of its members.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignedProject {
    pub id: ProjectId,
    pub name: ProjectName,
    pub role: Option<Role>,
}

/// Request to put the person identified by `email` on a project.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMembership {
    pub project_id: ProjectId,
    pub name: MemberName,
    pub email: Email,
    pub role: Option<Role>,
}

/// Patch for a member. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberUpdate {
    pub name: Option<MemberName>,
    pub email: Option<Email>,
    pub role: Option<Role>,
}

impl MemberUpdate {
    pub fn apply_to(
        &self,
        name: &mut MemberName,
        email: &mut Email,
        role: &mut Option<Role>,
    ) {
        if let Some(new_name) = &self.name {
            *name = new_name.clone();
        }
        if let Some(new_email) = &self.email {
            *email = new_email.clone();
        }
        if let Some(new_role) = &self.role {
            *role = Some(new_role.clone());
        }
    }
}
