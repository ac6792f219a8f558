use serde::Serialize;

use super::{Email, MemberId, MemberName, ProjectId, ProjectName, Role};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: ProjectName,
    pub members: Vec<AssignedMember>,
}

impl Project {
    pub fn new(
        id: ProjectId,
        name: ProjectName,
        members: Vec<AssignedMember>,
    ) -> Self {
        Self { id, name, members }
    }
}

/// A member as seen from one of their projects. `role` is the role held on
/// that project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignedMember {
    pub id: MemberId,
    pub name: MemberName,
    pub email: Email,
    pub role: Option<Role>,
}

/// Patch for a project. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectUpdate {
    pub name: Option<ProjectName>,
}

impl ProjectUpdate {
    pub fn apply_to(&self, name: &mut ProjectName) {
        if let Some(new_name) = &self.name {
            *name = new_name.clone();
        }
    }
}
