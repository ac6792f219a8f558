use std::collections::BTreeMap;

use crate::domain::{
    reconcile, AssignedMember, AssignedProject, Email, MemberId, MemberName,
    MemberUpdate, MembershipState, NewMembership, Project, ProjectId,
    ProjectMember, ProjectName, ProjectStore, ProjectStoreError,
    ProjectUpdate, Reconciliation, Role,
};

#[derive(Debug, Clone)]
struct MemberRecord {
    name: MemberName,
    email: Email,
    role: Option<Role>,
}

/// In-memory store. Memberships are keyed by `(project, member)`, so a
/// member can only appear once per project.
#[derive(Default)]
pub struct HashmapProjectStore {
    projects: BTreeMap<ProjectId, ProjectName>,
    members: BTreeMap<MemberId, MemberRecord>,
    memberships: BTreeMap<(ProjectId, MemberId), Option<Role>>,
    last_project_id: i32,
    last_member_id: i32,
}

impl HashmapProjectStore {
    fn member_id_by_email(&self, email: &Email) -> Option<MemberId> {
        self.members
            .iter()
            .find(|(_, member)| &member.email == email)
            .map(|(id, _)| *id)
    }

    fn build_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Project, ProjectStoreError> {
        let name = self
            .projects
            .get(project_id)
            .ok_or(ProjectStoreError::ProjectIDNotFound(*project_id))?;

        let members = self
            .memberships
            .iter()
            .filter(|((p, _), _)| p == project_id)
            .filter_map(|((_, member_id), role)| {
                self.members.get(member_id).map(|member| AssignedMember {
                    id: *member_id,
                    name: member.name.clone(),
                    email: member.email.clone(),
                    role: role.clone(),
                })
            })
            .collect();

        Ok(Project::new(*project_id, name.clone(), members))
    }

    fn build_member(
        &self,
        member_id: &MemberId,
    ) -> Result<ProjectMember, ProjectStoreError> {
        let member = self
            .members
            .get(member_id)
            .ok_or(ProjectStoreError::MemberIDNotFound(*member_id))?;

        let projects = self
            .memberships
            .iter()
            .filter(|((_, m), _)| m == member_id)
            .filter_map(|((project_id, _), role)| {
                self.projects.get(project_id).map(|name| AssignedProject {
                    id: *project_id,
                    name: name.clone(),
                    role: role.clone(),
                })
            })
            .collect();

        Ok(ProjectMember {
            id: *member_id,
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role.clone(),
            projects,
        })
    }
}

#[async_trait::async_trait]
impl ProjectStore for HashmapProjectStore {
    async fn add_project(
        &mut self,
        name: &ProjectName,
    ) -> Result<Project, ProjectStoreError> {
        self.last_project_id += 1;
        let project_id = ProjectId::new(self.last_project_id);
        self.projects.insert(project_id, name.clone());
        Ok(Project::new(project_id, name.clone(), Vec::new()))
    }

    async fn get_projects(&self) -> Result<Vec<Project>, ProjectStoreError> {
        self.projects
            .keys()
            .map(|id| self.build_project(id))
            .collect()
    }

    async fn get_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Project, ProjectStoreError> {
        self.build_project(project_id)
    }

    async fn update_project(
        &mut self,
        project_id: &ProjectId,
        update: &ProjectUpdate,
    ) -> Result<Project, ProjectStoreError> {
        let name = self
            .projects
            .get_mut(project_id)
            .ok_or(ProjectStoreError::ProjectIDNotFound(*project_id))?;
        update.apply_to(name);
        self.build_project(project_id)
    }

    async fn delete_project(
        &mut self,
        project_id: &ProjectId,
    ) -> Result<(), ProjectStoreError> {
        self.projects
            .remove(project_id)
            .ok_or(ProjectStoreError::ProjectIDNotFound(*project_id))?;
        self.memberships.retain(|(p, _), _| p != project_id);
        Ok(())
    }

    async fn add_member(
        &mut self,
        membership: &NewMembership,
    ) -> Result<(ProjectMember, Reconciliation), ProjectStoreError> {
        let project_id = membership.project_id;
        if !self.projects.contains_key(&project_id) {
            return Err(ProjectStoreError::ProjectIDNotFound(project_id));
        }

        let existing_id = self.member_id_by_email(&membership.email);
        let state = match existing_id {
            None => MembershipState::UnknownEmail,
            Some(member_id) => {
                match self.memberships.get(&(project_id, member_id)) {
                    Some(role) => MembershipState::InProject {
                        role: role.as_ref(),
                    },
                    None => MembershipState::NotInProject,
                }
            }
        };

        let decision = reconcile(state, membership.role.as_ref());
        let member_id = match (&decision, existing_id) {
            (Reconciliation::AlreadyMember, _) => {
                return Err(ProjectStoreError::AlreadyMember {
                    project_id,
                    email: membership.email.clone(),
                });
            }
            (Reconciliation::CreateMember, _) => {
                self.last_member_id += 1;
                let member_id = MemberId::new(self.last_member_id);
                self.members.insert(
                    member_id,
                    MemberRecord {
                        name: membership.name.clone(),
                        email: membership.email.clone(),
                        role: membership.role.clone(),
                    },
                );
                self.memberships
                    .insert((project_id, member_id), membership.role.clone());
                member_id
            }
            (Reconciliation::JoinProject, Some(member_id)) => {
                if let (Some(role), Some(member)) =
                    (&membership.role, self.members.get_mut(&member_id))
                {
                    member.role = Some(role.clone());
                }
                self.memberships
                    .insert((project_id, member_id), membership.role.clone());
                member_id
            }
            (Reconciliation::UpdateRole(role), Some(member_id)) => {
                self.memberships
                    .insert((project_id, member_id), Some(role.clone()));
                member_id
            }
            (_, None) => {
                return Err(ProjectStoreError::UnexpectedError(
                    color_eyre::eyre::eyre!(
                        "reconciliation requires an existing member"
                    ),
                ));
            }
        };

        Ok((self.build_member(&member_id)?, decision))
    }

    async fn get_members(
        &self,
    ) -> Result<Vec<ProjectMember>, ProjectStoreError> {
        self.members
            .keys()
            .map(|id| self.build_member(id))
            .collect()
    }

    async fn get_member(
        &self,
        member_id: &MemberId,
    ) -> Result<ProjectMember, ProjectStoreError> {
        self.build_member(member_id)
    }

    async fn update_member(
        &mut self,
        member_id: &MemberId,
        update: &MemberUpdate,
    ) -> Result<ProjectMember, ProjectStoreError> {
        if !self.members.contains_key(member_id) {
            return Err(ProjectStoreError::MemberIDNotFound(*member_id));
        }
        if let Some(email) = &update.email {
            if matches!(self.member_id_by_email(email), Some(id) if &id != member_id)
            {
                return Err(ProjectStoreError::EmailExists(email.clone()));
            }
        }

        if let Some(member) = self.members.get_mut(member_id) {
            update.apply_to(
                &mut member.name,
                &mut member.email,
                &mut member.role,
            );
        }
        self.build_member(member_id)
    }

    async fn delete_member(
        &mut self,
        member_id: &MemberId,
    ) -> Result<(), ProjectStoreError> {
        self.members
            .remove(member_id)
            .ok_or(ProjectStoreError::MemberIDNotFound(*member_id))?;
        self.memberships.retain(|(_, m), _| m != member_id);
        Ok(())
    }

    async fn remove_member_from_project(
        &mut self,
        project_id: &ProjectId,
        member_id: &MemberId,
    ) -> Result<(), ProjectStoreError> {
        if !self.projects.contains_key(project_id) {
            return Err(ProjectStoreError::ProjectIDNotFound(*project_id));
        }
        self.memberships
            .remove(&(*project_id, *member_id))
            .map(|_| ())
            .ok_or(ProjectStoreError::MemberNotInProject {
                project_id: *project_id,
                member_id: *member_id,
            })
    }
}
