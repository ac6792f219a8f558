use std::collections::BTreeMap;

use color_eyre::eyre::eyre;
use sqlx::PgPool;

use crate::domain::{
    reconcile, AssignedMember, AssignedProject, Email, MemberId, MemberName,
    MemberUpdate, MembershipState, NewMembership, Project, ProjectId,
    ProjectMember, ProjectName, ProjectStore, ProjectStoreError,
    ProjectUpdate, Reconciliation, Role,
};

pub struct PostgresProjectStore {
    pool: PgPool,
}

impl PostgresProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: i32,
    name: String,
}

#[derive(sqlx::FromRow)]
struct MemberRow {
    id: i32,
    name: String,
    email: String,
    role: Option<String>,
}

#[derive(sqlx::FromRow)]
struct AssignedMemberRow {
    project_id: i32,
    member_id: i32,
    name: String,
    email: String,
    role: Option<String>,
}

#[derive(sqlx::FromRow)]
struct AssignedProjectRow {
    member_id: i32,
    project_id: i32,
    name: String,
    role: Option<String>,
}

impl TryFrom<AssignedMemberRow> for AssignedMember {
    type Error = ProjectStoreError;

    fn try_from(row: AssignedMemberRow) -> Result<Self, Self::Error> {
        Ok(AssignedMember {
            id: MemberId::new(row.member_id),
            name: MemberName::parse(row.name)
                .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?,
            email: Email::parse(row.email)
                .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?,
            role: Role::parse_optional(row.role)
                .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?,
        })
    }
}

impl TryFrom<AssignedProjectRow> for AssignedProject {
    type Error = ProjectStoreError;

    fn try_from(row: AssignedProjectRow) -> Result<Self, Self::Error> {
        Ok(AssignedProject {
            id: ProjectId::new(row.project_id),
            name: ProjectName::parse(&row.name)
                .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?,
            role: Role::parse_optional(row.role)
                .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?,
        })
    }
}

fn build_project(
    row: ProjectRow,
    members: Vec<AssignedMember>,
) -> Result<Project, ProjectStoreError> {
    let name = ProjectName::parse(&row.name)
        .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?;
    Ok(Project::new(ProjectId::new(row.id), name, members))
}

fn build_member(
    row: MemberRow,
    projects: Vec<AssignedProject>,
) -> Result<ProjectMember, ProjectStoreError> {
    Ok(ProjectMember {
        id: MemberId::new(row.id),
        name: MemberName::parse(row.name)
            .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?,
        email: Email::parse(row.email)
            .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?,
        role: Role::parse_optional(row.role)
            .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?,
        projects,
    })
}

#[async_trait::async_trait]
impl ProjectStore for PostgresProjectStore {
    #[tracing::instrument(name = "Adding project to PostgreSQL", skip_all)]
    async fn add_project(
        &mut self,
        name: &ProjectName,
    ) -> Result<Project, ProjectStoreError> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            INSERT INTO projects (name) VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name.as_ref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?;

        build_project(row, Vec::new())
    }

    #[tracing::instrument(
        name = "Getting project list from PostgreSQL",
        skip_all
    )]
    async fn get_projects(&self) -> Result<Vec<Project>, ProjectStoreError> {
        let project_rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name FROM projects ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?;

        let member_rows = sqlx::query_as::<_, AssignedMemberRow>(
            r#"
            SELECT pm.project_id, pm.member_id, m.name, m.email, pm.role
            FROM project_memberships pm
            INNER JOIN project_members m ON m.id = pm.member_id
            ORDER BY pm.project_id, pm.member_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?;

        let mut member_map = BTreeMap::<i32, Vec<AssignedMember>>::new();
        for row in member_rows {
            let project_id = row.project_id;
            member_map
                .entry(project_id)
                .or_default()
                .push(AssignedMember::try_from(row)?);
        }

        project_rows
            .into_iter()
            .map(|row| {
                let members = member_map.remove(&row.id).unwrap_or_default();
                build_project(row, members)
            })
            .collect()
    }

    #[tracing::instrument(
        name = "Getting project details from PostgreSQL",
        skip_all
    )]
    async fn get_project(
        &self,
        project_id: &ProjectId,
    ) -> Result<Project, ProjectStoreError> {
        let project_row = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT id, name FROM projects WHERE id = $1
            "#,
        )
        .bind(project_id.as_ref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                ProjectStoreError::ProjectIDNotFound(*project_id)
            }
            e => ProjectStoreError::UnexpectedError(eyre!(e)),
        })?;

        let members = sqlx::query_as::<_, AssignedMemberRow>(
            r#"
            SELECT pm.project_id, pm.member_id, m.name, m.email, pm.role
            FROM project_memberships pm
            INNER JOIN project_members m ON m.id = pm.member_id
            WHERE pm.project_id = $1
            ORDER BY pm.member_id
            "#,
        )
        .bind(project_id.as_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?
        .into_iter()
        .map(AssignedMember::try_from)
        .collect::<Result<Vec<_>, _>>()?;

        build_project(project_row, members)
    }

    #[tracing::instrument(name = "Updating project in PostgreSQL", skip_all)]
    async fn update_project(
        &mut self,
        project_id: &ProjectId,
        update: &ProjectUpdate,
    ) -> Result<Project, ProjectStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE projects SET name = COALESCE($2, name)
            WHERE id = $1
            "#,
        )
        .bind(project_id.as_ref())
        .bind(update.name.as_ref().map(|name| name.as_ref()))
        .execute(&self.pool)
        .await
        .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?;

        if result.rows_affected() == 0 {
            return Err(ProjectStoreError::ProjectIDNotFound(*project_id));
        }

        self.get_project(project_id).await
    }

    #[tracing::instrument(name = "Deleting project from PostgreSQL", skip_all)]
    async fn delete_project(
        &mut self,
        project_id: &ProjectId,
    ) -> Result<(), ProjectStoreError> {
        // Memberships go with the project via ON DELETE CASCADE
        let result = sqlx::query(
            r#"
            DELETE FROM projects WHERE id = $1
            "#,
        )
        .bind(project_id.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?;

        if result.rows_affected() == 0 {
            return Err(ProjectStoreError::ProjectIDNotFound(*project_id));
        }
        Ok(())
    }

    #[tracing::instrument(name = "Adding member to PostgreSQL", skip_all)]
    async fn add_member(
        &mut self,
        membership: &NewMembership,
    ) -> Result<(ProjectMember, Reconciliation), ProjectStoreError> {
        let project_id = membership.project_id;
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?;

        sqlx::query_scalar::<_, i32>(
            r#"
            SELECT id FROM projects WHERE id = $1 FOR SHARE
            "#,
        )
        .bind(project_id.as_ref())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?
        .ok_or(ProjectStoreError::ProjectIDNotFound(project_id))?;

        let existing_id = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT id FROM project_members WHERE email = $1 FOR UPDATE
            "#,
        )
        .bind(membership.email.as_ref())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?
        .map(MemberId::new);

        // Outer option: whether the membership exists at all
        let current_role = match existing_id {
            Some(member_id) => sqlx::query_scalar::<_, Option<String>>(
                r#"
                SELECT role FROM project_memberships
                WHERE project_id = $1 AND member_id = $2
                "#,
            )
            .bind(project_id.as_ref())
            .bind(member_id.as_ref())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?
            .map(Role::parse_optional)
            .transpose()
            .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?,
            None => None,
        };

        let state = match (existing_id, &current_role) {
            (None, _) => MembershipState::UnknownEmail,
            (Some(_), None) => MembershipState::NotInProject,
            (Some(_), Some(role)) => MembershipState::InProject {
                role: role.as_ref(),
            },
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
                let member_id = sqlx::query_scalar::<_, i32>(
                    r#"
                    INSERT INTO project_members (name, email, role)
                    VALUES ($1, $2, $3)
                    RETURNING id
                    "#,
                )
                .bind(membership.name.as_ref())
                .bind(membership.email.as_ref())
                .bind(membership.role.as_ref().map(|role| role.as_ref()))
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| match e {
                    sqlx::Error::Database(db_err)
                        if db_err.is_unique_violation() =>
                    {
                        ProjectStoreError::EmailExists(membership.email.clone())
                    }
                    e => ProjectStoreError::UnexpectedError(eyre!(e)),
                })?;
                MemberId::new(member_id)
            }
            (Reconciliation::JoinProject, Some(member_id)) => {
                if let Some(role) = &membership.role {
                    sqlx::query(
                        r#"
                        UPDATE project_members SET role = $2 WHERE id = $1
                        "#,
                    )
                    .bind(member_id.as_ref())
                    .bind(role.as_ref())
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?;
                }
                member_id
            }
            (Reconciliation::UpdateRole(role), Some(member_id)) => {
                sqlx::query(
                    r#"
                    UPDATE project_memberships SET role = $3
                    WHERE project_id = $1 AND member_id = $2
                    "#,
                )
                .bind(project_id.as_ref())
                .bind(member_id.as_ref())
                .bind(role.as_ref())
                .execute(&mut *tx)
                .await
                .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?;
                member_id
            }
            (_, None) => {
                return Err(ProjectStoreError::UnexpectedError(eyre!(
                    "reconciliation requires an existing member"
                )));
            }
        };

        if matches!(
            decision,
            Reconciliation::CreateMember | Reconciliation::JoinProject
        ) {
            sqlx::query(
                r#"
                INSERT INTO project_memberships (project_id, member_id, role)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(project_id.as_ref())
            .bind(member_id.as_ref())
            .bind(membership.role.as_ref().map(|role| role.as_ref()))
            .execute(&mut *tx)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    ProjectStoreError::AlreadyMember {
                        project_id,
                        email: membership.email.clone(),
                    }
                }
                e => ProjectStoreError::UnexpectedError(eyre!(e)),
            })?;
        }

        tx.commit()
            .await
            .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?;

        let member = self.get_member(&member_id).await?;
        Ok((member, decision))
    }

    #[tracing::instrument(name = "Getting members from PostgreSQL", skip_all)]
    async fn get_members(
        &self,
    ) -> Result<Vec<ProjectMember>, ProjectStoreError> {
        let member_rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, name, email, role FROM project_members ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?;

        let project_rows = sqlx::query_as::<_, AssignedProjectRow>(
            r#"
            SELECT pm.member_id, pm.project_id, p.name, pm.role
            FROM project_memberships pm
            INNER JOIN projects p ON p.id = pm.project_id
            ORDER BY pm.member_id, pm.project_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?;

        let mut project_map = BTreeMap::<i32, Vec<AssignedProject>>::new();
        for row in project_rows {
            let member_id = row.member_id;
            project_map
                .entry(member_id)
                .or_default()
                .push(AssignedProject::try_from(row)?);
        }

        member_rows
            .into_iter()
            .map(|row| {
                let projects = project_map.remove(&row.id).unwrap_or_default();
                build_member(row, projects)
            })
            .collect()
    }

    #[tracing::instrument(name = "Getting member from PostgreSQL", skip_all)]
    async fn get_member(
        &self,
        member_id: &MemberId,
    ) -> Result<ProjectMember, ProjectStoreError> {
        let member_row = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, name, email, role FROM project_members WHERE id = $1
            "#,
        )
        .bind(member_id.as_ref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => {
                ProjectStoreError::MemberIDNotFound(*member_id)
            }
            e => ProjectStoreError::UnexpectedError(eyre!(e)),
        })?;

        let projects = sqlx::query_as::<_, AssignedProjectRow>(
            r#"
            SELECT pm.member_id, pm.project_id, p.name, pm.role
            FROM project_memberships pm
            INNER JOIN projects p ON p.id = pm.project_id
            WHERE pm.member_id = $1
            ORDER BY pm.project_id
            "#,
        )
        .bind(member_id.as_ref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?
        .into_iter()
        .map(AssignedProject::try_from)
        .collect::<Result<Vec<_>, _>>()?;

        build_member(member_row, projects)
    }

    #[tracing::instrument(name = "Updating member in PostgreSQL", skip_all)]
    async fn update_member(
        &mut self,
        member_id: &MemberId,
        update: &MemberUpdate,
    ) -> Result<ProjectMember, ProjectStoreError> {
        let result = sqlx::query(
            r#"
            UPDATE project_members SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                role = COALESCE($4, role)
            WHERE id = $1
            "#,
        )
        .bind(member_id.as_ref())
        .bind(update.name.as_ref().map(|name| name.as_ref()))
        .bind(update.email.as_ref().map(|email| email.as_ref()))
        .bind(update.role.as_ref().map(|role| role.as_ref()))
        .execute(&self.pool)
        .await
        .map_err(|e| match (e, &update.email) {
            (sqlx::Error::Database(db_err), Some(email))
                if db_err.is_unique_violation() =>
            {
                ProjectStoreError::EmailExists(email.clone())
            }
            (e, _) => ProjectStoreError::UnexpectedError(eyre!(e)),
        })?;

        if result.rows_affected() == 0 {
            return Err(ProjectStoreError::MemberIDNotFound(*member_id));
        }

        self.get_member(member_id).await
    }

    #[tracing::instrument(name = "Deleting member from PostgreSQL", skip_all)]
    async fn delete_member(
        &mut self,
        member_id: &MemberId,
    ) -> Result<(), ProjectStoreError> {
        // Memberships go with the member via ON DELETE CASCADE
        let result = sqlx::query(
            r#"
            DELETE FROM project_members WHERE id = $1
            "#,
        )
        .bind(member_id.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?;

        if result.rows_affected() == 0 {
            return Err(ProjectStoreError::MemberIDNotFound(*member_id));
        }
        Ok(())
    }

    #[tracing::instrument(
        name = "Removing member from project in PostgreSQL",
        skip_all
    )]
    async fn remove_member_from_project(
        &mut self,
        project_id: &ProjectId,
        member_id: &MemberId,
    ) -> Result<(), ProjectStoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM project_memberships
            WHERE project_id = $1 AND member_id = $2
            "#,
        )
        .bind(project_id.as_ref())
        .bind(member_id.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        let project_exists = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT id FROM projects WHERE id = $1
            "#,
        )
        .bind(project_id.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProjectStoreError::UnexpectedError(eyre!(e)))?
        .is_some();

        if project_exists {
            Err(ProjectStoreError::MemberNotInProject {
                project_id: *project_id,
                member_id: *member_id,
            })
        } else {
            Err(ProjectStoreError::ProjectIDNotFound(*project_id))
        }
    }
}
