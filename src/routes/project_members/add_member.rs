use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::{
    domain::{
        Email, MemberName, NewMembership, ProjectAPIError, ProjectId,
        ProjectMember, Role,
    },
    AppState,
};

#[tracing::instrument(name = "Add member to project route handler", skip_all)]
pub async fn add_member(
    State(state): State<AppState>,
    Json(request): Json<AddMemberRequest>,
) -> Result<(StatusCode, Json<ProjectMember>), ProjectAPIError> {
    let membership = NewMembership {
        project_id: ProjectId::parse(request.project_id)?,
        name: MemberName::parse(request.name)?,
        email: Email::parse(request.email)?,
        role: Role::parse_optional(request.role)?,
    };

    let (member, decision) = state
        .project_store
        .write()
        .await
        .add_member(&membership)
        .await?;

    tracing::info!(
        project_id = %membership.project_id,
        member_id = %member.id,
        outcome = ?decision,
        "Project member reconciled"
    );

    Ok((StatusCode::CREATED, Json(member)))
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AddMemberRequest {
    pub project_id: i64,
    pub name: String,
    pub email: String,
    pub role: Option<String>,
}
