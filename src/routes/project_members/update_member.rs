use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    domain::{
        Email, MemberId, MemberName, MemberUpdate, ProjectAPIError,
        ProjectMember, Role,
    },
    AppState,
};

/// Patches the member itself. `role` here is the member's default role;
/// roles held on individual projects are changed through add-member.
#[tracing::instrument(name = "Update member route handler", skip_all)]
pub async fn update_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
    Json(request): Json<UpdateMemberRequest>,
) -> Result<(StatusCode, Json<ProjectMember>), ProjectAPIError> {
    let member_id = MemberId::parse(member_id)?;
    let update = MemberUpdate {
        name: request.name.map(MemberName::parse).transpose()?,
        email: request.email.map(Email::parse).transpose()?,
        role: Role::parse_optional(request.role)?,
    };

    let member = state
        .project_store
        .write()
        .await
        .update_member(&member_id, &update)
        .await?;

    Ok((StatusCode::OK, Json(member)))
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}
