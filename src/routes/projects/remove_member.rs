use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::{MemberId, ProjectAPIError, ProjectId},
    AppState,
};

/// Takes a member off one project. The member itself, and any other
/// project they belong to, is left alone.
#[tracing::instrument(name = "Remove member from project route handler", skip_all)]
pub async fn remove_member_from_project(
    State(state): State<AppState>,
    Path((project_id, member_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ProjectAPIError> {
    let project_id = ProjectId::parse(project_id)?;
    let member_id = MemberId::parse(member_id)?;

    state
        .project_store
        .write()
        .await
        .remove_member_from_project(&project_id, &member_id)
        .await?;

    tracing::info!(
        project_id = %project_id,
        member_id = %member_id,
        "Member removed from project"
    );

    Ok(StatusCode::NO_CONTENT)
}
