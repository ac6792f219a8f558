use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    domain::{MemberId, ProjectAPIError, ProjectMember},
    AppState,
};

#[tracing::instrument(name = "Get member route handler", skip_all)]
pub async fn get_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> Result<(StatusCode, Json<ProjectMember>), ProjectAPIError> {
    let member_id = MemberId::parse(member_id)?;
    tracing::debug!("member_id: {}", member_id);

    let member = state
        .project_store
        .read()
        .await
        .get_member(&member_id)
        .await?;

    Ok((StatusCode::OK, Json(member)))
}
