use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::{MemberId, ProjectAPIError},
    AppState,
};

#[tracing::instrument(name = "Delete member route handler", skip_all)]
pub async fn delete_member(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> Result<StatusCode, ProjectAPIError> {
    let member_id = MemberId::parse(member_id)?;

    state
        .project_store
        .write()
        .await
        .delete_member(&member_id)
        .await?;

    tracing::info!(member_id = %member_id, "Member deleted");

    Ok(StatusCode::NO_CONTENT)
}
