use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    domain::{ProjectAPIError, ProjectId},
    AppState,
};

#[tracing::instrument(name = "Delete project route handler", skip_all)]
pub async fn delete_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<StatusCode, ProjectAPIError> {
    let project_id = ProjectId::parse(project_id)?;

    state
        .project_store
        .write()
        .await
        .delete_project(&project_id)
        .await?;

    tracing::info!(project_id = %project_id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}
