use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    domain::{Project, ProjectAPIError, ProjectId},
    AppState,
};

#[tracing::instrument(name = "Get project route handler", skip_all)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<(StatusCode, Json<Project>), ProjectAPIError> {
    let project_id = ProjectId::parse(project_id)?;
    tracing::debug!("project_id: {}", project_id);

    let project = state
        .project_store
        .read()
        .await
        .get_project(&project_id)
        .await?;

    Ok((StatusCode::OK, Json(project)))
}
