use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    domain::{Project, ProjectAPIError, ProjectId, ProjectName, ProjectUpdate},
    AppState,
};

#[tracing::instrument(name = "Update project route handler", skip_all)]
pub async fn update_project(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
    Json(request): Json<UpdateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ProjectAPIError> {
    let project_id = ProjectId::parse(project_id)?;
    let update = ProjectUpdate {
        name: request.name.as_deref().map(ProjectName::parse).transpose()?,
    };

    let project = state
        .project_store
        .write()
        .await
        .update_project(&project_id, &update)
        .await?;

    Ok((StatusCode::OK, Json(project)))
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProjectRequest {
    pub name: Option<String>,
}
