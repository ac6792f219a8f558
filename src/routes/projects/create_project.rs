use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::{
    domain::{Project, ProjectAPIError, ProjectName},
    AppState,
};

#[tracing::instrument(name = "Create project route handler", skip_all)]
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), ProjectAPIError> {
    let project_name = ProjectName::parse(&request.name)?;

    let project = state
        .project_store
        .write()
        .await
        .add_project(&project_name)
        .await?;

    tracing::info!(project_id = %project.id, "Project created");

    Ok((StatusCode::CREATED, Json(project)))
}

#[derive(Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateProjectRequest {
    pub name: String,
}
