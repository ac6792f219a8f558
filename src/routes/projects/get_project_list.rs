use axum::{extract::State, http::StatusCode, Json};

use crate::{
    domain::{Project, ProjectAPIError},
    AppState,
};

#[tracing::instrument(name = "Get project list route handler", skip_all)]
pub async fn get_project_list(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Project>>), ProjectAPIError> {
    let projects = state.project_store.read().await.get_projects().await?;

    Ok((StatusCode::OK, Json(projects)))
}
