use axum::{extract::State, http::StatusCode, Json};

use crate::{
    domain::{ProjectAPIError, ProjectMember},
    AppState,
};

#[tracing::instrument(name = "Get member list route handler", skip_all)]
pub async fn get_member_list(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<ProjectMember>>), ProjectAPIError> {
    let members = state.project_store.read().await.get_members().await?;

    Ok((StatusCode::OK, Json(members)))
}
