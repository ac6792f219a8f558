use crate::helpers::{
    add_new_project, get_json_response_body, TestApp,
};
use project_roster::ErrorResponse;
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_200_for_existing_project(app: &mut TestApp) {
    let project_id = add_new_project(app, "Alpha").await;

    let response = app.get_project(&project_id.to_string()).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        get_json_response_body(response).await,
        json!({ "id": project_id, "name": "Alpha", "members": [] })
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_non_existent_project(app: &mut TestApp) {
    let response = app.get_project("99").await;
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse")
            .error,
        "Project with ID 99 not found"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_reject_invalid_ids(app: &mut TestApp) {
    let response = app.get_project("abc").await;
    assert_eq!(
        response.status().as_u16(),
        400,
        "Non-numeric IDs should be rejected"
    );

    let response = app.get_project("0").await;
    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse")
            .error,
        "Validation error: Invalid project ID: 0"
    );
}
