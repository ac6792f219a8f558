use crate::helpers::{
    add_member, add_new_project, get_id, get_json_response_body, TestApp,
};
use project_roster::ErrorResponse;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_200_for_existing_member(app: &mut TestApp) {
    let project_id = add_new_project(app, "Alpha").await;
    let created = add_member(app, project_id, "Ann", "ann@x.com").await;

    let response = app.get_project_member(&get_id(&created).to_string()).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(get_json_response_body(response).await, created);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_non_existent_member(app: &mut TestApp) {
    let response = app.get_project_member("31").await;
    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(
        response
            .json::<ErrorResponse>()
            .await
            .expect("Could not deserialise response body to ErrorResponse")
            .error,
        "Project member with ID 31 not found"
    );
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_for_non_numeric_id(app: &mut TestApp) {
    let response = app.get_project_member("ann").await;
    assert_eq!(response.status().as_u16(), 400);
}
