use crate::helpers::{
    add_member, add_new_project, get_json_response_body, TestApp,
};
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn empty_patch_leaves_project_unchanged(app: &mut TestApp) {
    let project_id = add_new_project(app, "Alpha").await;

    let response = app.patch_project(&project_id.to_string(), &json!({})).await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_json_response_body(response).await;
    assert_eq!(body.get("name").unwrap(), "Alpha");
}

#[test_context(TestApp)]
#[tokio::test]
async fn patch_changes_only_name(app: &mut TestApp) {
    let project_id = add_new_project(app, "Alpha").await;
    add_member(app, project_id, "Ann", "ann@x.com").await;

    let response = app
        .patch_project(&project_id.to_string(), &json!({ "name": "X" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_json_response_body(response).await;
    assert_eq!(body.get("id").unwrap(), project_id);
    assert_eq!(body.get("name").unwrap(), "X");
    assert_eq!(
        body.get("members").unwrap().as_array().unwrap().len(),
        1,
        "Members should survive a rename"
    );

    let body =
        get_json_response_body(app.get_project(&project_id.to_string()).await)
            .await;
    assert_eq!(body.get("name").unwrap(), "X");
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_reject_undeclared_fields(app: &mut TestApp) {
    let project_id = add_new_project(app, "Alpha").await;

    let response = app
        .patch_project(&project_id.to_string(), &json!({ "id": 7 }))
        .await;
    assert_eq!(response.status().as_u16(), 422);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_400_for_empty_name(app: &mut TestApp) {
    let project_id = add_new_project(app, "Alpha").await;

    let response = app
        .patch_project(&project_id.to_string(), &json!({ "name": "" }))
        .await;
    assert_eq!(response.status().as_u16(), 400);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_non_existent_project(app: &mut TestApp) {
    let response = app.patch_project("42", &json!({ "name": "X" })).await;
    assert_eq!(response.status().as_u16(), 404);
}
