use crate::helpers::{
    add_member, add_new_project, get_id, get_json_response_body, TestApp,
};
use serde_json::json;
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn patch_changes_only_provided_fields(app: &mut TestApp) {
    let project_id = add_new_project(app, "Alpha").await;
    let ann = get_id(&add_member(app, project_id, "Ann", "ann@x.com").await);

    let response = app
        .patch_project_member(&ann.to_string(), &json!({ "name": "Annie" }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_json_response_body(response).await;
    assert_eq!(body.get("name").unwrap(), "Annie");
    assert_eq!(body.get("email").unwrap(), "ann@x.com");
    assert!(body.get("role").unwrap().is_null());

    let response = app
        .patch_project_member(
            &ann.to_string(),
            &json!({ "email": "annie@x.com", "role": "Lead" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let body = get_json_response_body(response).await;
    assert_eq!(body.get("name").unwrap(), "Annie");
    assert_eq!(body.get("email").unwrap(), "annie@x.com");
    assert_eq!(body.get("role").unwrap(), "Lead");
}

#[test_context(TestApp)]
#[tokio::test]
async fn empty_patch_leaves_member_unchanged(app: &mut TestApp) {
    let project_id = add_new_project(app, "Alpha").await;
    let created = add_member(app, project_id, "Ann", "ann@x.com").await;

    let response = app
        .patch_project_member(&get_id(&created).to_string(), &json!({}))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(get_json_response_body(response).await, created);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_409_for_email_in_use(app: &mut TestApp) {
    let project_id = add_new_project(app, "Alpha").await;
    let ann = get_id(&add_member(app, project_id, "Ann", "ann@x.com").await);
    add_member(app, project_id, "Bob", "bob@x.com").await;

    let response = app
        .patch_project_member(&ann.to_string(), &json!({ "email": "bob@x.com" }))
        .await;
    assert_eq!(response.status().as_u16(), 409);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_reject_invalid_patches(app: &mut TestApp) {
    let project_id = add_new_project(app, "Alpha").await;
    let ann = get_id(&add_member(app, project_id, "Ann", "ann@x.com").await);

    let response = app
        .patch_project_member(&ann.to_string(), &json!({ "email": "nope" }))
        .await;
    assert_eq!(response.status().as_u16(), 400);

    let response = app
        .patch_project_member(&ann.to_string(), &json!({ "projects": [] }))
        .await;
    assert_eq!(response.status().as_u16(), 422);
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_non_existent_member(app: &mut TestApp) {
    let response = app
        .patch_project_member("8", &json!({ "name": "Ghost" }))
        .await;
    assert_eq!(response.status().as_u16(), 404);
}
