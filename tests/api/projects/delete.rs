use crate::helpers::{
    add_member, add_new_project, get_id, get_json_response_body,
    get_nested_ids, TestApp,
};
use test_context::test_context;

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_204_and_remove_project(app: &mut TestApp) {
    let project_id = add_new_project(app, "Alpha").await;

    let response = app.delete_project(&project_id.to_string()).await;
    assert_eq!(response.status().as_u16(), 204);

    let response = app.get_project(&project_id.to_string()).await;
    assert_eq!(response.status().as_u16(), 404);
}

#[test_context(TestApp)]
#[tokio::test]
async fn deleting_project_keeps_its_members(app: &mut TestApp) {
    let alpha = add_new_project(app, "Alpha").await;
    let beta = add_new_project(app, "Beta").await;
    let ann = get_id(&add_member(app, alpha, "Ann", "ann@x.com").await);
    add_member(app, beta, "Ann", "ann@x.com").await;
    let bob = get_id(&add_member(app, alpha, "Bob", "bob@x.com").await);

    let response = app.delete_project(&alpha.to_string()).await;
    assert_eq!(response.status().as_u16(), 204);

    let body =
        get_json_response_body(app.get_project_member(&ann.to_string()).await)
            .await;
    assert_eq!(get_nested_ids(&body, "projects"), vec![beta]);

    let response = app.get_project_member(&bob.to_string()).await;
    assert_eq!(response.status().as_u16(), 200, "Member row should survive");
    let body = get_json_response_body(response).await;
    assert!(get_nested_ids(&body, "projects").is_empty());
}

#[test_context(TestApp)]
#[tokio::test]
async fn should_return_404_for_non_existent_project(app: &mut TestApp) {
    let response = app.delete_project("5").await;
    assert_eq!(response.status().as_u16(), 404);
}
