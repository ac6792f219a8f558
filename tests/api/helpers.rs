use project_roster::{
    app_state::{AppState, ProjectStoreType},
    services::data_stores::HashmapProjectStore,
    utils::constants::test,
    Application,
};
use reqwest::{Response, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use test_context::AsyncTestContext;
use tokio::sync::RwLock;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
    pub project_store: ProjectStoreType,
}

impl TestApp {
    pub async fn new() -> Self {
        let project_store: ProjectStoreType =
            Arc::new(RwLock::new(HashmapProjectStore::default()));
        Self::with_store(project_store).await
    }

    pub async fn with_store(project_store: ProjectStoreType) -> Self {
        let app_state = AppState::new(project_store.clone());
        let allowed_origins = vec!["http://localhost:3000".to_owned()];

        let app =
            Application::build(app_state, test::APP_ADDRESS, &allowed_origins)
                .await
                .expect("Failed to build app");
        let address = format!("http://{}", app.address.clone());

        #[allow(clippy::let_underscore_future)]
        let _ = tokio::spawn(app.run());

        let http_client = reqwest::Client::new();

        Self {
            address,
            http_client,
            project_store,
        }
    }

    pub async fn post_project<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/project", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_projects(&self) -> Response {
        self.http_client
            .get(format!("{}/project", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_project(&self, project_id: &str) -> Response {
        self.http_client
            .get(format!("{}/project/{}", &self.address, project_id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn patch_project<Body>(
        &self,
        project_id: &str,
        body: &Body,
    ) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .patch(format!("{}/project/{}", &self.address, project_id))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_project(&self, project_id: &str) -> Response {
        self.http_client
            .delete(format!("{}/project/{}", &self.address, project_id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_project_membership(
        &self,
        project_id: &str,
        member_id: &str,
    ) -> Response {
        self.http_client
            .delete(format!(
                "{}/project/{}/members/{}",
                &self.address, project_id, member_id
            ))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_project_member<Body>(&self, body: &Body) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .post(format!("{}/project-member", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_project_members(&self) -> Response {
        self.http_client
            .get(format!("{}/project-member", &self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_project_member(&self, member_id: &str) -> Response {
        self.http_client
            .get(format!("{}/project-member/{}", &self.address, member_id))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn patch_project_member<Body>(
        &self,
        member_id: &str,
        body: &Body,
    ) -> Response
    where
        Body: serde::Serialize,
    {
        self.http_client
            .patch(format!("{}/project-member/{}", &self.address, member_id))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn delete_project_member(&self, member_id: &str) -> Response {
        self.http_client
            .delete(format!("{}/project-member/{}", &self.address, member_id))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        TestApp::new().await
    }
}

pub async fn get_json_response_body(response: Response) -> Value {
    let body: Value = response
        .json()
        .await
        .expect("failed to parse response body JSON");
    body
}

pub async fn add_new_project(app: &TestApp, name: &str) -> i64 {
    let response = app
        .post_project(&serde_json::json!({
            "name": name
        }))
        .await;

    assert_eq!(
        response.status(),
        StatusCode::CREATED,
        "Failed to add new project with name: {name}"
    );

    get_json_response_body(response)
        .await
        .get("id")
        .expect("No ID in response")
        .as_i64()
        .expect("Project ID should be a number")
}

pub async fn add_member(
    app: &TestApp,
    project_id: i64,
    name: &str,
    email: &str,
) -> Value {
    let response = app
        .post_project_member(&serde_json::json!({
            "projectId": project_id,
            "name": name,
            "email": email
        }))
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    get_json_response_body(response).await
}

pub fn get_id(body: &Value) -> i64 {
    body.get("id")
        .expect("No ID in response")
        .as_i64()
        .expect("ID should be a number")
}

/// IDs of the entries under `key`, e.g. a member's `projects`.
pub fn get_nested_ids(body: &Value, key: &str) -> Vec<i64> {
    body.get(key)
        .and_then(Value::as_array)
        .unwrap_or_else(|| panic!("No {key} array in response: {body}"))
        .iter()
        .map(get_id)
        .collect()
}
