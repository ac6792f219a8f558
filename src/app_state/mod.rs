use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::ProjectStore;

pub type ProjectStoreType = Arc<RwLock<dyn ProjectStore + Send + Sync>>;

#[derive(Clone)]
pub struct AppState {
    pub project_store: ProjectStoreType,
}

impl AppState {
    pub fn new(project_store: ProjectStoreType) -> Self {
        Self { project_store }
    }
}
