pub mod project_members;
pub mod projects;
