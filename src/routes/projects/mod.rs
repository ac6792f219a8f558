mod create_project;
mod delete_project;
mod get_project;
mod get_project_list;
mod remove_member;
mod update_project;

pub use create_project::*;
pub use delete_project::*;
pub use get_project::*;
pub use get_project_list::*;
pub use remove_member::*;
pub use update_project::*;
