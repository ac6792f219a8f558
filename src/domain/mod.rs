mod data_stores;
mod email;
mod error;
mod member;
mod member_id;
mod member_name;
mod project;
mod project_id;
mod project_name;
mod reconciliation;
mod role;

pub use data_stores::*;
pub use email::*;
pub use error::*;
pub use member::*;
pub use member_id::*;
pub use member_name::*;
pub use project::*;
pub use project_id::*;
pub use project_name::*;
pub use reconciliation::*;
pub use role::*;
