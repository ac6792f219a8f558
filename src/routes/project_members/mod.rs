mod add_member;
mod delete_member;
mod get_member;
mod get_member_list;
mod update_member;

pub use add_member::*;
pub use delete_member::*;
pub use get_member::*;
pub use get_member_list::*;
pub use update_member::*;
