mod helpers;
mod project_members;
mod projects;
