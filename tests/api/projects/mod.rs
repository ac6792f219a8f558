mod delete;
mod get;
mod update;
