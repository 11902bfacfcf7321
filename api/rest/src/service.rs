pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod diagnostic;
pub mod project;
pub mod root;
