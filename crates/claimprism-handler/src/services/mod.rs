//! Built-in mapper services.

pub mod github;

pub use github::GithubActionsMapper;
