pub mod fetch;

pub use fetch::{HubClient, RepoFiles};
