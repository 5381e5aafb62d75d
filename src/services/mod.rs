// Service exports
pub mod profiles;

pub use profiles::{ProfileSource, JsonFileSource, InMemorySource, ProfileError, parse_request};
