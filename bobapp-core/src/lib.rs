//! BobApp Core - Joke domain
//!
//! This crate provides everything the HTTP layer needs to serve jokes:
//! - The `Joke` value and its JSON shape
//! - The `JokeProvider` trait the server depends on
//! - `JokeCatalog`, an in-memory provider picking jokes at random

pub mod catalog;
pub mod error;
pub mod joke;

// Re-exports for convenient access
pub use catalog::JokeCatalog;
pub use error::JokeError;
pub use joke::{Joke, JokeProvider};
