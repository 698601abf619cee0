//! Joke value and provider seam

use serde::{Deserialize, Serialize};

use crate::error::JokeError;

/// A single joke: the setup line and its punchline
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Joke {
    pub joke: String,
    pub response: String,
}

impl Joke {
    pub fn new(joke: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            joke: joke.into(),
            response: response.into(),
        }
    }
}

/// Source of jokes for the HTTP layer
///
/// Implementations are shared across request handlers, so they must be
/// `Send + Sync`. Each call is independent of the previous ones.
pub trait JokeProvider: Send + Sync {
    /// Pick a joke. Returns `JokeError::Empty` when there is nothing to pick from.
    fn random_joke(&self) -> Result<Joke, JokeError>;
}
