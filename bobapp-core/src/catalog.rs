//! JokeCatalog - in-memory joke provider
//!
//! The catalog is immutable once built; selection uses the thread-local RNG
//! so concurrent requests never contend on shared state.

use std::path::Path;

use rand::seq::SliceRandom;

use crate::error::JokeError;
use crate::joke::{Joke, JokeProvider};

/// Jokes bundled with the binary
const BUILTIN_JOKES: &str = include_str!("../data/jokes.json");

/// Fixed list of jokes served uniformly at random
#[derive(Clone, Debug, Default)]
pub struct JokeCatalog {
    jokes: Vec<Joke>,
}

impl JokeCatalog {
    pub fn new(jokes: Vec<Joke>) -> Self {
        Self { jokes }
    }

    /// Catalog built from the bundled `data/jokes.json`
    pub fn builtin() -> Result<Self, JokeError> {
        Self::from_json_str(BUILTIN_JOKES)
    }

    /// Parse a JSON array of `{"joke": ..., "response": ...}` objects
    pub fn from_json_str(content: &str) -> Result<Self, JokeError> {
        let jokes: Vec<Joke> = serde_json::from_str(content)?;
        Ok(Self::new(jokes))
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> Result<Self, JokeError> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&content)?;

        tracing::debug!(
            "Loaded {} jokes from {}",
            catalog.len(),
            path.display()
        );

        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    pub fn jokes(&self) -> &[Joke] {
        &self.jokes
    }
}

impl JokeProvider for JokeCatalog {
    fn random_joke(&self) -> Result<Joke, JokeError> {
        self.jokes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(JokeError::Empty)
    }
}
