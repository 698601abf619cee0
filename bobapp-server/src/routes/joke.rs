//! Joke API endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use bobapp_core::Joke;

use crate::error::ApiError;
use crate::state::AppState;

/// Query key the debug endpoints require
const TEST_PARAM: &str = "param";

/// Raw query pairs; repeated keys are kept
type QueryPairs = Vec<(String, String)>;

/// Get a random joke from the provider
pub async fn get_random_joke(State(state): State<Arc<AppState>>) -> Result<Json<Joke>, ApiError> {
    let joke = state.provider.random_joke()?;
    Ok(Json(joke))
}

/// Debug endpoint; `param` must be present but is ignored
pub async fn test(Query(pairs): Query<QueryPairs>) -> Result<&'static str, ApiError> {
    require_param(&pairs, TEST_PARAM)?;
    Ok("test")
}

/// Same as `test`, on a second path
pub async fn test2(Query(pairs): Query<QueryPairs>) -> Result<&'static str, ApiError> {
    require_param(&pairs, TEST_PARAM)?;
    Ok("test")
}

/// Fail unless `name` appears at least once; the value itself is discarded
fn require_param(pairs: &[(String, String)], name: &'static str) -> Result<(), ApiError> {
    if pairs.iter().any(|(key, _)| key == name) {
        Ok(())
    } else {
        Err(ApiError::MissingParam(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_require_param_present() {
        assert!(require_param(&pairs(&[("param", "")]), "param").is_ok());
        assert!(require_param(&pairs(&[("param", "a"), ("param", "b")]), "param").is_ok());
        assert!(require_param(&pairs(&[("other", "1"), ("param", "x")]), "param").is_ok());
    }

    #[test]
    fn test_require_param_missing() {
        assert!(matches!(
            require_param(&pairs(&[]), "param"),
            Err(ApiError::MissingParam("param"))
        ));
        assert!(matches!(
            require_param(&pairs(&[("params", "1")]), "param"),
            Err(ApiError::MissingParam("param"))
        ));
    }
}
