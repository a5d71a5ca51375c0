use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// What the caller wants to watch
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Preferences {
    pub mood: String,
    pub genres: Vec<String>,
    /// Longest acceptable running time in minutes
    pub max_duration: Option<u32>,
}

impl Preferences {
    /// Requested genres, lowercased for matching
    pub fn normalized_genres(&self) -> Vec<String> {
        self.genres.iter().map(|g| g.to_lowercase()).collect()
    }
}

/// Body of `POST /recommend`
///
/// `X` is the legacy key for the preferences object. The first of
/// `preferences`, `X` holding a non-empty object is used; otherwise the
/// preferences are empty.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RecommendRequest {
    pub preferences: Option<Map<String, Value>>,
    #[serde(rename = "X")]
    pub legacy_preferences: Option<Map<String, Value>>,
}

impl RecommendRequest {
    /// Decodes a raw request body; `null` counts as an empty body
    pub fn from_body(body: Value) -> AppResult<Self> {
        if body.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(body)
            .map_err(|e| AppError::InvalidInput(format!("Malformed request body: {}", e)))
    }

    pub fn into_preferences(self) -> AppResult<Preferences> {
        let Some(chosen) = [self.preferences, self.legacy_preferences]
            .into_iter()
            .flatten()
            .find(|map| !map.is_empty())
        else {
            return Ok(Preferences::default());
        };

        serde_json::from_value(Value::Object(chosen))
            .map_err(|e| AppError::InvalidInput(format!("Malformed preferences: {}", e)))
    }
}
