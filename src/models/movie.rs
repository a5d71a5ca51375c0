use serde::{Deserialize, Serialize};

/// A catalog entry as loaded from disk and returned to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub title: Option<String>,
    pub genres: Vec<String>,
    /// Running time in minutes, when known
    pub duration: Option<u32>,
    pub synopsis: String,
}

impl Movie {
    pub fn new(title: &str, genres: &[&str], duration: u32) -> Self {
        Self {
            title: Some(title.to_string()),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            duration: Some(duration),
            synopsis: String::new(),
        }
    }

    /// Title for display purposes; empty when the catalog entry had none
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Case-insensitive test for whether the movie carries any of `genres`
    ///
    /// `genres` is expected to be lowercased already.
    pub fn has_any_genre(&self, genres: &[String]) -> bool {
        self.genres
            .iter()
            .any(|own| genres.contains(&own.to_lowercase()))
    }
}
