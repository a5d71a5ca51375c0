//! Local movie catalog
//!
//! The catalog is a directory of JSON documents. Any document with a
//! `y.recommended_movies` array contributes its entries; everything else is
//! ignored. The directory is re-read on every call.
use crate::error::{AppError, AppResult};
use crate::models::Movie;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// One entry of `y.recommended_movies` as it appears on disk
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    genres: Option<Vec<String>>,
    #[serde(default)]
    duration: Option<u32>,
    #[serde(default)]
    explanation: Option<String>,
}

impl From<CatalogEntry> for Movie {
    fn from(entry: CatalogEntry) -> Self {
        Movie {
            title: entry.title,
            genres: entry.genres.unwrap_or_default(),
            duration: entry.duration,
            synopsis: entry.explanation.unwrap_or_default(),
        }
    }
}

/// Built-in movies served when no catalog file yields any entries
pub fn fallback_catalog() -> Vec<Movie> {
    vec![
        Movie::new("La La Land", &["drama", "romance"], 128),
        Movie::new("Edge of Tomorrow", &["action", "sci-fi"], 113),
        Movie::new("Superbad", &["comedy"], 113),
    ]
}

/// Extracts the movies held under `y.recommended_movies`
///
/// Documents without that path yield nothing. Entries that do not decode are
/// dropped individually.
pub fn extract_movies(document: &Value) -> Vec<Movie> {
    let Some(entries) = document
        .get("y")
        .and_then(|y| y.get("recommended_movies"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| match CatalogEntry::deserialize(entry) {
            Ok(entry) => Some(Movie::from(entry)),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping malformed catalog entry");
                None
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct CatalogLoader {
    data_dir: PathBuf,
    extension: String,
}

impl CatalogLoader {
    pub fn new(data_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            extension: extension.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Runs [`CatalogLoader::load`] on the blocking thread pool
    pub async fn fetch(&self) -> AppResult<Vec<Movie>> {
        let loader = self.clone();
        tokio::task::spawn_blocking(move || loader.load())
            .await
            .map_err(|e| AppError::Internal(format!("Catalog load task failed: {}", e)))
    }

    /// Loads every movie from the data directory, or the fallback list if none are found
    pub fn load(&self) -> Vec<Movie> {
        let mut movies = Vec::new();

        for path in self.catalog_files() {
            match read_document(&path) {
                Ok(document) => movies.extend(extract_movies(&document)),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable catalog file");
                }
            }
        }

        if movies.is_empty() {
            tracing::info!(
                data_dir = %self.data_dir.display(),
                "No catalog entries found, using fallback catalog"
            );
            return fallback_catalog();
        }

        tracing::debug!(count = movies.len(), "Loaded catalog");
        movies
    }

    /// Catalog files in the data directory, sorted by path
    fn catalog_files(&self) -> Vec<PathBuf> {
        let entries = match std::fs::read_dir(&self.data_dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(
                    data_dir = %self.data_dir.display(),
                    error = %e,
                    "Catalog directory not readable"
                );
                return Vec::new();
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && self.matches_extension(path))
            .collect();
        files.sort();
        files
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }
}

fn read_document(path: &Path) -> anyhow::Result<Value> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    #[test]
    fn test_extract_maps_fields() {
        let document = json!({
            "y": {
                "recommended_movies": [
                    {
                        "title": "Heat",
                        "genres": ["crime", "thriller"],
                        "duration": 170,
                        "explanation": "A long game of cat and mouse."
                    }
                ]
            }
        });

        let movies = extract_movies(&document);
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title.as_deref(), Some("Heat"));
        assert_eq!(movies[0].genres, vec!["crime", "thriller"]);
        assert_eq!(movies[0].duration, Some(170));
        assert_eq!(movies[0].synopsis, "A long game of cat and mouse.");
    }

    #[test]
    fn test_extract_defaults_missing_fields() {
        let document = json!({ "y": { "recommended_movies": [ {} ] } });

        let movies = extract_movies(&document);
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, None);
        assert!(movies[0].genres.is_empty());
        assert_eq!(movies[0].duration, None);
        assert_eq!(movies[0].synopsis, "");
    }

    #[test]
    fn test_extract_ignores_documents_without_expected_path() {
        assert!(extract_movies(&json!({ "movies": [] })).is_empty());
        assert!(extract_movies(&json!({ "y": { "other": 1 } })).is_empty());
        assert!(extract_movies(&json!({ "y": { "recommended_movies": "nope" } })).is_empty());
        assert!(extract_movies(&json!([1, 2, 3])).is_empty());
    }

    #[test]
    fn test_extract_skips_only_malformed_entries() {
        let document = json!({
            "y": {
                "recommended_movies": [
                    { "title": "Good", "duration": 90 },
                    { "title": "Bad", "duration": "ninety" },
                    "not an object"
                ]
            }
        });

        let movies = extract_movies(&document);
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title.as_deref(), Some("Good"));
    }

    #[test]
    fn test_empty_directory_returns_fallback() {
        let dir = TempDir::new().unwrap();
        let loader = CatalogLoader::new(dir.path(), "json");

        let titles: Vec<String> = loader
            .load()
            .into_iter()
            .filter_map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["La La Land", "Edge of Tomorrow", "Superbad"]);
    }

    #[test]
    fn test_missing_directory_returns_fallback() {
        let dir = TempDir::new().unwrap();
        let loader = CatalogLoader::new(dir.path().join("absent"), "json");
        assert_eq!(loader.load(), fallback_catalog());
    }

    #[tokio::test]
    async fn test_fetch_reads_catalog_off_the_runtime() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "catalog.json",
            r#"{"y": {"recommended_movies": [{"title": "Heat", "duration": 170}]}}"#,
        );

        let loader = CatalogLoader::new(dir.path(), "json");
        let movies = loader.fetch().await.unwrap();
        assert_eq!(movies, loader.load());
        assert_eq!(movies[0].display_title(), "Heat");
    }

    #[test]
    fn test_unparseable_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "broken.json", "{ not json");
        write(&dir, "wrong_shape.json", r#"{"y": {}}"#);

        let loader = CatalogLoader::new(dir.path(), "json");
        assert_eq!(loader.load(), fallback_catalog());
    }

    #[test]
    fn test_loads_files_in_path_order_and_keeps_duplicates() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "b.json",
            r#"{"y": {"recommended_movies": [{"title": "Second"}, {"title": "Shared"}]}}"#,
        );
        write(
            &dir,
            "a.json",
            r#"{"y": {"recommended_movies": [{"title": "First"}, {"title": "Shared"}]}}"#,
        );
        write(
            &dir,
            "ignored.txt",
            r#"{"y": {"recommended_movies": [{"title": "Ignored"}]}}"#,
        );

        let loader = CatalogLoader::new(dir.path(), "json");
        let titles: Vec<String> = loader
            .load()
            .into_iter()
            .filter_map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["First", "Shared", "Second", "Shared"]);
    }
}
