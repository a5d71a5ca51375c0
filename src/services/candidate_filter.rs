use crate::models::{Movie, Preferences};

/// Keeps the movies that pass both the genre gate and the duration gate
///
/// Catalog order is preserved and duplicates are kept.
pub fn filter_candidates(catalog: Vec<Movie>, prefs: &Preferences) -> Vec<Movie> {
    let genres = prefs.normalized_genres();

    catalog
        .into_iter()
        .filter(|movie| passes_genre_gate(movie, &genres) && passes_duration_gate(movie, prefs))
        .collect()
}

/// No requested genres means every movie passes
fn passes_genre_gate(movie: &Movie, requested: &[String]) -> bool {
    requested.is_empty() || movie.has_any_genre(requested)
}

/// Movies of unknown length always pass
fn passes_duration_gate(movie: &Movie, prefs: &Preferences) -> bool {
    match (prefs.max_duration, movie.duration) {
        (Some(limit), Some(duration)) => duration <= limit,
        _ => true,
    }
}
