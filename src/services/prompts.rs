use crate::models::{Movie, Preferences};

pub const SYSTEM_PROMPT: &str = "You are a helpful movie recommender.";

/// Builds the user prompt asking the model to rank the candidates
pub fn ranking_prompt(candidates: &[Movie], prefs: &Preferences) -> String {
    let max_duration = prefs
        .max_duration
        .map(|d| format!("{d} minutes"))
        .unwrap_or_else(|| "any".to_string());

    let mut prompt = format!(
        "You are a movie recommendation assistant.\n\
         User preferences: mood: {}, genres: {}, max_duration: {}\n\
         Candidates:\n",
        or_unspecified(&prefs.mood),
        or_unspecified(&prefs.genres.join(", ")),
        max_duration,
    );

    let lines: Vec<String> = candidates
        .iter()
        .map(|movie| {
            let duration = movie
                .duration
                .map(|d| format!("{d} min"))
                .unwrap_or_else(|| "unknown".to_string());
            format!(
                "- {} (genres: {}, duration: {})\n",
                or_unknown(movie.display_title()),
                or_unknown(&movie.genres.join(", ")),
                duration,
            )
        })
        .collect();
    prompt.push_str(&lines.concat());

    prompt.push_str(
        "\nTask: pick the top 3 candidates, rank them, and explain briefly \
         (1-2 sentences) why each one fits.\n",
    );
    prompt
}

/// Deterministic placeholder used when no completion service is configured
pub fn stub_explanation(movie: &Movie, prefs: &Preferences) -> String {
    format!(
        "Stub: {} suits the mood '{}' and matches the genres {:?}",
        movie.display_title(),
        prefs.mood,
        prefs.genres,
    )
}

fn or_unspecified(value: &str) -> &str {
    if value.is_empty() {
        "unspecified"
    } else {
        value
    }
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        "unknown"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_prompt_lists_preferences_and_candidates() {
        let prefs = Preferences {
            mood: "upbeat".to_string(),
            genres: vec!["comedy".to_string()],
            max_duration: Some(120),
        };
        let mut untitled = Movie::new("", &[], 0);
        untitled.title = None;
        untitled.duration = None;

        let prompt = ranking_prompt(&[Movie::new("Superbad", &["comedy"], 113), untitled], &prefs);

        assert!(prompt.contains("mood: upbeat, genres: comedy, max_duration: 120 minutes"));
        assert!(prompt.contains("- Superbad (genres: comedy, duration: 113 min)"));
        assert!(prompt.contains("- unknown (genres: unknown, duration: unknown)"));
        assert!(prompt.contains("top 3"));
    }

    #[test]
    fn test_ranking_prompt_without_limits() {
        let prompt = ranking_prompt(&[], &Preferences::default());
        assert!(prompt.contains("mood: unspecified, genres: unspecified, max_duration: any"));
    }

    #[test]
    fn test_stub_explanation_echoes_inputs() {
        let prefs = Preferences {
            mood: "cozy".to_string(),
            genres: vec!["drama".to_string()],
            max_duration: None,
        };
        let text = stub_explanation(&Movie::new("La La Land", &["drama"], 128), &prefs);
        assert!(text.contains("La La Land"));
        assert!(text.contains("cozy"));
        assert!(text.contains("drama"));
    }
}
