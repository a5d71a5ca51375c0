use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::Config,
    error::AppResult,
    models::{Explanation, Movie, Preferences},
    services::{
        completion::{ChatMessage, CompletionClient, CompletionRequest, CompletionSettings, OpenAiClient},
        prompts,
    },
};

/// Number of candidates that receive a stub explanation
pub const STUB_EXPLANATION_LIMIT: usize = 3;

/// How explanations are produced, fixed for the generator's lifetime
#[derive(Clone)]
enum Mode {
    Stub,
    Live {
        client: Arc<dyn CompletionClient>,
        settings: CompletionSettings,
    },
}

/// Produces the `ai` part of a recommendation
#[derive(Clone)]
pub struct ExplanationGenerator {
    mode: Mode,
}

impl ExplanationGenerator {
    /// Deterministic placeholder explanations, no remote calls
    pub fn stub() -> Self {
        Self { mode: Mode::Stub }
    }

    /// Delegates explanation text to `client`
    pub fn live(client: Arc<dyn CompletionClient>, settings: CompletionSettings) -> Self {
        Self {
            mode: Mode::Live { client, settings },
        }
    }

    /// Picks live mode when an API key is configured, stub mode otherwise
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let Some(api_key) = config.api_key() else {
            return Ok(Self::stub());
        };

        let client = OpenAiClient::new(
            api_key.to_string(),
            config.openai_api_url.clone(),
            config.openai_model.clone(),
            Duration::from_secs(config.completion_timeout_secs),
        )?;
        let settings = CompletionSettings {
            max_tokens: config.completion_max_tokens,
            temperature: config.completion_temperature,
        };

        Ok(Self::live(Arc::new(client), settings))
    }

    pub fn is_live(&self) -> bool {
        matches!(self.mode, Mode::Live { .. })
    }

    /// Name of the active mode, for logging
    pub fn mode_name(&self) -> &'static str {
        match &self.mode {
            Mode::Stub => "stub",
            Mode::Live { client, .. } => client.name(),
        }
    }

    /// Explains why the candidates fit the preferences
    ///
    /// Stub mode yields one record per candidate, at most three. Live mode
    /// yields a single record holding the model's raw answer. Completion
    /// failures are returned to the caller.
    pub async fn generate(
        &self,
        candidates: &[Movie],
        prefs: &Preferences,
    ) -> AppResult<Vec<Explanation>> {
        match &self.mode {
            Mode::Stub => Ok(stub_explanations(candidates, prefs)),
            Mode::Live { client, settings } => {
                let request = CompletionRequest {
                    messages: vec![
                        ChatMessage::system(prompts::SYSTEM_PROMPT),
                        ChatMessage::user(prompts::ranking_prompt(candidates, prefs)),
                    ],
                    settings: *settings,
                };

                let text = client.complete(&request).await.inspect_err(|e| {
                    tracing::error!(
                        provider = client.name(),
                        error = %e,
                        "Explanation generation failed"
                    );
                })?;

                Ok(vec![Explanation::from_model_output(text)])
            }
        }
    }
}

fn stub_explanations(candidates: &[Movie], prefs: &Preferences) -> Vec<Explanation> {
    candidates
        .iter()
        .take(STUB_EXPLANATION_LIMIT)
        .map(|movie| Explanation::new(movie.display_title(), prompts::stub_explanation(movie, prefs)))
        .collect()
}
