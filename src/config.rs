use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-5.2-2025-12-11";
pub const DEFAULT_LANGUAGE: &str = "Chinese";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    /// Language the summary is written in.
    pub language: String,
}

impl AppConfig {
    /// Reads the model service settings from the process environment.
    ///
    /// The overrides come from the command line and win over the defaults.
    pub fn load(model_override: Option<String>, language_override: Option<String>) -> Self {
        Self::from_lookup(
            |key| env::var(key).ok(),
            model_override,
            language_override,
        )
    }

    pub fn from_lookup<F>(
        lookup: F,
        model_override: Option<String>,
        language_override: Option<String>,
    ) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY").filter(|value| !value.trim().is_empty());
        let base_url = non_blank(lookup("OPENAI_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = non_blank(model_override).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let language =
            non_blank(language_override).unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        Self {
            api_key,
            base_url,
            model,
            language,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
