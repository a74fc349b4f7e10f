use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::domain::prompt::ChatPrompt;
use crate::error::{AppError, AppResult};
use crate::services::LanguageModelService;

/// Client for an OpenAI-compatible chat completions endpoint.
pub struct OpenAiClient {
    http: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        }
    }

    fn api_key(&self) -> AppResult<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| AppError::Configuration("OPENAI_API_KEY is not set".to_string()))
    }

    fn completions_endpoint(base_url: &str) -> String {
        format!("{}/chat/completions", base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl LanguageModelService for OpenAiClient {
    async fn complete(&self, prompt: &ChatPrompt) -> AppResult<String> {
        let api_key = self.api_key()?;
        let request_body = ChatCompletionRequest::new(&self.model, prompt);

        tracing::info!(model = %self.model, "requesting summary");
        let response = self
            .http
            .post(Self::completions_endpoint(&self.base_url))
            .header(AUTHORIZATION, format!("Bearer {api_key}"))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|err| {
                AppError::LanguageModel(format!("failed to call language model: {err}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            let detail = api_error_message(&body).unwrap_or(body);
            return Err(AppError::LanguageModel(format!(
                "language model responded with {status}: {detail}"
            )));
        }

        let payload: ChatCompletionResponse = response.json().await.map_err(|err| {
            AppError::LanguageModel(format!("failed to parse language model response: {err}"))
        })?;

        payload.first_answer()
    }
}

fn api_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|payload| payload.error.message)
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

impl<'a> ChatCompletionRequest<'a> {
    fn new(model: &'a str, prompt: &'a ChatPrompt) -> Self {
        Self {
            model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
        }
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

impl ChatCompletionResponse {
    fn first_answer(self) -> AppResult<String> {
        let choice = self.choices.into_iter().next().ok_or_else(|| {
            AppError::LanguageModel("language model returned no choices".to_string())
        })?;
        let text = choice.message.content.unwrap_or_default();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AppError::LanguageModel(
                "language model returned an empty answer".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn prompt() -> ChatPrompt {
        ChatPrompt {
            system: "be brief".to_string(),
            user: "## alpha\n- fix bug".to_string(),
        }
    }

    #[test]
    fn serializes_system_and_user_messages() {
        let prompt = prompt();
        let body = serde_json::to_value(ChatCompletionRequest::new("gpt-test", &prompt)).unwrap();
        assert_eq!(
            body,
            json!({
                "model": "gpt-test",
                "messages": [
                    {"role": "system", "content": "be brief"},
                    {"role": "user", "content": "## alpha\n- fix bug"},
                ]
            })
        );
    }

    #[test]
    fn builds_endpoint_without_double_slash() {
        assert_eq!(
            OpenAiClient::completions_endpoint("https://api.openai.com/v1/"),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn takes_trimmed_first_choice() {
        let payload: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [
                {"message": {"role": "assistant", "content": "\n  - shipped alpha  \n"}},
                {"message": {"role": "assistant", "content": "ignored"}},
            ]
        }))
        .unwrap();
        assert_eq!(payload.first_answer().unwrap(), "- shipped alpha");
    }

    #[test]
    fn rejects_missing_or_empty_choices() {
        let none: ChatCompletionResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(none.first_answer(), Err(AppError::LanguageModel(_))));

        let empty: ChatCompletionResponse =
            serde_json::from_value(json!({"choices": [{"message": {"content": null}}]})).unwrap();
        assert!(matches!(
            empty.first_answer(),
            Err(AppError::LanguageModel(_))
        ));
    }

    #[test]
    fn extracts_api_error_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(
            api_error_message(body).as_deref(),
            Some("Incorrect API key provided")
        );
        assert_eq!(api_error_message("<html>bad gateway</html>"), None);
    }

    #[tokio::test]
    async fn missing_api_key_is_a_configuration_error() {
        let config = AppConfig::from_lookup(|_| None, None, None);
        let client = OpenAiClient::new(&config);
        let result = client.complete(&prompt()).await;
        assert!(matches!(result, Err(AppError::Configuration(_))));
    }
}
