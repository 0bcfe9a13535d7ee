use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use study_core::model::{
    Flashcard, GenerationSettings, QuizQuestion, parse_flashcards, parse_quiz,
};

use super::StudySetGenerator;
use super::prompts::{FLASHCARD_SYSTEM, QUIZ_SYSTEM, flashcard_prompt, quiz_prompt};
use crate::error::GenerationError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

#[derive(Clone, Debug)]
struct Endpoint {
    base_url: String,
    api_key: String,
    model: String,
}

/// Generator backed by an OpenAI-compatible chat-completions endpoint.
///
/// Without an API key the generator is disabled and every call fails with
/// `GenerationError::Disabled`.
#[derive(Clone)]
pub struct OpenAiGenerator {
    client: Client,
    endpoint: Option<Endpoint>,
}

impl OpenAiGenerator {
    #[must_use]
    pub fn new(settings: &GenerationSettings) -> Self {
        let endpoint = settings.api_key().map(|api_key| Endpoint {
            base_url: settings
                .api_base_url()
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            api_key: api_key.to_string(),
            model: settings.api_model().unwrap_or(DEFAULT_MODEL).to_string(),
        });
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    async fn complete(&self, system: &str, prompt: String) -> Result<String, GenerationError> {
        let endpoint = self.endpoint.as_ref().ok_or(GenerationError::Disabled)?;

        let url = format!(
            "{}/chat/completions",
            endpoint.base_url.trim_end_matches('/')
        );
        let payload = ChatRequest {
            model: endpoint.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.7,
            max_tokens: 1000,
        };

        log::info!("requesting study set from {url} ({})", endpoint.model);
        let response = self
            .client
            .post(url)
            .bearer_auth(&endpoint.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            log::warn!("generator responded with {}", response.status());
            return Err(GenerationError::HttpStatus(response.status()));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        log::debug!("raw generator output: {content}");
        Ok(content)
    }
}

#[async_trait]
impl StudySetGenerator for OpenAiGenerator {
    async fn flashcards(&self, text: &str, count: u32) -> Result<Vec<Flashcard>, GenerationError> {
        let content = self
            .complete(FLASHCARD_SYSTEM, flashcard_prompt(text, count))
            .await?;
        Ok(parse_flashcards(&content)?)
    }

    async fn quiz(&self, text: &str, count: u32) -> Result<Vec<QuizQuestion>, GenerationError> {
        let content = self.complete(QUIZ_SYSTEM, quiz_prompt(text, count)).await?;
        Ok(parse_quiz(&content)?)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: Option<String>,
}
