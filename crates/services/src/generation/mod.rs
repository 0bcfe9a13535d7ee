//! Study-set generation: the collaborator that turns source text into
//! flashcards or quiz questions.

mod openai;
mod prompts;

use std::env;

use async_trait::async_trait;

use study_core::model::{Flashcard, GenerationSettingsDraft, QuizQuestion};

use crate::error::GenerationError;

pub use openai::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiGenerator};
pub use prompts::{flashcard_prompt, quiz_prompt};

/// Produces ordered study items from source text.
#[async_trait]
pub trait StudySetGenerator {
    async fn flashcards(&self, text: &str, count: u32) -> Result<Vec<Flashcard>, GenerationError>;

    async fn quiz(&self, text: &str, count: u32) -> Result<Vec<QuizQuestion>, GenerationError>;
}

/// Read generator settings from `SMARTCARDS_AI_*` environment variables.
///
/// Unset or unparsable variables stay `None`; validation happens later.
#[must_use]
pub fn settings_from_env() -> GenerationSettingsDraft {
    GenerationSettingsDraft {
        api_key: env::var("SMARTCARDS_AI_API_KEY").ok(),
        api_model: env::var("SMARTCARDS_AI_MODEL").ok(),
        api_base_url: env::var("SMARTCARDS_AI_BASE_URL").ok(),
        flashcard_count: env::var("SMARTCARDS_FLASHCARD_COUNT")
            .ok()
            .and_then(|value| value.trim().parse().ok()),
        quiz_count: env::var("SMARTCARDS_QUIZ_COUNT")
            .ok()
            .and_then(|value| value.trim().parse().ok()),
    }
}
