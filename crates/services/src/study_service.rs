use std::sync::Arc;

use study_core::Clock;
use study_core::model::{Flashcard, QuizQuestion};

use crate::error::GenerationError;
use crate::generation::StudySetGenerator;
use crate::preprocess::preprocess_source;
use crate::sessions::{FlashcardSession, QuizSession};

/// Orchestrates generation and session start.
///
/// Every call hands back a fresh session; replacing the previous one is up to
/// the caller that owns it.
#[derive(Clone)]
pub struct StudyService {
    clock: Clock,
    generator: Arc<dyn StudySetGenerator + Send + Sync>,
}

impl StudyService {
    #[must_use]
    pub fn new(clock: Clock, generator: Arc<dyn StudySetGenerator + Send + Sync>) -> Self {
        Self { clock, generator }
    }

    /// Clean `text` with [`preprocess_source`], generate flashcards from it and
    /// start a session over them.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::EmptySource` for blank text, or the
    /// generator's error.
    pub async fn start_flashcards(
        &self,
        text: &str,
        count: u32,
    ) -> Result<FlashcardSession, GenerationError> {
        let text = prepare_source(text)?;
        let cards = self.generator.flashcards(&text, count).await?;
        log::info!("generated {} of {count} requested flashcards", cards.len());
        Ok(self.load_flashcards(cards))
    }

    /// Generate quiz questions from `text` and start a session over them.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::EmptySource` for blank text, or the
    /// generator's error.
    pub async fn start_quiz(&self, text: &str, count: u32) -> Result<QuizSession, GenerationError> {
        let text = prepare_source(text)?;
        let questions = self.generator.quiz(&text, count).await?;
        log::info!("generated {} of {count} requested quiz questions", questions.len());
        Ok(self.load_quiz(questions))
    }

    /// Start a session over an already obtained flashcard list.
    #[must_use]
    pub fn load_flashcards(&self, cards: Vec<Flashcard>) -> FlashcardSession {
        FlashcardSession::new(cards).with_clock(self.clock)
    }

    /// Start a session over an already obtained question list.
    #[must_use]
    pub fn load_quiz(&self, questions: Vec<QuizQuestion>) -> QuizSession {
        QuizSession::new(questions)
    }
}

fn prepare_source(text: &str) -> Result<String, GenerationError> {
    let cleaned = preprocess_source(text);
    if cleaned.is_empty() {
        return Err(GenerationError::EmptySource);
    }
    log::debug!(
        "source text reduced from {} to {} words",
        text.split_whitespace().count(),
        cleaned.split_whitespace().count()
    );
    Ok(cleaned)
}
