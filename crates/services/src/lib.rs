#![forbid(unsafe_code)]

pub mod error;
pub mod generation;
pub mod preprocess;
pub mod sessions;
pub mod study_service;

pub use study_core::Clock;

pub use error::GenerationError;
pub use generation::{OpenAiGenerator, StudySetGenerator, settings_from_env};
pub use preprocess::{MAX_SOURCE_WORDS, preprocess_source};
pub use sessions::{
    Feedback, FlashcardSession, FlashcardSnapshot, QuizAnswer, QuizSession, QuizSnapshot,
};
pub use study_service::StudyService;
