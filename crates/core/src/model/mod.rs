mod flashcard;
mod generation_settings;
mod quiz;
mod study_set;

pub use flashcard::Flashcard;
pub use generation_settings::{
    DEFAULT_ITEM_COUNT, GenerationSettings, GenerationSettingsDraft, GenerationSettingsError,
    MAX_ITEM_COUNT,
};
pub use quiz::QuizQuestion;
pub use study_set::{StudySetError, parse_flashcards, parse_quiz, strip_code_fence};
