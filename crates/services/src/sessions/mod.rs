mod flashcards;
mod quiz;

// Public API of the session subsystem.
pub use flashcards::{FlashcardSession, FlashcardSnapshot};
pub use quiz::{Feedback, QuizAnswer, QuizSession, QuizSnapshot, Submission};
