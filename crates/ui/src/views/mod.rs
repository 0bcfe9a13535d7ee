mod flashcards;
mod quiz;
mod state;
mod study;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use flashcards::{FlashcardsPanel, PipGrid};
pub use quiz::QuizPanel;
pub use state::{GenerateState, ViewError};
pub use study::StudyView;
