mod flashcard_vm;
mod markdown_vm;
mod nav_vm;
mod quiz_vm;

pub use flashcard_vm::{
    FlashcardIntent, FlashcardVm, apply_flashcard_intent, flashcard_intent_for_key,
    map_flashcard_session, slide_class,
};
pub use markdown_vm::{card_text_html, sanitize_html};
pub use nav_vm::{PipVm, map_pips, progress_label};
pub use quiz_vm::{
    QuizFeedbackVm, QuizIntent, QuizOptionVm, QuizVm, apply_quiz_intent, map_quiz_session,
};
