pub(crate) const FLASHCARD_SYSTEM: &str = "You generate flashcards from study notes.";
pub(crate) const QUIZ_SYSTEM: &str = "You generate multiple choice quiz questions.";

#[must_use]
pub fn flashcard_prompt(text: &str, count: u32) -> String {
    format!(
        "You are a helpful study assistant. Based on the following text, generate {count} flashcards.\n\
         Each flashcard must be in this JSON format:\n\
         {{ \"question\": \"...\", \"answer\": \"...\" }}\n\n\
         Return only a JSON array, and nothing else.\n\n\
         Text:\n{text}"
    )
}

#[must_use]
pub fn quiz_prompt(text: &str, count: u32) -> String {
    format!(
        "You are a helpful quiz generator. Based on the following text, generate {count} multiple choice questions.\n\
         Each question must include:\n\
         - a \"question\" field\n\
         - four \"options\" (as a list)\n\
         - a \"correct_answer\" field that repeats one of the options exactly\n\n\
         Return only a JSON array.\n\n\
         Text:\n{text}"
    )
}
