use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{Flashcard, QuizQuestion};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StudySetError {
    #[error("generator output is empty")]
    Empty,
    #[error("generator output is not a JSON array")]
    NotAnArray,
    #[error("malformed generator output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Remove a surrounding Markdown code fence such as ```` ```json ... ``` ````.
///
/// Text without a leading fence is returned trimmed and otherwise untouched.
#[must_use]
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string (`json`, `JSON`, ...) on the opening line.
    let body = match rest.find('\n') {
        Some(pos) if rest[..pos].trim().chars().all(char::is_alphanumeric) => &rest[pos + 1..],
        _ => rest
            .get(..4)
            .filter(|tag| tag.eq_ignore_ascii_case("json"))
            .map_or(rest, |_| &rest[4..]),
    };

    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

/// Parse the flashcard list returned by the generator.
///
/// # Errors
///
/// Returns `StudySetError` when the output is empty, not a JSON array, or an
/// entry is missing `question`/`answer`.
pub fn parse_flashcards(raw: &str) -> Result<Vec<Flashcard>, StudySetError> {
    parse_array(raw)
}

/// Parse the quiz question list returned by the generator.
///
/// Questions whose `correct_answer` is not among their options are kept as-is.
///
/// # Errors
///
/// Returns `StudySetError` when the output is empty, not a JSON array, or an
/// entry is missing a field.
pub fn parse_quiz(raw: &str) -> Result<Vec<QuizQuestion>, StudySetError> {
    let questions: Vec<QuizQuestion> = parse_array(raw)?;
    for (idx, question) in questions.iter().enumerate() {
        if !question.is_answerable() {
            log::warn!(
                "quiz question {} has a correct answer outside its options: {:?}",
                idx + 1,
                question.correct_answer
            );
        }
    }
    Ok(questions)
}

fn parse_array<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>, StudySetError> {
    let body = strip_code_fence(raw);
    if body.is_empty() {
        return Err(StudySetError::Empty);
    }

    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_array() {
        return Err(StudySetError::NotAnArray);
    }
    Ok(serde_json::from_value(value)?)
}
