use serde::{Deserialize, Serialize};

/// A multiple choice question.
///
/// `correct_answer` is expected to match one of `options` byte-for-byte.
/// Nothing enforces that: a question whose answer is missing from its options
/// can simply never be answered correctly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl QuizQuestion {
    #[must_use]
    pub fn new<I, S>(question: impl Into<String>, options: I, correct_answer: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
        }
    }

    /// Exact string equality, no trimming or case folding.
    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_answer
    }

    /// True when some option can be judged correct.
    #[must_use]
    pub fn is_answerable(&self) -> bool {
        self.options.iter().any(|option| self.is_correct(option))
    }
}
