use services::QuizSession;
use study_core::SessionError;

use super::markdown_vm::card_text_html;
use super::nav_vm::{PipVm, map_pips, progress_label};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Submit,
    Prev,
    Next,
    Jump(usize),
    Reset,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub label: String,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizFeedbackVm {
    pub correct: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub progress_label: String,
    pub question_number: String,
    pub question_html: String,
    /// Radio group name, unique per question so selections do not leak.
    pub radio_name: String,
    pub options: Vec<QuizOptionVm>,
    pub locked: bool,
    pub feedback: Option<QuizFeedbackVm>,
    pub can_prev: bool,
    pub can_next: bool,
    pub pips: Vec<PipVm>,
    pub score_label: Option<String>,
}

/// `None` for an empty quiz.
#[must_use]
pub fn map_quiz_session(session: &QuizSession) -> Option<QuizVm> {
    let question = session.current_question().ok()?;
    let index = session.index();
    let len = session.len();
    let draft = session.selected_option_draft();

    let options = question
        .options
        .iter()
        .map(|option| QuizOptionVm {
            label: option.clone(),
            checked: !draft.is_empty() && option == draft,
        })
        .collect();

    let feedback = session.feedback().map(|feedback| QuizFeedbackVm {
        correct: feedback.is_correct,
        message: if feedback.is_correct {
            "Correct!".to_string()
        } else {
            format!("Wrong! Correct answer: {}", feedback.correct_answer)
        },
    });

    let score_label = session
        .score_revealed()
        .then(|| format!("Your Score: {} / {len}", session.score()));

    Some(QuizVm {
        progress_label: progress_label("Question", index, len),
        question_number: format!("Q{}:", index + 1),
        question_html: card_text_html(&question.question),
        radio_name: format!("option-{index}"),
        options,
        locked: session.current_answered(),
        feedback,
        can_prev: session.can_go_prev(),
        can_next: session.can_go_next(),
        pips: map_pips(len, index),
        score_label,
    })
}

/// # Errors
///
/// Propagates `SessionError` from selections, submissions and jumps.
pub fn apply_quiz_intent(session: &mut QuizSession, intent: QuizIntent) -> Result<(), SessionError> {
    match intent {
        QuizIntent::Select(option) => session.select_option(option),
        QuizIntent::Submit => session.submit_answer().map(|_| ()),
        QuizIntent::Prev => {
            session.go_prev();
            Ok(())
        }
        QuizIntent::Next => {
            session.go_next();
            Ok(())
        }
        QuizIntent::Jump(index) => session.jump_to(index),
        QuizIntent::Reset => {
            session.reset();
            Ok(())
        }
    }
}
