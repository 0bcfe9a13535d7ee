use serde::Serialize;

use study_core::model::QuizQuestion;
use study_core::{SessionError, TransitionRejection};

//
// ─── ANSWERS ───────────────────────────────────────────────────────────────────
//

/// Locked answer for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub selected_option: String,
    pub is_correct: bool,
}

/// Per-question answer record.
///
/// A question is answered exactly when it holds a submission, so "answered",
/// "correctness known" and "selection stored" cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAnswer {
    submission: Option<Submission>,
}

impl QuizAnswer {
    #[must_use]
    pub fn answered(&self) -> bool {
        self.submission.is_some()
    }

    #[must_use]
    pub fn is_correct(&self) -> Option<bool> {
        self.submission.as_ref().map(|s| s.is_correct)
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        self.submission.as_ref().map(|s| s.selected_option.as_str())
    }
}

/// Shown right after a submit; cleared on navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub is_correct: bool,
    pub correct_answer: String,
}

/// Observable state of a quiz session after the last event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSnapshot {
    pub index: usize,
    pub len: usize,
    pub selected_option_draft: String,
    pub answered_questions: Vec<bool>,
    pub feedback: Option<Feedback>,
    pub score: usize,
    pub score_revealed: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Quiz-taking session over an ordered, immutable list of questions.
///
/// Each question moves `Unanswered -> Answered` once, via [`submit_answer`],
/// and stays answered until [`reset`]. Navigation is immediate; there is no
/// transition gate.
///
/// [`submit_answer`]: QuizSession::submit_answer
/// [`reset`]: QuizSession::reset
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    answers: Vec<QuizAnswer>,
    index: usize,
    draft: String,
    feedback: Option<Feedback>,
    score_revealed: bool,
}

impl QuizSession {
    /// An empty list yields an inert session.
    #[must_use]
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        let answers = vec![QuizAnswer::default(); questions.len()];
        Self {
            questions,
            answers,
            index: 0,
            draft: String::new(),
            feedback: None,
            score_revealed: false,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn answers(&self) -> &[QuizAnswer] {
        &self.answers
    }

    #[must_use]
    pub fn selected_option_draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn score_revealed(&self) -> bool {
        self.score_revealed
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.questions.len()
    }

    /// # Errors
    ///
    /// Returns `SessionError::EmptySession` when the quiz has no questions.
    pub fn current_question(&self) -> Result<&QuizQuestion, SessionError> {
        self.questions
            .get(self.index)
            .ok_or(SessionError::EmptySession)
    }

    /// Whether the current question is locked. `false` for an empty quiz.
    #[must_use]
    pub fn current_answered(&self) -> bool {
        self.answers
            .get(self.index)
            .is_some_and(QuizAnswer::answered)
    }

    /// Highlight `option` for the current question without submitting it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptySession` for an empty quiz and
    /// `SessionError::InvalidTransition` once the question is answered.
    pub fn select_option(&mut self, option: impl Into<String>) -> Result<(), SessionError> {
        self.ensure_open()?;
        self.draft = option.into();
        Ok(())
    }

    /// Lock the drafted option for the current question and grade it.
    ///
    /// Returns whether the answer was correct. A wrong answer is not an error.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptySession` for an empty quiz and
    /// `SessionError::InvalidTransition` when nothing is selected or the
    /// question is already answered. State is unchanged on error.
    pub fn submit_answer(&mut self) -> Result<bool, SessionError> {
        self.ensure_open()?;
        if self.draft.is_empty() {
            return Err(TransitionRejection::NoSelection.into());
        }

        let question = self.current_question()?;
        let is_correct = question.is_correct(&self.draft);
        let correct_answer = question.correct_answer.clone();

        self.answers[self.index].submission = Some(Submission {
            selected_option: self.draft.clone(),
            is_correct,
        });
        self.feedback = Some(Feedback {
            is_correct,
            correct_answer,
        });
        if self.index + 1 == self.questions.len() {
            self.score_revealed = true;
        }

        log::debug!(
            "quiz question {} of {} answered, correct: {is_correct}",
            self.index + 1,
            self.questions.len()
        );
        Ok(is_correct)
    }

    /// Returns `false` at the last question.
    pub fn go_next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.arrive(self.index + 1);
        true
    }

    /// Returns `false` at the first question.
    pub fn go_prev(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.arrive(self.index - 1);
        true
    }

    /// # Errors
    ///
    /// Returns `SessionError::InvalidIndex` when `index` is out of range; the
    /// session is left unchanged.
    pub fn jump_to(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.questions.len() {
            return Err(SessionError::InvalidIndex {
                index,
                len: self.questions.len(),
            });
        }
        self.arrive(index);
        Ok(())
    }

    /// Forget every answer and start over at the first question.
    pub fn reset(&mut self) {
        self.answers.fill(QuizAnswer::default());
        self.index = 0;
        self.draft.clear();
        self.feedback = None;
        self.score_revealed = false;
    }

    /// Number of correctly answered questions so far.
    #[must_use]
    pub fn score(&self) -> usize {
        self.answers
            .iter()
            .filter(|answer| answer.is_correct() == Some(true))
            .count()
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            index: self.index,
            len: self.questions.len(),
            selected_option_draft: self.draft.clone(),
            answered_questions: self.answers.iter().map(QuizAnswer::answered).collect(),
            feedback: self.feedback.clone(),
            score: self.score(),
            score_revealed: self.score_revealed,
        }
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.questions.is_empty() {
            return Err(SessionError::EmptySession);
        }
        if self.current_answered() {
            log::trace!("quiz question {} is locked", self.index + 1);
            return Err(TransitionRejection::AlreadyAnswered.into());
        }
        Ok(())
    }

    fn arrive(&mut self, index: usize) {
        self.index = index;
        self.draft = self.answers[index]
            .selected_option()
            .map(str::to_string)
            .unwrap_or_default();
        self.feedback = None;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> QuizSession {
        QuizSession::new(vec![
            QuizQuestion::new("2 + 2?", ["3", "4", "5", "6"], "4"),
            QuizQuestion::new("Capital of Italy?", ["Rome", "Milan", "Turin", "Naples"], "Rome"),
            QuizQuestion::new("Largest planet?", ["Mars", "Jupiter", "Venus", "Earth"], "Jupiter"),
        ])
    }

    #[test]
    fn correct_wrong_correct_scores_two_and_reveals_at_the_end() {
        let mut quiz = quiz();

        quiz.select_option("4").unwrap();
        assert!(quiz.submit_answer().unwrap());
        assert!(!quiz.score_revealed());

        assert!(quiz.go_next());
        quiz.select_option("Milan").unwrap();
        assert!(!quiz.submit_answer().unwrap());
        assert!(!quiz.score_revealed());

        assert!(quiz.go_next());
        quiz.select_option("Jupiter").unwrap();
        assert!(quiz.submit_answer().unwrap());

        assert_eq!(quiz.score(), 2);
        assert!(quiz.score_revealed());
    }

    #[test]
    fn submit_records_feedback_and_selection() {
        let mut quiz = quiz();
        quiz.jump_to(1).unwrap();
        quiz.select_option("Turin").unwrap();
        quiz.submit_answer().unwrap();

        assert_eq!(
            quiz.feedback(),
            Some(&Feedback {
                is_correct: false,
                correct_answer: "Rome".into(),
            })
        );
        let answer = &quiz.answers()[1];
        assert!(answer.answered());
        assert_eq!(answer.is_correct(), Some(false));
        assert_eq!(answer.selected_option(), Some("Turin"));
    }

    #[test]
    fn submit_without_selection_is_rejected() {
        let mut quiz = quiz();
        assert_eq!(
            quiz.submit_answer(),
            Err(SessionError::InvalidTransition(TransitionRejection::NoSelection))
        );
        assert!(!quiz.current_answered());

        quiz.select_option("").unwrap();
        assert!(quiz.submit_answer().is_err());
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn answered_question_is_locked() {
        let mut quiz = quiz();
        quiz.select_option("3").unwrap();
        quiz.submit_answer().unwrap();

        let locked = Err(SessionError::InvalidTransition(
            TransitionRejection::AlreadyAnswered,
        ));
        assert_eq!(quiz.select_option("4"), locked);
        assert_eq!(quiz.selected_option_draft(), "3");
        assert_eq!(quiz.submit_answer().map(|_| ()), locked);
        assert_eq!(quiz.answers()[0].is_correct(), Some(false));
    }

    #[test]
    fn revisiting_restores_selection_and_lock() {
        let mut quiz = quiz();
        quiz.select_option("4").unwrap();
        quiz.submit_answer().unwrap();

        quiz.jump_to(2).unwrap();
        assert_eq!(quiz.selected_option_draft(), "");
        assert_eq!(quiz.feedback(), None);

        quiz.jump_to(0).unwrap();
        assert_eq!(quiz.selected_option_draft(), "4");
        assert!(quiz.current_answered());
        assert!(quiz.submit_answer().is_err());
        assert_eq!(quiz.feedback(), None);
    }

    #[test]
    fn unsubmitted_draft_is_dropped_on_navigation() {
        let mut quiz = quiz();
        quiz.select_option("5").unwrap();
        assert!(quiz.go_next());
        assert!(quiz.go_prev());
        assert_eq!(quiz.selected_option_draft(), "");
        assert!(!quiz.current_answered());
    }

    #[test]
    fn boundaries_are_no_ops() {
        let mut quiz = quiz();
        assert!(!quiz.go_prev());
        assert_eq!(quiz.index(), 0);

        quiz.jump_to(2).unwrap();
        assert!(!quiz.go_next());
        assert_eq!(quiz.index(), 2);

        assert_eq!(
            quiz.jump_to(3),
            Err(SessionError::InvalidIndex { index: 3, len: 3 })
        );
        assert_eq!(quiz.index(), 2);
    }

    #[test]
    fn answered_is_monotonic_until_reset() {
        let mut quiz = quiz();
        quiz.select_option("4").unwrap();
        quiz.submit_answer().unwrap();

        for target in [1, 2, 0, 1, 0] {
            quiz.jump_to(target).unwrap();
            let _ = quiz.select_option("Rome");
            assert!(quiz.answers()[0].answered());
        }

        quiz.reset();
        assert!(quiz.answers().iter().all(|answer| !answer.answered()));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut quiz = quiz();
        quiz.select_option("4").unwrap();
        quiz.submit_answer().unwrap();
        quiz.go_next();
        quiz.select_option("Rome").unwrap();

        quiz.reset();
        let once = quiz.snapshot();
        quiz.reset();
        let twice = quiz.snapshot();

        assert_eq!(once, twice);
        assert_eq!(once.index, 0);
        assert_eq!(once.selected_option_draft, "");
        assert_eq!(once.answered_questions, vec![false, false, false]);
        assert_eq!(once.feedback, None);
        assert_eq!(once.score, 0);
        assert!(!once.score_revealed);
    }

    #[test]
    fn score_counts_only_correct_answers() {
        let mut quiz = quiz();
        assert_eq!(quiz.score(), 0);

        quiz.jump_to(2).unwrap();
        quiz.select_option("Jupiter").unwrap();
        quiz.submit_answer().unwrap();
        assert_eq!(quiz.score(), 1);
        // Last question answered first: the score shows even with gaps.
        assert!(quiz.score_revealed());

        quiz.jump_to(0).unwrap();
        quiz.select_option("6").unwrap();
        quiz.submit_answer().unwrap();
        assert_eq!(quiz.score(), 1);
    }

    #[test]
    fn unanswerable_question_is_never_correct() {
        let mut quiz = QuizSession::new(vec![QuizQuestion::new(
            "Sky colour?",
            ["green", "red"],
            "blue",
        )]);
        quiz.select_option("green").unwrap();
        assert!(!quiz.submit_answer().unwrap());
        assert_eq!(quiz.score(), 0);
        assert!(quiz.score_revealed());
    }

    #[test]
    fn empty_quiz_is_inert() {
        let mut quiz = QuizSession::new(Vec::new());
        assert_eq!(quiz.len(), 0);
        assert_eq!(quiz.current_question(), Err(SessionError::EmptySession));
        assert_eq!(quiz.select_option("x"), Err(SessionError::EmptySession));
        assert_eq!(quiz.submit_answer(), Err(SessionError::EmptySession));
        assert!(!quiz.go_next());
        assert!(!quiz.go_prev());
        quiz.reset();

        let snapshot = quiz.snapshot();
        assert_eq!(snapshot.len, 0);
        assert!(snapshot.answered_questions.is_empty());
        assert_eq!(snapshot.score, 0);
    }
}
