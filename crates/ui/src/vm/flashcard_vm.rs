use dioxus::prelude::Key;
use services::FlashcardSession;
use study_core::{SessionError, TransitionPhase, TransitionTicket};

use super::markdown_vm::card_text_html;
use super::nav_vm::{PipVm, map_pips, progress_label};

/// Cards peeking out behind the current one.
const STACK_DEPTH: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashcardIntent {
    Prev,
    Next,
    Jump(usize),
    Flip,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlashcardVm {
    pub progress_label: String,
    pub question_html: String,
    pub answer_html: String,
    pub revealed: bool,
    pub slide_class: &'static str,
    pub can_prev: bool,
    pub can_next: bool,
    pub stack_depth: usize,
    pub pips: Vec<PipVm>,
}

/// `None` for an empty session; there is nothing to show.
#[must_use]
pub fn map_flashcard_session(session: &FlashcardSession) -> Option<FlashcardVm> {
    let card = session.current_card().ok()?;
    let index = session.index();
    let len = session.len();

    Some(FlashcardVm {
        progress_label: progress_label("Card", index, len),
        question_html: card_text_html(&card.question),
        answer_html: card_text_html(&card.answer),
        revealed: session.is_revealed(),
        slide_class: slide_class(session.transition_phase()),
        can_prev: session.can_go_prev(),
        can_next: session.can_go_next(),
        stack_depth: len.saturating_sub(index + 1).min(STACK_DEPTH),
        pips: map_pips(len, index),
    })
}

#[must_use]
pub fn slide_class(phase: TransitionPhase) -> &'static str {
    match phase {
        TransitionPhase::Idle => "slide-idle",
        TransitionPhase::MovingBack => "slide-out-left",
        TransitionPhase::MovingForward => "slide-out-right",
    }
}

/// Stage keyboard shortcuts. `None` leaves the key to the browser.
#[must_use]
pub fn flashcard_intent_for_key(key: &Key) -> Option<FlashcardIntent> {
    match key {
        Key::ArrowLeft => Some(FlashcardIntent::Prev),
        Key::ArrowRight => Some(FlashcardIntent::Next),
        Key::Enter => Some(FlashcardIntent::Flip),
        Key::Character(value) if value == " " => Some(FlashcardIntent::Flip),
        _ => None,
    }
}

/// Apply a user intent. A returned ticket must be handed back to
/// `FlashcardSession::complete_transition` once its delay has elapsed.
///
/// # Errors
///
/// Propagates `SessionError` from jumps and flips.
pub fn apply_flashcard_intent(
    session: &mut FlashcardSession,
    intent: FlashcardIntent,
) -> Result<Option<TransitionTicket>, SessionError> {
    match intent {
        FlashcardIntent::Prev => Ok(session.go_prev()),
        FlashcardIntent::Next => Ok(session.go_next()),
        FlashcardIntent::Jump(index) => session.jump_to(index).map(|()| None),
        FlashcardIntent::Flip => session.toggle_reveal().map(|_| None),
    }
}
