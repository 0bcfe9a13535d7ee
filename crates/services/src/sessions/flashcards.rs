use serde::Serialize;

use study_core::model::Flashcard;
use study_core::{
    Clock, Direction, SessionError, TransitionGate, TransitionPhase, TransitionTicket,
};

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Observable state of a flashcard session after the last event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashcardSnapshot {
    pub index: usize,
    pub len: usize,
    pub revealed: bool,
    pub transition_phase: TransitionPhase,
    pub current_card: Option<Flashcard>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Review session over an ordered, immutable list of flashcards.
///
/// Prev/next go through a [`TransitionGate`]: the request only starts the
/// slide, and the cursor moves when the gate fires. Jumps are immediate.
/// Every cursor move hides the answer face.
#[derive(Debug, Clone)]
pub struct FlashcardSession {
    cards: Vec<Flashcard>,
    index: usize,
    revealed: bool,
    gate: TransitionGate,
    clock: Clock,
}

impl FlashcardSession {
    /// An empty list yields an inert session.
    #[must_use]
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            index: 0,
            revealed: false,
            gate: TransitionGate::new(),
            clock: Clock::default(),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn transition_phase(&self) -> TransitionPhase {
        self.gate.phase()
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.cards.len()
    }

    /// # Errors
    ///
    /// Returns `SessionError::EmptySession` when the session has no cards.
    pub fn current_card(&self) -> Result<&Flashcard, SessionError> {
        self.cards.get(self.index).ok_or(SessionError::EmptySession)
    }

    /// Start a backward slide. `None` at the first card or while a slide is
    /// already pending.
    pub fn go_prev(&mut self) -> Option<TransitionTicket> {
        if !self.can_go_prev() {
            return None;
        }
        self.gate.request(Direction::Back, self.clock.now())
    }

    /// Start a forward slide. `None` at the last card or while a slide is
    /// already pending.
    pub fn go_next(&mut self) -> Option<TransitionTicket> {
        if !self.can_go_next() {
            return None;
        }
        self.gate.request(Direction::Forward, self.clock.now())
    }

    /// Move straight to `index`, cancelling any slide in flight.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidIndex` when `index` is out of range; the
    /// session is left unchanged.
    pub fn jump_to(&mut self, index: usize) -> Result<(), SessionError> {
        if index >= self.cards.len() {
            return Err(SessionError::InvalidIndex {
                index,
                len: self.cards.len(),
            });
        }
        if let Some(cancelled) = self.gate.cancel() {
            log::debug!("jump to {index} cancels pending {:?} slide", cancelled.direction());
        }
        self.move_to(index);
        Ok(())
    }

    /// Flip between question and answer; returns the new face.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptySession` when the session has no cards.
    pub fn toggle_reveal(&mut self) -> Result<bool, SessionError> {
        if self.cards.is_empty() {
            return Err(SessionError::EmptySession);
        }
        self.revealed = !self.revealed;
        Ok(self.revealed)
    }

    /// Commit the slide identified by `ticket`. Returns `false` for stale tickets.
    pub fn complete_transition(&mut self, ticket: TransitionTicket) -> bool {
        match self.gate.fire(ticket) {
            Some(direction) => {
                self.commit(direction);
                true
            }
            None => false,
        }
    }

    /// Commit the pending slide if its deadline has passed at `now`.
    pub fn poll_transition(&mut self, now: chrono::DateTime<chrono::Utc>) -> bool {
        match self.gate.poll(now) {
            Some(direction) => {
                self.commit(direction);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> FlashcardSnapshot {
        FlashcardSnapshot {
            index: self.index,
            len: self.cards.len(),
            revealed: self.revealed,
            transition_phase: self.gate.phase(),
            current_card: self.cards.get(self.index).cloned(),
        }
    }

    fn commit(&mut self, direction: Direction) {
        let target = match direction {
            Direction::Back => self.index.checked_sub(1),
            Direction::Forward => Some(self.index + 1).filter(|next| *next < self.cards.len()),
        };
        match target {
            Some(index) => self.move_to(index),
            None => {
                // Bounds are checked on request; only the face reset applies here.
                self.revealed = false;
            }
        }
    }

    fn move_to(&mut self, index: usize) {
        log::debug!("flashcard {} -> {} of {}", self.index, index, self.cards.len());
        self.index = index;
        self.revealed = false;
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
