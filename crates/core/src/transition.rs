use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Slide animation milliseconds between a navigation request and its commit.
pub const DEFAULT_DELAY_MS: i64 = 300;

/// Ticket ids are unique across every gate in the process.
static NEXT_TICKET_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Back,
    Forward,
}

impl Direction {
    #[must_use]
    pub fn phase(self) -> TransitionPhase {
        match self {
            Direction::Back => TransitionPhase::MovingBack,
            Direction::Forward => TransitionPhase::MovingForward,
        }
    }
}

/// Visible state of the gate, polled by the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionPhase {
    #[default]
    Idle,
    MovingBack,
    MovingForward,
}

/// Token for one accepted transition request.
///
/// Whoever schedules the deferred commit holds on to the ticket and hands it
/// back to [`TransitionGate::fire`] once the delay has elapsed. A ticket that
/// is no longer the pending one (fired, cancelled) is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionTicket {
    id: u64,
    direction: Direction,
    due_at: DateTime<Utc>,
    delay: Duration,
}

impl TransitionTicket {
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn due_at(&self) -> DateTime<Utc> {
        self.due_at
    }

    /// Delay as a `std` duration, for async timers.
    #[must_use]
    pub fn sleep_for(&self) -> std::time::Duration {
        self.delay.to_std().unwrap_or_default()
    }
}

/// Defers a navigation commit by a fixed delay.
///
/// At most one transition is pending at a time. A request that arrives while
/// one is pending is ignored; the pending transition keeps its direction and
/// deadline. The gate fires each accepted request at most once.
#[derive(Clone, Debug)]
pub struct TransitionGate {
    delay: Duration,
    pending: Option<TransitionTicket>,
}

impl Default for TransitionGate {
    fn default() -> Self {
        Self::with_delay(Duration::milliseconds(DEFAULT_DELAY_MS))
    }
}

impl TransitionGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Negative delays are clamped to zero.
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: delay.max(Duration::zero()),
            pending: None,
        }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn phase(&self) -> TransitionPhase {
        self.pending
            .map_or(TransitionPhase::Idle, |ticket| ticket.direction.phase())
    }

    #[must_use]
    pub fn pending(&self) -> Option<TransitionTicket> {
        self.pending
    }

    /// Returns `None` when another transition is already pending.
    pub fn request(&mut self, direction: Direction, now: DateTime<Utc>) -> Option<TransitionTicket> {
        if let Some(pending) = self.pending {
            log::trace!(
                "transition {direction:?} ignored, {:?} pending until {}",
                pending.direction,
                pending.due_at
            );
            return None;
        }

        let ticket = TransitionTicket {
            id: NEXT_TICKET_ID.fetch_add(1, Ordering::Relaxed),
            direction,
            due_at: now + self.delay,
            delay: self.delay,
        };
        self.pending = Some(ticket);
        Some(ticket)
    }

    /// Fire the pending transition if `ticket` is still the pending one.
    pub fn fire(&mut self, ticket: TransitionTicket) -> Option<Direction> {
        match self.pending {
            Some(pending) if pending == ticket => {
                self.pending = None;
                Some(pending.direction)
            }
            _ => None,
        }
    }

    /// Fire the pending transition if its deadline has passed.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<Direction> {
        let pending = self.pending?;
        if now < pending.due_at {
            return None;
        }
        self.fire(pending)
    }

    /// Drop the pending transition without firing it.
    pub fn cancel(&mut self) -> Option<TransitionTicket> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn request_sets_phase_and_deadline() {
        let now = fixed_now();
        let mut gate = TransitionGate::new();
        assert_eq!(gate.phase(), TransitionPhase::Idle);

        let ticket = gate.request(Direction::Forward, now).unwrap();
        assert_eq!(gate.phase(), TransitionPhase::MovingForward);
        assert_eq!(ticket.due_at(), now + Duration::milliseconds(DEFAULT_DELAY_MS));
        assert_eq!(ticket.sleep_for(), std::time::Duration::from_millis(300));
    }

    #[test]
    fn overlapping_request_is_ignored() {
        let now = fixed_now();
        let mut gate = TransitionGate::new();
        let first = gate.request(Direction::Forward, now).unwrap();

        let later = now + Duration::milliseconds(100);
        assert!(gate.request(Direction::Back, later).is_none());
        assert_eq!(gate.pending(), Some(first));
        assert_eq!(gate.phase(), TransitionPhase::MovingForward);
    }

    #[test]
    fn poll_fires_exactly_once_after_deadline() {
        let now = fixed_now();
        let mut gate = TransitionGate::new();
        gate.request(Direction::Back, now).unwrap();

        assert_eq!(gate.poll(now + Duration::milliseconds(299)), None);
        assert_eq!(
            gate.poll(now + Duration::milliseconds(300)),
            Some(Direction::Back)
        );
        assert_eq!(gate.phase(), TransitionPhase::Idle);
        assert_eq!(gate.poll(now + Duration::seconds(10)), None);
    }

    #[test]
    fn stale_ticket_does_not_fire_a_newer_transition() {
        let now = fixed_now();
        let mut gate = TransitionGate::new();
        let first = gate.request(Direction::Forward, now).unwrap();
        assert_eq!(gate.fire(first), Some(Direction::Forward));

        let second = gate.request(Direction::Back, now).unwrap();
        assert_eq!(gate.fire(first), None);
        assert_eq!(gate.pending(), Some(second));
        assert_eq!(gate.fire(second), Some(Direction::Back));
    }

    #[test]
    fn ticket_from_another_gate_is_ignored() {
        let now = fixed_now();
        let mut replaced = TransitionGate::new();
        let old_ticket = replaced.request(Direction::Forward, now).unwrap();

        let mut gate = TransitionGate::new();
        let ticket = gate.request(Direction::Forward, now).unwrap();
        assert_ne!(old_ticket, ticket);
        assert_eq!(gate.fire(old_ticket), None);
        assert_eq!(gate.pending(), Some(ticket));
    }

    #[test]
    fn cancelled_ticket_is_inert() {
        let now = fixed_now();
        let mut gate = TransitionGate::new();
        let ticket = gate.request(Direction::Forward, now).unwrap();

        assert_eq!(gate.cancel(), Some(ticket));
        assert_eq!(gate.fire(ticket), None);
        assert_eq!(gate.pending(), None);
    }

    #[test]
    fn zero_delay_is_due_immediately() {
        let now = fixed_now();
        let mut gate = TransitionGate::with_delay(Duration::milliseconds(-5));
        assert_eq!(gate.delay(), Duration::zero());
        gate.request(Direction::Forward, now).unwrap();
        assert_eq!(gate.poll(now), Some(Direction::Forward));
    }
}
