//! "Message sent" flag shown after a successful submission.
//!
//! The flag clears itself once its window elapses. Each submission gets a
//! fresh [`Ticket`]; a timer only clears the flag if it still holds the
//! current ticket, so rescheduling makes older timers harmless. After
//! [`Acknowledgement::teardown`] nothing mutates the state any more.

/// Identifies one scheduled auto-clear
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AckState {
    Idle,
    Acknowledged { deadline_ms: f64, ticket: Ticket },
}

#[derive(Debug)]
pub struct Acknowledgement {
    window_ms: f64,
    state: AckState,
    next_ticket: u64,
    torn_down: bool,
}

impl Acknowledgement {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            state: AckState::Idle,
            next_ticket: 0,
            torn_down: false,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> AckState {
        self.state
    }

    pub fn is_acknowledged(&self) -> bool {
        matches!(self.state, AckState::Acknowledged { .. })
    }

    /// Ticket of the auto-clear currently scheduled, if any.
    pub fn pending(&self) -> Option<Ticket> {
        match self.state {
            AckState::Acknowledged { ticket, .. } => Some(ticket),
            AckState::Idle => None,
        }
    }

    /// Raises the flag at `now_ms` and schedules a new clear, replacing any
    /// outstanding one. Returns `None` once torn down.
    pub fn submit(&mut self, now_ms: f64) -> Option<Ticket> {
        if self.torn_down {
            return None;
        }
        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        self.state = AckState::Acknowledged {
            deadline_ms: now_ms + self.window_ms,
            ticket,
        };
        Some(ticket)
    }

    /// Timer callback. Clears the flag if `ticket` is still the live one.
    pub fn expire(&mut self, ticket: Ticket) -> bool {
        if self.torn_down || self.pending() != Some(ticket) {
            return false;
        }
        self.state = AckState::Idle;
        true
    }

    /// Milliseconds from `now_ms` until the pending clear is due.
    pub fn remaining_ms(&self, now_ms: f64) -> Option<f64> {
        match self.state {
            AckState::Acknowledged { deadline_ms, .. } => Some((deadline_ms - now_ms).max(0.0)),
            AckState::Idle => None,
        }
    }

    /// Clears the flag if its deadline has passed by `now_ms`.
    #[cfg(test)]
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.state {
            AckState::Acknowledged { deadline_ms, ticket } if now_ms >= deadline_ms => self.expire(ticket),
            _ => false,
        }
    }

    /// Owner is going away: drop the pending clear and freeze the state.
    /// Returns the ticket that was cancelled.
    pub fn teardown(&mut self) -> Option<Ticket> {
        if self.torn_down {
            return None;
        }
        self.torn_down = true;
        self.pending()
    }

    #[cfg(test)]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: f64 = 4_000.0;

    #[test]
    fn test_flag_holds_for_the_window_then_clears() {
        let mut ack = Acknowledgement::new(WINDOW);
        let t0 = 12_345.0;
        ack.submit(t0);

        for t in [t0, t0 + 1.0, t0 + 2_000.0, t0 + WINDOW - 1.0] {
            assert!(!ack.poll(t));
            assert!(ack.is_acknowledged(), "cleared early at {}", t - t0);
        }
        assert!(ack.poll(t0 + WINDOW));
        assert!(!ack.is_acknowledged());
        assert!(!ack.poll(t0 + WINDOW + 500.0));
    }

    #[test]
    fn test_resubmit_reschedules_and_stales_old_ticket() {
        let mut ack = Acknowledgement::new(WINDOW);
        let first = ack.submit(0.0).unwrap();
        let second = ack.submit(3_000.0).unwrap();
        assert_ne!(first, second);
        assert_eq!(ack.pending(), Some(second));

        // first timer fires late; it must not clear the new acknowledgement
        assert!(!ack.expire(first));
        assert!(ack.is_acknowledged());
        assert!(!ack.poll(WINDOW));
        assert!(ack.poll(3_000.0 + WINDOW));
    }

    #[test]
    fn test_teardown_cancels_pending_clear() {
        let mut ack = Acknowledgement::new(WINDOW);
        let ticket = ack.submit(0.0).unwrap();
        assert_eq!(ack.teardown(), Some(ticket));

        let before = ack.state();
        assert!(!ack.expire(ticket));
        assert!(!ack.poll(1_000.0 + WINDOW));
        assert_eq!(ack.state(), before);
        assert_eq!(ack.submit(5_000.0), None);
        assert_eq!(ack.teardown(), None);
    }

    #[test]
    fn test_remaining_time_follows_latest_submission() {
        let mut ack = Acknowledgement::new(WINDOW);
        assert_eq!(ack.remaining_ms(0.0), None);

        ack.submit(1_000.0);
        assert_eq!(ack.remaining_ms(1_000.0), Some(WINDOW));
        assert_eq!(ack.remaining_ms(4_000.0), Some(1_000.0));

        ack.submit(4_000.0);
        assert_eq!(ack.remaining_ms(4_000.0), Some(WINDOW));
        assert_eq!(ack.remaining_ms(9_000.0), Some(0.0));
    }

    #[test]
    fn test_idle_teardown_has_nothing_to_cancel() {
        let mut ack = Acknowledgement::new(WINDOW);
        assert_eq!(ack.teardown(), None);
        assert!(ack.is_torn_down());
    }
}
