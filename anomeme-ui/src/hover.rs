//! Hover delay state for tooltips
//!
//! Each tooltip owns one `HoverDelay`. Entering the trigger hands out a
//! `ShowTicket`; the delayed task presents it back via `fire()` once the delay
//! elapses. A ticket is only honored if nothing happened in between: a leave
//! or a newer enter invalidates it. This keeps a stale timer from showing a
//! tooltip even if the task itself could not be cancelled in time.

use tracing::trace;

/// Proof that a show was scheduled, redeemed by [`HoverDelay::fire`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShowTicket(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverDelay {
    generation: u64,
    pending: Option<u64>,
    visible: bool,
}

impl HoverDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered the trigger. Supersedes any pending show.
    pub fn enter(&mut self) -> ShowTicket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(self.generation);
        trace!("Hover enter, generation {}", self.generation);
        ShowTicket(self.generation)
    }

    /// The delay for `ticket` elapsed. Returns true if the tooltip should show.
    pub fn fire(&mut self, ticket: ShowTicket) -> bool {
        if self.pending != Some(ticket.0) {
            trace!("Dropping stale show ticket {}", ticket.0);
            return false;
        }
        self.pending = None;
        self.visible = true;
        true
    }

    /// Pointer left the trigger (or the window lost focus). Hides immediately.
    pub fn leave(&mut self) {
        self.pending = None;
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_then_fire_shows() {
        let mut hover = HoverDelay::new();
        let ticket = hover.enter();
        assert!(hover.is_pending());
        assert!(!hover.is_visible());
        assert!(hover.fire(ticket));
        assert!(hover.is_visible());
        assert!(!hover.is_pending());
    }

    #[test]
    fn test_leave_before_fire_cancels() {
        let mut hover = HoverDelay::new();
        let ticket = hover.enter();
        hover.leave();
        assert!(!hover.fire(ticket));
        assert!(!hover.is_visible());
    }

    #[test]
    fn test_reenter_supersedes_previous_ticket() {
        let mut hover = HoverDelay::new();
        let first = hover.enter();
        let second = hover.enter();
        assert_ne!(first, second);
        assert!(!hover.fire(first));
        assert!(hover.is_pending());
        assert!(hover.fire(second));
    }

    #[test]
    fn test_ticket_fires_once() {
        let mut hover = HoverDelay::new();
        let ticket = hover.enter();
        assert!(hover.fire(ticket));
        assert!(!hover.fire(ticket));
    }

    #[test]
    fn test_leave_hides_visible_tooltip() {
        let mut hover = HoverDelay::new();
        let ticket = hover.enter();
        hover.fire(ticket);
        hover.leave();
        assert!(!hover.is_visible());
    }

    #[test]
    fn test_reenter_while_visible_keeps_it_visible_until_fire() {
        let mut hover = HoverDelay::new();
        let ticket = hover.enter();
        hover.fire(ticket);
        let again = hover.enter();
        assert!(hover.is_visible());
        assert!(hover.fire(again));
    }
}
