//! Exhibit loop state
//!
//! The loop is either idle (waiting for the next poll) or acting on an
//! edge. Actions block until complete, so edges that arrive while acting
//! are never observed.

use crate::catalog::Catalog;

/// What the loop is doing in response to an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Show the current item and play its call
    Announce,
    /// Play the current item's call again
    Replay,
}

/// Events that drive the loop phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Power-on announce of the first item
    Startup,
    /// Rising edge on the advance signal
    AdvanceEdge,
    /// Rising edge on the replay signal
    ReplayEdge,
    /// Action and its settle delay finished
    ActionComplete,
}

/// Loop phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Waiting for the next poll
    #[default]
    Idle,
    /// Performing an announce or replay
    Acting(Action),
}

impl Phase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Phase::Idle)
    }

    /// Process an event and return the next phase
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Phase::*;

        match (self, event) {
            (Idle, Startup) => Acting(Action::Announce),
            (Idle, AdvanceEdge) => Acting(Action::Announce),
            (Idle, ReplayEdge) => Acting(Action::Replay),
            (Acting(_), ActionComplete) => Idle,

            // Edges are not observed while acting
            _ => self,
        }
    }
}

/// Position in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PlaybackState {
    current: usize,
}

impl PlaybackState {
    /// Start at the first item
    pub const fn new() -> Self {
        Self { current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Move to the next item, wrapping after the last
    pub fn advance(&mut self, catalog: &Catalog) -> usize {
        self.current = catalog.next_index(self.current);
        self.current
    }

    /// Go back to the first item
    pub fn reset(&mut self) {
        self.current = 0;
    }
}
