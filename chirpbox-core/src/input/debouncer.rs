//! Rising-edge detection for the exhibit inputs
//!
//! Only false-to-true transitions between consecutive polls are reported.
//! Repeated triggers from a bouncing contact are suppressed by the caller's
//! poll pacing and settle delay, not here.

/// Edge detector for one binary signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeDetector {
    last_level: bool,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self { last_level: false }
    }

    /// Record a new sample; returns true on a rising edge
    ///
    /// The stored level is updated whether or not an edge is reported.
    pub fn update(&mut self, level: bool) -> bool {
        let rising = level && !self.last_level;
        self.last_level = level;
        rising
    }

    /// Level seen on the previous update
    pub fn last_level(&self) -> bool {
        self.last_level
    }
}

/// Rising edges seen by one poll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Edges {
    pub advance: bool,
    pub replay: bool,
}

impl Edges {
    pub fn any(&self) -> bool {
        self.advance || self.replay
    }
}

/// Edge detection for the advance and replay signals
#[derive(Debug, Clone, Default)]
pub struct InputDebouncer {
    advance: EdgeDetector,
    replay: EdgeDetector,
}

impl InputDebouncer {
    /// Both signals start low
    pub const fn new() -> Self {
        Self {
            advance: EdgeDetector::new(),
            replay: EdgeDetector::new(),
        }
    }

    /// Feed one sample of both raw levels
    pub fn poll(&mut self, advance_level: bool, replay_level: bool) -> Edges {
        Edges {
            advance: self.advance.update(advance_level),
            replay: self.replay.update(replay_level),
        }
    }
}
