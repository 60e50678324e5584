//! Exhibit orchestration
//!
//! The polling loop that ties inputs, display and audio together.

pub mod controller;
pub mod state;

pub use controller::Exhibit;
pub use state::{Action, Event, Phase, PlaybackState};
