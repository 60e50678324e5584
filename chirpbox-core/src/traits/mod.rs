//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod audio;
pub mod display;
pub mod input;
pub mod timing;

pub use audio::ToneOutput;
pub use display::{DisplayError, ImageDisplay, ImageResource, RenderNode};
pub use input::{Signal, SignalInput};
pub use timing::Delay;
