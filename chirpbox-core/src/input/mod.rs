//! Input edge detection

pub mod debouncer;

pub use debouncer::{EdgeDetector, Edges, InputDebouncer};
