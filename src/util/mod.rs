//! Global utility functions — these are publicly re-exported in `prelude.rs`.

pub mod general;
pub mod interp;
pub mod window;

pub use general::*;
pub use interp::lerp;
