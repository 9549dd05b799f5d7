//! Atrium Core - Shared state machines for the landing experience

pub mod controller;
pub mod counter;
pub mod guard;
pub mod surface;
pub mod tagline;
pub mod transition;
pub mod types;
pub mod viewport;
pub mod volume;

pub use types::*;
