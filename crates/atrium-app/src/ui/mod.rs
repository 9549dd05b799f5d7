//! UI module for atrium
//!
//! Built with iced - a cross-platform GUI library for Rust.
//! One window, two faces: the landing surface, then the content page.

pub mod app;
pub mod content_view;
pub mod handlers;
pub mod landing_view;
pub mod message;
pub mod sound_controls;

pub use app::AtriumApp;
