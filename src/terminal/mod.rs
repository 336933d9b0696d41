//! Terminal rendering for the binary.
//!
//! `style` holds ANSI colors and inline widgets, `frame` composes boxed
//! screens off-screen, and `screen` owns raw mode while a view is up.

mod frame;
mod screen;
mod style;

pub use frame::Frame;
pub use screen::Session;
pub use style::*;
