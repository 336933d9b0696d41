//! Random color palettes and configurable passwords.
//!
//! The library is a set of small, synchronous leaf functions:
//!
//! - [`palette::next_color`] returns a `#RRGGBB` code,
//! - [`pass::generate`] draws a password from the enabled character classes,
//! - [`pass::score`] and [`pass::describe`] rate a password on a 0-4 scale.
//!
//! Every function that needs randomness takes a [`RandomSource`], so callers
//! decide where entropy comes from:
//!
//! ```
//! use passpal::pass::{self, CharClasses};
//! use passpal::rand::Rand;
//!
//! let options = CharClasses::default();
//! let password = pass::generate(16, &options, &mut Rand).unwrap();
//! assert_eq!(password.len(), 16);
//!
//! let score = pass::score(&password, &options);
//! println!("{} ({})", password, pass::describe(score.value()).label);
//! ```

pub mod clipboard;
mod error;
pub mod palette;
pub mod pass;
pub mod rand;
pub mod settings;

pub use error::{Error, Result};
pub use crate::rand::RandomSource;
