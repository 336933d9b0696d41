//! Password generation, scoring and history.

pub mod charset;
mod generate;
mod history;
mod strength;

pub use charset::{CharClass, CharClasses};
pub use generate::{Mode, generate, generate_with};
pub use history::{HISTORY_LEN, History};
pub use strength::{
    DESCRIPTORS, Descriptor, Indicators, RECOMMENDED_LENGTH, Score, describe, entropy_bits,
    entropy_strength, indicators, score,
};
