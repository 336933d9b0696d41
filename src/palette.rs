//! Random color palettes.

use crate::rand::RandomSource;

pub const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Colors in a default palette.
pub const PALETTE_SIZE: usize = 5;

/// A `#RRGGBB` code with each digit drawn uniformly from `0-9A-F`.
pub fn next_color<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let mut color = String::with_capacity(7);
    color.push('#');
    for _ in 0..6 {
        color.push(HEX_DIGITS[rng.next_below(HEX_DIGITS.len())] as char);
    }
    color
}

/// `count` independent colors. Duplicates are possible.
pub fn generate<R: RandomSource + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count).map(|_| next_color(rng)).collect()
}

/// Red, green and blue channels of a `#RRGGBB` code.
pub fn rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// Whether dark text reads better than light text on `color`.
pub fn is_light((r, g, b): (u8, u8, u8)) -> bool {
    // ITU-R BT.601 luma
    let luma = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
    luma > 128_000
}
