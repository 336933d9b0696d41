//! Password generation.

use super::charset::{self, CharClasses};
use crate::rand::RandomSource;
use crate::{Error, Result};

/// How characters are drawn from the working alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Every character is drawn independently. An enabled class may end up
    /// missing from the password.
    #[default]
    Independent,
    /// One character from each enabled class first, the rest drawn from the
    /// working alphabet, then shuffled.
    Balanced,
}

/// Generate a password of exactly `length` characters.
///
/// With no class enabled the lowercase alphabet is used. A zero length is
/// rejected with [`Error::InvalidLength`].
pub fn generate<R>(length: usize, options: &CharClasses, rng: &mut R) -> Result<String>
where
    R: RandomSource + ?Sized,
{
    generate_with(length, options, Mode::Independent, rng)
}

/// [`generate`] with an explicit [`Mode`].
pub fn generate_with<R>(
    length: usize,
    options: &CharClasses,
    mode: Mode,
    rng: &mut R,
) -> Result<String>
where
    R: RandomSource + ?Sized,
{
    if length == 0 {
        return Err(Error::InvalidLength(length));
    }

    let chars = charset::build(options);
    let mut buf = Vec::with_capacity(length);

    match mode {
        Mode::Independent => generate_from_charset(&chars, length, rng, &mut buf),
        Mode::Balanced => {
            let classes = options.effective();
            if length < classes.len() {
                return Err(Error::TooShortForClasses {
                    length,
                    classes: classes.len(),
                });
            }

            buf.extend(classes.iter().map(|class| random_byte(class.alphabet(), rng)));
            buf.extend((classes.len()..length).map(|_| random_byte(&chars, rng)));
            shuffle(&mut buf, rng);
        }
    }

    log::debug!(
        "generated password: length={} charset={} mode={:?}",
        length,
        chars.len(),
        mode
    );

    // Safety: every alphabet is ASCII
    Ok(unsafe { String::from_utf8_unchecked(buf) })
}

/// Fill `buf` with `length` bytes drawn uniformly from `chars`, which must
/// not be empty.
#[inline]
fn generate_from_charset<R>(chars: &[u8], length: usize, rng: &mut R, buf: &mut Vec<u8>)
where
    R: RandomSource + ?Sized,
{
    buf.clear();
    buf.extend((0..length).map(|_| random_byte(chars, rng)));
}

#[inline]
fn random_byte<R: RandomSource + ?Sized>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.next_below(chars.len())]
}

/// Fisher-Yates.
#[inline]
fn shuffle<R: RandomSource + ?Sized>(chars: &mut [u8], rng: &mut R) {
    for i in (1..chars.len()).rev() {
        let j = rng.next_below(i + 1);
        chars.swap(i, j);
    }
}
