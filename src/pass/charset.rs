//! Character classes and working-alphabet construction.

use serde::{Deserialize, Serialize};

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// One of the four alphabets a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharClass {
    /// Every class, in working-alphabet order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Numbers => DIGITS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "Lowercase Letters (a-z)",
            CharClass::Uppercase => "Uppercase Letters (A-Z)",
            CharClass::Numbers => "Numbers (0-9)",
            CharClass::Symbols => "Symbols (!@#$%^&*)",
        }
    }

    /// Whether `c` counts toward this class when scoring.
    ///
    /// Symbols match anything that is not an ASCII letter or digit, which is
    /// wider than the symbol alphabet.
    pub fn matches(self, c: char) -> bool {
        match self {
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
            CharClass::Numbers => c.is_ascii_digit(),
            CharClass::Symbols => !c.is_ascii_alphanumeric(),
        }
    }
}

/// Which character classes are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CharClasses {
    pub const ALL: CharClasses = CharClasses {
        lowercase: true,
        uppercase: true,
        numbers: true,
        symbols: true,
    };

    pub const NONE: CharClasses = CharClasses {
        lowercase: false,
        uppercase: false,
        numbers: false,
        symbols: false,
    };

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.lowercase,
            CharClass::Uppercase => self.uppercase,
            CharClass::Numbers => self.numbers,
            CharClass::Symbols => self.symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        match class {
            CharClass::Lowercase => self.lowercase = enabled,
            CharClass::Uppercase => self.uppercase = enabled,
            CharClass::Numbers => self.numbers = enabled,
            CharClass::Symbols => self.symbols = enabled,
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set(class, !self.is_enabled(class));
    }

    /// Enabled classes in working-alphabet order.
    pub fn enabled(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(move |&c| self.is_enabled(c))
    }

    /// Enabled classes, or lowercase alone when none are.
    pub fn effective(&self) -> Vec<CharClass> {
        let classes: Vec<CharClass> = self.enabled().collect();
        if classes.is_empty() {
            vec![CharClass::Lowercase]
        } else {
            classes
        }
    }
}

impl Default for CharClasses {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: false,
        }
    }
}

/// Build the working alphabet for `options`.
pub fn build(options: &CharClasses) -> Vec<u8> {
    let mut chars: Vec<u8> = Vec::new();

    for class in options.effective() {
        chars.extend_from_slice(class.alphabet());
    }

    chars
}

/// Size of the working alphabet (for entropy calculation).
pub fn size(options: &CharClasses) -> usize {
    options
        .effective()
        .into_iter()
        .map(|c| c.alphabet().len())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_have_expected_sizes() {
        assert_eq!(CharClass::Lowercase.alphabet().len(), 26);
        assert_eq!(CharClass::Uppercase.alphabet().len(), 26);
        assert_eq!(CharClass::Numbers.alphabet().len(), 10);
        assert_eq!(CharClass::Symbols.alphabet().len(), 26);
    }

    #[test]
    fn build_concatenates_in_class_order() {
        let options = CharClasses {
            lowercase: false,
            uppercase: true,
            numbers: true,
            symbols: false,
        };
        let chars = build(&options);
        assert_eq!(&chars[..26], UPPERCASE);
        assert_eq!(&chars[26..], DIGITS);
    }

    #[test]
    fn build_all_classes() {
        assert_eq!(build(&CharClasses::ALL).len(), 88);
        assert_eq!(size(&CharClasses::ALL), 88);
    }

    #[test]
    fn no_classes_falls_back_to_lowercase() {
        assert_eq!(build(&CharClasses::NONE), LOWERCASE);
        assert_eq!(size(&CharClasses::NONE), 26);
    }

    #[test]
    fn toggle_flips_one_flag() {
        let mut options = CharClasses::default();
        options.toggle(CharClass::Symbols);
        assert!(options.symbols);
        options.toggle(CharClass::Lowercase);
        assert!(!options.lowercase);
        assert!(options.uppercase && options.numbers);
    }

    #[test]
    fn symbol_match_is_complement_of_alphanumerics() {
        assert!(CharClass::Symbols.matches('!'));
        assert!(CharClass::Symbols.matches(' '));
        assert!(CharClass::Symbols.matches('é'));
        assert!(!CharClass::Symbols.matches('a'));
        assert!(!CharClass::Symbols.matches('7'));
    }

    #[test]
    fn serializes_as_named_flags() {
        let json = serde_json::to_string(&CharClasses::default()).unwrap();
        assert_eq!(
            json,
            r#"{"lowercase":true,"uppercase":true,"numbers":true,"symbols":false}"#
        );
    }
}
