//! Heuristic strength scoring.

use std::fmt;

use super::charset::{CharClass, CharClasses};

/// Strength on a 0 (very weak) to 4 (strong) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 4;

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn descriptor(self) -> &'static Descriptor {
        describe(self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Label and display color for one score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub label: &'static str,
    pub color: &'static str,
}

pub static DESCRIPTORS: [Descriptor; 5] = [
    Descriptor {
        label: "Very Weak",
        color: "red",
    },
    Descriptor {
        label: "Weak",
        color: "orange",
    },
    Descriptor {
        label: "Fair",
        color: "yellow",
    },
    Descriptor {
        label: "Good",
        color: "blue",
    },
    Descriptor {
        label: "Strong",
        color: "green",
    },
];

/// Score `password` against the classes that produced it.
///
/// One point each for reaching 8, 12 and 16 characters. Classes count
/// toward variety only when enabled in `options` and present in the
/// password; three of them add a point and all four add another. The total
/// saturates at [`Score::MAX`].
pub fn score(password: &str, options: &CharClasses) -> Score {
    let length = password.chars().count();
    let mut total: u8 = [8, 12, 16].iter().filter(|&&min| length >= min).count() as u8;

    let variety = CharClass::ALL
        .iter()
        .filter(|&&class| options.is_enabled(class) && password.chars().any(|c| class.matches(c)))
        .count();

    if variety >= 3 {
        total += 1;
    }
    if variety >= 4 {
        total += 1;
    }

    Score(total.min(Score::MAX))
}

/// Descriptor row for `score`. Anything past the table maps to row 0.
pub fn describe(score: u8) -> &'static Descriptor {
    DESCRIPTORS.get(score as usize).unwrap_or(&DESCRIPTORS[0])
}

/// Per-criterion checklist shown beside the strength bar.
///
/// Unlike [`score`], these ignore the enabled classes and look only at the
/// password itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicators {
    pub length: usize,
    pub long_enough: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub special: bool,
}

pub const RECOMMENDED_LENGTH: usize = 12;

pub fn indicators(password: &str) -> Indicators {
    let has = |class: CharClass| password.chars().any(|c| class.matches(c));
    let length = password.chars().count();

    Indicators {
        length,
        long_enough: length >= RECOMMENDED_LENGTH,
        lowercase: has(CharClass::Lowercase),
        uppercase: has(CharClass::Uppercase),
        numbers: has(CharClass::Numbers),
        special: has(CharClass::Symbols),
    }
}

/// Password entropy in bits for uniform draws from `charset_size` symbols.
pub fn entropy_bits(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password_scores_zero() {
        for options in [CharClasses::ALL, CharClasses::NONE, CharClasses::default()] {
            assert_eq!(score("", &options).value(), 0);
        }
    }

    #[test]
    fn short_password_with_full_variety() {
        assert_eq!(score("aB3!", &CharClasses::ALL).value(), 2);
    }

    #[test]
    fn length_thresholds() {
        let lower = CharClasses::default();
        assert_eq!(score(&"a".repeat(7), &lower).value(), 0);
        assert_eq!(score(&"a".repeat(8), &lower).value(), 1);
        assert_eq!(score(&"a".repeat(12), &lower).value(), 2);
        assert_eq!(score(&"a".repeat(16), &lower).value(), 3);
        assert_eq!(score(&"a".repeat(40), &lower).value(), 3);
    }

    #[test]
    fn monotone_in_length() {
        let source = "abcD1!".repeat(7);
        let mut last = 0;
        for n in 0..=source.len() {
            let s = score(&source[..n], &CharClasses::ALL).value();
            assert!(s >= last, "dropped at {n}");
            last = s;
        }

        let lower = CharClasses::default();
        assert!(score(&"a".repeat(20), &lower) >= score(&"a".repeat(8), &lower));
    }

    #[test]
    fn saturates_at_four() {
        let password = "aB3!aB3!aB3!aB3!aB3!";
        assert_eq!(score(password, &CharClasses::ALL).value(), 4);
    }

    #[test]
    fn disabled_classes_do_not_count() {
        // all four classes present but only two enabled
        let options = CharClasses {
            lowercase: true,
            uppercase: true,
            numbers: false,
            symbols: false,
        };
        assert_eq!(score("aB3!", &options).value(), 0);
    }

    #[test]
    fn symbols_match_any_non_alphanumeric() {
        let options = CharClasses {
            lowercase: true,
            uppercase: true,
            numbers: false,
            symbols: true,
        };
        // a space is outside the symbol alphabet but still counts
        assert_eq!(score("aB c", &options).value(), 1);
    }

    #[test]
    fn descriptor_labels() {
        assert_eq!(describe(0).label, "Very Weak");
        assert_eq!(describe(1).label, "Weak");
        assert_eq!(describe(2).label, "Fair");
        assert_eq!(describe(3).label, "Good");
        assert_eq!(describe(4).label, "Strong");
        assert_eq!(describe(4).color, "green");
    }

    #[test]
    fn out_of_range_falls_back_to_weakest() {
        assert_eq!(describe(5), &DESCRIPTORS[0]);
        assert_eq!(describe(u8::MAX).label, "Very Weak");
    }

    #[test]
    fn describe_is_stable() {
        let options = CharClasses::default();
        let a = describe(score("Tr0ub4dor&3", &options).value());
        let b = describe(score("Tr0ub4dor&3", &options).value());
        assert_eq!(a, b);
    }

    #[test]
    fn indicators_ignore_options() {
        let checks = indicators("abcDEF123!@#");
        assert_eq!(checks.length, 12);
        assert!(checks.long_enough);
        assert!(checks.lowercase && checks.uppercase && checks.numbers && checks.special);

        let checks = indicators("abc");
        assert!(!checks.long_enough);
        assert!(!checks.uppercase && !checks.numbers && !checks.special);
    }

    #[test]
    fn entropy() {
        assert_eq!(entropy_bits(10, 0), 0.0);
        assert!((entropy_bits(8, 16) - 32.0).abs() < 1e-9);
        assert_eq!(entropy_strength(32.0), "Weak");
        assert_eq!(entropy_strength(50.0), "Fair");
        assert_eq!(entropy_strength(80.0), "Strong");
        assert_eq!(entropy_strength(200.0), "Very Strong");
    }
}
