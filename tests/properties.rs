use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use passpal::pass::{self, CharClass, CharClasses, Mode};
use passpal::rand::Rand;
use passpal::settings::Settings;
use passpal::{Error, palette};

fn every_config() -> impl Iterator<Item = CharClasses> {
    (0..16u8).map(|bits| CharClasses {
        lowercase: bits & 1 != 0,
        uppercase: bits & 2 != 0,
        numbers: bits & 4 != 0,
        symbols: bits & 8 != 0,
    })
}

#[test]
fn generated_length_matches_request() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for options in every_config() {
        for length in 1..=60 {
            let password = pass::generate(length, &options, &mut rng).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }
}

#[test]
fn generated_characters_belong_to_enabled_classes() {
    let mut rng = Rand;
    for options in every_config() {
        let classes = options.effective();
        let password = pass::generate(256, &options, &mut rng).unwrap();
        for c in password.chars() {
            assert!(
                classes.iter().any(|class| class.alphabet().contains(&(c as u8))),
                "{c:?} not allowed by {options:?}"
            );
        }
    }
}

#[test]
fn all_false_config_falls_back_to_lowercase() {
    let mut rng = Rand;
    let password = pass::generate(100, &CharClasses::NONE, &mut rng).unwrap();
    assert!(password.chars().all(|c| c.is_ascii_lowercase()));
}

#[test]
fn zero_length_is_an_error() {
    let err = pass::generate(0, &CharClasses::ALL, &mut Rand).unwrap_err();
    assert!(matches!(err, Error::InvalidLength(0)));
    assert!(err.to_string().contains("at least 1"));
}

#[test]
fn colors_match_pattern() {
    let mut rng = Rand;
    for color in palette::generate(&mut rng, 2_000) {
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')));
    }
}

#[test]
fn score_examples() {
    assert_eq!(pass::score("", &CharClasses::ALL).value(), 0);
    assert_eq!(pass::score("", &CharClasses::NONE).value(), 0);
    assert_eq!(pass::score("aB3!", &CharClasses::ALL).value(), 2);
    assert_eq!(pass::describe(0).label, "Very Weak");
    assert_eq!(pass::describe(4).label, "Strong");
}

#[test]
fn score_is_monotone_in_length_for_fixed_composition() {
    let lower = CharClasses {
        lowercase: true,
        ..CharClasses::NONE
    };
    let mut previous = pass::score("", &lower);
    for n in 1..=40 {
        let current = pass::score(&"q".repeat(n), &lower);
        assert!(current >= previous);
        previous = current;
    }
    assert!(pass::score(&"a".repeat(20), &lower) >= pass::score(&"a".repeat(8), &lower));
}

#[test]
fn score_of_generated_password_is_in_range_and_stable() {
    let mut rng = StdRng::seed_from_u64(42);
    for options in every_config() {
        let password = pass::generate(20, &options, &mut rng).unwrap();
        let first = pass::describe(pass::score(&password, &options).value());
        let second = pass::describe(pass::score(&password, &options).value());
        assert_eq!(first, second);
        assert!(pass::score(&password, &options).value() <= 4);
    }
}

#[test]
fn lowercase_distribution_covers_alphabet() {
    let options = CharClasses {
        lowercase: true,
        ..CharClasses::NONE
    };
    let mut rng = Rand;
    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        seen.extend(pass::generate(1, &options, &mut rng).unwrap().chars());
    }
    assert_eq!(seen.len(), 26);
}

#[test]
fn balanced_mode_is_opt_in() {
    let mut rng = StdRng::seed_from_u64(3);
    let password = pass::generate_with(4, &CharClasses::ALL, Mode::Balanced, &mut rng).unwrap();
    for class in CharClass::ALL {
        assert!(password.chars().any(|c| class.alphabet().contains(&(c as u8))));
    }
    assert_eq!(Mode::default(), Mode::Independent);
}

#[test]
fn generators_run_concurrently() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let mut rng = Rand;
                (0..500)
                    .map(|_| pass::generate(16, &CharClasses::ALL, &mut rng).unwrap())
                    .all(|p| p.len() == 16)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[test]
fn preferences_round_trip_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let mut settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings, Settings::default());

    settings.set_length(44);
    settings.options.toggle(CharClass::Symbols);
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded.length, 44);
    assert!(loaded.options.symbols);
}
