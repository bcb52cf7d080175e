use std::collections::HashSet;

use passgen::pass::charset::is_similar;
use passgen::{
    CharacterClass, ClassSelection, Error, GenerationRequest, RandomSource, compose, generate,
    generate_with,
};

/// Deterministic source: a small LCG reduced onto the bound.
struct Lcg(u64);

impl RandomSource for Lcg {
    fn uniform(&mut self, bound: usize) -> passgen::Result<usize> {
        if bound == 0 {
            return Err(Error::EmptyRange);
        }
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        Ok(((self.0 >> 33) % bound as u64) as usize)
    }
}

fn selection(classes: &[CharacterClass]) -> ClassSelection {
    classes
        .iter()
        .fold(ClassSelection::none(), |sel, &c| sel.with(c, true))
}

fn every_selection() -> Vec<ClassSelection> {
    (1u8..16)
        .map(|bits| {
            let picked: Vec<CharacterClass> = CharacterClass::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| bits & (1 << i) != 0)
                .map(|(_, c)| c)
                .collect();
            selection(&picked)
        })
        .collect()
}

#[test]
fn length_is_exact_for_every_selection() {
    for classes in every_selection() {
        for exclude_similar in [false, true] {
            for length in [1, 2, 3, 4, 5, 16, 64, 300] {
                let request = GenerationRequest::new(length, classes, exclude_similar);
                let pass = generate(&request).unwrap();
                assert_eq!(pass.char_count(), length, "{request:?}");
            }
        }
    }
}

#[test]
fn exclude_similar_never_leaks() {
    let request = GenerationRequest::new(64, ClassSelection::all(), true);
    for _ in 0..200 {
        let pass = generate(&request).unwrap();
        assert!(pass.chars().all(|c| !is_similar(c)), "{}", pass.as_str());
    }
}

#[test]
fn single_class_stays_in_its_alphabet() {
    for class in CharacterClass::ALL {
        let request = GenerationRequest::new(10, selection(&[class]), false);
        for _ in 0..50 {
            let pass = generate(&request).unwrap();
            assert_eq!(pass.char_count(), 10);
            assert!(pass.chars().all(|c| class.contains(c)), "{:?}", class);
        }
    }
}

#[test]
fn every_selected_class_is_covered() {
    for classes in every_selection() {
        for exclude_similar in [false, true] {
            let alphabets = compose(classes, exclude_similar).unwrap();
            let request = GenerationRequest::new(alphabets.len(), classes, exclude_similar);
            for _ in 0..100 {
                let pass = generate(&request).unwrap();
                for alphabet in &alphabets {
                    assert!(
                        pass.chars().any(|c| alphabet.contains(&c)),
                        "{request:?} missing a class"
                    );
                }
            }
        }
    }
}

#[test]
fn injected_source_is_reproducible() {
    let request = GenerationRequest::new(24, ClassSelection::all(), true);
    let a = generate_with(&request, &mut Lcg(42)).unwrap();
    let b = generate_with(&request, &mut Lcg(42)).unwrap();
    let c = generate_with(&request, &mut Lcg(43)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn lowercase_eight() {
    let request = GenerationRequest::new(8, selection(&[CharacterClass::Lower]), false);
    let pass = generate(&request).unwrap();
    assert_eq!(pass.len(), 8);
    assert!(pass.chars().all(|c| "abcdefghijklmnopqrstuvwxyz".contains(c)));
}

#[test]
fn zero_length_is_empty() {
    for classes in every_selection() {
        let request = GenerationRequest::new(0, classes, true);
        assert!(generate(&request).unwrap().is_empty());
    }
    let request = GenerationRequest::new(0, ClassSelection::none(), false);
    assert!(generate(&request).unwrap().is_empty());
}

#[test]
fn no_classes_is_empty() {
    for exclude_similar in [false, true] {
        let request = GenerationRequest::new(16, ClassSelection::none(), exclude_similar);
        assert!(generate(&request).unwrap().is_empty());
    }
}

#[test]
fn negative_length_is_invalid() {
    let err = GenerationRequest::try_new(-8, ClassSelection::all(), false).unwrap_err();
    assert!(matches!(err, Error::InvalidLength(-8)));
}

#[test]
fn coverage_character_is_not_pinned_to_the_front() {
    // Unshuffled, the coverage digit would always be the first digit, at index 1.
    let classes = selection(&[CharacterClass::Lower, CharacterClass::Digit]);
    let request = GenerationRequest::new(12, classes, false);
    let mut first_digit_positions = HashSet::new();
    for _ in 0..300 {
        let pass = generate(&request).unwrap();
        let pos = pass.chars().position(|c| c.is_ascii_digit()).unwrap();
        first_digit_positions.insert(pos);
    }
    assert!(first_digit_positions.len() > 3);
}

#[test]
fn large_lengths_work() {
    let request = GenerationRequest::new(100_000, ClassSelection::all(), false);
    assert_eq!(generate(&request).unwrap().char_count(), 100_000);
}
