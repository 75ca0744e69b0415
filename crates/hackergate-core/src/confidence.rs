// ─────────────────────────────────────────────────────────────────────
// Hackergate — Confidence Calculator
// ─────────────────────────────────────────────────────────────────────
//! Multiplicative confidence and its human-readable rendering.
//!
//! Confidence lives in [-1, 1]: +1 is a plain "I am a hacker" claim,
//! -1 is a plain denial. Each word scales the running value by its
//! `confidence_effect`.

use hackergate_types::Word;

/// Product of all word effects, reduced right to left from 1.0.
///
/// The empty sentence has confidence 1.0.
pub fn basic_confidence(sentence: &[Word]) -> f64 {
    sentence
        .iter()
        .rev()
        .fold(1.0, |acc, word| acc * word.confidence_effect())
}

/// Map confidence to a 0..=100 percentage, rounding half up.
fn confidence_percent(confidence: f64) -> i64 {
    ((confidence + 1.0) * 50.0).round() as i64
}

/// Render as `"{percent}%: {descriptor} a hacker"`.
pub fn friendly_confidence(confidence: f64) -> String {
    let descriptor = if confidence == 1.0 {
        "definitely"
    } else if confidence == -1.0 {
        "definitely not"
    } else if confidence < 0.0 {
        "possibly"
    } else {
        "probably"
    };

    format!("{}%: {descriptor} a hacker", confidence_percent(confidence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use Word::*;

    #[test]
    fn test_empty_is_identity() {
        assert_eq!(basic_confidence(&[]), 1.0);
    }

    #[test]
    fn test_product_of_effects() {
        assert_eq!(basic_confidence(&[Aint, A]), -1.0);
        assert_eq!(basic_confidence(&[Aint, Not, A]), 1.0);
        assert_eq!(basic_confidence(&[Am, No]), -1.0);
        assert!((basic_confidence(&[Probably, Maybe, Am, A]) - 0.125).abs() < 1e-9);
        assert!((basic_confidence(&[Maybe, Aint, A]) + 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_friendly_anchors() {
        assert_eq!(friendly_confidence(1.0), "100%: definitely a hacker");
        assert_eq!(friendly_confidence(-1.0), "0%: definitely not a hacker");
        assert_eq!(friendly_confidence(0.5), "75%: probably a hacker");
        assert_eq!(friendly_confidence(-0.5), "25%: possibly a hacker");
    }

    #[test]
    fn test_friendly_zero_is_probably() {
        assert_eq!(friendly_confidence(0.0), "50%: probably a hacker");
    }

    #[test]
    fn test_friendly_rounds_half_up() {
        // (0.125 + 1) * 50 = 56.25
        assert_eq!(friendly_confidence(0.125), "56%: probably a hacker");
        // (-0.25 + 1) * 50 = 37.5
        assert_eq!(friendly_confidence(-0.25), "38%: possibly a hacker");
        // (0.0625 + 1) * 50 = 53.125
        assert_eq!(friendly_confidence(0.0625), "53%: probably a hacker");
    }

    proptest! {
        #[test]
        fn prop_reversal_does_not_change_confidence(
            words in prop::collection::vec(prop::sample::select(Word::ALL.to_vec()), 0..10),
        ) {
            let mut reversed = words.clone();
            reversed.reverse();
            prop_assert_eq!(basic_confidence(&words), basic_confidence(&reversed));
        }

        #[test]
        fn prop_confidence_in_range(
            words in prop::collection::vec(prop::sample::select(Word::ALL.to_vec()), 0..10),
        ) {
            let c = basic_confidence(&words);
            prop_assert!((-1.0..=1.0).contains(&c));
        }
    }
}
