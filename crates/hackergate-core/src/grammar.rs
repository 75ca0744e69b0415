// ─────────────────────────────────────────────────────────────────────
// Hackergate — Grammar Checker
// ─────────────────────────────────────────────────────────────────────
//! Structural validation of a sentence.
//!
//! Rules are evaluated in a fixed order and the first failure wins:
//! verb count, then final article, then article count.

use hackergate_types::{GrammarError, Word};

/// Check that `sentence` has exactly one verb and exactly one article,
/// with the article in last position.
pub fn check_grammar(sentence: &[Word]) -> Result<(), GrammarError> {
    if sentence.iter().filter(|w| w.is_verb()).count() != 1 {
        return Err(GrammarError::VerbCount);
    }

    if !sentence.last().is_some_and(|w| w.is_article()) {
        return Err(GrammarError::MissingFinalArticle);
    }

    if sentence.iter().filter(|w| w.is_article()).count() != 1 {
        return Err(GrammarError::ArticleCount);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use Word::*;

    #[test]
    fn test_minimal_valid() {
        assert_eq!(check_grammar(&[Am, A]), Ok(()));
        assert_eq!(check_grammar(&[Aint, No]), Ok(()));
        assert_eq!(check_grammar(&[Definitely, Aint, Not, A]), Ok(()));
    }

    #[test]
    fn test_empty_fails_verb_rule() {
        assert_eq!(check_grammar(&[]), Err(GrammarError::VerbCount));
    }

    #[test]
    fn test_two_verbs() {
        assert_eq!(check_grammar(&[Am, Aint, A]), Err(GrammarError::VerbCount));
    }

    #[test]
    fn test_no_verb() {
        assert_eq!(check_grammar(&[Maybe, A]), Err(GrammarError::VerbCount));
    }

    #[test]
    fn test_article_not_last() {
        assert_eq!(
            check_grammar(&[A, Am]),
            Err(GrammarError::MissingFinalArticle)
        );
        assert_eq!(
            check_grammar(&[Am, A, Maybe]),
            Err(GrammarError::MissingFinalArticle)
        );
    }

    #[test]
    fn test_two_articles() {
        assert_eq!(
            check_grammar(&[Aint, No, A]),
            Err(GrammarError::ArticleCount)
        );
    }

    #[test]
    fn test_priority_verb_before_article() {
        // Both the verb rule and the final-article rule fail.
        assert_eq!(check_grammar(&[Maybe]), Err(GrammarError::VerbCount));
        // Final-article and article-count rules both fail.
        assert_eq!(
            check_grammar(&[No, Am, Maybe]),
            Err(GrammarError::MissingFinalArticle)
        );
    }

    #[test]
    fn test_repeated_words_allowed_if_well_formed() {
        assert_eq!(check_grammar(&[Maybe, Maybe, Am, Not, Not, A]), Ok(()));
    }

    fn modifier() -> impl Strategy<Value = Word> {
        prop_oneof![Just(Definitely), Just(Probably), Just(Maybe), Just(Not)]
    }

    proptest! {
        #[test]
        fn prop_well_formed_sentences_pass(
            before in prop::collection::vec(modifier(), 0..4),
            after in prop::collection::vec(modifier(), 0..4),
            verb in prop_oneof![Just(Am), Just(Aint)],
            article in prop_oneof![Just(A), Just(No)],
        ) {
            let mut sentence = before;
            sentence.push(verb);
            sentence.extend(after);
            sentence.push(article);
            prop_assert_eq!(check_grammar(&sentence), Ok(()));
        }

        #[test]
        fn prop_verb_count_checked_first(
            words in prop::collection::vec(prop::sample::select(Word::ALL.to_vec()), 0..8),
        ) {
            let verbs = words.iter().filter(|w| w.is_verb()).count();
            if verbs != 1 {
                prop_assert_eq!(check_grammar(&words), Err(GrammarError::VerbCount));
            }
        }
    }
}
