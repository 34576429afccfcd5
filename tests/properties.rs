//! Property tests: the automaton against naive substring search.

use itertools::Itertools;
use proptest::prelude::*;

use sensdfa::{run_dfa_with_words, CompilePolicy, Dfa, DfaOptions, Match};

/// Every occurrence of every registered pattern, by brute force, in the order
/// the automaton reports them: by end offset, longest first.
fn naive_find_all(dfa: &Dfa, text: &[char]) -> Vec<Match> {
    let mut found: Vec<Match> = dfa
        .patterns()
        .flat_map(move |(id, pattern)| {
            text.windows(pattern.len())
                .enumerate()
                .filter(move |(_, window)| *window == pattern)
                .map(move |(start, _)| Match {
                    pattern: id,
                    start,
                    end: start + pattern.len(),
                })
        })
        .collect();
    found.sort_by_key(|m| (m.end, m.start));
    found
}

// A tiny alphabet so overlaps and shared prefixes are common.
fn word() -> impl Strategy<Value = String> {
    "[abc]{1,4}"
}

fn text() -> impl Strategy<Value = String> {
    "[abcd]{0,24}"
}

proptest! {
    #[test]
    fn detects_exactly_what_contains_detects(
        words in prop::collection::vec(word(), 0..8),
        text in text(),
    ) {
        let mut dfa: Dfa = words.iter().map(String::as_str).collect();
        let expected = words.iter().any(|w| text.contains(w.as_str()));
        prop_assert_eq!(dfa.is_sensitive(&text), expected);
    }

    #[test]
    fn reports_every_overlapping_occurrence(
        words in prop::collection::vec(word(), 1..8),
        text in text(),
    ) {
        let mut dfa: Dfa = words.iter().map(String::as_str).collect();
        let chars: Vec<char> = text.chars().collect();
        let expected = naive_find_all(&dfa, &chars);
        prop_assert_eq!(dfa.find_all(chars.iter().copied()), expected);
    }

    #[test]
    fn one_shot_agrees_with_handle(
        words in prop::collection::vec(word(), 0..8),
        text in text(),
    ) {
        let mut dfa = sensdfa::create_dfa();
        sensdfa::add_sensitive_words(&mut dfa, &words);
        prop_assert_eq!(run_dfa_with_words(&text, &words), dfa.is_sensitive(&text));
    }

    #[test]
    fn lazy_and_eager_agree(
        words in prop::collection::vec(word(), 0..8),
        texts in prop::collection::vec(text(), 1..4),
    ) {
        let mut lazy: Dfa = Dfa::new();
        let mut eager: Dfa = Dfa::with_options(DfaOptions::new().compile_policy(CompilePolicy::Eager));
        // Interleave insertions and scans.
        for (word, text) in words.iter().zip(texts.iter().cycle()) {
            lazy.add_word(word.as_str()).unwrap();
            eager.add_word(word.as_str()).unwrap();
            prop_assert_eq!(lazy.is_sensitive(text), eager.is_sensitive(text));
        }
        for text in &texts {
            prop_assert_eq!(lazy.find_all(text.chars()), eager.find_all(text.chars()));
        }
    }

    #[test]
    fn duplicate_insertions_change_nothing(
        words in prop::collection::vec(word(), 1..6),
        text in text(),
    ) {
        let mut once: Dfa = words.iter().map(String::as_str).collect();
        let mut twice: Dfa = words.iter().chain(words.iter()).map(String::as_str).collect();
        prop_assert_eq!(once.state_count(), twice.state_count());
        prop_assert_eq!(once.pattern_count(), twice.pattern_count());
        prop_assert_eq!(once.find_all(text.chars()), twice.find_all(text.chars()));
    }
}

#[test]
fn insertion_order_does_not_matter() {
    let words = ["he", "she", "his", "hers"];
    let texts = ["ushers", "this", "hishe", "sh", ""];
    let expected: Vec<bool> = texts
        .iter()
        .map(|t| words.iter().any(|w| t.contains(*w)))
        .collect();

    for order in words.iter().permutations(words.len()) {
        let mut dfa: Dfa = order.iter().map(|w| **w).collect();
        assert_eq!(dfa.state_count(), 10, "{order:?}");
        let got: Vec<bool> = texts.iter().map(|t| dfa.is_sensitive(t)).collect();
        assert_eq!(got, expected, "{order:?}");

        let spans: Vec<(usize, usize)> = dfa
            .find_all("ushers".chars())
            .into_iter()
            .map(|m| (m.start, m.end))
            .collect();
        assert_eq!(spans, [(1, 4), (2, 4), (2, 6)], "{order:?}");
    }
}
