//! Flat, boolean-returning entry points.
//!
//! These mirror the operations exposed to UI callers: a handle is created,
//! fed words, and queried. Richer results (pattern ids, spans, rejection
//! reasons) are available on [`Dfa`] itself.

use crate::dfa::{Dfa, PatternBuf};

/// Creates a new, empty automaton.
pub fn create_dfa() -> Dfa {
    Dfa::new()
}

/// Registers one word. Returns false, leaving the automaton untouched, if the
/// word is empty or whitespace-only.
pub fn add_sensitive_word(dfa: &mut Dfa, word: &str) -> bool {
    dfa.add_word(word).is_ok()
}

/// Registers several words. Returns true only if every entry was valid; the
/// valid entries are registered either way.
pub fn add_sensitive_words<I>(dfa: &mut Dfa, words: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    dfa.add_words(
        words
            .into_iter()
            .map(|w| w.as_ref().chars().collect::<PatternBuf<char>>()),
    )
    .is_complete()
}

/// Returns true if `text` contains a registered word.
pub fn is_sensitive(dfa: &mut Dfa, text: &str) -> bool {
    dfa.is_sensitive(text)
}

/// One-shot check of `text` against `words`, without keeping an automaton.
///
/// Same answer as [`create_dfa`], then [`add_sensitive_words`], then
/// [`is_sensitive`].
///
/// ```
/// use sensdfa::run_dfa_with_words;
///
/// assert!(run_dfa_with_words("ushers", ["he", "she", "his", "hers"]));
/// assert!(!run_dfa_with_words("a perfectly fine sentence", ["badword", "evil"]));
/// ```
pub fn run_dfa_with_words<I>(text: &str, words: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut dfa = create_dfa();
    add_sensitive_words(&mut dfa, words);
    dfa.is_sensitive(text)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_create_dfa() {
        let dfa = create_dfa();
        assert_eq!(dfa.pattern_count(), 0);
        assert_eq!(dfa.state_count(), 1);
    }

    #[test]
    fn test_add_sensitive_word() {
        let mut dfa = create_dfa();
        assert!(add_sensitive_word(&mut dfa, "测试"));
        assert!(is_sensitive(&mut dfa, "这是一个测试"));
        assert_eq!(dfa.pattern_count(), 1);

        assert!(add_sensitive_word(&mut dfa, "敏感词"));
        assert!(add_sensitive_word(&mut dfa, "关键字"));
        assert!(is_sensitive(&mut dfa, "这是一个敏感词测试"));
        assert!(is_sensitive(&mut dfa, "这是一个关键字"));
        assert_eq!(dfa.pattern_count(), 3);
    }

    #[test]
    fn empty_and_blank_words_are_refused() {
        let mut dfa = create_dfa();
        assert!(!add_sensitive_word(&mut dfa, ""));
        assert!(!add_sensitive_word(&mut dfa, "   "));
        assert!(!is_sensitive(&mut dfa, "任何文本都不应匹配"));
        assert_eq!(dfa.pattern_count(), 0);
    }

    #[test]
    fn batch_result_is_aggregate() {
        let mut dfa = create_dfa();
        assert!(add_sensitive_words(&mut dfa, ["词汇1", "词汇2", "词汇3"]));
        assert!(!add_sensitive_words(&mut dfa, vec!["词汇4".to_string(), String::new()]));
        for w in ["词汇1", "词汇2", "词汇3", "词汇4"] {
            assert!(is_sensitive(&mut dfa, &format!("这里有{w}")), "{w}");
        }
    }

    #[test]
    fn batch_accepts_borrowed_and_owned_entries() {
        let owned = vec!["江泽民".to_string(), " 政府 ".to_string()];
        let mut dfa = create_dfa();
        assert!(add_sensitive_words(&mut dfa, &owned));
        assert!(add_sensitive_words(&mut dfa, owned));
        assert_eq!(dfa.pattern_count(), 2);
        assert!(dfa.contains(" 政府 "));
        assert!(is_sensitive(&mut dfa, "地方 政府 工作"));
    }

    #[test]
    fn one_shot_matches_handle_sequence() {
        let words = ["敏感", "测试", ""];
        for text in ["这是一个敏感的测试", "这是一个普通文本", ""] {
            let mut dfa = create_dfa();
            add_sensitive_words(&mut dfa, words);
            assert_eq!(run_dfa_with_words(text, words), is_sensitive(&mut dfa, text), "{text}");
        }
    }
}
