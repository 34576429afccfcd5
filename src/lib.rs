//! # sensdfa
//!
//! Sensitive-word detection on top of a dynamically updatable
//! [Aho-Corasick](https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm)
//! automaton.
//!
//! Words are inserted into a shared prefix tree; before the next scan every
//! state receives a failure link (where to retry on a mismatch), so a text is
//! checked against the whole vocabulary in a single pass, in time linear in
//! its length and independent of how many words are registered.
//!
//! ## Features
//!
//! - **Incremental**: words can be added between scans; the automaton is
//!   recompiled lazily (or eagerly, see [`CompilePolicy`])
//! - **Unicode-aware**: patterns and text are sequences of `char`, so CJK
//!   vocabularies work without byte-level surprises
//! - **Generic over the alphabet**: `u8`, `u16`, … work too, via
//!   [`PatternChar`](dfa::PatternChar)
//! - **Spans on demand**: besides the boolean answer, [`Dfa::find_all`]
//!   reports every (overlapping) occurrence
//! - **Thread-safe sharing** through [`SharedDfa`]
//!
//! ## Quick Start
//!
//! ```
//! use sensdfa::{add_sensitive_word, add_sensitive_words, create_dfa, is_sensitive};
//!
//! let mut dfa = create_dfa();
//! assert!(add_sensitive_word(&mut dfa, "法轮功"));
//! assert!(add_sensitive_words(&mut dfa, ["中共", "政府"]));
//! assert!(!add_sensitive_word(&mut dfa, "   "));
//!
//! assert!(is_sensitive(&mut dfa, "法轮功组织"));
//! assert!(!is_sensitive(&mut dfa, "正常的新闻"));
//! ```
//!
//! ## Spans
//!
//! ```
//! use sensdfa::Dfa;
//!
//! let mut dfa: Dfa = ["he", "she", "his", "hers"].into_iter().collect();
//! let spans: Vec<(usize, usize)> = dfa
//!     .find_all("ushers".chars())
//!     .into_iter()
//!     .map(|m| (m.start, m.end))
//!     .collect();
//! assert_eq!(spans, [(1, 4), (2, 4), (2, 6)]);
//! ```
//!
//! ## Generic Usage
//!
//! ```
//! use sensdfa::Dfa;
//!
//! let mut dfa = Dfa::<u8>::new();
//! dfa.add_word(b"evil".as_slice()).unwrap();
//! assert!(dfa.is_match(b"pure evilness".iter().copied()));
//! ```

#![warn(missing_docs)]

/// The automaton: patterns, states, compilation and scanning.
pub mod dfa;
/// Error types.
pub mod error;
/// Word-list loading helpers.
pub mod vocabulary;

mod api;

pub use api::{add_sensitive_word, add_sensitive_words, create_dfa, is_sensitive, run_dfa_with_words};
pub use dfa::{
    BatchReport, CompilePolicy, Dfa, DfaOptions, Inserted, IntoPattern, Match, MatchMode,
    PatternChar, PatternId, SharedDfa, Status,
};
pub use error::{PatternError, VocabularyError};

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_political_words() {
        let mut dfa = create_dfa();
        let words = [
            "江泽民", "习近平", "胡锦涛", "温家宝", "法轮功", "中共", "薄熙来", "李洪志", "政府",
            "邓小平",
        ];
        assert!(add_sensitive_words(&mut dfa, words));

        assert!(is_sensitive(&mut dfa, "江泽民同志视察"));
        assert!(is_sensitive(&mut dfa, "法轮功组织"));
        assert!(is_sensitive(&mut dfa, "习近平主席讲话"));
        assert!(is_sensitive(&mut dfa, "中共领导人"));
        assert!(is_sensitive(&mut dfa, "薄熙来案件"));
        assert!(!is_sensitive(&mut dfa, "正常的政治新闻"));
    }

    #[test]
    fn test_edge_cases() {
        let mut dfa = create_dfa();
        assert!(!is_sensitive(&mut dfa, "任何文本都不应匹配"));

        add_sensitive_word(&mut dfa, "测试");
        assert!(!is_sensitive(&mut dfa, ""));

        let mut dfa = create_dfa();
        add_sensitive_word(&mut dfa, "a");
        assert!(is_sensitive(&mut dfa, "abc"));

        let mut dfa = create_dfa();
        add_sensitive_word(&mut dfa, "特殊！@#￥");
        assert!(is_sensitive(&mut dfa, "包含特殊！@#￥字符"));
    }
}
