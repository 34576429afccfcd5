use super::builder::{BatchReport, Inserted, Trie};
use super::char_trait::PatternChar;
use super::compiler::compile;
use super::options::{CompilePolicy, DfaOptions};
use super::pattern::{IntoPattern, PatternId};
use super::scanner::{Match, Matcher};
use crate::error::PatternError;

/// Lifecycle of a [`Dfa`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// Nothing registered yet; only the root exists.
    Empty,
    /// Patterns were registered since the last compilation.
    Dirty,
    /// Fallback links are valid; scans need no preparation.
    Compiled,
}

/// A dynamically updatable multi-pattern matcher.
///
/// Patterns can be added at any time. The failure links are recomputed
/// before the next scan (or right away, with [`CompilePolicy::Eager`]), so a
/// scan always sees every pattern registered so far.
///
/// # Examples
///
/// ```
/// use sensdfa::Dfa;
///
/// let mut dfa: Dfa = Dfa::new();
/// dfa.add_words(["he", "she", "his", "hers"]);
/// assert!(dfa.is_sensitive("ushers"));
/// assert!(!dfa.is_sensitive("a perfectly fine sentence"));
///
/// dfa.add_word("fine").unwrap();
/// assert!(dfa.is_sensitive("a perfectly fine sentence"));
/// ```
#[derive(Clone)]
pub struct Dfa<C: PatternChar = char> {
    trie: Trie<C>,
    status: Status,
    options: DfaOptions,
}

impl<C: PatternChar> Dfa<C> {
    /// Creates an empty automaton with default options.
    pub fn new() -> Self {
        Self::with_options(DfaOptions::default())
    }

    /// Creates an empty automaton.
    pub fn with_options(options: DfaOptions) -> Self {
        Dfa {
            trie: Trie::new(),
            status: Status::Empty,
            options,
        }
    }

    /// Returns the options this automaton was created with.
    pub fn options(&self) -> DfaOptions {
        self.options
    }

    /// Returns the lifecycle status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the number of registered patterns.
    pub fn pattern_count(&self) -> usize {
        self.trie.patterns.len()
    }

    /// Returns the number of states, root included.
    pub fn state_count(&self) -> usize {
        self.trie.states.len()
    }

    /// Registers a pattern.
    ///
    /// Registering a pattern twice is harmless and reports
    /// [`Inserted::Existing`].
    ///
    /// # Errors
    ///
    /// Returns [`PatternError`] for empty or whitespace-only patterns, which
    /// leave the automaton untouched.
    ///
    /// # Panics
    ///
    /// Panics if the automaton would exceed `u32::MAX` states or patterns.
    pub fn add_word(&mut self, word: impl IntoPattern<C>) -> Result<Inserted, PatternError> {
        let previous = self.begin_insert();
        let result = self.trie.insert(word);
        self.end_insert(previous, matches!(result, Ok(Inserted::New(_))));
        result
    }

    /// Registers every valid entry of `words`.
    ///
    /// Invalid entries are skipped and listed in the returned report; use
    /// [`BatchReport::is_complete`] for the aggregate outcome.
    ///
    /// # Panics
    ///
    /// Panics if the automaton would exceed `u32::MAX` states or patterns.
    /// If `words` itself panics, the entries registered before that stay
    /// registered and the automaton is left [`Status::Dirty`].
    pub fn add_words<P>(&mut self, words: impl IntoIterator<Item = P>) -> BatchReport
    where
        P: IntoPattern<C>,
    {
        let previous = self.begin_insert();
        let report = self.trie.insert_many(words);
        self.end_insert(previous, report.inserted > 0);
        report
    }

    // The trie may gain unlinked states as soon as insertion starts, so the
    // automaton is dirty until the insertion returns. An unwinding insertion
    // leaves it dirty.
    fn begin_insert(&mut self) -> Status {
        std::mem::replace(&mut self.status, Status::Dirty)
    }

    fn end_insert(&mut self, previous: Status, changed: bool) {
        if !changed {
            self.status = previous;
        } else if self.options.compile == CompilePolicy::Eager {
            self.compile();
        }
    }

    /// Recomputes the failure links if patterns were added since the last
    /// compilation. Does nothing otherwise.
    pub fn compile(&mut self) {
        if self.status == Status::Dirty {
            compile(&mut self.trie.states);
            self.status = Status::Compiled;
        }
    }

    /// Returns a read-only matcher, or `None` while the automaton is dirty.
    ///
    /// Useful when the automaton is shared behind `&` references: compile it
    /// once, then scan from as many readers as needed.
    pub fn matcher(&self) -> Option<Matcher<'_, C>> {
        (self.status != Status::Dirty).then(|| Matcher::new(&self.trie))
    }

    /// Compiles if needed and returns a read-only matcher.
    pub fn compiled(&mut self) -> Matcher<'_, C> {
        self.compile();
        Matcher::new(&self.trie)
    }

    /// Returns true if `text` contains a registered pattern, under the
    /// configured [`MatchMode`](super::options::MatchMode).
    pub fn is_match(&mut self, text: impl IntoIterator<Item = C>) -> bool {
        let mode = self.options.mode;
        self.compiled().is_match_with(text, mode)
    }

    /// Returns the first contiguous occurrence of a registered pattern.
    ///
    /// See [`Matcher::find_first`].
    pub fn find_first(&mut self, text: impl IntoIterator<Item = C>) -> Option<Match> {
        self.compiled().find_first(text)
    }

    /// Returns every contiguous occurrence of a registered pattern,
    /// overlapping ones included.
    ///
    /// See [`Matcher::find_iter`].
    pub fn find_all(&mut self, text: impl IntoIterator<Item = C>) -> Vec<Match> {
        self.compiled().find_iter(text).collect()
    }

    /// Returns true if exactly this pattern is registered.
    pub fn contains(&self, word: impl IntoPattern<C>) -> bool {
        let word = word.collect_pattern();
        self.trie.pattern_id(&word).is_some()
    }

    /// Returns the labels of a registered pattern.
    pub fn pattern(&self, id: PatternId) -> Option<&[C]> {
        self.trie.patterns.get(id)
    }

    /// Returns every registered pattern in registration order.
    pub fn patterns(&self) -> impl ExactSizeIterator<Item = (PatternId, &[C])> + '_ {
        self.trie.patterns.iter()
    }
}

impl Dfa<char> {
    /// Returns true if `text` contains a registered pattern.
    ///
    /// Compiles first if patterns were added since the last scan. Empty text
    /// never matches.
    pub fn is_sensitive(&mut self, text: &str) -> bool {
        self.is_match(text.chars())
    }
}

impl<C: PatternChar> Default for Dfa<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: PatternChar, P: IntoPattern<C>> Extend<P> for Dfa<C> {
    /// Registers every valid entry; invalid ones are skipped.
    fn extend<T: IntoIterator<Item = P>>(&mut self, iter: T) {
        self.add_words(iter);
    }
}

impl<C: PatternChar, P: IntoPattern<C>> FromIterator<P> for Dfa<C> {
    /// Builds an automaton from every valid entry; invalid ones are skipped.
    fn from_iter<T: IntoIterator<Item = P>>(iter: T) -> Self {
        let mut dfa = Dfa::new();
        dfa.add_words(iter);
        dfa
    }
}

impl<C: PatternChar> std::fmt::Debug for Dfa<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dfa")
            .field("status", &self.status)
            .field("pattern_count", &self.pattern_count())
            .field("state_count", &self.state_count())
            .field("options", &self.options)
            .finish()
    }
}
