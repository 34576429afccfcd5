use std::fmt;

use smallvec::SmallVec;

use super::char_trait::PatternChar;
use crate::error::PatternError;

/// Inline capacity of a pattern buffer. Sensitive words are short; longer
/// ones spill to the heap.
pub const INLINE_PATTERN: usize = 32;

/// Collected characters of a pattern.
pub type PatternBuf<C> = SmallVec<[C; INLINE_PATTERN]>;

/// Trait for types that can be registered as a pattern.
///
/// Implemented for common string and sequence types so that
/// [`Dfa::add_word`](super::handle::Dfa::add_word) accepts them directly
/// without manual conversion.
pub trait IntoPattern<C: PatternChar> {
    /// Collects this pattern into a character buffer.
    fn collect_pattern(self) -> PatternBuf<C>;
}

// String types → char

impl IntoPattern<char> for &str {
    fn collect_pattern(self) -> PatternBuf<char> {
        self.chars().collect()
    }
}

impl IntoPattern<char> for &&str {
    fn collect_pattern(self) -> PatternBuf<char> {
        self.chars().collect()
    }
}

impl IntoPattern<char> for String {
    fn collect_pattern(self) -> PatternBuf<char> {
        self.chars().collect()
    }
}

impl IntoPattern<char> for &String {
    fn collect_pattern(self) -> PatternBuf<char> {
        self.chars().collect()
    }
}

// Generic sequence types → C

impl<C: PatternChar> IntoPattern<C> for &[C] {
    fn collect_pattern(self) -> PatternBuf<C> {
        self.iter().copied().collect()
    }
}

impl<C: PatternChar> IntoPattern<C> for Vec<C> {
    fn collect_pattern(self) -> PatternBuf<C> {
        self.into_iter().collect()
    }
}

impl<C: PatternChar> IntoPattern<C> for &Vec<C> {
    fn collect_pattern(self) -> PatternBuf<C> {
        self.iter().copied().collect()
    }
}

impl<C: PatternChar, const N: usize> IntoPattern<C> for [C; N] {
    fn collect_pattern(self) -> PatternBuf<C> {
        self.into_iter().collect()
    }
}

impl<C: PatternChar, const N: usize> IntoPattern<C> for &[C; N] {
    fn collect_pattern(self) -> PatternBuf<C> {
        self.iter().copied().collect()
    }
}

impl<C: PatternChar> IntoPattern<C> for PatternBuf<C> {
    fn collect_pattern(self) -> PatternBuf<C> {
        self
    }
}

/// Checks that a pattern is neither empty nor made only of blank labels.
pub(crate) fn validate<C: PatternChar>(pattern: &[C]) -> Result<(), PatternError> {
    if pattern.is_empty() {
        Err(PatternError::Empty)
    } else if pattern.iter().all(|ch| ch.is_blank()) {
        Err(PatternError::Blank {
            len: pattern.len(),
        })
    } else {
        Ok(())
    }
}

/// Stable identifier of a registered pattern.
///
/// Ids are dense and issued in registration order, starting at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatternId(u32);

impl PatternId {
    /// # Panics
    ///
    /// Panics if `index` does not fit in a `u32`.
    pub(crate) fn new(index: usize) -> Self {
        PatternId(u32::try_from(index).expect("pattern id overflow"))
    }

    /// Returns this id as an index into the registration order.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The registered patterns, indexed by [`PatternId`].
#[derive(Clone, Debug)]
pub(crate) struct PatternStore<C: PatternChar> {
    patterns: Vec<Box<[C]>>,
}

impl<C: PatternChar> PatternStore<C> {
    pub(crate) fn new() -> Self {
        PatternStore {
            patterns: Vec::new(),
        }
    }

    /// Stores a pattern and returns its freshly issued id.
    pub(crate) fn push(&mut self, pattern: &[C]) -> PatternId {
        let id = PatternId::new(self.patterns.len());
        self.patterns.push(pattern.into());
        id
    }

    #[inline]
    pub(crate) fn get(&self, id: PatternId) -> Option<&[C]> {
        self.patterns.get(id.index()).map(|p| &p[..])
    }

    pub(crate) fn len(&self) -> usize {
        self.patterns.len()
    }

    pub(crate) fn iter(&self) -> impl ExactSizeIterator<Item = (PatternId, &[C])> + '_ {
        self.patterns
            .iter()
            .enumerate()
            .map(|(i, p)| (PatternId::new(i), &p[..]))
    }
}
