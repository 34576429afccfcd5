use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as edge labels in the automaton.
///
/// Implemented for `char` (the default alphabet) and the unsigned integer
/// types, so byte- or code-unit-level vocabularies work the same way.
///
/// - `Copy`: edges store labels by value
/// - `Eq + Ord`: comparing and ordering edge labels
/// - `Hash`: large fan-out states keep their edges in a hash table
/// - `Debug`: debug printing of states and patterns
pub trait PatternChar: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {
    /// True if this label counts as whitespace when validating patterns.
    ///
    /// A pattern made only of blank labels is rejected.
    fn is_blank(self) -> bool {
        false
    }
}

impl PatternChar for char {
    #[inline]
    fn is_blank(self) -> bool {
        self.is_whitespace()
    }
}

impl PatternChar for u8 {
    #[inline]
    fn is_blank(self) -> bool {
        self.is_ascii_whitespace()
    }
}

impl PatternChar for u16 {}
impl PatternChar for u32 {}
