/// Trie construction: inserting patterns into the shared prefix tree.
pub mod builder;
/// Trait for types that can serve as edge labels.
pub mod char_trait;
/// Failure-link compilation.
pub(crate) mod compiler;
/// Compact per-state edge storage.
pub(crate) mod edges;
/// The public automaton handle.
pub mod handle;
/// Tuning options.
pub mod options;
/// Pattern conversion, validation and identifiers.
pub mod pattern;
/// Scanning text through a compiled automaton.
pub mod scanner;
/// Thread-safe shared handle.
pub mod shared;
/// Automaton states.
pub(crate) mod state;
/// Arena of states addressed by stable ids.
pub(crate) mod state_arena;

pub use builder::{BatchReport, Inserted};
pub use char_trait::PatternChar;
pub use handle::{Dfa, Status};
pub use options::{CompilePolicy, DfaOptions, MatchMode};
pub use pattern::{IntoPattern, PatternBuf, PatternId};
pub use scanner::{FindIter, Match, Matcher};
pub use shared::SharedDfa;
