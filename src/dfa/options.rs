//! Tuning knobs of a [`Dfa`](super::handle::Dfa).

/// When fallback links are recomputed after the pattern set changed.
///
/// Both policies give identical answers; they only move the cost around.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CompilePolicy {
    /// Recompile on the first scan after a change. Cheap for bulk loading.
    #[default]
    Lazy,
    /// Recompile right after every change, so scans never pay for it.
    Eager,
}

/// What counts as an occurrence of a pattern in the scanned text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MatchMode {
    /// The pattern appears as a contiguous run.
    #[default]
    Contiguous,
    /// The pattern appears as a contiguous run, or its characters appear in
    /// order with other characters between them (`李x洪x志`).
    Subsequence,
}

/// Configuration of a [`Dfa`](super::handle::Dfa).
///
/// ```
/// use sensdfa::{CompilePolicy, DfaOptions, MatchMode};
///
/// let options = DfaOptions::new()
///     .compile_policy(CompilePolicy::Eager)
///     .match_mode(MatchMode::Subsequence);
/// assert_eq!(options.compile, CompilePolicy::Eager);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct DfaOptions {
    /// When to recompute fallback links.
    pub compile: CompilePolicy,
    /// Matching semantics of [`Dfa::is_sensitive`](super::handle::Dfa::is_sensitive).
    pub mode: MatchMode,
}

impl DfaOptions {
    /// Default options: lazy compilation, contiguous matching.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compile policy.
    pub fn compile_policy(mut self, policy: CompilePolicy) -> Self {
        self.compile = policy;
        self
    }

    /// Sets the match mode.
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let o = DfaOptions::new();
        assert_eq!(o.compile, CompilePolicy::Lazy);
        assert_eq!(o.mode, MatchMode::Contiguous);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_partial_config() {
        let o: DfaOptions = serde_json::from_str(r#"{ "compile": "eager" }"#).unwrap();
        assert_eq!(o.compile, CompilePolicy::Eager);
        assert_eq!(o.mode, MatchMode::Contiguous);

        let o: DfaOptions = serde_json::from_str(r#"{ "mode": "subsequence" }"#).unwrap();
        assert_eq!(o.mode, MatchMode::Subsequence);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_round_trip_names() {
        let json = serde_json::to_string(&DfaOptions::new().compile_policy(CompilePolicy::Eager))
            .unwrap();
        assert_eq!(json, r#"{"compile":"eager","mode":"contiguous"}"#);
    }
}
