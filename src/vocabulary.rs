//! Loading newline-delimited word lists.
//!
//! The automaton itself rejects empty and blank patterns instead of fixing
//! them up. These helpers do the clean-up on the caller side: lines are
//! trimmed, blank lines and `#` comments are dropped, duplicates are removed
//! keeping the first occurrence.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashSet;
use tracing::debug;

use crate::error::VocabularyError;

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Cleans up a newline-delimited word list.
///
/// ```
/// use sensdfa::vocabulary::parse_word_list;
///
/// let words = parse_word_list("# weapons\n  枪支 \n\n弹药\n枪支\n");
/// assert_eq!(words, ["枪支", "弹药"]);
/// ```
pub fn parse_word_list(text: &str) -> Vec<String> {
    collect_words(text.lines().map(str::to_owned))
}

/// Reads and cleans up a word list file, one word per line.
///
/// # Errors
///
/// Returns [`VocabularyError::Io`] if the file cannot be opened or is not
/// valid UTF-8.
pub fn read_word_list(path: impl AsRef<Path>) -> Result<Vec<String>, VocabularyError> {
    let path = path.as_ref();
    let io_err = |source| VocabularyError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    let mut reader = BufReader::new(file);

    // read_line into one reusable buffer instead of allocating per line.
    let mut lines = Vec::new();
    let mut buf = String::with_capacity(80);
    loop {
        match reader.read_line(&mut buf) {
            Ok(0) => break,
            Ok(_) => lines.push(buf.trim_end_matches(['\n', '\r']).to_owned()),
            Err(e) => return Err(io_err(e)),
        }
        buf.clear();
    }

    let words = collect_words(lines);
    debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

fn collect_words(lines: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for line in lines {
        let word = line.trim();
        if word.is_empty() || is_comment(word) {
            continue;
        }
        if seen.insert(word.to_owned()) {
            words.push(word.to_owned());
        }
    }
    words
}
