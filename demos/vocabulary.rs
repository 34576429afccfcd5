//! Example: screening messages against a vocabulary.
//!
//! Builds a `Censor` wrapper around a [`Dfa`] that masks every occurrence
//! of a registered word. Shows word-list clean-up, incremental additions and
//! span reporting.
//!
//! Run with: cargo run --example vocabulary
//! Set `RUST_LOG=sensdfa=debug` to see compilation and loading events.

use sensdfa::vocabulary::parse_word_list;
use sensdfa::{Dfa, Match};
use tracing_subscriber::EnvFilter;

const WORD_LIST: &str = "
# contraband
枪支
弹药

# spam
加微信
代开发票
加微信
";

/// Replaces registered words with `*`.
struct Censor {
    dfa: Dfa,
}

impl Censor {
    fn new(words: &[String]) -> Self {
        Censor {
            dfa: words.iter().map(String::as_str).collect(),
        }
    }

    fn add(&mut self, word: &str) {
        if let Err(e) = self.dfa.add_word(word) {
            println!("  skipped {word:?}: {e}");
        }
    }

    fn mask(&mut self, text: &str) -> String {
        let mut chars: Vec<char> = text.chars().collect();
        let matches: Vec<Match> = self.dfa.find_all(text.chars());
        for m in &matches {
            chars[m.start..m.end].fill('*');
        }
        chars.into_iter().collect()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let words = parse_word_list(WORD_LIST);
    println!("Vocabulary: {words:?}");
    let mut censor = Censor::new(&words);

    let messages = ["出售枪支弹药，加微信详谈", "今天天气不错", "可代开发票"];
    println!("\nMasking:");
    for msg in messages {
        println!("  {msg} -> {}", censor.mask(msg));
    }

    println!("\nAdding words:");
    censor.add("天气");
    censor.add("   ");
    println!("  {} -> {}", messages[1], censor.mask(messages[1]));

    println!("\nSpans in \"ushers\":");
    let mut dfa: Dfa = ["he", "she", "his", "hers"].into_iter().collect();
    for m in dfa.find_all("ushers".chars()) {
        let word: String = dfa.pattern(m.pattern).unwrap_or_default().iter().collect();
        println!("  {} {word} [{}, {})", m.pattern, m.start, m.end);
    }
}
