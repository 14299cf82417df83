/// Text-level rule implementations
///
/// Each rule is implemented in its own file and implements
/// [`TextRule`](crate::traits::TextRule); the registry wires them together.
use regex::Regex;
use std::sync::LazyLock;

/// Word token pattern shared by the rules: a letter run with embedded
/// apostrophes ("don't" is one word).
pub(crate) static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z']*").expect("word pattern is valid"));

mod inconsistent_quotes;
mod overused_word;
mod paragraph_start_repetition;
mod repeated_word;

pub use inconsistent_quotes::InconsistentQuotesRuleImpl;
pub use overused_word::OverusedWordRuleImpl;
pub use paragraph_start_repetition::ParagraphStartRepetitionRuleImpl;
pub use repeated_word::RepeatedWordRuleImpl;
