//! Rank-substitution decoding family (token ciphers).
//!
//! Per-symbol substitution ciphers preserve frequency: the most common
//! ciphertext symbol stands for the most common plaintext symbol. The
//! breaker counts each distinct whitespace-delimited token, ranks tokens by
//! descending count, and pairs them positionally with the canonical English
//! frequency order. Unlike the 26-way shift search, this family fixes the
//! mapping from frequency rank alone and produces exactly one hypothesis.

use std::collections::HashMap;

use crate::alphabet::Alphabet;
use crate::frequency::{chi_squared, FrequencyTable, ReferenceTable};

/// Canonical plaintext symbols ordered by descending real-world frequency:
/// space first, then letters.
pub const CANONICAL_ORDER: &str = " etaoinshrdlcumwfgypbvkjxqz";

/// Marker assigned to ciphertext symbols beyond the canonical list.
pub const UNKNOWN_SYMBOL: char = '?';

/// Splits ciphertext into whitespace-delimited opaque tokens.
///
/// Leading/trailing whitespace is trimmed and runs of whitespace collapse;
/// empty or all-whitespace input yields an empty sequence.
pub fn parse_symbols(ciphertext: &str) -> Vec<&str> {
    ciphertext.split_whitespace().collect()
}

/// Positional mapping from ciphertext symbols to plaintext letters.
///
/// Built by pairing each distinct ciphertext symbol, ordered by descending
/// observed count with ties broken by first occurrence, against
/// [`CANONICAL_ORDER`]. Rank assignment is positional, so no two ciphertext
/// symbols share an output rank; symbols past the canonical length map to
/// [`UNKNOWN_SYMBOL`]. Rebuilt fully per analysis, never mutated
/// incrementally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RankMapping {
    pairs: Vec<(String, char)>,
}

impl RankMapping {
    /// Builds the rank mapping for a symbol sequence.
    ///
    /// Counts occurrences of each distinct symbol (recording first
    /// occurrence order), sorts by descending count with a stable sort so
    /// ties keep their first-occurrence order, then assigns canonical
    /// plaintext symbols by rank.
    ///
    /// # Examples
    ///
    /// ```
    /// use freqbreak::RankMapping;
    ///
    /// let mapping = RankMapping::build(&["5", "5", "5", "2", "2", "9"]);
    /// assert_eq!(mapping.plaintext_for("5"), ' ');
    /// assert_eq!(mapping.plaintext_for("2"), 'e');
    /// assert_eq!(mapping.plaintext_for("9"), 't');
    /// ```
    pub fn build<S: AsRef<str>>(symbols: &[S]) -> Self {
        // Counts in first-occurrence order; the index map avoids a
        // quadratic scan per symbol.
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for symbol in symbols {
            let symbol = symbol.as_ref();
            match index.get(symbol) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(symbol, counts.len());
                    counts.push((symbol, 1));
                }
            }
        }
        // Stable sort over the insertion-ordered list: equal counts keep
        // first-occurrence order.
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let canonical: Vec<char> = CANONICAL_ORDER.chars().collect();
        let pairs = counts
            .iter()
            .enumerate()
            .map(|(rank, &(symbol, _))| {
                let plaintext = canonical.get(rank).copied().unwrap_or(UNKNOWN_SYMBOL);
                (symbol.to_string(), plaintext)
            })
            .collect();
        RankMapping { pairs }
    }

    /// Returns the plaintext letter assigned to `symbol`.
    ///
    /// Symbols never seen at build time, and symbols ranked past the
    /// canonical list, both yield [`UNKNOWN_SYMBOL`].
    pub fn plaintext_for(&self, symbol: &str) -> char {
        self.pairs
            .iter()
            .find(|(s, _)| s.as_str() == symbol)
            .map_or(UNKNOWN_SYMBOL, |&(_, plaintext)| plaintext)
    }

    /// Decodes a symbol sequence into one plaintext string.
    ///
    /// Concatenates the mapped plaintext symbol (or the unknown marker) for
    /// every input symbol, with no separators.
    pub fn apply<S: AsRef<str>>(&self, symbols: &[S]) -> String {
        let lookup: HashMap<&str, char> = self
            .pairs
            .iter()
            .map(|(symbol, plaintext)| (symbol.as_str(), *plaintext))
            .collect();
        symbols
            .iter()
            .map(|symbol| {
                lookup
                    .get(symbol.as_ref())
                    .copied()
                    .unwrap_or(UNKNOWN_SYMBOL)
            })
            .collect()
    }

    /// Returns the number of distinct ciphertext symbols mapped.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no symbols are mapped.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over `(ciphertext symbol, plaintext letter)` pairs in rank
    /// order (most frequent first).
    pub fn iter(&self) -> impl Iterator<Item = (&str, char)> + '_ {
        self.pairs
            .iter()
            .map(|(symbol, plaintext)| (symbol.as_str(), *plaintext))
    }
}

/// Candidate decoding produced by the rank-substitution breaker.
#[derive(Debug, Clone, PartialEq)]
pub struct RankHypothesis {
    /// Chi-squared score of the decoded guess; lower is a better fit.
    pub score: f64,
    /// The decoded guess, one plaintext symbol per ciphertext token.
    pub text: String,
    /// The rank mapping that produced the guess.
    pub mapping: RankMapping,
}

impl RankHypothesis {
    /// The degenerate "no hypothesis" result for empty input.
    fn empty() -> Self {
        RankHypothesis {
            score: f64::INFINITY,
            text: String::new(),
            mapping: RankMapping::default(),
        }
    }

    /// Returns `true` if this is the degenerate "no hypothesis" sentinel
    /// produced for ciphertext that parses to no symbols.
    ///
    /// Callers must check this before displaying results.
    pub fn is_empty(&self) -> bool {
        self.score.is_infinite()
    }
}

/// Breaks a per-symbol substitution cipher by frequency rank.
///
/// Builds the rank mapping once (deterministically, with no search over
/// alternative mappings), applies it to get a single decoded guess, and
/// scores that guess's letters+space frequency table against `reference`.
/// There is exactly one candidate per invocation.
///
/// # Parameters
/// - `ciphertext`: Whitespace-delimited symbol tokens.
/// - `reference`: The fixed language model to score against, typically
///   [`ReferenceTable::english_letters_with_space`].
///
/// # Returns
/// The single resulting [`RankHypothesis`], or the sentinel (infinite
/// score, empty text, empty mapping) when no symbols parse.
pub fn analyze_rank_cipher(ciphertext: &str, reference: &ReferenceTable) -> RankHypothesis {
    let symbols = parse_symbols(ciphertext);
    if symbols.is_empty() {
        return RankHypothesis::empty();
    }
    let mapping = RankMapping::build(&symbols);
    let text = mapping.apply(&symbols);
    let letters_and_space = Alphabet::letters_and_space();
    let observed = FrequencyTable::observed(&letters_and_space.normalize(&text), &letters_and_space);
    let score = chi_squared(&observed, reference);
    RankHypothesis {
        score,
        text,
        mapping,
    }
}
