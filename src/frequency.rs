//! Observed and reference frequency tables, and the chi-squared distance.
//!
//! A [`FrequencyTable`] holds the empirical counts and percentages of a
//! normalized symbol sequence over an alphabet. A [`ReferenceTable`] holds
//! the expected relative frequencies of a language model; the two built-in
//! English tables carry the same constants the surrounding demos use.
//! [`chi_squared`] measures how far an observed table sits from a reference
//! table; lower means a better fit.

use once_cell::sync::Lazy;

use crate::alphabet::Alphabet;
use crate::error::FreqBreakError;

/// Denominator substituted when an expected frequency is exactly zero.
///
/// Deliberate smoothing: keeps zero-expectation symbols scoreable instead
/// of producing a division fault.
const ZERO_EXPECTED_EPSILON: f64 = 1e-6;

/// English letter frequencies in percent, descending.
const ENGLISH_LETTER_FREQUENCIES: [(char, f64); 26] = [
    ('e', 12.02),
    ('t', 9.06),
    ('a', 8.17),
    ('o', 7.51),
    ('i', 7.0),
    ('n', 6.75),
    ('s', 6.33),
    ('h', 6.09),
    ('r', 5.99),
    ('d', 4.25),
    ('l', 4.03),
    ('c', 2.78),
    ('u', 2.76),
    ('m', 2.41),
    ('w', 2.36),
    ('f', 2.23),
    ('g', 2.02),
    ('y', 1.97),
    ('p', 1.93),
    ('b', 1.49),
    ('v', 0.98),
    ('k', 0.77),
    ('j', 0.15),
    ('x', 0.15),
    ('q', 0.1),
    ('z', 0.07),
];

/// Expected frequency of the space character in English prose, percent.
const ENGLISH_SPACE_FREQUENCY: f64 = 18.0;

static ENGLISH_LETTERS: Lazy<ReferenceTable> = Lazy::new(|| {
    ReferenceTable::new(ENGLISH_LETTER_FREQUENCIES)
        .expect("built-in English letter table is valid")
});

static ENGLISH_LETTERS_WITH_SPACE: Lazy<ReferenceTable> = Lazy::new(|| {
    let mut entries = Vec::with_capacity(ENGLISH_LETTER_FREQUENCIES.len() + 1);
    entries.push((' ', ENGLISH_SPACE_FREQUENCY));
    entries.extend(ENGLISH_LETTER_FREQUENCIES);
    ReferenceTable::new(entries).expect("built-in English letters+space table is valid")
});

/// Empirical symbol frequencies of a normalized sequence over an alphabet.
///
/// Every alphabet symbol is present as a key even with a zero count; there
/// is no sparse omission. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(char, usize, f64)>,
    sample_len: usize,
}

impl FrequencyTable {
    /// Builds the observed frequency table of `sequence` over `alphabet`.
    ///
    /// The percentage of each alphabet symbol is
    /// `100 * count(symbol) / retained_len`, where `retained_len` counts
    /// only symbols belonging to the alphabet. Callers normalize first
    /// (see [`Alphabet::normalize`]); symbols outside the alphabet do not
    /// contribute to either side of the division.
    ///
    /// # Parameters
    /// - `sequence`: Normalized symbol sequence to count.
    /// - `alphabet`: Alphabet defining the key domain of the table.
    ///
    /// # Returns
    /// A table with one entry per alphabet symbol. An empty sequence yields
    /// zero percentages for every symbol rather than NaN.
    pub fn observed(sequence: &str, alphabet: &Alphabet) -> Self {
        let mut counts = vec![0usize; alphabet.len()];
        let mut sample_len = 0usize;
        for symbol in sequence.chars() {
            if let Some(index) = alphabet.index_of(symbol) {
                counts[index] += 1;
                sample_len += 1;
            }
        }
        let entries = alphabet
            .symbols()
            .iter()
            .zip(counts)
            .map(|(&symbol, count)| {
                let percentage = if sample_len == 0 {
                    0.0
                } else {
                    100.0 * count as f64 / sample_len as f64
                };
                (symbol, count, percentage)
            })
            .collect();
        FrequencyTable {
            entries,
            sample_len,
        }
    }

    /// Returns the number of symbols counted (sequence length after
    /// out-of-alphabet symbols are dropped).
    pub fn sample_len(&self) -> usize {
        self.sample_len
    }

    /// Returns the number of entries (one per alphabet symbol).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table carries no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the raw count of `symbol`, or 0 if it is not a key.
    pub fn count(&self, symbol: char) -> usize {
        self.entries
            .iter()
            .find(|&&(s, _, _)| s == symbol)
            .map_or(0, |&(_, count, _)| count)
    }

    /// Returns the observed percentage of `symbol`, or 0 if it is not a key.
    pub fn percentage(&self, symbol: char) -> f64 {
        self.entries
            .iter()
            .find(|&&(s, _, _)| s == symbol)
            .map_or(0.0, |&(_, _, percentage)| percentage)
    }

    /// Iterates over `(symbol, count, percentage)` in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize, f64)> + '_ {
        self.entries.iter().copied()
    }
}

/// Expected relative frequencies of a language model.
///
/// Values are positive reals, not required to sum to 100. Immutable once
/// built; one instance per target language model.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable {
    entries: Vec<(char, f64)>,
}

impl ReferenceTable {
    /// Builds a reference table from `(symbol, expected frequency)` pairs.
    ///
    /// Exact zeros are admitted; [`chi_squared`] substitutes an epsilon
    /// denominator for them.
    ///
    /// # Errors
    /// Returns [`FreqBreakError::EmptyReferenceTable`] if no entries are
    /// given, [`FreqBreakError::InvalidExpectedFrequency`] if a frequency
    /// is negative, NaN, or infinite, or [`FreqBreakError::DuplicateSymbol`]
    /// if a symbol appears twice.
    pub fn new<I>(entries: I) -> Result<Self, FreqBreakError>
    where
        I: IntoIterator<Item = (char, f64)>,
    {
        let mut validated: Vec<(char, f64)> = Vec::new();
        for (symbol, expected) in entries {
            if !expected.is_finite() || expected < 0.0 {
                return Err(FreqBreakError::InvalidExpectedFrequency(symbol));
            }
            if validated.iter().any(|&(s, _)| s == symbol) {
                return Err(FreqBreakError::DuplicateSymbol(symbol));
            }
            validated.push((symbol, expected));
        }
        if validated.is_empty() {
            return Err(FreqBreakError::EmptyReferenceTable);
        }
        Ok(ReferenceTable { entries: validated })
    }

    /// Returns the built-in English letters-only model (26 symbols).
    pub fn english_letters() -> &'static ReferenceTable {
        &ENGLISH_LETTERS
    }

    /// Returns the built-in English letters-plus-space model (27 symbols,
    /// space expected at 18%).
    pub fn english_letters_with_space() -> &'static ReferenceTable {
        &ENGLISH_LETTERS_WITH_SPACE
    }

    /// Returns the expected frequency of `symbol`, or `None` if absent.
    pub fn expected(&self, symbol: char) -> Option<f64> {
        self.entries
            .iter()
            .find(|&&(s, _)| s == symbol)
            .map(|&(_, expected)| expected)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table carries no entries.
    ///
    /// Validated tables are never empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(symbol, expected frequency)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.entries.iter().copied()
    }
}

/// Chi-squared distance between an observed and a reference table.
///
/// Sums `(observed - expected)^2 / expected` over every symbol of the
/// reference table; a symbol absent from the observed table contributes
/// with an observed value of 0. An expected frequency of exactly zero is
/// replaced by a small epsilon denominator.
///
/// The metric is asymmetric: `expected` must be the fixed reference table
/// and `observed` the per-hypothesis table, never the other way around.
///
/// # Returns
/// A non-negative score; lower means a closer fit.
pub fn chi_squared(observed: &FrequencyTable, expected: &ReferenceTable) -> f64 {
    expected
        .iter()
        .map(|(symbol, expected_pct)| {
            let observed_pct = observed.percentage(symbol);
            let denominator = if expected_pct == 0.0 {
                ZERO_EXPECTED_EPSILON
            } else {
                expected_pct
            };
            let diff = observed_pct - expected_pct;
            diff * diff / denominator
        })
        .sum()
}
