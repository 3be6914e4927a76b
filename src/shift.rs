//! Shift-based decoding family (Caesar cipher).
//!
//! Encryption and decryption are the same operation with opposite signs:
//! encrypting with shift `s` is undone by applying shift `-s`. The breaker
//! enumerates all 26 possible shifts, scores each candidate's letter
//! frequencies against a reference model, and keeps the strict minimum.

use crate::alphabet::Alphabet;
use crate::frequency::{chi_squared, FrequencyTable, ReferenceTable};

/// Number of distinct shifts in the 26-letter alphabet.
const NUM_SHIFTS: u8 = 26;

/// Shifts a single character within the 26-letter alphabet.
///
/// Non-letter symbols pass through unchanged; the case of the original
/// symbol is preserved on output.
fn shift_char(symbol: char, shift: i32) -> char {
    let lower = symbol.to_ascii_lowercase();
    if !lower.is_ascii_lowercase() {
        return symbol;
    }
    let index = (lower as u8 - b'a') as i64;
    let shifted = (index + shift as i64).rem_euclid(26) as u8;
    let shifted_char = (b'a' + shifted) as char;
    if symbol.is_ascii_uppercase() {
        shifted_char.to_ascii_uppercase()
    } else {
        shifted_char
    }
}

/// Applies a Caesar shift to `text`.
///
/// Each letter moves from its zero-based alphabet position `p` to
/// `(p + shift) mod 26` with wrap-around, so any `i32` shift behaves
/// identically to its value mod 26. Non-letter symbols pass through
/// unchanged and case is preserved.
///
/// Decryption is the inverse by construction: a text encrypted with shift
/// `s` is recovered by applying shift `-s`.
///
/// # Examples
///
/// ```
/// use freqbreak::apply_shift;
///
/// let ciphertext = apply_shift("Hello, World!", 3);
/// assert_eq!(ciphertext, "Khoor, Zruog!");
/// assert_eq!(apply_shift(&ciphertext, -3), "Hello, World!");
/// ```
pub fn apply_shift(text: &str, shift: i32) -> String {
    text.chars().map(|c| shift_char(c, shift)).collect()
}

/// One brute-force decode: the shift tried and the resulting text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCandidate {
    /// Shift hypothesis in `[0, 26)`.
    pub shift: u8,
    /// Text decoded by applying `-shift`.
    pub text: String,
}

/// Candidate decoding selected by the shift-cipher breaker.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftHypothesis {
    /// Best-fitting shift in `[0, 26)` (0 for the sentinel).
    pub shift: u8,
    /// Chi-squared score of the decoded text; lower is a better fit.
    pub score: f64,
    /// The decoded text.
    pub text: String,
}

impl ShiftHypothesis {
    /// The degenerate "no hypothesis" result for empty input.
    fn empty() -> Self {
        ShiftHypothesis {
            shift: 0,
            score: f64::INFINITY,
            text: String::new(),
        }
    }

    /// Returns `true` if this is the degenerate "no hypothesis" sentinel
    /// produced for ciphertext that is empty after normalization.
    ///
    /// Callers must check this before displaying results.
    pub fn is_empty(&self) -> bool {
        self.score.is_infinite()
    }
}

/// Enumerates all 26 shift hypotheses for `ciphertext`.
///
/// Produces a lazy sequence of exactly 26 candidates, one per shift in
/// `[0, 26)` in ascending order, each decoded by applying the inverse
/// shift `-shift`.
///
/// # Examples
///
/// ```
/// use freqbreak::brute_force_shifts;
///
/// let candidates: Vec<_> = brute_force_shifts("Khoor").collect();
/// assert_eq!(candidates.len(), 26);
/// assert_eq!(candidates[3].text, "Hello");
/// ```
pub fn brute_force_shifts(ciphertext: &str) -> impl Iterator<Item = ShiftCandidate> + '_ {
    (0..NUM_SHIFTS).map(move |shift| ShiftCandidate {
        shift,
        text: apply_shift(ciphertext, -i32::from(shift)),
    })
}

/// Breaks a Caesar cipher by frequency analysis.
///
/// Evaluates all 26 shifts, scoring each candidate's letter-only frequency
/// table (after normalization) against `reference`, and returns the
/// hypothesis with the strictly smallest score. When two shifts score
/// exactly equal, the smaller shift wins: the best-so-far is only replaced
/// on a strict `<` under ascending shift iteration.
///
/// # Parameters
/// - `ciphertext`: The encrypted text; non-letters are preserved in the
///   decoded output but ignored for scoring.
/// - `reference`: The fixed language model to score against, typically
///   [`ReferenceTable::english_letters`].
///
/// # Returns
/// The best-scoring [`ShiftHypothesis`], or the sentinel (infinite score,
/// empty text) when the ciphertext contains no letters.
pub fn analyze_shift_cipher(ciphertext: &str, reference: &ReferenceTable) -> ShiftHypothesis {
    let letters = Alphabet::letters();
    if letters.normalize(ciphertext).is_empty() {
        return ShiftHypothesis::empty();
    }
    let mut best = ShiftHypothesis::empty();
    for candidate in brute_force_shifts(ciphertext) {
        let observed = FrequencyTable::observed(&letters.normalize(&candidate.text), &letters);
        let score = chi_squared(&observed, reference);
        if score < best.score {
            best = ShiftHypothesis {
                shift: candidate.shift,
                score,
                text: candidate.text,
            };
        }
    }
    best
}
