//! Frequency-based cryptanalysis of classical ciphers.
//!
//! `freqbreak` implements the frequency-analysis pipeline used to break
//! Caesar shift ciphers and toy rank-substitution (token) ciphers: build an
//! empirical symbol-frequency distribution from the ciphertext, compare it
//! against a reference language model with a chi-squared statistic, and keep
//! the best-fitting decoding hypothesis.
//!
//! # Architecture
//!
//! ```text
//! Alphabet          (normalization: case-fold, drop out-of-alphabet symbols)
//!     ↓
//! FrequencyTable    (empirical counts and percentages per alphabet symbol)
//!     ↓ chi_squared against a ReferenceTable
//! shift family      (search all 26 shifts, keep the strict minimum score)
//! rank family       (single frequency-rank mapping, exactly one hypothesis)
//! ```
//!
//! All operations are synchronous pure functions over immutable inputs.
//! Analysis never fails: degenerate input yields a sentinel hypothesis with
//! an infinite score (see [`ShiftHypothesis::is_empty`]).
//!
//! # Examples
//!
//! Recover the shift of a Caesar-encrypted message:
//!
//! ```
//! use freqbreak::{analyze_shift_cipher, apply_shift, ReferenceTable};
//!
//! let plaintext = "counting letters in a long passage of ordinary english \
//!                  shows a steady pattern the letter e leads followed by t \
//!                  and a while q and z barely appear at all this uneven \
//!                  spread is the fingerprint that lets a frequency attack \
//!                  break a simple substitution";
//! let ciphertext = apply_shift(plaintext, 7);
//!
//! let best = analyze_shift_cipher(&ciphertext, ReferenceTable::english_letters());
//! assert_eq!(best.shift, 7);
//! assert_eq!(best.text, plaintext);
//! ```
//!
//! Decode a whitespace-delimited token cipher by frequency rank:
//!
//! ```
//! use freqbreak::{analyze_rank_cipher, ReferenceTable};
//!
//! let best = analyze_rank_cipher("12 7 12 9", ReferenceTable::english_letters_with_space());
//! assert_eq!(best.text, " e t");
//! ```

#![deny(clippy::all)]

pub mod error;

mod alphabet;
mod frequency;
mod rank;
mod shift;

pub use alphabet::Alphabet;
pub use error::FreqBreakError;
pub use frequency::{chi_squared, FrequencyTable, ReferenceTable};
pub use rank::{
    analyze_rank_cipher, parse_symbols, RankHypothesis, RankMapping, CANONICAL_ORDER,
    UNKNOWN_SYMBOL,
};
pub use shift::{
    analyze_shift_cipher, apply_shift, brute_force_shifts, ShiftCandidate, ShiftHypothesis,
};
