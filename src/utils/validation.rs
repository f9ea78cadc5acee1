//! Centralized validation and helper functions.

use crate::core::sequence::DnaSequence;
use crate::core::types::Base;

/// Maximum number of rows accepted from a single request (DOS protection).
/// A grid of this size holds one million bases.
pub const MAX_DNA_ROWS: usize = 1_000;

pub const MSG_DNA_NULL: &str = "DNA sequence can not be null";
pub const MSG_DNA_EMPTY: &str = "DNA sequence can not be empty";
pub const MSG_DNA_NOT_SQUARE: &str = "DNA chain must have the same lenght of nitrogenous bases.";
pub const MSG_UNEQUAL_BASE_LENGTH: &str = "DNA must contain nitrogenous bases with same length.";
pub const MSG_INVALID_BASE: &str = "Nitrogenous bases should be composed by A, T, C, G bases only.";

/// Reasons a DNA sequence is rejected before any grid work happens.
///
/// The `Display` text of each variant is part of the public contract and is
/// returned verbatim to HTTP clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DnaError {
    #[error("{}", MSG_DNA_NULL)]
    Null,
    #[error("{}", MSG_DNA_EMPTY)]
    Empty,
    #[error("{}", MSG_DNA_NOT_SQUARE)]
    NotSquare,
    #[error("{}", MSG_UNEQUAL_BASE_LENGTH)]
    UnequalBaseLength,
    #[error("{}", MSG_INVALID_BASE)]
    InvalidBase,
}

/// Broad category of a [`DnaError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnaErrorKind {
    /// The row sequence itself is malformed
    Structural,
    /// Rows are present but violate length or alphabet rules
    Content,
}

impl DnaError {
    #[must_use]
    pub fn kind(self) -> DnaErrorKind {
        match self {
            Self::Null | Self::Empty | Self::NotSquare => DnaErrorKind::Structural,
            Self::UnequalBaseLength | Self::InvalidBase => DnaErrorKind::Content,
        }
    }

    /// Short machine-readable identifier, used in JSON output
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Null => "dna_null",
            Self::Empty => "dna_empty",
            Self::NotSquare => "dna_not_square",
            Self::UnequalBaseLength => "unequal_base_length",
            Self::InvalidBase => "invalid_base",
        }
    }
}

/// Validate raw DNA rows and normalize them into a [`DnaSequence`].
///
/// Rules are checked in a fixed order and the first violation wins:
/// 1. rows absent -> [`DnaError::Null`]
/// 2. no rows -> [`DnaError::Empty`]
/// 3. row count differs from the length of the first row -> [`DnaError::NotSquare`]
/// 4. any row length differs from the first row -> [`DnaError::UnequalBaseLength`]
/// 5. any character outside `ACGT` (case-insensitive) -> [`DnaError::InvalidBase`]
///
/// # Examples
///
/// ```
/// use mutant_finder::utils::validation::{validate_dna, DnaError};
///
/// let rows: &[&str] = &["acta", "TGAC", "GACT", "CTGA"];
/// let dna = validate_dna(Some(rows)).unwrap();
/// assert_eq!(dna.size(), 4);
/// assert_eq!(dna.rows()[0], "ACTA");
///
/// let rows: &[&str] = &["ATGC", "CAGC", "TTAT"];
/// assert_eq!(validate_dna(Some(rows)).unwrap_err(), DnaError::NotSquare);
/// ```
///
/// # Errors
///
/// Returns the [`DnaError`] for the first rule the input violates.
pub fn validate_dna<S: AsRef<str>>(rows: Option<&[S]>) -> Result<DnaSequence, DnaError> {
    let Some(rows) = rows else {
        return Err(DnaError::Null);
    };

    let Some(first) = rows.first() else {
        return Err(DnaError::Empty);
    };

    let base_length = first.as_ref().chars().count();
    if rows.len() != base_length {
        return Err(DnaError::NotSquare);
    }

    if rows
        .iter()
        .any(|row| row.as_ref().chars().count() != base_length)
    {
        return Err(DnaError::UnequalBaseLength);
    }

    // Alphabet is checked over the whole concatenation only after every
    // length is known to agree.
    let mut normalized = Vec::with_capacity(rows.len());
    for row in rows {
        let row = row.as_ref();
        if !row.bytes().all(|b| Base::from_byte(b).is_some()) {
            return Err(DnaError::InvalidBase);
        }
        normalized.push(row.to_ascii_uppercase());
    }

    Ok(DnaSequence::from_validated(normalized, base_length))
}

/// Check a row count against [`MAX_DNA_ROWS`] before doing any work on it.
///
/// Returns an error message if the count is over the limit, None if safe.
#[must_use]
pub fn check_row_limit(count: usize) -> Option<String> {
    if count > MAX_DNA_ROWS {
        Some(format!(
            "Too many DNA rows: {count} exceeds maximum of {MAX_DNA_ROWS}"
        ))
    } else {
        None
    }
}
