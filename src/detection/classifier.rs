use serde::Serialize;

use crate::core::grid::Grid;
use crate::core::sequence::DnaSequence;
use crate::core::types::Orientation;
use crate::detection::scanner::{scan, RUN_LENGTH};
use crate::utils::validation::{validate_dna, DnaError};

/// Outcome of classifying one DNA sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Fingerprint of the DNA, see [`DnaSequence::fingerprint`]
    pub id: String,

    /// Grid dimension N
    pub size: usize,

    pub is_mutant: bool,

    /// First orientation, in scan order, holding a run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
}

impl Classification {
    #[must_use]
    pub fn of(dna: &DnaSequence) -> Self {
        let orientation = find_run(dna);
        Self {
            id: dna.fingerprint(),
            size: dna.size(),
            is_mutant: orientation.is_some(),
            orientation,
        }
    }
}

/// Classify raw DNA rows as mutant (`true`) or not.
///
/// # Examples
///
/// ```
/// use mutant_finder::detection::classifier::classify;
/// use mutant_finder::utils::validation::DnaError;
///
/// let rows: &[&str] = &["ACTA", "TGAC", "GGGG", "TTGG"];
/// assert_eq!(classify(Some(rows)), Ok(true));
///
/// let rows: &[&str] = &["ATGC", "CABC", "TTAT", "CTGA"];
/// assert_eq!(classify(Some(rows)), Err(DnaError::InvalidBase));
/// ```
///
/// # Errors
///
/// Returns the validation error for malformed input, unchanged.
pub fn classify<S: AsRef<str>>(rows: Option<&[S]>) -> Result<bool, DnaError> {
    let dna = validate_dna(rows)?;
    Ok(classify_sequence(&dna))
}

/// Classify an already validated sequence
#[must_use]
pub fn classify_sequence(dna: &DnaSequence) -> bool {
    find_run(dna).is_some()
}

/// Find the first orientation, in [`Orientation::SCAN_ORDER`], that holds a run.
///
/// Grids smaller than the run length are rejected before any grid is built.
#[must_use]
pub fn find_run(dna: &DnaSequence) -> Option<Orientation> {
    if dna.size() < RUN_LENGTH {
        return None;
    }

    let grid = Grid::build(dna);
    Orientation::SCAN_ORDER
        .into_iter()
        .find(|&orientation| scan(&grid, orientation))
}
