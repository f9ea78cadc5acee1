use serde::Serialize;

/// A validated, square DNA sequence.
///
/// Rows are uppercase and drawn only from `ACGT`; the row count equals the
/// length of every row. Values of this type are only produced by
/// [`validate_dna`](crate::utils::validation::validate_dna).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnaSequence {
    rows: Vec<String>,
    base_length: usize,
    bases: String,
}

impl DnaSequence {
    pub(crate) fn from_validated(rows: Vec<String>, base_length: usize) -> Self {
        let bases = rows.concat();
        Self {
            rows,
            base_length,
            bases,
        }
    }

    /// Normalized rows
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows, which is also the grid dimension N
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Length of every row
    #[must_use]
    pub fn base_length(&self) -> usize {
        self.base_length
    }

    /// All rows concatenated in order
    #[must_use]
    pub fn bases(&self) -> &str {
        &self.bases
    }

    /// Stable identifier for this DNA: lowercase hex MD5 of the concatenated bases.
    ///
    /// Inputs that differ only in case share a fingerprint.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let digest = md5::compute(self.bases.as_bytes());
        format!("{digest:x}")
    }
}
