use crate::core::sequence::DnaSequence;

/// Read-only N x N views of a [`DnaSequence`].
///
/// `forward[i][j]` is base `j` of row `i`. `mirrored[i][j]` is
/// `forward[i][n - 1 - j]`, so reading the mirrored grid top-left to
/// bottom-right walks the forward grid top-right to bottom-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    forward: Vec<Vec<u8>>,
    mirrored: Vec<Vec<u8>>,
}

impl Grid {
    /// Build both orientations. Rows of a validated sequence are ASCII, so
    /// each byte is one base.
    #[must_use]
    pub fn build(dna: &DnaSequence) -> Self {
        let forward: Vec<Vec<u8>> = dna.rows().iter().map(|row| row.as_bytes().to_vec()).collect();
        let mirrored = forward
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect();

        Self { forward, mirrored }
    }

    /// Grid dimension N
    #[must_use]
    pub fn size(&self) -> usize {
        self.forward.len()
    }

    #[must_use]
    pub fn forward(&self) -> &[Vec<u8>] {
        &self.forward
    }

    #[must_use]
    pub fn mirrored(&self) -> &[Vec<u8>] {
        &self.mirrored
    }
}
