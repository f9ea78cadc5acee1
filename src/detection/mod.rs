//! Run detection and mutant classification.
//!
//! - [`scanner`]: reads the grid as lines (rows, columns, diagonals) and tests
//!   each line for four identical consecutive bases
//! - [`classifier`]: validates input, then scans every orientation until one
//!   holds a run
//!
//! ## Algorithm
//!
//! A sequence is a mutant if at least one run of four identical bases
//! appears in any orientation. Orientations are scanned in a fixed order
//! (horizontal, vertical, down-right diagonal, down-left diagonal) and the
//! scan stops at the first hit. Grids smaller than 4 x 4 are never mutant.
//!
//! Only diagonals of length four or more are read: an N x N grid has
//! `2N - 1` diagonals per direction, of which `2N - 7` qualify.
//!
//! All functions here are pure; the engine holds no state between calls and
//! is safe to call from any number of threads.
//!
//! ## Example
//!
//! ```
//! use mutant_finder::detection::classifier::{classify, find_run};
//! use mutant_finder::core::types::Orientation;
//! use mutant_finder::utils::validation::validate_dna;
//!
//! let rows: &[&str] = &["ACTA", "TCAC", "GCGG", "TCGG"];
//! assert_eq!(classify(Some(rows)), Ok(true));
//!
//! let dna = validate_dna(Some(rows)).unwrap();
//! assert_eq!(find_run(&dna), Some(Orientation::Vertical));
//! ```

pub mod classifier;
pub mod scanner;

pub use classifier::{classify, classify_sequence, find_run, Classification};
