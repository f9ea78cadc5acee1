//! # mutant-finder
//!
//! A library for classifying DNA sequences as mutant or not.
//!
//! A DNA sequence is given as N rows of N bases each, drawn from `A`, `C`,
//! `G` and `T` (in either case). The sequence is a mutant when four identical
//! bases appear consecutively in any row, any column, or any diagonal in
//! either direction.
//!
//! ## Features
//!
//! - **Strict validation**: null, empty, non-square, ragged, and non-ACGT
//!   input each produce a distinct [`DnaError`]
//! - **Four-way scan**: rows, columns, and both diagonal directions, stopping
//!   at the first run found
//! - **Stateless engine**: every call owns its data; safe to share across threads
//! - **Record keeping**: results keyed by DNA fingerprint, with aggregate statistics
//! - **HTTP service**: `POST /mutant` and `GET /stats`
//!
//! ## Example
//!
//! ```rust
//! use mutant_finder::{classify, DnaError};
//!
//! let mutant: &[&str] = &["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"];
//! assert_eq!(classify(Some(mutant)), Ok(true));
//!
//! let human: &[&str] = &["ACTA", "TGAC", "GACT", "CTGA"];
//! assert_eq!(classify(Some(human)), Ok(false));
//!
//! let ragged: &[&str] = &["ATGC", "CAGC", "TTAT"];
//! assert_eq!(classify(Some(ragged)), Err(DnaError::NotSquare));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Validated sequences, grids, and base/orientation types
//! - [`detection`]: Run scanning and classification
//! - [`parsing`]: Decoding of `{"dna": [...]}` submissions
//! - [`store`]: Classification records and statistics
//! - [`cli`]: Command-line interface implementation
//! - [`web`]: HTTP service

pub mod cli;
pub mod core;
pub mod detection;
pub mod parsing;
pub mod store;
pub mod utils;
pub mod web;

// Re-export commonly used types for convenience
pub use crate::core::grid::Grid;
pub use crate::core::sequence::DnaSequence;
pub use crate::core::types::*;
pub use detection::classifier::{classify, classify_sequence, find_run, Classification};
pub use store::records::{DnaStats, HumanRecord, RecordStore};
pub use utils::validation::{validate_dna, DnaError};
