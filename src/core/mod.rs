//! Core data types for DNA classification.
//!
//! - [`DnaSequence`](sequence::DnaSequence): validated, uppercase, square rows
//! - [`Grid`](grid::Grid): forward and mirrored N x N views of a sequence
//! - [`Base`](types::Base), [`Orientation`](types::Orientation): alphabet and scan directions
//!
//! ## Grid orientations
//!
//! ```text
//! forward      mirrored
//! A C T A      A T C A
//! T G A C      C A G T
//! G A C T      T C A G
//! A T G A      A G T A
//! ```
//!
//! A down-right diagonal of the mirrored grid is a down-left diagonal of the
//! forward grid, so one diagonal walk serves both directions.

pub mod grid;
pub mod sequence;
pub mod types;
