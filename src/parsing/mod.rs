//! Decoding of DNA submissions.
//!
//! Both the web server and the `check --input` command accept the same JSON
//! document:
//!
//! ```text
//! {"dna": ["ATGCGA", "CAGTGC", "TTATGT", "AGAAGG", "CCCCTA", "TCACTG"]}
//! ```
//!
//! The field name is matched without regard to case.

pub mod request;
