//! Storage of classification results and aggregate statistics.
//!
//! Each classified DNA is stored as a [`HumanRecord`](records::HumanRecord)
//! keyed by its fingerprint. The store lives in memory and can be mirrored to
//! a JSON file so results survive restarts:
//!
//! ```text
//! {
//!   "version": "1.0.0",
//!   "updated_at": "2026-01-01T00:00:00+00:00",
//!   "records": [{"id": "5d41402abc4b2a76b9719d911017c592", "is_mutant": true}]
//! }
//! ```
//!
//! ## Example
//!
//! ```
//! use mutant_finder::store::records::{HumanRecord, RecordStore};
//!
//! let store = RecordStore::in_memory();
//! store.save(HumanRecord { id: "a".into(), is_mutant: true }).unwrap();
//! store.save(HumanRecord { id: "b".into(), is_mutant: false }).unwrap();
//!
//! let stats = store.stats();
//! assert_eq!(stats.count_mutant_dna, 1);
//! assert_eq!(stats.count_human_dna, 2);
//! assert_eq!(stats.ratio, 2.0);
//! ```

pub mod records;
