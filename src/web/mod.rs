//! HTTP service for DNA classification.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080 with an in-memory store
//! mutant-finder serve
//!
//! # Keep results across restarts
//! mutant-finder serve --store records.json
//!
//! # Bind to all interfaces
//! mutant-finder serve --address 0.0.0.0 --port 3000
//! ```
//!
//! ## API Endpoints
//!
//! - `POST /mutant` - Classify `{"dna": [...]}`; `200` for a mutant, `403` otherwise
//! - `GET /stats` - `{"count_mutant_dna", "count_human_dna", "ratio"}`, or `204` when empty
//! - `GET /health` - Liveness check

pub mod server;
