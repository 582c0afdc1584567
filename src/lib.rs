//! Deterministic container membership benchmarking engine.
//!
//! `probe-core` builds four parallel representations of the same key→value
//! mapping — linear scan, hash-indexed, persistent, and sorted — and times a
//! standardized membership workload against each. All operations are
//! deterministic: identical inputs always produce identical container
//! contents and identical probe outcomes, byte-for-byte. Elapsed times are
//! observational and never affect correctness.

pub mod containers;
pub mod domain;
pub mod harness;
pub mod probing;
pub mod types;
