//! depsort benchmarking suite
//!
//! Benchmarks for topological ordering and cycle detection over generated
//! service graphs.

pub mod common;

pub use common::*;
