//! Core data types for depsort.
//!
//! This module provides the fundamental types used throughout the workspace:
//! - Service entities and their declared dependencies
//! - Ordering options shared by the graph and the configuration layer

pub mod service;
pub mod tie_break;

// Re-export all public types
pub use service::Service;
pub use tie_break::TieBreak;
