//! Domain model for analyzed text sources.
//!
//! # Responsibility
//! - Define the canonical data structures used by statistics logic.
//! - Keep one immutable document shape for every analysis pass.
//!
//! # Invariants
//! - A `Document` never changes after construction.
//! - Word projections are derived on demand, never stored.

pub mod document;
