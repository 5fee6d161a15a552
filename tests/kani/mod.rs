//! Kani proof harnesses
//!
//! - `edge_case_proofs.rs`: empty, single-element and last-slot cases
//! - `invariant_proofs.rs`: heap order after bounded operation sequences
//!
//! To run these proofs:
//!   cargo kani

#[cfg(kani)]
#[path = "edge_case_proofs.rs"]
mod edge_case_proofs;
#[cfg(kani)]
#[path = "invariant_proofs.rs"]
mod invariant_proofs;
