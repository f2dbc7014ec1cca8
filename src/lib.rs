//! Groth-Sahai non-interactive proofs for the SXDH instantiation.
//!
//! A prover publishes perfectly binding commitments to secret witnesses drawn
//! from the groups `G1`, `G2` and the scalar field `Zr` of an asymmetric
//! pairing, then produces compact proofs that the witnesses satisfy one of
//! four bilinear equation shapes (pairing-product, multi-scalar
//! multiplication in either source group, or quadratic in `Zr`) or one of
//! their linear sub-cases. A verifier checks a proof using only the common
//! reference string, the public constants of the equation, the commitments
//! and the proof itself.
//!
//! The pairing primitive is external: everything is generic over
//! [`ark_ec::pairing::Pairing`].

pub mod data_structures;
pub mod errors;
pub mod generator;
pub mod prover;
pub mod statement;
pub mod verifier;

pub use data_structures::{Element, FatMatrix, GroupId, Matrix};
pub use errors::{GsError, GsResult};
pub use generator::CRS;
