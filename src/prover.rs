//! Committing to witnesses and proving the satisfiability of Groth-Sahai
//! equations over bilinear groups.

pub mod commit;
pub mod prove;

pub use commit::{
    commit_g1, commit_g2, commit_scalar_to_b1, commit_scalar_to_b2, Commitment1, Commitment2,
};
pub use prove::{CProof, EquProof, ProofPart, Provable};
