//! Verifying the satisfiability of Groth-Sahai equations over bilinear groups.
//!
//! Each verifier recomputes the equation's left-hand side by evaluating the
//! bilinear form [`FatMatrix::pairing_sum`](crate::data_structures::FatMatrix::pairing_sum)
//! on the commitments and lifted constants, and the right-hand side from the
//! target embedding plus the proof terms `u * pi` and `theta * v`. The two
//! sides are 2x2 `GT` grids; verification succeeds exactly when they agree.
//!
//! Malformed inputs (wrong shapes or domains in the equation itself, or a
//! proof component of the wrong type for the family) surface as typed errors;
//! an unsatisfied equation or a forged proof yields `Ok(false)`.
//!
//! See the [`prover`](crate::prover) and [`statement`](crate::statement)
//! modules for the structure of the equations and their proofs.

use ark_ec::pairing::Pairing;

use crate::data_structures::{
    batch_linear_map, batch_scalar_linear_map, linear_map_msmeg1, linear_map_msmeg2,
    linear_map_ppe, linear_map_quad, GroupId,
};
use crate::errors::{GsError, GsResult};
use crate::generator::CRS;
use crate::prover::commit::{Commitment1, Commitment2};
use crate::prover::prove::{CProof, EquProof};
use crate::statement::{
    Equ, LinearG1, LinearG2, LinearQuad, LinearScalarG1, LinearScalarG2, MSMEG1, MSMEG2, QuadEqu,
    PPE,
};

/// Verifier functionality for the four equation families.
pub trait Verifiable<E: Pairing> {
    /// Verifies that a single Groth-Sahai equation is satisfied by the
    /// prover's committed variables.
    fn verify(&self, com_proof: &CProof<E>, crs: &CRS<E>) -> GsResult<bool>;
}

fn single_proof<'a, E: Pairing>(
    com_proof: &'a CProof<E>,
    equ: &impl Equ,
) -> GsResult<&'a EquProof<E>> {
    if com_proof.equ_proofs.len() != 1 {
        return Err(GsError::InvalidProof(format!(
            "expected exactly one equation proof, got {}",
            com_proof.equ_proofs.len()
        )));
    }
    let proof = &com_proof.equ_proofs[0];
    if proof.equ_type != equ.get_type() {
        return Err(GsError::InvalidProof(format!(
            "proof was produced for {:?}, equation is {:?}",
            proof.equ_type,
            equ.get_type()
        )));
    }
    Ok(proof)
}

impl<E: Pairing> Verifiable<E> for PPE<E> {
    fn verify(&self, com_proof: &CProof<E>, crs: &CRS<E>) -> GsResult<bool> {
        let proof = single_proof(com_proof, self)?;
        let is_parallel = true;

        let lin_a_com_y =
            batch_linear_map(&self.a_consts)?.pairing_sum(&com_proof.ycoms.coms)?;

        let com_x_lin_b = com_proof
            .xcoms
            .coms
            .pairing_sum(&batch_linear_map(&self.b_consts)?)?;

        let stmt_com_y = self.gamma.mul_fat(&com_proof.ycoms.coms, is_parallel)?;
        let com_x_stmt_com_y = com_proof.xcoms.coms.pairing_sum(&stmt_com_y)?;

        let lin_t = linear_map_ppe(&self.target)?;

        let com1_pf2 = crs.u().pairing_sum(proof.pi.fat()?)?;

        let pf1_com2 = proof.theta.fat()?.pairing_sum(&crs.v())?;

        let lhs = lin_a_com_y.add(&com_x_lin_b)?.add(&com_x_stmt_com_y)?;
        let rhs = lin_t.add(&com1_pf2)?.add(&pf1_com2)?;

        Ok(lhs == rhs)
    }
}

impl<E: Pairing> Verifiable<E> for MSMEG1<E> {
    fn verify(&self, com_proof: &CProof<E>, crs: &CRS<E>) -> GsResult<bool> {
        let proof = single_proof(com_proof, self)?;
        let is_parallel = true;

        let lin_a_com_y =
            batch_linear_map(&self.a_consts)?.pairing_sum(&com_proof.ycoms.coms)?;

        let com_x_lin_b = com_proof
            .xcoms
            .coms
            .pairing_sum(&batch_scalar_linear_map(GroupId::G2, &self.b_consts, crs)?)?;

        let stmt_com_y = self.gamma.mul_fat(&com_proof.ycoms.coms, is_parallel)?;
        let com_x_stmt_com_y = com_proof.xcoms.coms.pairing_sum(&stmt_com_y)?;

        let lin_t = linear_map_msmeg1(&self.target, crs)?;

        let com1_pf2 = crs.u().pairing_sum(proof.pi.fat()?)?;

        let pf1_com2 = proof.theta.flat()?.pairing(&crs.v1)?;

        let lhs = lin_a_com_y.add(&com_x_lin_b)?.add(&com_x_stmt_com_y)?;
        let rhs = lin_t.add(&com1_pf2)?.add(&pf1_com2)?;

        Ok(lhs == rhs)
    }
}

impl<E: Pairing> Verifiable<E> for MSMEG2<E> {
    fn verify(&self, com_proof: &CProof<E>, crs: &CRS<E>) -> GsResult<bool> {
        let proof = single_proof(com_proof, self)?;
        let is_parallel = true;

        let lin_a_com_y = batch_scalar_linear_map(GroupId::G1, &self.a_consts, crs)?
            .pairing_sum(&com_proof.ycoms.coms)?;

        let com_x_lin_b = com_proof
            .xcoms
            .coms
            .pairing_sum(&batch_linear_map(&self.b_consts)?)?;

        let stmt_com_y = self.gamma.mul_fat(&com_proof.ycoms.coms, is_parallel)?;
        let com_x_stmt_com_y = com_proof.xcoms.coms.pairing_sum(&stmt_com_y)?;

        let lin_t = linear_map_msmeg2(&self.target, crs)?;

        let com1_pf2 = crs.u1.pairing(proof.pi.flat()?)?;

        let pf1_com2 = proof.theta.fat()?.pairing_sum(&crs.v())?;

        let lhs = lin_a_com_y.add(&com_x_lin_b)?.add(&com_x_stmt_com_y)?;
        let rhs = lin_t.add(&com1_pf2)?.add(&pf1_com2)?;

        Ok(lhs == rhs)
    }
}

impl<E: Pairing> Verifiable<E> for QuadEqu<E> {
    fn verify(&self, com_proof: &CProof<E>, crs: &CRS<E>) -> GsResult<bool> {
        let proof = single_proof(com_proof, self)?;
        let is_parallel = true;

        let lin_a_com_y = batch_scalar_linear_map(GroupId::G1, &self.a_consts, crs)?
            .pairing_sum(&com_proof.ycoms.coms)?;

        let com_x_lin_b = com_proof
            .xcoms
            .coms
            .pairing_sum(&batch_scalar_linear_map(GroupId::G2, &self.b_consts, crs)?)?;

        let stmt_com_y = self.gamma.mul_fat(&com_proof.ycoms.coms, is_parallel)?;
        let com_x_stmt_com_y = com_proof.xcoms.coms.pairing_sum(&stmt_com_y)?;

        let lin_t = linear_map_quad(&self.target, crs)?;

        let com1_pf2 = crs.u1.pairing(proof.pi.flat()?)?;

        let pf1_com2 = proof.theta.flat()?.pairing(&crs.v1)?;

        let lhs = lin_a_com_y.add(&com_x_lin_b)?.add(&com_x_stmt_com_y)?;
        let rhs = lin_t.add(&com1_pf2)?.add(&pf1_com2)?;

        Ok(lhs == rhs)
    }
}

impl<E: Pairing> LinearG1<E> {
    /// Verifies `sum b_i * X_i = T` against commitments to the `G1` variables:
    /// `c * iota'_2(b) == iota_T(T) + u * pi`.
    pub fn verify(
        &self,
        proof: &EquProof<E>,
        xcoms: &Commitment1<E>,
        crs: &CRS<E>,
    ) -> GsResult<bool> {
        let lhs = xcoms
            .coms
            .pairing_sum(&batch_scalar_linear_map(GroupId::G2, &self.b_consts, crs)?)?;
        let rhs = linear_map_msmeg1(&self.target, crs)?
            .add(&crs.u().pairing_sum(proof.pi.fat()?)?)?;
        Ok(lhs == rhs)
    }
}

impl<E: Pairing> LinearScalarG1<E> {
    /// Verifies `sum y_i * A_i = T` against scalar commitments on the `B2`
    /// side: `iota_1(A) * d' == iota_T(T) + F(theta, v_1)`.
    pub fn verify(
        &self,
        proof: &EquProof<E>,
        ycoms: &Commitment2<E>,
        crs: &CRS<E>,
    ) -> GsResult<bool> {
        let lhs = batch_linear_map(&self.a_consts)?.pairing_sum(&ycoms.coms)?;
        let rhs =
            linear_map_msmeg1(&self.target, crs)?.add(&proof.theta.flat()?.pairing(&crs.v1)?)?;
        Ok(lhs == rhs)
    }
}

impl<E: Pairing> LinearG2<E> {
    /// Verifies `sum a_i * Y_i = T` against commitments to the `G2` variables:
    /// `iota'_1(a) * d == iota_T(T) + theta * v`.
    pub fn verify(
        &self,
        proof: &EquProof<E>,
        ycoms: &Commitment2<E>,
        crs: &CRS<E>,
    ) -> GsResult<bool> {
        let lhs = batch_scalar_linear_map(GroupId::G1, &self.a_consts, crs)?
            .pairing_sum(&ycoms.coms)?;
        let rhs = linear_map_msmeg2(&self.target, crs)?
            .add(&proof.theta.fat()?.pairing_sum(&crs.v())?)?;
        Ok(lhs == rhs)
    }
}

impl<E: Pairing> LinearScalarG2<E> {
    /// Verifies `sum x_i * B_i = T` against scalar commitments on the `B1`
    /// side: `c' * iota_2(B) == iota_T(T) + F(u_1, pi)`.
    pub fn verify(
        &self,
        proof: &EquProof<E>,
        xcoms: &Commitment1<E>,
        crs: &CRS<E>,
    ) -> GsResult<bool> {
        let lhs = xcoms.coms.pairing_sum(&batch_linear_map(&self.b_consts)?)?;
        let rhs =
            linear_map_msmeg2(&self.target, crs)?.add(&crs.u1.pairing(proof.pi.flat()?)?)?;
        Ok(lhs == rhs)
    }
}

impl<E: Pairing> LinearQuad<E> {
    /// Verifies `sum a_i * y_i = t` against scalar commitments on the `B2`
    /// side: `iota'_1(a) * d' == iota_T(t) + F(theta, v_1)`.
    pub fn verify(
        &self,
        proof: &EquProof<E>,
        ycoms: &Commitment2<E>,
        crs: &CRS<E>,
    ) -> GsResult<bool> {
        let lhs = batch_scalar_linear_map(GroupId::G1, &self.a_consts, crs)?
            .pairing_sum(&ycoms.coms)?;
        let rhs =
            linear_map_quad(&self.target, crs)?.add(&proof.theta.flat()?.pairing(&crs.v1)?)?;
        Ok(lhs == rhs)
    }
}

/*
 * NOTE:
 *
 * Proof verification tests are considered integration tests for the
 * Groth-Sahai proof system. See tests/prover.rs for more details.
 */
