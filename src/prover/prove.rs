//! Proving the satisfiability of Groth-Sahai equations over bilinear groups.
//!
//! A proof for an equation of the SXDH instantiation consists of two values:
//!
//! - `pi`: one or two elements of `B2` proving about the `G2`/`Zr` side of
//!   the equation, and
//! - `theta`: one or two elements of `B1` proving about the `G1`/`Zr` side.
//!
//! Whether a component is a fat 2x1 column or a single flat 2x1 matrix is
//! fixed per equation family ([`ProofPart`] carries the distinction); the
//! linear shapes drop one component entirely. Producing a proof is a
//! choreography of scalar matrix products against the lifted constants and
//! witnesses, masked by fresh proof randomness `T`.
//!
//! See the [`statement`](crate::statement) module for the structure of the
//! equations being proven about.

use ark_ec::pairing::Pairing;
use ark_std::rand::Rng;

use super::commit::{
    commit_g1, commit_g2, commit_scalar_to_b1, commit_scalar_to_b2, Commitment1, Commitment2,
};
use crate::data_structures::{
    batch_linear_map, batch_scalar_linear_map, FatMatrix, GroupId, Matrix,
};
use crate::errors::{GsError, GsResult};
use crate::generator::CRS;
use crate::statement::{
    Equ, EquType, LinearG1, LinearG2, LinearQuad, LinearScalarG1, LinearScalarG2, MSMEG1, MSMEG2,
    QuadEqu, PPE,
};

/// One side of a proof: a fat 2x1 column of commitment-module vectors, a
/// single flat 2x1 matrix, or nothing (linear shapes).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProofPart<E: Pairing> {
    Fat(FatMatrix<E>),
    Flat(Matrix<E>),
    Absent,
}

impl<E: Pairing> ProofPart<E> {
    /// The fat component, or [`GsError::InvalidProof`] if this side has a
    /// different type for the equation family at hand.
    pub fn fat(&self) -> GsResult<&FatMatrix<E>> {
        match self {
            ProofPart::Fat(m) => Ok(m),
            _ => Err(GsError::InvalidProof(
                "expected a fat proof component".into(),
            )),
        }
    }

    /// The flat component, or [`GsError::InvalidProof`].
    pub fn flat(&self) -> GsResult<&Matrix<E>> {
        match self {
            ProofPart::Flat(m) => Ok(m),
            _ => Err(GsError::InvalidProof(
                "expected a flat proof component".into(),
            )),
        }
    }
}

/// A witness-indistinguishable proof for a single equation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EquProof<E: Pairing> {
    pub pi: ProofPart<E>,
    pub theta: ProofPart<E>,
    pub equ_type: EquType,
}

/// A collection of committed variables and proofs for Groth-Sahai compatible
/// bilinear equations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CProof<E: Pairing> {
    pub xcoms: Commitment1<E>,
    pub ycoms: Commitment2<E>,
    pub equ_proofs: Vec<EquProof<E>>,
}

/// Prover functionality for the four equation families.
pub trait Provable<E: Pairing> {
    /// Commits to the witness variables and then proves the equation.
    fn commit_and_prove<CR>(
        &self,
        xvars: &Matrix<E>,
        yvars: &Matrix<E>,
        crs: &CRS<E>,
        rng: &mut CR,
    ) -> GsResult<CProof<E>>
    where
        CR: Rng;

    /// Produces a proof `(pi, theta)` that the already-committed variables
    /// satisfy this equation.
    fn prove<CR>(
        &self,
        xvars: &Matrix<E>,
        yvars: &Matrix<E>,
        xcoms: &Commitment1<E>,
        ycoms: &Commitment2<E>,
        crs: &CRS<E>,
        rng: &mut CR,
    ) -> GsResult<EquProof<E>>
    where
        CR: Rng;
}

impl<E: Pairing> Provable<E> for PPE<E> {
    fn commit_and_prove<CR>(
        &self,
        xvars: &Matrix<E>,
        yvars: &Matrix<E>,
        crs: &CRS<E>,
        rng: &mut CR,
    ) -> GsResult<CProof<E>>
    where
        CR: Rng,
    {
        let xcoms = commit_g1(xvars, None, crs, rng)?;
        let ycoms = commit_g2(yvars, None, crs, rng)?;
        let proof = self.prove(xvars, yvars, &xcoms, &ycoms, crs, rng)?;

        Ok(CProof {
            xcoms,
            ycoms,
            equ_proofs: vec![proof],
        })
    }

    fn prove<CR>(
        &self,
        xvars: &Matrix<E>,
        yvars: &Matrix<E>,
        xcoms: &Commitment1<E>,
        ycoms: &Commitment2<E>,
        crs: &CRS<E>,
        rng: &mut CR,
    ) -> GsResult<EquProof<E>>
    where
        CR: Rng,
    {
        let is_parallel = true;

        // (2 x n) scalar matrix R^T, in GS parlance
        let x_rand_trans = xcoms.rand.transpose();
        // (2 x m) scalar matrix S^T, in GS parlance
        let y_rand_trans = ycoms.rand.transpose();
        // (2 x 2) scalar matrix T, in GS parlance
        let pf_rand = Matrix::rand(rng, 2, 2, GroupId::Zr);

        // (2 x 1) B2 column R^T iota_2(B)
        let x_rand_lin_b =
            x_rand_trans.mul_fat(&batch_linear_map(&self.b_consts)?, is_parallel)?;

        // (2 x m) scalar matrix R^T Gamma
        let x_rand_stmt = x_rand_trans.mul(&self.gamma, is_parallel)?;
        // (2 x 1) B2 column (R^T Gamma) iota_2(Y)
        let x_rand_stmt_lin_y = x_rand_stmt.mul_fat(&batch_linear_map(yvars)?, is_parallel)?;

        // (2 x 2) scalar matrix R^T Gamma S - T^T
        let pf_rand_stmt = x_rand_stmt
            .mul(&ycoms.rand, is_parallel)?
            .sub(&pf_rand.transpose())?;
        // (2 x 1) B2 column (R^T Gamma S - T^T) v
        let pf_rand_stmt_com2 = pf_rand_stmt.mul_fat(&crs.v(), is_parallel)?;

        let pi = x_rand_lin_b
            .add(&x_rand_stmt_lin_y)?
            .add(&pf_rand_stmt_com2)?;

        // (2 x 1) B1 column S^T iota_1(A)
        let y_rand_lin_a =
            y_rand_trans.mul_fat(&batch_linear_map(&self.a_consts)?, is_parallel)?;

        // (2 x n) scalar matrix S^T Gamma^T
        let y_rand_stmt = y_rand_trans.mul(&self.gamma.transpose(), is_parallel)?;
        // (2 x 1) B1 column (S^T Gamma^T) iota_1(X)
        let y_rand_stmt_lin_x = y_rand_stmt.mul_fat(&batch_linear_map(xvars)?, is_parallel)?;

        // (2 x 1) B1 column T u
        let pf_rand_com1 = pf_rand.mul_fat(&crs.u(), is_parallel)?;

        let theta = y_rand_lin_a
            .add(&y_rand_stmt_lin_x)?
            .add(&pf_rand_com1)?;

        Ok(EquProof {
            pi: ProofPart::Fat(pi),
            theta: ProofPart::Fat(theta),
            equ_type: self.get_type(),
        })
    }
}

impl<E: Pairing> Provable<E> for MSMEG1<E> {
    fn commit_and_prove<CR>(
        &self,
        xvars: &Matrix<E>,
        scalar_yvars: &Matrix<E>,
        crs: &CRS<E>,
        rng: &mut CR,
    ) -> GsResult<CProof<E>>
    where
        CR: Rng,
    {
        let xcoms = commit_g1(xvars, None, crs, rng)?;
        let scalar_ycoms = commit_scalar_to_b2(scalar_yvars, None, crs, rng)?;
        let proof = self.prove(xvars, scalar_yvars, &xcoms, &scalar_ycoms, crs, rng)?;

        Ok(CProof {
            xcoms,
            ycoms: scalar_ycoms,
            equ_proofs: vec![proof],
        })
    }

    fn prove<CR>(
        &self,
        xvars: &Matrix<E>,
        scalar_yvars: &Matrix<E>,
        xcoms: &Commitment1<E>,
        scalar_ycoms: &Commitment2<E>,
        crs: &CRS<E>,
        rng: &mut CR,
    ) -> GsResult<EquProof<E>>
    where
        CR: Rng,
    {
        let is_parallel = true;

        // (2 x n) scalar matrix R^T
        let x_rand_trans = xcoms.rand.transpose();
        // (1 x m) scalar matrix s^T
        let y_rand_trans = scalar_ycoms.rand.transpose();
        // (1 x 2) scalar matrix T
        let pf_rand = Matrix::rand(rng, 1, 2, GroupId::Zr);

        // (2 x 1) B2 column R^T iota'_2(b)
        let x_rand_lin_b = x_rand_trans.mul_fat(
            &batch_scalar_linear_map(GroupId::G2, &self.b_consts, crs)?,
            is_parallel,
        )?;

        // (2 x m) scalar matrix R^T Gamma
        let x_rand_stmt = x_rand_trans.mul(&self.gamma, is_parallel)?;
        // (2 x 1) B2 column (R^T Gamma) iota'_2(y)
        let x_rand_stmt_lin_y = x_rand_stmt.mul_fat(
            &batch_scalar_linear_map(GroupId::G2, scalar_yvars, crs)?,
            is_parallel,
        )?;

        // (2 x 1) scalar matrix R^T Gamma s - T^T
        let pf_rand_stmt = x_rand_stmt
            .mul(&scalar_ycoms.rand, is_parallel)?
            .sub(&pf_rand.transpose())?;
        // (2 x 1) B2 column (R^T Gamma s - T^T) v_1
        let pf_rand_stmt_com2 = pf_rand_stmt.mul_fat(&crs.v1_fat(), is_parallel)?;

        let pi = x_rand_lin_b
            .add(&x_rand_stmt_lin_y)?
            .add(&pf_rand_stmt_com2)?;

        // (1 x 1) B1 cell s^T iota_1(A)
        let y_rand_lin_a =
            y_rand_trans.mul_fat(&batch_linear_map(&self.a_consts)?, is_parallel)?;

        // (1 x n) scalar matrix s^T Gamma^T
        let y_rand_stmt = y_rand_trans.mul(&self.gamma.transpose(), is_parallel)?;
        // (1 x 1) B1 cell (s^T Gamma^T) iota_1(X)
        let y_rand_stmt_lin_x = y_rand_stmt.mul_fat(&batch_linear_map(xvars)?, is_parallel)?;

        // (1 x 1) B1 cell T u
        let pf_rand_com1 = pf_rand.mul_fat(&crs.u(), is_parallel)?;

        let theta = y_rand_lin_a
            .add(&y_rand_stmt_lin_x)?
            .add(&pf_rand_com1)?
            .flatten()?;

        Ok(EquProof {
            pi: ProofPart::Fat(pi),
            theta: ProofPart::Flat(theta),
            equ_type: self.get_type(),
        })
    }
}

impl<E: Pairing> Provable<E> for MSMEG2<E> {
    fn commit_and_prove<CR>(
        &self,
        scalar_xvars: &Matrix<E>,
        yvars: &Matrix<E>,
        crs: &CRS<E>,
        rng: &mut CR,
    ) -> GsResult<CProof<E>>
    where
        CR: Rng,
    {
        let scalar_xcoms = commit_scalar_to_b1(scalar_xvars, None, crs, rng)?;
        let ycoms = commit_g2(yvars, None, crs, rng)?;
        let proof = self.prove(scalar_xvars, yvars, &scalar_xcoms, &ycoms, crs, rng)?;

        Ok(CProof {
            xcoms: scalar_xcoms,
            ycoms,
            equ_proofs: vec![proof],
        })
    }

    fn prove<CR>(
        &self,
        scalar_xvars: &Matrix<E>,
        yvars: &Matrix<E>,
        scalar_xcoms: &Commitment1<E>,
        ycoms: &Commitment2<E>,
        crs: &CRS<E>,
        rng: &mut CR,
    ) -> GsResult<EquProof<E>>
    where
        CR: Rng,
    {
        let is_parallel = true;

        // (1 x n) scalar matrix r^T
        let x_rand_trans = scalar_xcoms.rand.transpose();
        // (2 x m) scalar matrix S^T
        let y_rand_trans = ycoms.rand.transpose();
        // (2 x 1) scalar matrix T
        let pf_rand = Matrix::rand(rng, 2, 1, GroupId::Zr);

        // (1 x 1) B2 cell r^T iota_2(B)
        let x_rand_lin_b =
            x_rand_trans.mul_fat(&batch_linear_map(&self.b_consts)?, is_parallel)?;

        // (1 x m) scalar matrix r^T Gamma
        let x_rand_stmt = x_rand_trans.mul(&self.gamma, is_parallel)?;
        // (1 x 1) B2 cell (r^T Gamma) iota_2(Y)
        let x_rand_stmt_lin_y = x_rand_stmt.mul_fat(&batch_linear_map(yvars)?, is_parallel)?;

        // (1 x 2) scalar matrix r^T Gamma S - T^T
        let pf_rand_stmt = x_rand_stmt
            .mul(&ycoms.rand, is_parallel)?
            .sub(&pf_rand.transpose())?;
        // (1 x 1) B2 cell (r^T Gamma S - T^T) v
        let pf_rand_stmt_com2 = pf_rand_stmt.mul_fat(&crs.v(), is_parallel)?;

        let pi = x_rand_lin_b
            .add(&x_rand_stmt_lin_y)?
            .add(&pf_rand_stmt_com2)?
            .flatten()?;

        // (2 x 1) B1 column S^T iota'_1(a)
        let y_rand_lin_a = y_rand_trans.mul_fat(
            &batch_scalar_linear_map(GroupId::G1, &self.a_consts, crs)?,
            is_parallel,
        )?;

        // (2 x n) scalar matrix S^T Gamma^T
        let y_rand_stmt = y_rand_trans.mul(&self.gamma.transpose(), is_parallel)?;
        // (2 x 1) B1 column (S^T Gamma^T) iota'_1(x)
        let y_rand_stmt_lin_x = y_rand_stmt.mul_fat(
            &batch_scalar_linear_map(GroupId::G1, scalar_xvars, crs)?,
            is_parallel,
        )?;

        // (2 x 1) B1 column T u_1
        let pf_rand_com1 = pf_rand.mul_fat(&crs.u1_fat(), is_parallel)?;

        let theta = y_rand_lin_a
            .add(&y_rand_stmt_lin_x)?
            .add(&pf_rand_com1)?;

        Ok(EquProof {
            pi: ProofPart::Flat(pi),
            theta: ProofPart::Fat(theta),
            equ_type: self.get_type(),
        })
    }
}

impl<E: Pairing> Provable<E> for QuadEqu<E> {
    fn commit_and_prove<CR>(
        &self,
        scalar_xvars: &Matrix<E>,
        scalar_yvars: &Matrix<E>,
        crs: &CRS<E>,
        rng: &mut CR,
    ) -> GsResult<CProof<E>>
    where
        CR: Rng,
    {
        let scalar_xcoms = commit_scalar_to_b1(scalar_xvars, None, crs, rng)?;
        let scalar_ycoms = commit_scalar_to_b2(scalar_yvars, None, crs, rng)?;
        let proof = self.prove(
            scalar_xvars,
            scalar_yvars,
            &scalar_xcoms,
            &scalar_ycoms,
            crs,
            rng,
        )?;

        Ok(CProof {
            xcoms: scalar_xcoms,
            ycoms: scalar_ycoms,
            equ_proofs: vec![proof],
        })
    }

    fn prove<CR>(
        &self,
        scalar_xvars: &Matrix<E>,
        scalar_yvars: &Matrix<E>,
        scalar_xcoms: &Commitment1<E>,
        scalar_ycoms: &Commitment2<E>,
        crs: &CRS<E>,
        rng: &mut CR,
    ) -> GsResult<EquProof<E>>
    where
        CR: Rng,
    {
        let is_parallel = true;

        // (1 x n) scalar matrix r^T
        let x_rand_trans = scalar_xcoms.rand.transpose();
        // (1 x m) scalar matrix s^T
        let y_rand_trans = scalar_ycoms.rand.transpose();
        // scalar T as a 1x1 matrix
        let pf_rand = Matrix::rand(rng, 1, 1, GroupId::Zr);

        // 2x1 G2 matrix r^T iota'_2(b)
        let x_rand_lin_b = x_rand_trans
            .mul_fat(
                &batch_scalar_linear_map(GroupId::G2, &self.b_consts, crs)?,
                is_parallel,
            )?
            .flatten()?;

        // (1 x m) scalar matrix r^T Gamma
        let x_rand_stmt = x_rand_trans.mul(&self.gamma, is_parallel)?;
        // 2x1 G2 matrix (r^T Gamma) iota'_2(y)
        let x_rand_stmt_lin_y = x_rand_stmt
            .mul_fat(
                &batch_scalar_linear_map(GroupId::G2, scalar_yvars, crs)?,
                is_parallel,
            )?
            .flatten()?;

        // scalar r^T Gamma s - T
        let pf_rand_stmt = x_rand_stmt
            .mul(&scalar_ycoms.rand, is_parallel)?
            .flatten()?
            .sub(&pf_rand.flatten()?)?;
        // 2x1 G2 matrix v_1 (r^T Gamma s - T)
        let pf_rand_stmt_com2 = crs.v1.scalar_mul(&pf_rand_stmt)?;

        let pi = x_rand_lin_b
            .add(&x_rand_stmt_lin_y)?
            .add(&pf_rand_stmt_com2)?;

        // 2x1 G1 matrix s^T iota'_1(a)
        let y_rand_lin_a = y_rand_trans
            .mul_fat(
                &batch_scalar_linear_map(GroupId::G1, &self.a_consts, crs)?,
                is_parallel,
            )?
            .flatten()?;

        // 2x1 G1 matrix (s^T Gamma^T) iota'_1(x)
        let y_rand_stmt_lin_x = y_rand_trans
            .mul(&self.gamma.transpose(), is_parallel)?
            .mul_fat(
                &batch_scalar_linear_map(GroupId::G1, scalar_xvars, crs)?,
                is_parallel,
            )?
            .flatten()?;

        // 2x1 G1 matrix u_1 T
        let pf_rand_com1 = crs.u1.scalar_mul(&pf_rand.flatten()?)?;

        let theta = y_rand_lin_a
            .add(&y_rand_stmt_lin_x)?
            .add(&pf_rand_com1)?;

        Ok(EquProof {
            pi: ProofPart::Flat(pi),
            theta: ProofPart::Flat(theta),
            equ_type: self.get_type(),
        })
    }
}

impl<E: Pairing> LinearG1<E> {
    /// Proves `sum b_i * X_i = T` for committed `G1` variables:
    /// `pi = R^T iota'_2(b)`, no theta.
    pub fn prove(&self, xcoms: &Commitment1<E>, crs: &CRS<E>) -> GsResult<EquProof<E>> {
        let pi = xcoms.rand.transpose().mul_fat(
            &batch_scalar_linear_map(GroupId::G2, &self.b_consts, crs)?,
            true,
        )?;

        Ok(EquProof {
            pi: ProofPart::Fat(pi),
            theta: ProofPart::Absent,
            equ_type: self.get_type(),
        })
    }
}

impl<E: Pairing> LinearScalarG1<E> {
    /// Proves `sum y_i * A_i = T` for scalar variables committed to `B2`:
    /// `theta = flatten(s^T iota_1(A))`, no pi.
    pub fn prove(&self, ycoms: &Commitment2<E>) -> GsResult<EquProof<E>> {
        let theta = ycoms
            .rand
            .transpose()
            .mul_fat(&batch_linear_map(&self.a_consts)?, true)?
            .flatten()?;

        Ok(EquProof {
            pi: ProofPart::Absent,
            theta: ProofPart::Flat(theta),
            equ_type: self.get_type(),
        })
    }
}

impl<E: Pairing> LinearG2<E> {
    /// Proves `sum a_i * Y_i = T` for committed `G2` variables:
    /// `theta = S^T iota'_1(a)`, no pi.
    pub fn prove(&self, ycoms: &Commitment2<E>, crs: &CRS<E>) -> GsResult<EquProof<E>> {
        let theta = ycoms.rand.transpose().mul_fat(
            &batch_scalar_linear_map(GroupId::G1, &self.a_consts, crs)?,
            true,
        )?;

        Ok(EquProof {
            pi: ProofPart::Absent,
            theta: ProofPart::Fat(theta),
            equ_type: self.get_type(),
        })
    }
}

impl<E: Pairing> LinearScalarG2<E> {
    /// Proves `sum x_i * B_i = T` for scalar variables committed to `B1`:
    /// `pi = flatten(r^T iota_2(B))`, no theta.
    pub fn prove(&self, xcoms: &Commitment1<E>) -> GsResult<EquProof<E>> {
        let pi = xcoms
            .rand
            .transpose()
            .mul_fat(&batch_linear_map(&self.b_consts)?, true)?
            .flatten()?;

        Ok(EquProof {
            pi: ProofPart::Flat(pi),
            theta: ProofPart::Absent,
            equ_type: self.get_type(),
        })
    }
}

impl<E: Pairing> LinearQuad<E> {
    /// Proves `sum a_i * y_i = t` for scalar variables committed to `B2`:
    /// `theta = flatten(s^T iota'_1(a))`, no pi.
    pub fn prove(&self, ycoms: &Commitment2<E>, crs: &CRS<E>) -> GsResult<EquProof<E>> {
        let theta = ycoms
            .rand
            .transpose()
            .mul_fat(
                &batch_scalar_linear_map(GroupId::G1, &self.a_consts, crs)?,
                true,
            )?
            .flatten()?;

        Ok(EquProof {
            pi: ProofPart::Absent,
            theta: ProofPart::Flat(theta),
            equ_type: self.get_type(),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use ark_bls12_381::Bls12_381 as F;
    use ark_ec::pairing::{Pairing, PairingOutput};
    use ark_std::{test_rng, UniformRand};

    use super::*;
    use crate::data_structures::Element;

    #[test]
    fn test_PPE_proof_type_and_shape() {
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);

        let xvars = Matrix::<F>::rand(&mut rng, 2, 1, GroupId::G1);
        let yvars = Matrix::<F>::rand(&mut rng, 1, 1, GroupId::G2);
        let xcoms = commit_g1(&xvars, None, &crs, &mut rng).unwrap();
        let ycoms = commit_g2(&yvars, None, &crs, &mut rng).unwrap();

        let equ = PPE::<F> {
            a_consts: Matrix::rand(&mut rng, 1, 1, GroupId::G1),
            b_consts: Matrix::rand(&mut rng, 2, 1, GroupId::G2),
            gamma: Matrix::rand(&mut rng, 2, 1, GroupId::Zr),
            target: Element::Gt(PairingOutput::<F>::rand(&mut rng)),
        };
        let proof = equ
            .prove(&xvars, &yvars, &xcoms, &ycoms, &crs, &mut rng)
            .unwrap();

        assert_eq!(proof.equ_type, EquType::PairingProduct);
        let pi = proof.pi.fat().unwrap();
        assert_eq!((pi.rows(), pi.cols()), (2, 1));
        assert_eq!((pi.inner_rows(), pi.inner_cols()), (2, 1));
        assert_eq!(pi.group(), GroupId::G2);
        let theta = proof.theta.fat().unwrap();
        assert_eq!((theta.rows(), theta.cols()), (2, 1));
        assert_eq!(theta.group(), GroupId::G1);
    }

    #[test]
    fn test_MSMEG1_proof_type_and_shape() {
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);

        let xvars = Matrix::<F>::rand(&mut rng, 2, 1, GroupId::G1);
        let yvars = Matrix::<F>::rand(&mut rng, 1, 1, GroupId::Zr);
        let xcoms = commit_g1(&xvars, None, &crs, &mut rng).unwrap();
        let ycoms = commit_scalar_to_b2(&yvars, None, &crs, &mut rng).unwrap();

        let equ = MSMEG1::<F> {
            a_consts: Matrix::rand(&mut rng, 1, 1, GroupId::G1),
            b_consts: Matrix::rand(&mut rng, 2, 1, GroupId::Zr),
            gamma: Matrix::rand(&mut rng, 2, 1, GroupId::Zr),
            target: Element::rand(&mut rng, GroupId::G1),
        };
        let proof = equ
            .prove(&xvars, &yvars, &xcoms, &ycoms, &crs, &mut rng)
            .unwrap();

        assert_eq!(proof.equ_type, EquType::MultiScalarG1);
        assert!(proof.pi.fat().is_ok());
        let theta = proof.theta.flat().unwrap();
        assert_eq!((theta.rows(), theta.cols()), (2, 1));
        assert_eq!(theta.group(), GroupId::G1);
        // Asking for the wrong component type is a typed error.
        assert!(matches!(
            proof.theta.fat(),
            Err(GsError::InvalidProof(_))
        ));
    }

    #[test]
    fn test_MSMEG2_proof_type_and_shape() {
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);

        let xvars = Matrix::<F>::rand(&mut rng, 2, 1, GroupId::Zr);
        let yvars = Matrix::<F>::rand(&mut rng, 1, 1, GroupId::G2);
        let xcoms = commit_scalar_to_b1(&xvars, None, &crs, &mut rng).unwrap();
        let ycoms = commit_g2(&yvars, None, &crs, &mut rng).unwrap();

        let equ = MSMEG2::<F> {
            a_consts: Matrix::rand(&mut rng, 1, 1, GroupId::Zr),
            b_consts: Matrix::rand(&mut rng, 2, 1, GroupId::G2),
            gamma: Matrix::rand(&mut rng, 2, 1, GroupId::Zr),
            target: Element::rand(&mut rng, GroupId::G2),
        };
        let proof = equ
            .prove(&xvars, &yvars, &xcoms, &ycoms, &crs, &mut rng)
            .unwrap();

        assert_eq!(proof.equ_type, EquType::MultiScalarG2);
        let pi = proof.pi.flat().unwrap();
        assert_eq!((pi.rows(), pi.cols()), (2, 1));
        assert_eq!(pi.group(), GroupId::G2);
        assert!(proof.theta.fat().is_ok());
    }

    #[test]
    fn test_quadratic_proof_type_and_shape() {
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);

        let xvars = Matrix::<F>::rand(&mut rng, 2, 1, GroupId::Zr);
        let yvars = Matrix::<F>::rand(&mut rng, 1, 1, GroupId::Zr);

        let equ = QuadEqu::<F> {
            a_consts: Matrix::rand(&mut rng, 1, 1, GroupId::Zr),
            b_consts: Matrix::rand(&mut rng, 2, 1, GroupId::Zr),
            gamma: Matrix::rand(&mut rng, 2, 1, GroupId::Zr),
            target: Element::rand(&mut rng, GroupId::Zr),
        };
        let cproof = equ
            .commit_and_prove(&xvars, &yvars, &crs, &mut rng)
            .unwrap();

        assert_eq!(cproof.equ_proofs.len(), 1);
        assert_eq!(cproof.equ_proofs[0].equ_type, EquType::Quadratic);
        assert!(cproof.equ_proofs[0].pi.flat().is_ok());
        assert!(cproof.equ_proofs[0].theta.flat().is_ok());
    }

    #[test]
    fn test_linear_proofs_drop_a_component() {
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);

        let xvars = Matrix::<F>::rand(&mut rng, 2, 1, GroupId::G1);
        let xcoms = commit_g1(&xvars, None, &crs, &mut rng).unwrap();
        let equ = LinearG1::<F> {
            b_consts: Matrix::rand(&mut rng, 2, 1, GroupId::Zr),
            target: Element::rand(&mut rng, GroupId::G1),
        };
        let proof = equ.prove(&xcoms, &crs).unwrap();
        assert!(proof.pi.fat().is_ok());
        assert_eq!(proof.theta, ProofPart::Absent);

        let yvars = Matrix::<F>::rand(&mut rng, 2, 1, GroupId::Zr);
        let ycoms = commit_scalar_to_b2(&yvars, None, &crs, &mut rng).unwrap();
        let equ = LinearQuad::<F> {
            a_consts: Matrix::rand(&mut rng, 2, 1, GroupId::Zr),
            target: Element::rand(&mut rng, GroupId::Zr),
        };
        let proof = equ.prove(&ycoms, &crs).unwrap();
        assert_eq!(proof.pi, ProofPart::Absent);
        assert!(proof.theta.flat().is_ok());
    }
}

/*
 * NOTE:
 *
 * Proof verification tests are considered integration tests for the
 * Groth-Sahai proof system. See tests/prover.rs for more details.
 */
