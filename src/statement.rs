//! The data structures that define Groth-Sahai statements.
//!
//! A statement is a bilinear equation with the abstract form
//! `(A * Y)(X * B)(X * Gamma Y) = t`, where:
//!
//! - `A` and `B` are column vectors of public constants,
//! - `X` and `Y` are column vectors of private variables (introduced on prove),
//! - `Gamma` is a matrix of public scalars defining how the paired variables
//!   are scalar-multiplied together,
//! - `t` is a public constant on the right-hand side, and
//! - `*` is the equipped pairing, applied entry-wise.
//!
//! Each equation is one of four families, defined over a bilinear group:
//!
//! 1) **Pairing-product equation** ([`PPE`]): `(G1, G2, GT)` with the bilinear
//!    map `e : G1 x G2 -> GT` as the equipped pairing.
//! 2) **Multi-scalar multiplication in G1** ([`MSMEG1`]): `(G1, Zr, G1)` with
//!    point-scalar multiplication as the equipped pairing.
//! 3) **Multi-scalar multiplication in G2** ([`MSMEG2`]): `(Zr, G2, G2)` with
//!    point-scalar multiplication as the equipped pairing.
//! 4) **Quadratic equation in Zr** ([`QuadEqu`]): `(Zr, Zr, Zr)` with field
//!    multiplication as the equipped pairing.
//!
//! Equations whose quadratic part vanishes have cheaper dedicated provers; the
//! five linear shapes ([`LinearG1`], [`LinearScalarG1`], [`LinearG2`],
//! [`LinearScalarG2`], [`LinearQuad`]) carry only the constants they use.
//!
//! **NOTE**: a bilinear equation may need re-arranging with the usual pairing
//! identities before it fits one of these shapes. This API does not provide
//! such functionality.

use ark_ec::pairing::Pairing;

use crate::data_structures::{Element, Matrix};

/// Groth-Sahai statement (i.e. bilinear equation) types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EquType {
    PairingProduct,
    MultiScalarG1,
    MultiScalarG2,
    Quadratic,
}

/// A marker for an arbitrary Groth-Sahai equation.
pub trait Equ {
    fn get_type(&self) -> EquType;
}

/// A pairing-product equation
/// `sum e(A_i, Y_i) + sum e(X_i, B_i) + sum e(X_i, Y_j)^Gamma_ij = t`.
///
/// `X` is an `n x 1` `G1` column, `Y` an `m x 1` `G2` column; `a_consts` is
/// `m x 1` over `G1`, `b_consts` `n x 1` over `G2`, `gamma` `n x m` over `Zr`
/// and `target` lives in `GT`.
pub struct PPE<E: Pairing> {
    pub a_consts: Matrix<E>,
    pub b_consts: Matrix<E>,
    pub gamma: Matrix<E>,
    pub target: Element<E>,
}

impl<E: Pairing> Equ for PPE<E> {
    #[inline(always)]
    fn get_type(&self) -> EquType {
        EquType::PairingProduct
    }
}

/// A multi-scalar multiplication equation in `G1`
/// `sum y_i * A_i + sum b_i * X_i + sum (y_j * X_i) * Gamma_ij = T`.
///
/// `X` is an `n x 1` `G1` column, `y` an `m x 1` `Zr` column; `a_consts` is
/// `m x 1` over `G1`, `b_consts` `n x 1` over `Zr`, `gamma` `n x m` and
/// `target` lives in `G1`.
pub struct MSMEG1<E: Pairing> {
    pub a_consts: Matrix<E>,
    pub b_consts: Matrix<E>,
    pub gamma: Matrix<E>,
    pub target: Element<E>,
}

impl<E: Pairing> Equ for MSMEG1<E> {
    #[inline(always)]
    fn get_type(&self) -> EquType {
        EquType::MultiScalarG1
    }
}

/// A multi-scalar multiplication equation in `G2`
/// `sum a_i * Y_i + sum x_i * B_i + sum (x_i * Y_j) * Gamma_ij = T`.
///
/// `x` is an `n x 1` `Zr` column, `Y` an `m x 1` `G2` column; `a_consts` is
/// `m x 1` over `Zr`, `b_consts` `n x 1` over `G2`, `gamma` `n x m` and
/// `target` lives in `G2`.
pub struct MSMEG2<E: Pairing> {
    pub a_consts: Matrix<E>,
    pub b_consts: Matrix<E>,
    pub gamma: Matrix<E>,
    pub target: Element<E>,
}

impl<E: Pairing> Equ for MSMEG2<E> {
    #[inline(always)]
    fn get_type(&self) -> EquType {
        EquType::MultiScalarG2
    }
}

/// A quadratic equation in the scalar field
/// `sum a_i * y_i + sum b_i * x_i + sum (x_i * y_j) * Gamma_ij = t`.
///
/// `x` is an `n x 1` `Zr` column, `y` an `m x 1` `Zr` column; `a_consts` is
/// `m x 1`, `b_consts` `n x 1`, `gamma` `n x m` and `target` all live in `Zr`.
pub struct QuadEqu<E: Pairing> {
    pub a_consts: Matrix<E>,
    pub b_consts: Matrix<E>,
    pub gamma: Matrix<E>,
    pub target: Element<E>,
}

impl<E: Pairing> Equ for QuadEqu<E> {
    #[inline(always)]
    fn get_type(&self) -> EquType {
        EquType::Quadratic
    }
}

/// The linear equation `sum b_i * X_i = T` with variables in `G1` and scalar
/// coefficients (`b_consts` is `n x 1` over `Zr`, `target` in `G1`).
pub struct LinearG1<E: Pairing> {
    pub b_consts: Matrix<E>,
    pub target: Element<E>,
}

impl<E: Pairing> Equ for LinearG1<E> {
    #[inline(always)]
    fn get_type(&self) -> EquType {
        EquType::MultiScalarG1
    }
}

/// The linear equation `sum y_i * A_i = T` with scalar variables and `G1`
/// coefficients (`a_consts` is `m x 1` over `G1`, `target` in `G1`).
pub struct LinearScalarG1<E: Pairing> {
    pub a_consts: Matrix<E>,
    pub target: Element<E>,
}

impl<E: Pairing> Equ for LinearScalarG1<E> {
    #[inline(always)]
    fn get_type(&self) -> EquType {
        EquType::MultiScalarG1
    }
}

/// The linear equation `sum a_i * Y_i = T` with variables in `G2` and scalar
/// coefficients (`a_consts` is `m x 1` over `Zr`, `target` in `G2`).
pub struct LinearG2<E: Pairing> {
    pub a_consts: Matrix<E>,
    pub target: Element<E>,
}

impl<E: Pairing> Equ for LinearG2<E> {
    #[inline(always)]
    fn get_type(&self) -> EquType {
        EquType::MultiScalarG2
    }
}

/// The linear equation `sum x_i * B_i = T` with scalar variables and `G2`
/// coefficients (`b_consts` is `n x 1` over `G2`, `target` in `G2`).
pub struct LinearScalarG2<E: Pairing> {
    pub b_consts: Matrix<E>,
    pub target: Element<E>,
}

impl<E: Pairing> Equ for LinearScalarG2<E> {
    #[inline(always)]
    fn get_type(&self) -> EquType {
        EquType::MultiScalarG2
    }
}

/// The linear equation `sum a_i * y_i = t` over the scalar field alone
/// (`a_consts` is `m x 1` over `Zr`, `target` in `Zr`).
pub struct LinearQuad<E: Pairing> {
    pub a_consts: Matrix<E>,
    pub target: Element<E>,
}

impl<E: Pairing> Equ for LinearQuad<E> {
    #[inline(always)]
    fn get_type(&self) -> EquType {
        EquType::Quadratic
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use ark_bls12_381::Bls12_381 as F;
    use ark_ec::pairing::{Pairing, PairingOutput};
    use ark_std::{test_rng, UniformRand};

    use super::*;
    use crate::data_structures::GroupId;

    type Fr = <F as Pairing>::ScalarField;

    #[test]
    fn test_PPE_equation_type() {
        let mut rng = test_rng();

        let equ = PPE::<F> {
            a_consts: Matrix::rand(&mut rng, 1, 1, GroupId::G1),
            b_consts: Matrix::rand(&mut rng, 1, 1, GroupId::G2),
            gamma: Matrix::rand(&mut rng, 1, 1, GroupId::Zr),
            target: Element::Gt(PairingOutput::<F>::rand(&mut rng)),
        };

        assert_eq!(equ.get_type(), EquType::PairingProduct);
    }

    #[test]
    fn test_MSMEG1_equation_type() {
        let mut rng = test_rng();

        let equ = MSMEG1::<F> {
            a_consts: Matrix::rand(&mut rng, 1, 1, GroupId::G1),
            b_consts: Matrix::rand(&mut rng, 1, 1, GroupId::Zr),
            gamma: Matrix::rand(&mut rng, 1, 1, GroupId::Zr),
            target: Element::rand(&mut rng, GroupId::G1),
        };

        assert_eq!(equ.get_type(), EquType::MultiScalarG1);
    }

    #[test]
    fn test_MSMEG2_equation_type() {
        let mut rng = test_rng();

        let equ = MSMEG2::<F> {
            a_consts: Matrix::rand(&mut rng, 1, 1, GroupId::Zr),
            b_consts: Matrix::rand(&mut rng, 1, 1, GroupId::G2),
            gamma: Matrix::rand(&mut rng, 1, 1, GroupId::Zr),
            target: Element::rand(&mut rng, GroupId::G2),
        };

        assert_eq!(equ.get_type(), EquType::MultiScalarG2);
    }

    #[test]
    fn test_quadratic_equation_type() {
        let mut rng = test_rng();

        let equ = QuadEqu::<F> {
            a_consts: Matrix::rand(&mut rng, 1, 1, GroupId::Zr),
            b_consts: Matrix::rand(&mut rng, 1, 1, GroupId::Zr),
            gamma: Matrix::rand(&mut rng, 1, 1, GroupId::Zr),
            target: Element::Zr(Fr::rand(&mut rng)),
        };

        assert_eq!(equ.get_type(), EquType::Quadratic);
    }

    #[test]
    fn test_linear_equation_types() {
        let mut rng = test_rng();

        let g1_lin = LinearG1::<F> {
            b_consts: Matrix::rand(&mut rng, 2, 1, GroupId::Zr),
            target: Element::rand(&mut rng, GroupId::G1),
        };
        assert_eq!(g1_lin.get_type(), EquType::MultiScalarG1);

        let quad_lin = LinearQuad::<F> {
            a_consts: Matrix::rand(&mut rng, 2, 1, GroupId::Zr),
            target: Element::Zr(Fr::rand(&mut rng)),
        };
        assert_eq!(quad_lin.get_type(), EquType::Quadratic);
    }
}
