//! Commitments from the scalar field `Zr` or the bilinear group `G1, G2`
//! into the commitment modules `B1, B2` of the SXDH instantiation.
//!
//! A commitment to a column of group variables `X` in `G_b` is
//! `iota_b(X) + R * key`, where `R` is an `n x 2` matrix of fresh uniform
//! scalars and `key` is the 2-row commitment key of the matching side.
//! Scalar variables commit through `iota'_b` against the key's first row
//! only, with an `n x 1` randomness column. Both procedures return the
//! commitment values together with the randomness that opened them; the
//! provers consume the randomness, verifiers only ever see the values.

use ark_ec::pairing::Pairing;
use ark_std::rand::Rng;

use crate::data_structures::{
    batch_linear_map, batch_scalar_linear_map, FatMatrix, GroupId, Matrix,
};
use crate::errors::{GsError, GsResult};
use crate::generator::CRS;

/// A `B1` commitment: the committed values and the randomness behind them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commitment1<E: Pairing> {
    /// `n x 1` fat column of 2x1 `G1` cells.
    pub coms: FatMatrix<E>,
    /// Commitment randomness: `n x 2` for group variables, `n x 1` for scalars.
    pub(super) rand: Matrix<E>,
}

/// A `B2` commitment: the committed values and the randomness behind them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commitment2<E: Pairing> {
    /// `n x 1` fat column of 2x1 `G2` cells.
    pub coms: FatMatrix<E>,
    /// Commitment randomness: `n x 2` for group variables, `n x 1` for scalars.
    pub(super) rand: Matrix<E>,
}

fn check_vars<E: Pairing>(vars: &Matrix<E>, group: GroupId) -> GsResult<()> {
    if vars.cols() != 1 {
        return Err(GsError::DimensionMismatch {
            lhs_rows: vars.rows(),
            lhs_cols: vars.cols(),
            rhs_rows: vars.rows(),
            rhs_cols: 1,
        });
    }
    if vars.group() != group {
        return Err(GsError::FieldMismatch {
            expected: group,
            actual: vars.group(),
        });
    }
    Ok(())
}

fn check_rand<E: Pairing>(rand: &Matrix<E>, rows: usize, cols: usize) -> GsResult<()> {
    if rand.rows() != rows || rand.cols() != cols {
        return Err(GsError::DimensionMismatch {
            lhs_rows: rand.rows(),
            lhs_cols: rand.cols(),
            rhs_rows: rows,
            rhs_cols: cols,
        });
    }
    if rand.group() != GroupId::Zr {
        return Err(GsError::FieldMismatch {
            expected: GroupId::Zr,
            actual: rand.group(),
        });
    }
    Ok(())
}

/// Commits to a column of `G1` variables: `c := iota_1(X) + R u`.
///
/// When `rand` is absent a fresh uniform `n x 2` scalar matrix is sampled.
pub fn commit_g1<CR, E>(
    xvars: &Matrix<E>,
    rand: Option<Matrix<E>>,
    crs: &CRS<E>,
    rng: &mut CR,
) -> GsResult<Commitment1<E>>
where
    E: Pairing,
    CR: Rng,
{
    check_vars(xvars, GroupId::G1)?;
    let r = match rand {
        Some(r) => {
            check_rand(&r, xvars.rows(), 2)?;
            r
        }
        None => Matrix::rand(rng, xvars.rows(), 2, GroupId::Zr),
    };

    let lin_x = batch_linear_map(xvars)?;
    let coms = lin_x.add(&r.mul_fat(&crs.u(), false)?)?;

    Ok(Commitment1 { coms, rand: r })
}

/// Commits to a column of `G2` variables: `d := iota_2(Y) + S v`.
pub fn commit_g2<CR, E>(
    yvars: &Matrix<E>,
    rand: Option<Matrix<E>>,
    crs: &CRS<E>,
    rng: &mut CR,
) -> GsResult<Commitment2<E>>
where
    E: Pairing,
    CR: Rng,
{
    check_vars(yvars, GroupId::G2)?;
    let s = match rand {
        Some(s) => {
            check_rand(&s, yvars.rows(), 2)?;
            s
        }
        None => Matrix::rand(rng, yvars.rows(), 2, GroupId::Zr),
    };

    let lin_y = batch_linear_map(yvars)?;
    let coms = lin_y.add(&s.mul_fat(&crs.v(), false)?)?;

    Ok(Commitment2 { coms, rand: s })
}

/// Commits to a column of scalars on the `B1` side:
/// `c' := iota'_1(x) + r u_1`, cell by cell.
pub fn commit_scalar_to_b1<CR, E>(
    xvars: &Matrix<E>,
    rand: Option<Matrix<E>>,
    crs: &CRS<E>,
    rng: &mut CR,
) -> GsResult<Commitment1<E>>
where
    E: Pairing,
    CR: Rng,
{
    check_vars(xvars, GroupId::Zr)?;
    let r = match rand {
        Some(r) => {
            check_rand(&r, xvars.rows(), 1)?;
            r
        }
        None => Matrix::rand(rng, xvars.rows(), 1, GroupId::Zr),
    };

    let slin_x = batch_scalar_linear_map(GroupId::G1, xvars, crs)?;
    let coms = slin_x.add(&r.mul_fat(&crs.u1_fat(), false)?)?;

    Ok(Commitment1 { coms, rand: r })
}

/// Commits to a column of scalars on the `B2` side:
/// `d' := iota'_2(y) + s v_1`, cell by cell.
pub fn commit_scalar_to_b2<CR, E>(
    yvars: &Matrix<E>,
    rand: Option<Matrix<E>>,
    crs: &CRS<E>,
    rng: &mut CR,
) -> GsResult<Commitment2<E>>
where
    E: Pairing,
    CR: Rng,
{
    check_vars(yvars, GroupId::Zr)?;
    let s = match rand {
        Some(s) => {
            check_rand(&s, yvars.rows(), 1)?;
            s
        }
        None => Matrix::rand(rng, yvars.rows(), 1, GroupId::Zr),
    };

    let slin_y = batch_scalar_linear_map(GroupId::G2, yvars, crs)?;
    let coms = slin_y.add(&s.mul_fat(&crs.v1_fat(), false)?)?;

    Ok(Commitment2 { coms, rand: s })
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use ark_bls12_381::Bls12_381 as F;
    use ark_ec::pairing::Pairing;
    use ark_std::str::FromStr;
    use ark_std::test_rng;

    use super::*;
    use crate::data_structures::{scalar_linear_map, Element};

    type Fr = <F as Pairing>::ScalarField;

    fn fr(s: &str) -> Element<F> {
        Element::Zr(Fr::from_str(s).unwrap())
    }

    #[test]
    fn test_commit_g1_shape() {
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);
        let xvars = Matrix::<F>::rand(&mut rng, 3, 1, GroupId::G1);

        let com = commit_g1(&xvars, None, &crs, &mut rng).unwrap();
        assert_eq!(com.coms.rows(), 3);
        assert_eq!(com.coms.cols(), 1);
        assert_eq!(com.coms.inner_rows(), 2);
        assert_eq!(com.coms.group(), GroupId::G1);
        assert_eq!(com.rand.rows(), 3);
        assert_eq!(com.rand.cols(), 2);
    }

    #[test]
    fn test_commit_is_deterministic_under_fixed_randomness() {
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);
        let xvars = Matrix::<F>::rand(&mut rng, 2, 1, GroupId::G1);
        let r = Matrix::<F>::rand(&mut rng, 2, 2, GroupId::Zr);

        let com_a = commit_g1(&xvars, Some(r.clone()), &crs, &mut rng).unwrap();
        let com_b = commit_g1(&xvars, Some(r), &crs, &mut rng).unwrap();
        assert_eq!(com_a, com_b);
    }

    #[test]
    fn test_commit_g1_rejects_wrong_randomness_shape() {
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);
        let xvars = Matrix::<F>::rand(&mut rng, 2, 1, GroupId::G1);
        let r = Matrix::<F>::rand(&mut rng, 2, 1, GroupId::Zr);

        assert!(matches!(
            commit_g1(&xvars, Some(r), &crs, &mut rng),
            Err(GsError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_commit_g1_rejects_wrong_domain() {
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);
        let yvars = Matrix::<F>::rand(&mut rng, 2, 1, GroupId::G2);

        assert!(matches!(
            commit_g1(&yvars, None, &crs, &mut rng),
            Err(GsError::FieldMismatch { .. })
        ));
    }

    #[test]
    fn test_commit_scalar_cell_structure() {
        // c'(i) = iota'_1(x_i) + u_1 * t_i, checked cell by cell.
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);
        let xvars = Matrix::<F>::from_column(vec![fr("2"), fr("3")]).unwrap();
        let t = Matrix::<F>::from_column(vec![fr("5"), fr("7")]).unwrap();

        let com = commit_scalar_to_b1(&xvars, Some(t.clone()), &crs, &mut rng).unwrap();
        for i in 1..=2 {
            let lifted = scalar_linear_map(GroupId::G1, xvars.get(i, 1).unwrap(), &crs).unwrap();
            let masked = crs.u1.scalar_mul(t.get(i, 1).unwrap()).unwrap();
            let exp = lifted.add(&masked).unwrap();
            assert_eq!(*com.coms.get(i, 1).unwrap(), exp);
        }
    }

    #[test]
    fn test_commit_g2_cell_structure() {
        // d(i) = iota_2(Y_i) + S_i1 * v_1 + S_i2 * v_2.
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);
        let yvars = Matrix::<F>::rand(&mut rng, 2, 1, GroupId::G2);
        let s = Matrix::<F>::rand(&mut rng, 2, 2, GroupId::Zr);

        let com = commit_g2(&yvars, Some(s.clone()), &crs, &mut rng).unwrap();
        for i in 1..=2 {
            let lifted = crate::data_structures::linear_map(yvars.get(i, 1).unwrap()).unwrap();
            let masked = crs
                .v1
                .scalar_mul(s.get(i, 1).unwrap())
                .unwrap()
                .add(&crs.v2.scalar_mul(s.get(i, 2).unwrap()).unwrap())
                .unwrap();
            assert_eq!(*com.coms.get(i, 1).unwrap(), lifted.add(&masked).unwrap());
        }
    }
}
