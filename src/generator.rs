//! Generation and persistence of the common reference string.
//!
//! The CRS carries the commitment keys `(u1, u2)` over `G1` and `(v1, v2)`
//! over `G2` together with the generators they were derived from. The keys
//! are structured so that commitments are perfectly binding: `u1 = (G, a*G)`
//! and `u2 = b*u1` for uniformly random scalars `a, b` (symmetrically for
//! `v1, v2` over `G2`), which makes the committed value extractable by
//! anyone holding the discrete logs and information-theoretically fixed for
//! everyone else.

use ark_ec::pairing::Pairing;
use ark_ec::CurveGroup;
use ark_std::{rand::Rng, UniformRand};

use crate::data_structures::{Element, FatMatrix, GroupId, Matrix};
use crate::errors::{GsError, GsResult};

/// Commitment keys for `G1` and `G2`, plus the generators of the bilinear group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CRS<E: Pairing> {
    pub g1_gen: E::G1Affine,
    pub g2_gen: E::G2Affine,
    /// 2x1 `G1` column `(G, a*G)`.
    pub u1: Matrix<E>,
    /// 2x1 `G1` column `b * u1`.
    pub u2: Matrix<E>,
    /// 2x1 `G2` column `(H, c*H)`.
    pub v1: Matrix<E>,
    /// 2x1 `G2` column `d * v1`.
    pub v2: Matrix<E>,
}

impl<E: Pairing> CRS<E> {
    /// Generates a perfectly binding commitment key pair for `G1` and `G2`.
    ///
    /// Under SXDH this string is computationally indistinguishable from the
    /// perfectly hiding alternative; only the binding instantiation is
    /// produced here, so every proof is a proof of knowledge.
    pub fn generate_crs<R: Rng>(rng: &mut R) -> Self {
        let g1_gen = E::G1::rand(rng).into_affine();
        let g2_gen = E::G2::rand(rng).into_affine();

        let alpha = E::ScalarField::rand(rng);
        let beta = E::ScalarField::rand(rng);
        let gamma = E::ScalarField::rand(rng);
        let delta = E::ScalarField::rand(rng);

        let u1 = Matrix::column_unchecked(
            GroupId::G1,
            vec![
                Element::G1(g1_gen),
                Element::G1((g1_gen * alpha).into_affine()),
            ],
        );
        let u2 = u1.scale(&beta);

        let v1 = Matrix::column_unchecked(
            GroupId::G2,
            vec![
                Element::G2(g2_gen),
                Element::G2((g2_gen * gamma).into_affine()),
            ],
        );
        let v2 = v1.scale(&delta);

        CRS {
            g1_gen,
            g2_gen,
            u1,
            u2,
            v1,
            v2,
        }
    }

    /// The `G1` commitment key as a 2x1 fat column `(u1; u2)`.
    pub fn u(&self) -> FatMatrix<E> {
        FatMatrix::column_unchecked(vec![self.u1.clone(), self.u2.clone()])
    }

    /// The `G2` commitment key as a 2x1 fat column `(v1; v2)`.
    pub fn v(&self) -> FatMatrix<E> {
        FatMatrix::column_unchecked(vec![self.v1.clone(), self.v2.clone()])
    }

    /// `u1` as a 1x1 fat matrix, for the fat products in the MSM provers.
    pub fn u1_fat(&self) -> FatMatrix<E> {
        FatMatrix::from_inner(&self.u1)
    }

    /// `v1` as a 1x1 fat matrix.
    pub fn v1_fat(&self) -> FatMatrix<E> {
        FatMatrix::from_inner(&self.v1)
    }

    /// A fresh uniform `Zr` matrix of the requested shape.
    pub fn random_scalar_matrix<R: Rng>(&self, rng: &mut R, rows: usize, cols: usize) -> Matrix<E> {
        Matrix::rand(rng, rows, cols, GroupId::Zr)
    }

    /// The `n x n` identity over `Zr`.
    pub fn unit_matrix(&self, n: usize) -> Matrix<E> {
        Matrix::identity(n)
    }

    /// Archive form: the entries `G, H, u1, u2, v1, v2` concatenated in the
    /// fixed-width canonical element encoding. Shapes are implied by the
    /// curve, so no header is written.
    pub fn to_bytes(&self) -> GsResult<Vec<u8>> {
        let mut out = Element::<E>::G1(self.g1_gen).to_bytes()?;
        out.extend_from_slice(&Element::<E>::G2(self.g2_gen).to_bytes()?);
        out.extend_from_slice(&self.u1.to_bytes()?);
        out.extend_from_slice(&self.u2.to_bytes()?);
        out.extend_from_slice(&self.v1.to_bytes()?);
        out.extend_from_slice(&self.v2.to_bytes()?);
        Ok(out)
    }

    /// Reads back the archive form produced by [`CRS::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> GsResult<Self> {
        let g1_len = Element::<E>::encoded_len(GroupId::G1);
        let g2_len = Element::<E>::encoded_len(GroupId::G2);
        let expected = 5 * g1_len + 5 * g2_len;
        if bytes.len() != expected {
            return Err(GsError::Serialization(format!(
                "expected {} bytes for a CRS archive, got {}",
                expected,
                bytes.len()
            )));
        }

        let mut at = 0;
        let mut take = |len: usize| {
            let slice = &bytes[at..at + len];
            at += len;
            slice
        };

        let g1_gen = *Element::<E>::from_bytes(GroupId::G1, take(g1_len))?.as_g1()?;
        let g2_gen = *Element::<E>::from_bytes(GroupId::G2, take(g2_len))?.as_g2()?;
        let u1 = Matrix::from_bytes(2, 1, GroupId::G1, take(2 * g1_len))?;
        let u2 = Matrix::from_bytes(2, 1, GroupId::G1, take(2 * g1_len))?;
        let v1 = Matrix::from_bytes(2, 1, GroupId::G2, take(2 * g2_len))?;
        let v2 = Matrix::from_bytes(2, 1, GroupId::G2, take(2 * g2_len))?;

        Ok(CRS {
            g1_gen,
            g2_gen,
            u1,
            u2,
            v1,
            v2,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use ark_bls12_381::Bls12_381 as F;
    use ark_ec::pairing::Pairing;
    use ark_ec::AffineRepr;
    use ark_std::test_rng;

    use super::*;

    type G1Affine = <F as Pairing>::G1Affine;
    type G2Affine = <F as Pairing>::G2Affine;

    #[test]
    fn test_valid_CRS() {
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);

        // Non-degeneracy of the bilinear pairing will hold
        assert_ne!(crs.g1_gen, G1Affine::zero());
        assert_ne!(crs.g2_gen, G2Affine::zero());

        // u1 = (G, a*G), v1 = (H, c*H)
        assert_eq!(*crs.u1.get(1, 1).unwrap(), Element::<F>::G1(crs.g1_gen));
        assert_eq!(*crs.v1.get(1, 1).unwrap(), Element::<F>::G2(crs.g2_gen));
        assert!(!crs.u1.get(2, 1).unwrap().is_zero());
        assert!(!crs.u2.get(1, 1).unwrap().is_zero());
        assert!(!crs.v1.get(2, 1).unwrap().is_zero());
        assert!(!crs.v2.get(1, 1).unwrap().is_zero());
    }

    #[test]
    fn test_commitment_key_views() {
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);

        let u = crs.u();
        assert_eq!(u.rows(), 2);
        assert_eq!(u.cols(), 1);
        assert_eq!(*u.get(1, 1).unwrap(), crs.u1);
        assert_eq!(*u.get(2, 1).unwrap(), crs.u2);

        let v = crs.v();
        assert_eq!(*v.get(1, 1).unwrap(), crs.v1);
        assert_eq!(*v.get(2, 1).unwrap(), crs.v2);

        assert_eq!(crs.u1_fat().flatten().unwrap(), crs.u1);
        assert_eq!(crs.v1_fat().flatten().unwrap(), crs.v1);
    }

    #[test]
    fn test_scalar_helpers() {
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);

        let r = crs.random_scalar_matrix(&mut rng, 3, 2);
        assert_eq!((r.rows(), r.cols()), (3, 2));
        assert_eq!(r.group(), GroupId::Zr);

        let id = crs.unit_matrix(3);
        let m = crs.random_scalar_matrix(&mut rng, 3, 3);
        assert_eq!(m.mul(&id, false).unwrap(), m);
    }

    #[test]
    fn test_crs_archive_roundtrip() {
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);

        let bytes = crs.to_bytes().unwrap();
        let read_back = CRS::<F>::from_bytes(&bytes).unwrap();

        assert_eq!(crs.g1_gen, read_back.g1_gen);
        assert_eq!(crs.g2_gen, read_back.g2_gen);
        assert_eq!(crs.u1, read_back.u1);
        assert_eq!(crs.u2, read_back.u2);
        assert_eq!(crs.v1, read_back.v1);
        assert_eq!(crs.v2, read_back.v2);
    }

    #[test]
    fn test_crs_archive_truncated() {
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);

        let bytes = crs.to_bytes().unwrap();
        assert!(matches!(
            CRS::<F>::from_bytes(&bytes[..bytes.len() - 1]),
            Err(GsError::Serialization(_))
        ));
    }
}
