//! The two-level matrix algebra underlying the SXDH commitment scheme.
//!
//! Every value lives in one of four algebraic domains tied together by a
//! bilinear pairing `e : G1 x G2 -> GT`: the source groups `G1` and `G2`
//! (written additively), the target group `GT` (also written additively via
//! [`PairingOutput`]), and the scalar field `Zr`. An [`Element`] is a tagged
//! value carrying its domain; arithmetic dispatches on the carried tag and
//! rejects cross-domain operands with [`GsError::FieldMismatch`].
//!
//! On top of elements sit two containers:
//!
//! - [`Matrix`]: a flat, 1-indexed grid of elements of a single domain, and
//! - [`FatMatrix`]: a grid whose cells are matrices of one uniform inner
//!   shape and domain. The commitment-module vectors `B1 = G1^2`, `B2 = G2^2`
//!   are its 2x1 inner cells, and the bilinear evaluator
//!   [`FatMatrix::pairing_sum`] reduces two fat columns to a 2x2 `GT` grid.
//!
//! All operations return fresh containers; nothing aliases cells across
//! returned values. Construction-time `set` is the only in-place mutation.

use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{One, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{rand::Rng, UniformRand};
use rayon::prelude::*;

use crate::errors::{GsError, GsResult};
use crate::generator::CRS;

/// The four algebraic domains of the SXDH instantiation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupId {
    G1,
    G2,
    Gt,
    Zr,
}

/// A group element tagged with the domain it belongs to.
///
/// `GT` is represented additively: `add` is group composition and
/// [`Element::mul_zn`] is exponentiation.
#[derive(Clone, Debug)]
pub enum Element<E: Pairing> {
    G1(E::G1Affine),
    G2(E::G2Affine),
    Gt(PairingOutput<E>),
    Zr(E::ScalarField),
}

impl<E: Pairing> PartialEq for Element<E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Element::G1(a), Element::G1(b)) => a == b,
            (Element::G2(a), Element::G2(b)) => a == b,
            (Element::Gt(a), Element::Gt(b)) => a == b,
            (Element::Zr(a), Element::Zr(b)) => a == b,
            _ => false,
        }
    }
}
impl<E: Pairing> Eq for Element<E> {}

impl<E: Pairing> Element<E> {
    /// The domain tag this element carries.
    pub fn group(&self) -> GroupId {
        match self {
            Element::G1(_) => GroupId::G1,
            Element::G2(_) => GroupId::G2,
            Element::Gt(_) => GroupId::Gt,
            Element::Zr(_) => GroupId::Zr,
        }
    }

    /// The neutral element of the requested domain.
    pub fn zero(group: GroupId) -> Self {
        match group {
            GroupId::G1 => Element::G1(E::G1Affine::zero()),
            GroupId::G2 => Element::G2(E::G2Affine::zero()),
            GroupId::Gt => Element::Gt(PairingOutput::<E>::zero()),
            GroupId::Zr => Element::Zr(E::ScalarField::zero()),
        }
    }

    /// A uniformly random element of the requested domain.
    pub fn rand<R: Rng>(rng: &mut R, group: GroupId) -> Self {
        match group {
            GroupId::G1 => Element::G1(E::G1::rand(rng).into_affine()),
            GroupId::G2 => Element::G2(E::G2::rand(rng).into_affine()),
            GroupId::Gt => Element::Gt(PairingOutput::<E>::rand(rng)),
            GroupId::Zr => Element::Zr(E::ScalarField::rand(rng)),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero(self.group())
    }

    pub fn add(&self, other: &Self) -> GsResult<Self> {
        match (self, other) {
            (Element::G1(a), Element::G1(b)) => {
                Ok(Element::G1((a.into_group() + b.into_group()).into_affine()))
            }
            (Element::G2(a), Element::G2(b)) => {
                Ok(Element::G2((a.into_group() + b.into_group()).into_affine()))
            }
            (Element::Gt(a), Element::Gt(b)) => Ok(Element::Gt(*a + *b)),
            (Element::Zr(a), Element::Zr(b)) => Ok(Element::Zr(*a + *b)),
            _ => Err(GsError::FieldMismatch {
                expected: self.group(),
                actual: other.group(),
            }),
        }
    }

    pub fn sub(&self, other: &Self) -> GsResult<Self> {
        self.add(&other.neg())
    }

    pub fn neg(&self) -> Self {
        match self {
            Element::G1(a) => Element::G1((-(a.into_group())).into_affine()),
            Element::G2(a) => Element::G2((-(a.into_group())).into_affine()),
            Element::Gt(a) => Element::Gt(-*a),
            Element::Zr(a) => Element::Zr(-*a),
        }
    }

    /// Scalar multiplication by an exponent in `Zr`.
    pub fn mul_zn(&self, k: &E::ScalarField) -> Self {
        match self {
            Element::G1(a) => Element::G1((*a * *k).into_affine()),
            Element::G2(a) => Element::G2((*a * *k).into_affine()),
            Element::Gt(a) => Element::Gt(*a * *k),
            Element::Zr(a) => Element::Zr(*a * *k),
        }
    }

    /// Multiplicative composition: field multiplication in `Zr`, group
    /// composition in `G1`, `G2` and `GT`.
    pub fn mul(&self, other: &Self) -> GsResult<Self> {
        match (self, other) {
            (Element::Zr(a), Element::Zr(b)) => Ok(Element::Zr(*a * *b)),
            (Element::G1(_), Element::G1(_))
            | (Element::G2(_), Element::G2(_))
            | (Element::Gt(_), Element::Gt(_)) => self.add(other),
            _ => Err(GsError::FieldMismatch {
                expected: self.group(),
                actual: other.group(),
            }),
        }
    }

    /// The bilinear map applied to a `G1` and a `G2` element.
    pub fn pair(&self, other: &Self) -> GsResult<Self> {
        let x = self.as_g1()?;
        let y = other.as_g2()?;
        Ok(Element::Gt(E::pairing(*x, *y)))
    }

    pub fn as_g1(&self) -> GsResult<&E::G1Affine> {
        match self {
            Element::G1(a) => Ok(a),
            _ => Err(GsError::FieldMismatch {
                expected: GroupId::G1,
                actual: self.group(),
            }),
        }
    }

    pub fn as_g2(&self) -> GsResult<&E::G2Affine> {
        match self {
            Element::G2(a) => Ok(a),
            _ => Err(GsError::FieldMismatch {
                expected: GroupId::G2,
                actual: self.group(),
            }),
        }
    }

    pub fn as_gt(&self) -> GsResult<&PairingOutput<E>> {
        match self {
            Element::Gt(a) => Ok(a),
            _ => Err(GsError::FieldMismatch {
                expected: GroupId::Gt,
                actual: self.group(),
            }),
        }
    }

    pub fn as_scalar(&self) -> GsResult<&E::ScalarField> {
        match self {
            Element::Zr(a) => Ok(a),
            _ => Err(GsError::FieldMismatch {
                expected: GroupId::Zr,
                actual: self.group(),
            }),
        }
    }

    /// Length of the fixed-width canonical encoding for the given domain.
    pub fn encoded_len(group: GroupId) -> usize {
        match group {
            GroupId::G1 => E::G1Affine::zero().compressed_size(),
            GroupId::G2 => E::G2Affine::zero().compressed_size(),
            GroupId::Gt => PairingOutput::<E>::zero().compressed_size(),
            GroupId::Zr => E::ScalarField::zero().compressed_size(),
        }
    }

    /// Fixed-width canonical byte encoding.
    pub fn to_bytes(&self) -> GsResult<Vec<u8>> {
        let mut bytes = Vec::new();
        match self {
            Element::G1(a) => a.serialize_compressed(&mut bytes),
            Element::G2(a) => a.serialize_compressed(&mut bytes),
            Element::Gt(a) => a.serialize_compressed(&mut bytes),
            Element::Zr(a) => a.serialize_compressed(&mut bytes),
        }
        .map_err(|e| GsError::Serialization(e.to_string()))?;
        Ok(bytes)
    }

    /// Decodes a fixed-width canonical encoding of the given domain.
    pub fn from_bytes(group: GroupId, bytes: &[u8]) -> GsResult<Self> {
        let map_err = |e: ark_serialize::SerializationError| GsError::Serialization(e.to_string());
        Ok(match group {
            GroupId::G1 => Element::G1(E::G1Affine::deserialize_compressed(bytes).map_err(map_err)?),
            GroupId::G2 => Element::G2(E::G2Affine::deserialize_compressed(bytes).map_err(map_err)?),
            GroupId::Gt => {
                Element::Gt(PairingOutput::<E>::deserialize_compressed(bytes).map_err(map_err)?)
            }
            GroupId::Zr => {
                Element::Zr(E::ScalarField::deserialize_compressed(bytes).map_err(map_err)?)
            }
        })
    }
}

/// A 1-indexed grid of elements of a single domain.
///
/// Shape and domain are fixed at construction. Every operation other than
/// [`Matrix::set`] and [`Matrix::set_from_bytes`] yields a fresh matrix.
#[derive(Clone, Debug)]
pub struct Matrix<E: Pairing> {
    rows: usize,
    cols: usize,
    group: GroupId,
    /// Row-major, 0-based internally; the public surface is 1-indexed.
    entries: Vec<Element<E>>,
}

impl<E: Pairing> PartialEq for Matrix<E> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.group == other.group
            && self.entries == other.entries
    }
}
impl<E: Pairing> Eq for Matrix<E> {}

impl<E: Pairing> Matrix<E> {
    /// A zero-filled matrix.
    pub fn new(rows: usize, cols: usize, group: GroupId) -> Self {
        Self::filled(rows, cols, &Element::zero(group))
    }

    /// A matrix with every cell set to a duplicate of `init`.
    pub fn filled(rows: usize, cols: usize, init: &Element<E>) -> Self {
        Matrix {
            rows,
            cols,
            group: init.group(),
            entries: vec![init.clone(); rows * cols],
        }
    }

    /// A matrix of uniformly random elements.
    pub fn rand<R: Rng>(rng: &mut R, rows: usize, cols: usize, group: GroupId) -> Self {
        Matrix {
            rows,
            cols,
            group,
            entries: (0..rows * cols).map(|_| Element::rand(rng, group)).collect(),
        }
    }

    /// The `n x n` identity over `Zr`.
    pub fn identity(n: usize) -> Self {
        let mut entries = vec![Element::Zr(E::ScalarField::zero()); n * n];
        for i in 0..n {
            entries[i * n + i] = Element::Zr(E::ScalarField::one());
        }
        Matrix {
            rows: n,
            cols: n,
            group: GroupId::Zr,
            entries,
        }
    }

    /// An `n x 1` column from a non-empty list of same-domain elements.
    pub fn from_column(cells: Vec<Element<E>>) -> GsResult<Self> {
        if cells.is_empty() {
            return Err(GsError::DimensionMismatch {
                lhs_rows: 0,
                lhs_cols: 1,
                rhs_rows: 1,
                rhs_cols: 1,
            });
        }
        let group = cells[0].group();
        for c in &cells {
            if c.group() != group {
                return Err(GsError::FieldMismatch {
                    expected: group,
                    actual: c.group(),
                });
            }
        }
        Ok(Matrix {
            rows: cells.len(),
            cols: 1,
            group,
            entries: cells,
        })
    }

    /// A matrix from row vectors of uniform length and domain.
    pub fn from_rows(rows: Vec<Vec<Element<E>>>) -> GsResult<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(GsError::DimensionMismatch {
                lhs_rows: rows.len(),
                lhs_cols: 0,
                rhs_rows: 1,
                rhs_cols: 1,
            });
        }
        let cols = rows[0].len();
        let group = rows[0][0].group();
        let mut entries = Vec::with_capacity(rows.len() * cols);
        for row in &rows {
            if row.len() != cols {
                return Err(GsError::DimensionMismatch {
                    lhs_rows: rows.len(),
                    lhs_cols: cols,
                    rhs_rows: rows.len(),
                    rhs_cols: row.len(),
                });
            }
            for cell in row {
                if cell.group() != group {
                    return Err(GsError::FieldMismatch {
                        expected: group,
                        actual: cell.group(),
                    });
                }
                entries.push(cell.clone());
            }
        }
        Ok(Matrix {
            rows: rows.len(),
            cols,
            group,
            entries,
        })
    }

    /// Internal constructor for columns whose uniformity holds by construction.
    pub(crate) fn column_unchecked(group: GroupId, cells: Vec<Element<E>>) -> Self {
        debug_assert!(cells.iter().all(|c| c.group() == group));
        Matrix {
            rows: cells.len(),
            cols: 1,
            group,
            entries: cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn group(&self) -> GroupId {
        self.group
    }

    fn offset(&self, i: usize, j: usize) -> GsResult<usize> {
        if i == 0 || j == 0 || i > self.rows || j > self.cols {
            return Err(GsError::IndexOutOfRange {
                row: i,
                col: j,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok((i - 1) * self.cols + (j - 1))
    }

    /// 1-indexed cell access.
    pub fn get(&self, i: usize, j: usize) -> GsResult<&Element<E>> {
        let k = self.offset(i, j)?;
        Ok(&self.entries[k])
    }

    /// 1-indexed cell assignment; stores a duplicate of `e`.
    pub fn set(&mut self, i: usize, j: usize, e: &Element<E>) -> GsResult<()> {
        if e.group() != self.group {
            return Err(GsError::FieldMismatch {
                expected: self.group,
                actual: e.group(),
            });
        }
        let k = self.offset(i, j)?;
        self.entries[k] = e.clone();
        Ok(())
    }

    fn check_same_shape(&self, other: &Self) -> GsResult<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(GsError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        if self.group != other.group {
            return Err(GsError::FieldMismatch {
                expected: self.group,
                actual: other.group,
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Self) -> GsResult<Self> {
        self.check_same_shape(other)?;
        let entries = self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|(a, b)| a.add(b))
            .collect::<GsResult<Vec<_>>>()?;
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            group: self.group,
            entries,
        })
    }

    pub fn sub(&self, other: &Self) -> GsResult<Self> {
        self.add(&other.neg())
    }

    pub fn neg(&self) -> Self {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            group: self.group,
            entries: self.entries.iter().map(|e| e.neg()).collect(),
        }
    }

    fn mul_cell(&self, other: &Self, i: usize, j: usize) -> GsResult<Element<E>> {
        let mut acc = Element::zero(self.group);
        for k in 0..self.cols {
            let prod = self.entries[i * self.cols + k].mul(&other.entries[k * other.cols + j])?;
            acc = acc.add(&prod)?;
        }
        Ok(acc)
    }

    /// Matrix multiplication within a single domain: cell `(i, j)` is
    /// the composition-sum over `k` of `self(i, k) * other(k, j)`.
    pub fn mul(&self, other: &Self, is_parallel: bool) -> GsResult<Self> {
        if self.cols != other.rows {
            return Err(GsError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        if self.group != other.group {
            return Err(GsError::FieldMismatch {
                expected: self.group,
                actual: other.group,
            });
        }
        let n = self.rows * other.cols;
        let entries: Vec<Element<E>> = if is_parallel {
            (0..n)
                .into_par_iter()
                .map(|t| self.mul_cell(other, t / other.cols, t % other.cols))
                .collect::<GsResult<Vec<_>>>()?
        } else {
            (0..n)
                .map(|t| self.mul_cell(other, t / other.cols, t % other.cols))
                .collect::<GsResult<Vec<_>>>()?
        };
        Ok(Matrix {
            rows: self.rows,
            cols: other.cols,
            group: self.group,
            entries,
        })
    }

    /// Cellwise scalar multiplication by a `Zr` element.
    pub fn scalar_mul(&self, k: &Element<E>) -> GsResult<Self> {
        Ok(self.scale(k.as_scalar()?))
    }

    pub(crate) fn scale(&self, k: &E::ScalarField) -> Self {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            group: self.group,
            entries: self.entries.iter().map(|e| e.mul_zn(k)).collect(),
        }
    }

    pub fn transpose(&self) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                entries.push(self.entries[i * self.cols + j].clone());
            }
        }
        Matrix {
            rows: self.cols,
            cols: self.rows,
            group: self.group,
            entries,
        }
    }

    /// Cellwise application of `f`; the produced elements must share a domain.
    pub fn map<F>(&self, f: F) -> GsResult<Self>
    where
        F: Fn(&Element<E>) -> GsResult<Element<E>>,
    {
        let entries = self
            .entries
            .iter()
            .map(|e| f(e))
            .collect::<GsResult<Vec<_>>>()?;
        let group = match entries.first() {
            Some(e) => e.group(),
            None => self.group,
        };
        for e in &entries {
            if e.group() != group {
                return Err(GsError::FieldMismatch {
                    expected: group,
                    actual: e.group(),
                });
            }
        }
        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            group,
            entries,
        })
    }

    /// Builds a [`FatMatrix`] by lifting every cell into an inner matrix of
    /// the stated shape.
    pub fn fat_map<F>(&self, inner_rows: usize, inner_cols: usize, f: F) -> GsResult<FatMatrix<E>>
    where
        F: Fn(&Element<E>) -> GsResult<Matrix<E>>,
    {
        if self.entries.is_empty() {
            return Err(GsError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: 1,
                rhs_cols: 1,
            });
        }
        let mut cells = Vec::with_capacity(self.entries.len());
        for e in &self.entries {
            let m = f(e)?;
            if m.rows != inner_rows || m.cols != inner_cols {
                return Err(GsError::DimensionMismatch {
                    lhs_rows: m.rows,
                    lhs_cols: m.cols,
                    rhs_rows: inner_rows,
                    rhs_cols: inner_cols,
                });
            }
            cells.push(m);
        }
        let group = cells[0].group;
        for c in &cells {
            if c.group != group {
                return Err(GsError::FieldMismatch {
                    expected: group,
                    actual: c.group,
                });
            }
        }
        Ok(FatMatrix {
            rows: self.rows,
            cols: self.cols,
            inner_rows,
            inner_cols,
            group,
            cells,
        })
    }

    /// Fat multiplication of a `Zr` matrix against a fat matrix: cell
    /// `(i, j)` is the sum over `k` of `other(k, j)` scaled by `self(i, k)`.
    pub fn mul_fat(&self, other: &FatMatrix<E>, is_parallel: bool) -> GsResult<FatMatrix<E>> {
        if self.group != GroupId::Zr {
            return Err(GsError::FieldMismatch {
                expected: GroupId::Zr,
                actual: self.group,
            });
        }
        if self.cols != other.rows {
            return Err(GsError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        let mul_fat_cell = |i: usize, j: usize| -> GsResult<Matrix<E>> {
            let mut acc = Matrix::new(other.inner_rows, other.inner_cols, other.group);
            for k in 0..self.cols {
                let scalar = self.entries[i * self.cols + k].as_scalar()?;
                acc = acc.add(&other.cells[k * other.cols + j].scale(scalar))?;
            }
            Ok(acc)
        };
        let n = self.rows * other.cols;
        let cells: Vec<Matrix<E>> = if is_parallel {
            (0..n)
                .into_par_iter()
                .map(|t| mul_fat_cell(t / other.cols, t % other.cols))
                .collect::<GsResult<Vec<_>>>()?
        } else {
            (0..n)
                .map(|t| mul_fat_cell(t / other.cols, t % other.cols))
                .collect::<GsResult<Vec<_>>>()?
        };
        Ok(FatMatrix {
            rows: self.rows,
            cols: other.cols,
            inner_rows: other.inner_rows,
            inner_cols: other.inner_cols,
            group: other.group,
            cells,
        })
    }

    /// The bilinear form on two committed vectors: for `self` a 2x1 `G1`
    /// column and `other` a 2x1 `G2` column, the 2x2 `GT` grid with
    /// `(i, j) = e(self(i, 1), other(j, 1))`.
    pub fn pairing(&self, other: &Self) -> GsResult<Self> {
        if self.group != GroupId::G1 {
            return Err(GsError::FieldMismatch {
                expected: GroupId::G1,
                actual: self.group,
            });
        }
        if other.group != GroupId::G2 {
            return Err(GsError::FieldMismatch {
                expected: GroupId::G2,
                actual: other.group,
            });
        }
        if self.rows != 2 || self.cols != 1 || other.rows != 2 || other.cols != 1 {
            return Err(GsError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        let mut entries = Vec::with_capacity(4);
        for i in 0..2 {
            for j in 0..2 {
                entries.push(self.entries[i].pair(&other.entries[j])?);
            }
        }
        Ok(Matrix {
            rows: 2,
            cols: 2,
            group: GroupId::Gt,
            entries,
        })
    }

    /// Row `i` as a fresh `1 x cols` matrix.
    pub fn row_as_matrix(&self, i: usize) -> GsResult<Self> {
        self.offset(i, 1)?;
        let start = (i - 1) * self.cols;
        Ok(Matrix {
            rows: 1,
            cols: self.cols,
            group: self.group,
            entries: self.entries[start..start + self.cols].to_vec(),
        })
    }

    /// A copy of `self` with row `i` replaced by row `src_row` of `src`.
    pub fn with_row_replaced(&self, i: usize, src: &Self, src_row: usize) -> GsResult<Self> {
        if src.cols != self.cols {
            return Err(GsError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: src.rows,
                rhs_cols: src.cols,
            });
        }
        if src.group != self.group {
            return Err(GsError::FieldMismatch {
                expected: self.group,
                actual: src.group,
            });
        }
        self.offset(i, 1)?;
        src.offset(src_row, 1)?;
        let mut out = self.clone();
        let dst_start = (i - 1) * self.cols;
        let src_start = (src_row - 1) * src.cols;
        out.entries[dst_start..dst_start + self.cols]
            .clone_from_slice(&src.entries[src_start..src_start + src.cols]);
        Ok(out)
    }

    /// The sole element of a 1x1 matrix.
    pub fn flatten(&self) -> GsResult<Element<E>> {
        if self.rows != 1 || self.cols != 1 {
            return Err(GsError::FlattenShape {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.entries[0].clone())
    }

    /// Row-major concatenation of the fixed-width cell encodings. No shape
    /// metadata is written; shape and domain travel out-of-band.
    pub fn to_bytes(&self) -> GsResult<Vec<u8>> {
        let mut out =
            Vec::with_capacity(self.entries.len() * Element::<E>::encoded_len(self.group));
        for e in &self.entries {
            out.extend_from_slice(&e.to_bytes()?);
        }
        Ok(out)
    }

    /// Rebuilds a matrix of the given shape and domain from its byte form.
    pub fn from_bytes(rows: usize, cols: usize, group: GroupId, bytes: &[u8]) -> GsResult<Self> {
        let cell_len = Element::<E>::encoded_len(group);
        if bytes.len() != rows * cols * cell_len {
            return Err(GsError::Serialization(format!(
                "expected {} bytes for a {}x{} {:?} matrix, got {}",
                rows * cols * cell_len,
                rows,
                cols,
                group,
                bytes.len()
            )));
        }
        let entries = bytes
            .chunks(cell_len)
            .map(|chunk| Element::from_bytes(group, chunk))
            .collect::<GsResult<Vec<_>>>()?;
        Ok(Matrix {
            rows,
            cols,
            group,
            entries,
        })
    }

    /// Overwrites every cell from the byte form, keeping shape and domain.
    pub fn set_from_bytes(&mut self, bytes: &[u8]) -> GsResult<()> {
        let fresh = Self::from_bytes(self.rows, self.cols, self.group, bytes)?;
        self.entries = fresh.entries;
        Ok(())
    }
}

/// A grid whose cells are matrices of one uniform inner shape and domain.
#[derive(Clone, Debug)]
pub struct FatMatrix<E: Pairing> {
    rows: usize,
    cols: usize,
    inner_rows: usize,
    inner_cols: usize,
    group: GroupId,
    cells: Vec<Matrix<E>>,
}

impl<E: Pairing> PartialEq for FatMatrix<E> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.inner_rows == other.inner_rows
            && self.inner_cols == other.inner_cols
            && self.group == other.group
            && self.cells == other.cells
    }
}
impl<E: Pairing> Eq for FatMatrix<E> {}

impl<E: Pairing> FatMatrix<E> {
    /// A fat matrix of zero-filled inner matrices.
    pub fn new(
        rows: usize,
        cols: usize,
        inner_rows: usize,
        inner_cols: usize,
        group: GroupId,
    ) -> Self {
        FatMatrix {
            rows,
            cols,
            inner_rows,
            inner_cols,
            group,
            cells: vec![Matrix::new(inner_rows, inner_cols, group); rows * cols],
        }
    }

    /// An `n x 1` fat column from a non-empty list of same-shape cells.
    pub fn from_column(cells: Vec<Matrix<E>>) -> GsResult<Self> {
        if cells.is_empty() {
            return Err(GsError::DimensionMismatch {
                lhs_rows: 0,
                lhs_cols: 1,
                rhs_rows: 1,
                rhs_cols: 1,
            });
        }
        let (inner_rows, inner_cols, group) = (cells[0].rows, cells[0].cols, cells[0].group);
        for c in &cells {
            if c.rows != inner_rows || c.cols != inner_cols {
                return Err(GsError::DimensionMismatch {
                    lhs_rows: inner_rows,
                    lhs_cols: inner_cols,
                    rhs_rows: c.rows,
                    rhs_cols: c.cols,
                });
            }
            if c.group != group {
                return Err(GsError::FieldMismatch {
                    expected: group,
                    actual: c.group,
                });
            }
        }
        Ok(FatMatrix {
            rows: cells.len(),
            cols: 1,
            inner_rows,
            inner_cols,
            group,
            cells,
        })
    }

    /// Internal constructor for fat columns whose uniformity holds by construction.
    pub(crate) fn column_unchecked(cells: Vec<Matrix<E>>) -> Self {
        debug_assert!(!cells.is_empty());
        debug_assert!(cells
            .iter()
            .all(|c| c.rows == cells[0].rows && c.cols == cells[0].cols && c.group == cells[0].group));
        FatMatrix {
            rows: cells.len(),
            cols: 1,
            inner_rows: cells[0].rows,
            inner_cols: cells[0].cols,
            group: cells[0].group,
            cells,
        }
    }

    /// The 1x1 fat wrapper around a single inner matrix.
    pub fn from_inner(cell: &Matrix<E>) -> Self {
        FatMatrix {
            rows: 1,
            cols: 1,
            inner_rows: cell.rows,
            inner_cols: cell.cols,
            group: cell.group,
            cells: vec![cell.clone()],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn inner_rows(&self) -> usize {
        self.inner_rows
    }

    pub fn inner_cols(&self) -> usize {
        self.inner_cols
    }

    pub fn group(&self) -> GroupId {
        self.group
    }

    fn offset(&self, i: usize, j: usize) -> GsResult<usize> {
        if i == 0 || j == 0 || i > self.rows || j > self.cols {
            return Err(GsError::IndexOutOfRange {
                row: i,
                col: j,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok((i - 1) * self.cols + (j - 1))
    }

    /// 1-indexed cell access.
    pub fn get(&self, i: usize, j: usize) -> GsResult<&Matrix<E>> {
        let k = self.offset(i, j)?;
        Ok(&self.cells[k])
    }

    /// 1-indexed cell assignment; the cell must match the inner shape and domain.
    pub fn set(&mut self, i: usize, j: usize, cell: &Matrix<E>) -> GsResult<()> {
        if cell.rows != self.inner_rows || cell.cols != self.inner_cols {
            return Err(GsError::DimensionMismatch {
                lhs_rows: self.inner_rows,
                lhs_cols: self.inner_cols,
                rhs_rows: cell.rows,
                rhs_cols: cell.cols,
            });
        }
        if cell.group != self.group {
            return Err(GsError::FieldMismatch {
                expected: self.group,
                actual: cell.group,
            });
        }
        let k = self.offset(i, j)?;
        self.cells[k] = cell.clone();
        Ok(())
    }

    fn check_same_shape(&self, other: &Self) -> GsResult<()> {
        if self.rows != other.rows
            || self.cols != other.cols
            || self.inner_rows != other.inner_rows
            || self.inner_cols != other.inner_cols
        {
            return Err(GsError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        if self.group != other.group {
            return Err(GsError::FieldMismatch {
                expected: self.group,
                actual: other.group,
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Self) -> GsResult<Self> {
        self.check_same_shape(other)?;
        let cells = self
            .cells
            .iter()
            .zip(&other.cells)
            .map(|(a, b)| a.add(b))
            .collect::<GsResult<Vec<_>>>()?;
        Ok(FatMatrix {
            cells,
            ..self.clone()
        })
    }

    pub fn sub(&self, other: &Self) -> GsResult<Self> {
        self.check_same_shape(other)?;
        let cells = self
            .cells
            .iter()
            .zip(&other.cells)
            .map(|(a, b)| a.sub(b))
            .collect::<GsResult<Vec<_>>>()?;
        Ok(FatMatrix {
            cells,
            ..self.clone()
        })
    }

    pub fn neg(&self) -> Self {
        FatMatrix {
            cells: self.cells.iter().map(|c| c.neg()).collect(),
            ..self.clone()
        }
    }

    pub fn transpose(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                cells.push(self.cells[i * self.cols + j].clone());
            }
        }
        FatMatrix {
            rows: self.cols,
            cols: self.rows,
            cells,
            ..self.clone()
        }
    }

    /// The sole inner matrix of a 1x1 fat matrix.
    pub fn flatten(&self) -> GsResult<Matrix<E>> {
        if self.rows != 1 || self.cols != 1 {
            return Err(GsError::FlattenShape {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.cells[0].clone())
    }

    /// The bilinear evaluator used by every verifier: for two fat columns of
    /// equal length, the sum over rows of [`Matrix::pairing`] applied to the
    /// paired cells. Yields a 2x2 `GT` matrix.
    pub fn pairing_sum(&self, other: &FatMatrix<E>) -> GsResult<Matrix<E>> {
        if self.cols != 1 || other.cols != 1 || self.rows != other.rows {
            return Err(GsError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        let mut acc = Matrix::new(2, 2, GroupId::Gt);
        for i in 0..self.rows {
            acc = acc.add(&self.cells[i].pairing(&other.cells[i])?)?;
        }
        Ok(acc)
    }

    /// Row-major concatenation of the cells' byte forms; shape and domain
    /// travel out-of-band.
    pub fn to_bytes(&self) -> GsResult<Vec<u8>> {
        let mut out = Vec::new();
        for c in &self.cells {
            out.extend_from_slice(&c.to_bytes()?);
        }
        Ok(out)
    }

    /// Rebuilds a fat matrix of the given outer/inner shape and domain.
    pub fn from_bytes(
        rows: usize,
        cols: usize,
        inner_rows: usize,
        inner_cols: usize,
        group: GroupId,
        bytes: &[u8],
    ) -> GsResult<Self> {
        let cell_len = inner_rows * inner_cols * Element::<E>::encoded_len(group);
        if bytes.len() != rows * cols * cell_len {
            return Err(GsError::Serialization(format!(
                "expected {} bytes for a {}x{} fat {:?} matrix, got {}",
                rows * cols * cell_len,
                rows,
                cols,
                group,
                bytes.len()
            )));
        }
        let cells = bytes
            .chunks(cell_len)
            .map(|chunk| Matrix::from_bytes(inner_rows, inner_cols, group, chunk))
            .collect::<GsResult<Vec<_>>>()?;
        Ok(FatMatrix {
            rows,
            cols,
            inner_rows,
            inner_cols,
            group,
            cells,
        })
    }
}

/// The linear map `iota_b` into the commitment module: `x -> (0, x)^T`.
pub fn linear_map<E: Pairing>(x: &Element<E>) -> GsResult<Matrix<E>> {
    match x.group() {
        GroupId::G1 | GroupId::G2 => {
            let mut m = Matrix::new(2, 1, x.group());
            m.set(2, 1, x)?;
            Ok(m)
        }
        g => Err(GsError::FieldMismatch {
            expected: GroupId::G1,
            actual: g,
        }),
    }
}

/// Lifts every entry of a column of group elements through [`linear_map`].
pub fn batch_linear_map<E: Pairing>(vars: &Matrix<E>) -> GsResult<FatMatrix<E>> {
    vars.fat_map(2, 1, |e| linear_map(e))
}

/// The scalar linear map `iota'_b`: `z -> (u2 + iota(G)) * z` when lifting
/// into `B1`, and `z -> (v2 + iota(H)) * z` when lifting into `B2`.
pub fn scalar_linear_map<E: Pairing>(
    group: GroupId,
    z: &Element<E>,
    crs: &CRS<E>,
) -> GsResult<Matrix<E>> {
    let z = z.as_scalar()?;
    let base = match group {
        GroupId::G1 => crs.u2.add(&linear_map(&Element::G1(crs.g1_gen))?)?,
        GroupId::G2 => crs.v2.add(&linear_map(&Element::G2(crs.g2_gen))?)?,
        g => {
            return Err(GsError::FieldMismatch {
                expected: GroupId::G1,
                actual: g,
            })
        }
    };
    Ok(base.scale(z))
}

/// Lifts every entry of a `Zr` column through [`scalar_linear_map`].
pub fn batch_scalar_linear_map<E: Pairing>(
    group: GroupId,
    vars: &Matrix<E>,
    crs: &CRS<E>,
) -> GsResult<FatMatrix<E>> {
    vars.fat_map(2, 1, |e| scalar_linear_map(group, e, crs))
}

/// Target embedding for pairing-product equations: `t` lands at cell (2, 2)
/// of the 2x2 `GT` grid.
pub fn linear_map_ppe<E: Pairing>(t: &Element<E>) -> GsResult<Matrix<E>> {
    let mut m = Matrix::new(2, 2, GroupId::Gt);
    m.set(2, 2, t)?;
    Ok(m)
}

/// Target embedding for multi-scalar equations in `G1`: `F(iota_1(T), iota'_2(1))`.
pub fn linear_map_msmeg1<E: Pairing>(t: &Element<E>, crs: &CRS<E>) -> GsResult<Matrix<E>> {
    let one = Element::Zr(E::ScalarField::one());
    linear_map(t)?.pairing(&scalar_linear_map(GroupId::G2, &one, crs)?)
}

/// Target embedding for multi-scalar equations in `G2`: `F(iota'_1(1), iota_2(T))`.
pub fn linear_map_msmeg2<E: Pairing>(t: &Element<E>, crs: &CRS<E>) -> GsResult<Matrix<E>> {
    let one = Element::Zr(E::ScalarField::one());
    scalar_linear_map(GroupId::G1, &one, crs)?.pairing(&linear_map(t)?)
}

/// Target embedding for quadratic equations: `F(iota'_1(t), iota'_2(1))`.
pub fn linear_map_quad<E: Pairing>(t: &Element<E>, crs: &CRS<E>) -> GsResult<Matrix<E>> {
    let one = Element::Zr(E::ScalarField::one());
    scalar_linear_map(GroupId::G1, t, crs)?.pairing(&scalar_linear_map(GroupId::G2, &one, crs)?)
}
