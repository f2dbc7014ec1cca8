#![allow(non_snake_case)]

#[cfg(test)]
mod commit_int_tests {

    use ark_bls12_381::Bls12_381 as F;
    use ark_std::test_rng;

    use gs_sxdh::data_structures::*;
    use gs_sxdh::prover::{commit_g1, commit_g2, commit_scalar_to_b1};
    use gs_sxdh::CRS;

    #[test]
    fn test_commitments_to_same_value_are_randomized() {
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);
        let xvars = Matrix::<F>::rand(&mut rng, 2, 1, GroupId::G1);

        let com_a = commit_g1(&xvars, None, &crs, &mut rng).unwrap();
        let com_b = commit_g1(&xvars, None, &crs, &mut rng).unwrap();
        assert_ne!(com_a.coms, com_b.coms);
    }

    #[test]
    fn test_commitment_bytes_roundtrip() {
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);
        let yvars = Matrix::<F>::rand(&mut rng, 3, 1, GroupId::G2);

        let com = commit_g2(&yvars, None, &crs, &mut rng).unwrap();
        let bytes = com.coms.to_bytes().unwrap();
        // Shape and domain travel out-of-band.
        let read_back = FatMatrix::<F>::from_bytes(3, 1, 2, 1, GroupId::G2, &bytes).unwrap();
        assert_eq!(com.coms, read_back);
    }

    #[test]
    fn test_scalar_commitment_side() {
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);
        let xvars = Matrix::<F>::rand(&mut rng, 2, 1, GroupId::Zr);

        let com = commit_scalar_to_b1(&xvars, None, &crs, &mut rng).unwrap();
        assert_eq!(com.coms.group(), GroupId::G1);
        assert_eq!((com.coms.inner_rows(), com.coms.inner_cols()), (2, 1));
    }

    #[test]
    fn test_map_commutativity() {
        // Committing under the zero randomness reduces to the linear map.
        let mut rng = test_rng();
        let crs = CRS::<F>::generate_crs(&mut rng);
        let xvars = Matrix::<F>::rand(&mut rng, 2, 1, GroupId::G1);
        let zero_rand = Matrix::<F>::new(2, 2, GroupId::Zr);

        let com = commit_g1(&xvars, Some(zero_rand), &crs, &mut rng).unwrap();
        assert_eq!(com.coms, batch_linear_map(&xvars).unwrap());
    }
}
