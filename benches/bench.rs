#![allow(non_snake_case)]

use criterion::{criterion_group, criterion_main, Criterion};

use std::time::Duration;

use ark_bls12_381::Bls12_381 as F;
use ark_ec::pairing::Pairing;
use ark_std::str::FromStr;
use ark_std::{test_rng, UniformRand};

use gs_sxdh::data_structures::{Element, GroupId, Matrix};
use gs_sxdh::prover::Provable;
use gs_sxdh::statement::PPE;
use gs_sxdh::verifier::Verifiable;
use gs_sxdh::CRS;

type Fr = <F as Pairing>::ScalarField;

fn ppe_equation(crs: &CRS<F>, rng: &mut impl ark_std::rand::Rng) -> (PPE<F>, Matrix<F>, Matrix<F>) {
    // e(X_2, c_2) * e(c_1, Y_1) * e(X_1, Y_1)^5 = t
    let xvars = Matrix::<F>::from_column(vec![
        Element::G1(crs.g1_gen).mul_zn(&Fr::from_str("2").unwrap()),
        Element::G1(crs.g1_gen).mul_zn(&Fr::from_str("3").unwrap()),
    ])
    .unwrap();
    let yvars = Matrix::<F>::from_column(vec![
        Element::G2(crs.g2_gen).mul_zn(&Fr::from_str("4").unwrap()),
    ])
    .unwrap();

    let a_consts = Matrix::<F>::from_column(vec![
        Element::G1(crs.g1_gen).mul_zn(&Fr::rand(rng)),
    ])
    .unwrap();
    let b_consts = Matrix::<F>::from_column(vec![
        Element::zero(GroupId::G2),
        Element::G2(crs.g2_gen).mul_zn(&Fr::rand(rng)),
    ])
    .unwrap();
    let gamma = Matrix::<F>::from_rows(vec![
        vec![Element::Zr(Fr::from_str("5").unwrap())],
        vec![Element::Zr(Fr::from_str("0").unwrap())],
    ])
    .unwrap();

    let target = xvars
        .get(2, 1)
        .unwrap()
        .pair(b_consts.get(2, 1).unwrap())
        .unwrap()
        .add(
            &a_consts
                .get(1, 1)
                .unwrap()
                .pair(yvars.get(1, 1).unwrap())
                .unwrap(),
        )
        .unwrap()
        .add(
            &xvars
                .get(1, 1)
                .unwrap()
                .pair(
                    &yvars
                        .get(1, 1)
                        .unwrap()
                        .mul_zn(gamma.get(1, 1).unwrap().as_scalar().unwrap()),
                )
                .unwrap(),
        )
        .unwrap();

    let equ = PPE::<F> {
        a_consts,
        b_consts,
        gamma,
        target,
    };
    (equ, xvars, yvars)
}

fn bench_crs_generation(c: &mut Criterion) {
    c.bench_function("CRS::generate_crs", |b| {
        let mut rng = test_rng();
        b.iter(|| CRS::<F>::generate_crs(&mut rng))
    });
}

fn bench_ppe_commit_and_prove(c: &mut Criterion) {
    let mut rng = test_rng();
    let crs = CRS::<F>::generate_crs(&mut rng);
    let (equ, xvars, yvars) = ppe_equation(&crs, &mut rng);

    c.bench_function("PPE::commit_and_prove (m = 2, n = 1)", |b| {
        b.iter(|| equ.commit_and_prove(&xvars, &yvars, &crs, &mut rng).unwrap())
    });
}

fn bench_ppe_verify(c: &mut Criterion) {
    let mut rng = test_rng();
    let crs = CRS::<F>::generate_crs(&mut rng);
    let (equ, xvars, yvars) = ppe_equation(&crs, &mut rng);
    let proof = equ
        .commit_and_prove(&xvars, &yvars, &crs, &mut rng)
        .unwrap();

    c.bench_function("PPE::verify (m = 2, n = 1)", |b| {
        b.iter(|| assert!(equ.verify(&proof, &crs).unwrap()))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10)).sample_size(10);
    targets = bench_crs_generation, bench_ppe_commit_and_prove, bench_ppe_verify
}
criterion_main!(benches);
