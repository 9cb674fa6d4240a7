// Copyright 2019. The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! An honest (and, on request, dishonest) prover so that the verifiers can be tested end to end. It makes no attempt
//! at constant-time behaviour and must never leave the test build.

use rand_core::RngCore;

use crate::{
    generators::{GeneratorParams, VectorBase},
    group::{GroupElement, GroupScalar},
    inner_product::InnerProductProof,
    range_proof::RangeProof,
    transcript::{
        ChallengeOracle,
        INNER_PRODUCT_ROUND_LABEL,
        RANGE_U_LABEL,
        RANGE_X_LABEL,
        RANGE_Y_LABEL,
        RANGE_Z_LABEL,
    },
    vectors::{FieldVector, GeneratorVector},
};

pub(crate) fn random_scalar<S: GroupScalar, R: RngCore>(rng: &mut R) -> S {
    let mut bytes = [0u8; 64];
    rng.fill_bytes(&mut bytes);
    S::from_hash_bytes(&bytes)
}

pub(crate) fn random_scalars<S: GroupScalar, R: RngCore>(n: usize, rng: &mut R) -> Vec<S> {
    (0..n).map(|_| random_scalar(rng)).collect()
}

/// An oracle that answers every query with the same scalar
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedChallenges<S>(S);

impl<S> FixedChallenges<S> {
    pub fn new(challenge: S) -> Self {
        Self(challenge)
    }
}

impl<G: GroupElement> ChallengeOracle<G> for FixedChallenges<G::Scalar> {
    fn challenge_from_points(&self, _label: &'static str, _points: &[G]) -> G::Scalar {
        self.0
    }

    fn challenge_from_scalars(&self, _label: &'static str, _scalars: &[G::Scalar]) -> G::Scalar {
        self.0
    }
}

fn inner<S: GroupScalar>(a: &[S], b: &[S]) -> S {
    a.iter().zip(b.iter()).fold(S::zero(), |acc, (x, y)| acc + *x * *y)
}

/// Prove knowledge of `a`, `b` opening `P = <a, Gs> + <b, Hs> + <a, b>.H`. Returns `P` and the proof.
pub(crate) fn prove_inner_product<G, T>(
    oracle: &T,
    base: &VectorBase<G>,
    mut a: Vec<G::Scalar>,
    mut b: Vec<G::Scalar>,
) -> (G, InnerProductProof<G>)
where
    G: GroupElement,
    T: ChallengeOracle<G>,
{
    let h = *base.H();
    let mut gs = base.gs().as_slice().to_vec();
    let mut hs = base.hs().as_slice().to_vec();
    let target = G::multiscalar_mul(&a, &gs) + G::multiscalar_mul(&b, &hs) + h * inner(&a, &b);

    let mut c = target;
    let mut ls = Vec::new();
    let mut rs = Vec::new();
    while a.len() > 1 {
        let half = a.len() / 2;
        let (a_lo, a_hi) = a.split_at(half);
        let (b_lo, b_hi) = b.split_at(half);
        let (g_lo, g_hi) = gs.split_at(half);
        let (h_lo, h_hi) = hs.split_at(half);

        let l = G::multiscalar_mul(a_lo, g_hi) + G::multiscalar_mul(b_hi, h_lo) + h * inner(a_lo, b_hi);
        let r = G::multiscalar_mul(a_hi, g_lo) + G::multiscalar_mul(b_lo, h_hi) + h * inner(a_hi, b_lo);
        let x = oracle.challenge_from_points(INNER_PRODUCT_ROUND_LABEL, &[l, c, r]);
        let x_inv = x.invert().expect("challenge is invertible");
        c = l * (x * x) + r * (x_inv * x_inv) + c;

        let next_a = (0..half).map(|i| a_lo[i] * x + a_hi[i] * x_inv).collect();
        let next_b = (0..half).map(|i| b_lo[i] * x_inv + b_hi[i] * x).collect();
        let next_gs = (0..half).map(|i| g_lo[i] * x_inv + g_hi[i] * x).collect();
        let next_hs = (0..half).map(|i| h_lo[i] * x + h_hi[i] * x_inv).collect();
        a = next_a;
        b = next_b;
        gs = next_gs;
        hs = next_hs;
        ls.push(l);
        rs.push(r);
    }
    let proof = InnerProductProof::new(ls, rs, a[0], b[0]).expect("L and R have equal length");
    (target, proof)
}

/// Prove that `value` lies in `[0, 2^n)`. Panics if it does not.
pub(crate) fn prove_range<G, T, R>(
    oracle: &T,
    params: &GeneratorParams<G>,
    value: u64,
    rng: &mut R,
) -> (G, RangeProof<G>)
where
    G: GroupElement,
    T: ChallengeOracle<G>,
    R: RngCore,
{
    let n = params.bit_length();
    assert!(n >= 64 || value < (1u64 << n), "{} does not fit in {} bits", value, n);
    prove_range_unchecked(oracle, params, value, rng)
}

/// Run the range prover on any value. Only the low `n` bits of `value` are used for the bit vector, while the
/// commitment is to the full value, so out of range values produce proofs that must be rejected.
pub(crate) fn prove_range_unchecked<G, T, R>(
    oracle: &T,
    params: &GeneratorParams<G>,
    value: u64,
    rng: &mut R,
) -> (G, RangeProof<G>)
where
    G: GroupElement,
    T: ChallengeOracle<G>,
    R: RngCore,
{
    let n = params.bit_length();
    let vector_base = params.vector_base();
    let base = params.base();
    let one = G::Scalar::one();

    let gamma = random_scalar(rng);
    let commitment = base.commit_value(value, gamma);

    let a_l: Vec<G::Scalar> = (0..n)
        .map(|i| if i < 64 && (value >> i) & 1 == 1 { one } else { G::Scalar::zero() })
        .collect();
    let a_r: Vec<G::Scalar> = a_l.iter().map(|bit| *bit - one).collect();
    let alpha = random_scalar(rng);
    let a = base.h * alpha
        + G::multiscalar_mul(&a_l, vector_base.gs().as_slice())
        + G::multiscalar_mul(&a_r, vector_base.hs().as_slice());

    let s_l: Vec<G::Scalar> = random_scalars(n, rng);
    let s_r: Vec<G::Scalar> = random_scalars(n, rng);
    let rho = random_scalar(rng);
    let s = base.h * rho
        + G::multiscalar_mul(&s_l, vector_base.gs().as_slice())
        + G::multiscalar_mul(&s_r, vector_base.hs().as_slice());

    let y = oracle.challenge_from_points(RANGE_Y_LABEL, &[commitment, a, s]);
    let z = oracle.challenge_from_scalars(RANGE_Z_LABEL, &[y]);
    let z_squared = z * z;
    let ys = FieldVector::powers(n, y);
    let twos = FieldVector::<G::Scalar>::powers_of_two(n);

    // l(X) = l0 + l1.X, r(X) = r0 + r1.X
    let l0: Vec<G::Scalar> = a_l.iter().map(|bit| *bit - z).collect();
    let l1 = s_l;
    let r0: Vec<G::Scalar> = (0..n)
        .map(|i| ys.as_slice()[i] * (a_r[i] + z) + z_squared * twos.as_slice()[i])
        .collect();
    let r1: Vec<G::Scalar> = (0..n).map(|i| ys.as_slice()[i] * s_r[i]).collect();

    let t1 = inner(&l0, &r1) + inner(&l1, &r0);
    let t2 = inner(&l1, &r1);
    let tau_1 = random_scalar(rng);
    let tau_2 = random_scalar(rng);
    let t_commits = GeneratorVector::new(vec![base.commit(t1, tau_1), base.commit(t2, tau_2)]);
    let x = oracle.challenge_from_points(RANGE_X_LABEL, t_commits.as_slice());

    let l: Vec<G::Scalar> = (0..n).map(|i| l0[i] + l1[i] * x).collect();
    let r: Vec<G::Scalar> = (0..n).map(|i| r0[i] + r1[i] * x).collect();
    let t = inner(&l, &r);
    let tau_x = tau_2 * x * x + tau_1 * x + z_squared * gamma;
    let mu = alpha + rho * x;

    let u = base.g * oracle.challenge_from_scalars(RANGE_U_LABEL, &[tau_x, mu, t]);
    let inverse_ys = ys.invert().expect("y is invertible");
    let h_primes = vector_base.hs().hadamard(&inverse_ys).expect("lengths match");
    let product_base = VectorBase::new(vector_base.gs().clone(), h_primes, u).expect("valid base");
    let (_, product_proof) = prove_inner_product(oracle, &product_base, l, r);

    let proof = RangeProof::new(a, s, t_commits, tau_x, mu, t, product_proof).expect("two T commitments");
    (commitment, proof)
}

#[cfg(test)]
mod test {
    use curve25519_dalek::scalar::Scalar;
    use rand_chacha::ChaCha12Rng;
    use rand_core::SeedableRng;

    use super::*;
    use crate::{ristretto::generators::generator_params, transcript::DefaultChallenges};

    #[test]
    fn inner_product_target_matches_definition() {
        let base = generator_params(4).unwrap().vector_base().clone();
        let mut rng = ChaCha12Rng::seed_from_u64(12345);
        let a: Vec<Scalar> = random_scalars(4, &mut rng);
        let b: Vec<Scalar> = random_scalars(4, &mut rng);
        let (target, proof) = prove_inner_product(&DefaultChallenges::new(), &base, a.clone(), b.clone());
        let expected = base.gs().commit(&FieldVector::new(a.clone())).unwrap()
            + base.hs().commit(&FieldVector::new(b.clone())).unwrap()
            + *base.H() * inner(&a, &b);
        assert_eq!(target, expected);
        assert_eq!(proof.rounds(), 2);
    }

    #[test]
    fn range_proofs_are_deterministic_for_a_seed() {
        let params = generator_params(8).unwrap();
        let oracle = DefaultChallenges::new();
        let first = prove_range(&oracle, &params, 9, &mut ChaCha12Rng::seed_from_u64(1));
        let second = prove_range(&oracle, &params, 9, &mut ChaCha12Rng::seed_from_u64(1));
        assert_eq!(first, second);
    }
}
