// Copyright 2019. The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! # Range proof verification
//!
//! A range proof convinces the verifier that a Pedersen commitment `V = v.g + gamma.h` opens to a value
//! `v` in `[0, 2^n)` without revealing `v`. The verifier checks the polynomial identity
//! $$ t.g + \tau_x.h = z^2.V + \delta(y, z).g + x.T_1 + x^2.T_2 $$
//! and then reduces the bit decomposition of `v` to a single inner product argument over the generators
//! `(Gs, Hs \circ y^{-n}, u)`.

use core::marker::PhantomData;

use log::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::ProofError,
    generators::{GeneratorParams, VectorBase},
    group::{GroupElement, GroupScalar},
    inner_product::{InnerProductProof, InnerProductVerifier},
    transcript::{ChallengeOracle, RANGE_U_LABEL, RANGE_X_LABEL, RANGE_Y_LABEL, RANGE_Z_LABEL},
    vectors::{FieldVector, GeneratorVector},
    verifier::{ensure_equal, invert_challenge, Verifier},
};

const LOG_TARGET: &str = "ct_verifier::range_proof";

/// A Bulletproofs range proof for a single commitment
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "G: Serialize, G::Scalar: Serialize",
        deserialize = "G: Deserialize<'de>, G::Scalar: Deserialize<'de>"
    ))
)]
pub struct RangeProof<G: GroupElement> {
    a: G,
    s: G,
    t_commits: GeneratorVector<G>,
    tau_x: G::Scalar,
    mu: G::Scalar,
    t: G::Scalar,
    product_proof: InnerProductProof<G>,
}

impl<G: GroupElement> RangeProof<G> {
    /// Fails with [`ProofError::MalformedInput`] unless `t_commits` holds exactly `(T1, T2)`
    pub fn new(
        a: G,
        s: G,
        t_commits: GeneratorVector<G>,
        tau_x: G::Scalar,
        mu: G::Scalar,
        t: G::Scalar,
        product_proof: InnerProductProof<G>,
    ) -> Result<Self, ProofError> {
        check_t_commits(&t_commits)?;
        Ok(Self {
            a,
            s,
            t_commits,
            tau_x,
            mu,
            t,
            product_proof,
        })
    }

    /// The commitment `A` to the bits of the value
    pub fn a(&self) -> &G {
        &self.a
    }

    /// The commitment `S` to the blinding vectors
    pub fn s(&self) -> &G {
        &self.s
    }

    /// `(T1, T2)`, the commitments to the coefficients of `t(X)`
    pub fn t_commits(&self) -> &GeneratorVector<G> {
        &self.t_commits
    }

    /// The blinding factor of `t(x)`
    pub fn tau_x(&self) -> G::Scalar {
        self.tau_x
    }

    /// The combined blinding factor of `A` and `S`
    pub fn mu(&self) -> G::Scalar {
        self.mu
    }

    /// `t(x) = <l(x), r(x)>`
    pub fn t(&self) -> G::Scalar {
        self.t
    }

    /// The inner product argument for `l(x)` and `r(x)`
    pub fn product_proof(&self) -> &InnerProductProof<G> {
        &self.product_proof
    }
}

fn check_t_commits<G: GroupElement>(t_commits: &GeneratorVector<G>) -> Result<(), ProofError> {
    if t_commits.len() != 2 {
        return Err(ProofError::MalformedInput(format!(
            "A range proof carries exactly two T commitments, got {}",
            t_commits.len()
        )));
    }
    Ok(())
}

/// Verifies range proofs for values in `[0, 2^n)`, where `n` is the bit length of the generator parameters
pub struct RangeProofVerifier<G, T> {
    oracle: T,
    _group: PhantomData<G>,
}

impl<G, T> RangeProofVerifier<G, T>
where
    G: GroupElement,
    T: ChallengeOracle<G>,
{
    pub fn new(oracle: T) -> Self {
        Self {
            oracle,
            _group: PhantomData,
        }
    }

    fn check_shape(params: &GeneratorParams<G>, proof: &RangeProof<G>) -> Result<(), ProofError> {
        let base = params.vector_base();
        let n = base.gs().len();
        if n != base.hs().len() || !n.is_power_of_two() {
            return Err(ProofError::MalformedInput(format!(
                "The bit length must be a non-zero power of two with matching generator vectors, got {} and {}",
                n,
                base.hs().len()
            )));
        }
        check_t_commits(&proof.t_commits)?;
        let rounds = proof.product_proof.rounds();
        if rounds != base.rounds() || proof.product_proof.rs().len() != rounds {
            return Err(ProofError::MalformedInput(format!(
                "A {}-bit range proof needs {} inner product rounds, the proof has {} L and {} R terms",
                n,
                base.rounds(),
                rounds,
                proof.product_proof.rs().len()
            )));
        }
        Ok(())
    }
}

impl<G, T> Verifier for RangeProofVerifier<G, T>
where
    G: GroupElement,
    T: ChallengeOracle<G>,
{
    type Input = G;
    type Params = GeneratorParams<G>;
    type Proof = RangeProof<G>;

    fn verify(&self, params: &GeneratorParams<G>, commitment: &G, proof: &RangeProof<G>) -> Result<(), ProofError> {
        if let Err(e) = Self::check_shape(params, proof) {
            warn!(target: LOG_TARGET, "Rejecting malformed range proof: {}", e);
            return Err(e);
        }
        let n = params.bit_length();
        let vector_base = params.vector_base();
        let base = params.base();
        let t1 = proof.t_commits.as_slice()[0];
        let t2 = proof.t_commits.as_slice()[1];

        let y = self
            .oracle
            .challenge_from_points(RANGE_Y_LABEL, &[*commitment, proof.a, proof.s]);
        let ys = FieldVector::powers(n, y);
        let z = self.oracle.challenge_from_scalars(RANGE_Z_LABEL, &[y]);
        let z_squared = z * z;
        let z_cubed = z_squared * z;
        let twos = FieldVector::<G::Scalar>::powers_of_two(n);
        let two_times_z_squared = twos.times(z_squared);
        let x = self.oracle.challenge_from_points(RANGE_X_LABEL, &[t1, t2]);
        trace!(target: LOG_TARGET, "Range proof challenges y = {:?}, z = {:?}, x = {:?}", y, z, x);

        // delta(y, z) = (z - z^2) <1, y^n> - (z^3 2^n - z^3)
        let k = ys.sum() * (z - z_squared) - (z_cubed * G::Scalar::pow2(n) - z_cubed);
        let lhs = base.commit(proof.t, proof.tau_x);
        let rhs = t1 * x + t2 * (x * x) + *commitment * z_squared + base.commit(k, G::Scalar::zero());
        ensure_equal("polynomial identity", &lhs, &rhs)?;

        let u_challenge = self
            .oracle
            .challenge_from_scalars(RANGE_U_LABEL, &[proof.tau_x, proof.mu, proof.t]);
        let u = base.g * u_challenge;
        let inverse_ys = FieldVector::powers(n, invert_challenge::<G>(RANGE_Y_LABEL, y)?);
        let h_primes = vector_base.hs().hadamard(&inverse_ys)?;
        let h_exp = ys.times(z).add(&two_times_z_squared)?;
        let p = proof.a + proof.s * x - vector_base.gs().sum() * z + h_primes.commit(&h_exp)? - base.h * proof.mu
            + u * proof.t;

        let product_base = VectorBase::new(vector_base.gs().clone(), h_primes, u)?;
        InnerProductVerifier::new(&self.oracle).verify(&product_base, &p, &proof.product_proof)
    }
}
