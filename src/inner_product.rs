// Copyright 2019. The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! # Inner product argument verification
//!
//! The prover convinces the verifier that it knows vectors `a`, `b` of length `n = 2^k` with
//! $$ P = \langle \mathbf{a}, \mathbf{G} \rangle + \langle \mathbf{b}, \mathbf{H} \rangle + \langle \mathbf{a},
//! \mathbf{b} \rangle \cdot H $$
//! by halving the vectors `k` times. Round `i` sends the cross terms `L_i`, `R_i`, after which the statement becomes
//! `P' = x_i^2 L_i + P + x_i^{-2} R_i` over folded generators. Only the final scalars `a`, `b` are sent.
//!
//! Rather than folding the generators round by round (`O(n log n)` group operations), the verifier computes the
//! coefficient each original generator ends up with directly from the bits of its index, and checks the final
//! statement with one multiscalar multiplication per generator vector.

use core::marker::PhantomData;

use log::*;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::ProofError,
    generators::VectorBase,
    group::{GroupElement, GroupScalar},
    transcript::{ChallengeOracle, INNER_PRODUCT_ROUND_LABEL},
    vectors::FieldVector,
    verifier::{ensure_equal, invert_challenge, Verifier},
};

const LOG_TARGET: &str = "ct_verifier::inner_product";

/// The cross terms of every halving round and the two terminal scalars
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "G: Serialize, G::Scalar: Serialize",
        deserialize = "G: Deserialize<'de>, G::Scalar: Deserialize<'de>"
    ))
)]
pub struct InnerProductProof<G: GroupElement> {
    ls: Vec<G>,
    rs: Vec<G>,
    a: G::Scalar,
    b: G::Scalar,
}

impl<G: GroupElement> InnerProductProof<G> {
    /// Fails with [`ProofError::MalformedInput`] if `ls` and `rs` have different lengths
    pub fn new(ls: Vec<G>, rs: Vec<G>, a: G::Scalar, b: G::Scalar) -> Result<Self, ProofError> {
        if ls.len() != rs.len() {
            return Err(ProofError::MalformedInput(format!(
                "Inner product proof has {} L terms but {} R terms",
                ls.len(),
                rs.len()
            )));
        }
        Ok(Self { ls, rs, a, b })
    }

    /// The left cross terms `L_i`, one per round
    pub fn ls(&self) -> &[G] {
        &self.ls
    }

    /// The right cross terms `R_i`, one per round
    pub fn rs(&self) -> &[G] {
        &self.rs
    }

    /// The folded `a` vector after the last round
    pub fn a(&self) -> G::Scalar {
        self.a
    }

    /// The folded `b` vector after the last round
    pub fn b(&self) -> G::Scalar {
        self.b
    }

    /// The number of halving rounds, `log2(n)`
    pub fn rounds(&self) -> usize {
        self.ls.len()
    }
}

/// Verifies inner product arguments with `O(n)` group operations. Only works for vector bases of size `2^k`.
pub struct InnerProductVerifier<G, T> {
    oracle: T,
    _group: PhantomData<G>,
}

impl<G, T> InnerProductVerifier<G, T>
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

    fn check_shape(base: &VectorBase<G>, proof: &InnerProductProof<G>) -> Result<(), ProofError> {
        let n = base.gs().len();
        if n != base.hs().len() || !n.is_power_of_two() {
            return Err(ProofError::MalformedInput(format!(
                "Vector base must have two generator vectors of equal power-of-two length, got {} and {}",
                n,
                base.hs().len()
            )));
        }
        if proof.ls.len() != proof.rs.len() || proof.ls.len() != base.rounds() {
            return Err(ProofError::MalformedInput(format!(
                "A vector base of size {} needs {} rounds, the proof has {} L and {} R terms",
                n,
                base.rounds(),
                proof.ls.len(),
                proof.rs.len()
            )));
        }
        Ok(())
    }
}

impl<G, T> Verifier for InnerProductVerifier<G, T>
where
    G: GroupElement,
    T: ChallengeOracle<G>,
{
    type Input = G;
    type Params = VectorBase<G>;
    type Proof = InnerProductProof<G>;

    fn verify(&self, base: &VectorBase<G>, target: &G, proof: &InnerProductProof<G>) -> Result<(), ProofError> {
        if let Err(e) = Self::check_shape(base, proof) {
            warn!(target: LOG_TARGET, "Rejecting malformed inner product instance: {}", e);
            return Err(e);
        }
        let mut c = *target;
        let mut challenges = Vec::with_capacity(proof.rounds());
        let mut inverse_challenges = Vec::with_capacity(proof.rounds());
        for (l, r) in proof.ls.iter().zip(proof.rs.iter()) {
            let x = self.oracle.challenge_from_points(INNER_PRODUCT_ROUND_LABEL, &[*l, c, *r]);
            let x_inv = invert_challenge::<G>(INNER_PRODUCT_ROUND_LABEL, x)?;
            trace!(target: LOG_TARGET, "Round {} challenge {:?}", challenges.len(), x);
            c = *l * (x * x) + *r * (x_inv * x_inv) + c;
            challenges.push(x);
            inverse_challenges.push(x_inv);
        }

        let s = challenge_coefficients(&challenges, &inverse_challenges, base.len());
        let g = base.gs().commit(&s)?;
        let h = base.hs().commit(&s.reverse())?;
        let prod = proof.a * proof.b;
        let c_proof = g * proof.a + h * proof.b + *base.H() * prod;
        ensure_equal("inner product", &c, &c_proof)
    }
}

/// The coefficient each of the `n` original generators carries after folding with `challenges`.
///
/// Round `i` splits the vector on bit `k - i - 1` of the index: the upper half is scaled by `x_i`, the lower half by
/// `x_i^{-1}`. Hence bit `t` of index `j` selects `x_{k-t-1}` when set and its inverse when clear. The coefficients
/// of the `H` vector are the same values in reverse order.
pub(crate) fn challenge_coefficients<S: GroupScalar>(
    challenges: &[S],
    inverse_challenges: &[S],
    n: usize,
) -> FieldVector<S> {
    let k = challenges.len();
    let coefficient = |j: usize| {
        (0..k).fold(S::one(), |acc, t| {
            if j & (1 << t) == 0 {
                acc * inverse_challenges[k - t - 1]
            } else {
                acc * challenges[k - t - 1]
            }
        })
    };
    #[cfg(feature = "parallel")]
    let coefficients = (0..n).into_par_iter().map(coefficient).collect();
    #[cfg(not(feature = "parallel"))]
    let coefficients = (0..n).map(coefficient).collect();
    FieldVector::new(coefficients)
}
