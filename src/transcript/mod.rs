// Copyright 2019. The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! Fiat-Shamir challenge derivation.
//!
//! The verifiers never hash anything themselves. They ask an injected [`ChallengeOracle`] for each challenge, naming
//! the call site with one of the labels below, so the hashing scheme can be swapped (or replaced with a fixed oracle
//! in tests) without touching verification logic. Prover and verifier must use the same oracle, bit for bit.

use crate::group::GroupElement;

mod domain_separated;
mod merlin_transcript;

pub use self::{
    domain_separated::{ChallengeDomain, DefaultChallenges, DomainSeparatedChallenges},
    merlin_transcript::MerlinChallenges,
};

/// Challenge `x_i` of an inner product round, derived from `(L_i, c, R_i)`
pub const INNER_PRODUCT_ROUND_LABEL: &str = "inner_product_round";
/// Challenge `y`, derived from `(V, A, S)`
pub const RANGE_Y_LABEL: &str = "range_y";
/// Challenge `z`, derived from `y` alone
pub const RANGE_Z_LABEL: &str = "range_z";
/// Challenge `x`, derived from `(T1, T2)`
pub const RANGE_X_LABEL: &str = "range_x";
/// The inner product generator challenge, derived from `(tau_x, mu, t)`
pub const RANGE_U_LABEL: &str = "range_u";

/// A deterministic map from an ordered list of public protocol values to a scalar modulo the group order.
///
/// Implementations must be pure: the same label and inputs always give the same scalar, and distinct labels must give
/// independent outputs.
pub trait ChallengeOracle<G: GroupElement> {
    /// Derive a challenge from group elements
    fn challenge_from_points(&self, label: &'static str, points: &[G]) -> G::Scalar;

    /// Derive a challenge from scalars
    fn challenge_from_scalars(&self, label: &'static str, scalars: &[G::Scalar]) -> G::Scalar;
}

impl<G: GroupElement, T: ChallengeOracle<G>> ChallengeOracle<G> for &T {
    fn challenge_from_points(&self, label: &'static str, points: &[G]) -> G::Scalar {
        (**self).challenge_from_points(label, points)
    }

    fn challenge_from_scalars(&self, label: &'static str, scalars: &[G::Scalar]) -> G::Scalar {
        (**self).challenge_from_scalars(label, scalars)
    }
}
