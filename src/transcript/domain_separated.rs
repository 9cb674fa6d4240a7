// Copyright 2019. The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use core::marker::PhantomData;

use blake2::Blake2b;
use digest::{consts::U64, Digest};

use crate::{
    group::{GroupElement, GroupScalar},
    hashing::{DomainSeparatedHash, DomainSeparatedHasher, DomainSeparation},
    transcript::ChallengeOracle,
};

crate::hash_domain!(ChallengeDomain, "com.ctverifier.challenges");

/// Challenges computed by hashing the canonical encoding of each input with a [`DomainSeparatedHasher`] labelled with
/// the call site, then reducing the 64-byte digest modulo the group order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainSeparatedChallenges<D, M> {
    _digest: PhantomData<D>,
    _domain: PhantomData<M>,
}

/// Blake2b-512 in the [`ChallengeDomain`]
pub type DefaultChallenges = DomainSeparatedChallenges<Blake2b<U64>, ChallengeDomain>;

impl<D, M> DomainSeparatedChallenges<D, M>
where
    D: Digest<OutputSize = U64>,
    M: DomainSeparation,
{
    pub fn new() -> Self {
        Self {
            _digest: PhantomData,
            _domain: PhantomData,
        }
    }

    fn to_scalar<S: GroupScalar>(hash: DomainSeparatedHash<D>) -> S {
        let mut wide = [0u8; 64];
        wide.copy_from_slice(hash.as_ref());
        S::from_hash_bytes(&wide)
    }
}

impl<D, M> Default for DomainSeparatedChallenges<D, M>
where
    D: Digest<OutputSize = U64>,
    M: DomainSeparation,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<G, D, M> ChallengeOracle<G> for DomainSeparatedChallenges<D, M>
where
    G: GroupElement,
    D: Digest<OutputSize = U64>,
    M: DomainSeparation,
{
    fn challenge_from_points(&self, label: &'static str, points: &[G]) -> G::Scalar {
        let hasher = points
            .iter()
            .fold(DomainSeparatedHasher::<D, M>::new_with_label(label), |hasher, p| {
                hasher.chain(p.to_bytes())
            });
        Self::to_scalar(hasher.finalize())
    }

    fn challenge_from_scalars(&self, label: &'static str, scalars: &[G::Scalar]) -> G::Scalar {
        let hasher = scalars
            .iter()
            .fold(DomainSeparatedHasher::<D, M>::new_with_label(label), |hasher, s| {
                hasher.chain(s.to_bytes())
            });
        Self::to_scalar(hasher.finalize())
    }
}
