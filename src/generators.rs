// Copyright 2019. The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! Public parameters: the Pedersen base used to commit to the secret value, and the vector base the inner product
//! argument runs over.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::ProofError,
    group::{GroupElement, GroupScalar},
    vectors::GeneratorVector,
};

/// Generates Pedersen commitments `value.g + blinding.h`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PedersenBase<G> {
    /// The generator for the committed value
    pub g: G,
    /// The generator for the blinding factor
    pub h: G,
}

impl<G: GroupElement> PedersenBase<G> {
    pub fn new(g: G, h: G) -> Self {
        Self { g, h }
    }

    /// Create a commitment to `value` with the blinding factor `blinding`
    pub fn commit(&self, value: G::Scalar, blinding: G::Scalar) -> G {
        G::multiscalar_mul(&[value, blinding], &[self.g, self.h])
    }

    /// Create a commitment from an integer value
    pub fn commit_value(&self, value: u64, blinding: G::Scalar) -> G {
        self.commit(G::Scalar::from_u64(value), blinding)
    }

    /// Test whether the given value and blinding factor open the given commitment
    pub fn open(&self, value: G::Scalar, blinding: G::Scalar, commitment: &G) -> bool {
        self.commit(value, blinding) == *commitment
    }
}

/// Two generator vectors `(Gs, Hs)` of equal power-of-two length, plus the generator `H` that carries the inner
/// product term.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(non_snake_case)]
pub struct VectorBase<G> {
    gs: GeneratorVector<G>,
    hs: GeneratorVector<G>,
    H: G,
}

impl<G: GroupElement> VectorBase<G> {
    /// Fails with [`ProofError::MalformedInput`] unless `gs` and `hs` have the same, power-of-two, length
    #[allow(non_snake_case)]
    pub fn new(gs: GeneratorVector<G>, hs: GeneratorVector<G>, H: G) -> Result<Self, ProofError> {
        if gs.len() != hs.len() {
            return Err(ProofError::MalformedInput(format!(
                "Gs has {} generators but Hs has {}",
                gs.len(),
                hs.len()
            )));
        }
        if !gs.len().is_power_of_two() {
            return Err(ProofError::MalformedInput(format!(
                "The vector base length must be a power of two, got {}",
                gs.len()
            )));
        }
        Ok(Self { gs, hs, H })
    }

    pub fn gs(&self) -> &GeneratorVector<G> {
        &self.gs
    }

    pub fn hs(&self) -> &GeneratorVector<G> {
        &self.hs
    }

    /// The generator for the inner product term
    #[allow(non_snake_case)]
    pub fn H(&self) -> &G {
        &self.H
    }

    /// The vector length `n`
    pub fn len(&self) -> usize {
        self.gs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gs.is_empty()
    }

    /// The number of halving rounds `log2(n)` an inner product argument over this base has
    pub fn rounds(&self) -> usize {
        self.len().trailing_zeros() as usize
    }
}

/// The full public parameter set for a range proof over `n` bits
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneratorParams<G> {
    vector_base: VectorBase<G>,
    base: PedersenBase<G>,
}

impl<G: GroupElement> GeneratorParams<G> {
    pub fn new(vector_base: VectorBase<G>, base: PedersenBase<G>) -> Self {
        Self { vector_base, base }
    }

    pub fn vector_base(&self) -> &VectorBase<G> {
        &self.vector_base
    }

    pub fn base(&self) -> &PedersenBase<G> {
        &self.base
    }

    /// The bit length `n` of the range `[0, 2^n)` these parameters prove
    pub fn bit_length(&self) -> usize {
        self.vector_base.len()
    }
}
