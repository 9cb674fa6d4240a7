// Copyright 2019. The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! Fixed-length vectors of scalars and of generators.
//!
//! [`GeneratorVector::commit`] is the multiscalar multiplication that dominates verification cost:
//! $$ \mathrm{commit}(\mathbf{G}, \mathbf{s}) = \sum_i s_i \cdot G_i $$

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::ProofError,
    group::{GroupElement, GroupScalar},
};

fn check_lengths(operation: &str, left: usize, right: usize) -> Result<(), ProofError> {
    if left != right {
        return Err(ProofError::MalformedInput(format!(
            "{} requires vectors of equal length, got {} and {}",
            operation, left, right
        )));
    }
    Ok(())
}

/// An ordered, fixed-length sequence of scalars
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldVector<S> {
    elements: Vec<S>,
}

impl<S: GroupScalar> FieldVector<S> {
    pub fn new(elements: Vec<S>) -> Self {
        Self { elements }
    }

    /// `len` elements, the first being `start` and each subsequent one produced by applying `step` to its predecessor
    pub fn iterate<F>(len: usize, start: S, step: F) -> Self
    where F: Fn(S) -> S {
        let mut elements = Vec::with_capacity(len);
        let mut current = start;
        for _ in 0..len {
            elements.push(current);
            current = step(current);
        }
        Self { elements }
    }

    /// `(1, x, x^2, ..., x^(len-1))`
    pub fn powers(len: usize, x: S) -> Self {
        Self::iterate(len, S::one(), |acc| acc * x)
    }

    /// `(1, 2, 4, ..., 2^(len-1))`, each reduced mod `q`
    pub fn powers_of_two(len: usize) -> Self {
        Self::iterate(len, S::one(), |acc| acc + acc)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn as_slice(&self) -> &[S] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.elements.iter()
    }

    /// Scale every element by `factor`
    pub fn times(&self, factor: S) -> Self {
        Self::new(self.elements.iter().map(|e| *e * factor).collect())
    }

    /// Elementwise product
    pub fn hadamard(&self, other: &Self) -> Result<Self, ProofError> {
        check_lengths("Hadamard product", self.len(), other.len())?;
        Ok(Self::new(
            self.elements
                .iter()
                .zip(other.elements.iter())
                .map(|(a, b)| *a * *b)
                .collect(),
        ))
    }

    /// Elementwise sum
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Self) -> Result<Self, ProofError> {
        check_lengths("Vector addition", self.len(), other.len())?;
        Ok(Self::new(
            self.elements
                .iter()
                .zip(other.elements.iter())
                .map(|(a, b)| *a + *b)
                .collect(),
        ))
    }

    /// Elementwise inverse. Returns `None` if any element is not invertible.
    pub fn invert(&self) -> Option<Self> {
        self.elements
            .iter()
            .map(|e| e.invert())
            .collect::<Option<Vec<S>>>()
            .map(Self::new)
    }

    /// The same elements in reverse order
    pub fn reverse(&self) -> Self {
        Self::new(self.elements.iter().rev().copied().collect())
    }

    pub fn sum(&self) -> S {
        self.elements.iter().fold(S::zero(), |acc, e| acc + *e)
    }

    /// The inner product with `other`
    pub fn inner_product(&self, other: &Self) -> Result<S, ProofError> {
        Ok(self.hadamard(other)?.sum())
    }
}

/// An ordered, fixed-length sequence of group elements
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneratorVector<G> {
    generators: Vec<G>,
}

impl<G: GroupElement> GeneratorVector<G> {
    pub fn new(generators: Vec<G>) -> Self {
        Self { generators }
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    pub fn as_slice(&self) -> &[G] {
        &self.generators
    }

    /// Σ scalars_i · generators_i
    pub fn commit(&self, scalars: &FieldVector<G::Scalar>) -> Result<G, ProofError> {
        check_lengths("Vector commitment", self.len(), scalars.len())?;
        Ok(G::multiscalar_mul(scalars.as_slice(), &self.generators))
    }

    /// Σ generators_i
    pub fn sum(&self) -> G {
        self.generators.iter().fold(G::identity(), |acc, g| acc + *g)
    }

    /// Multiply each generator by the scalar at the same index
    pub fn hadamard(&self, scalars: &FieldVector<G::Scalar>) -> Result<Self, ProofError> {
        check_lengths("Generator Hadamard product", self.len(), scalars.len())?;
        #[cfg(feature = "parallel")]
        let generators = self
            .generators
            .par_iter()
            .zip(scalars.as_slice().par_iter())
            .map(|(g, s)| *g * *s)
            .collect();
        #[cfg(not(feature = "parallel"))]
        let generators = self
            .generators
            .iter()
            .zip(scalars.iter())
            .map(|(g, s)| *g * *s)
            .collect();
        Ok(Self::new(generators))
    }
}
