// Copyright 2019 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! General definition of the prime-order group the verifiers run over. The traits defined here are used by the
//! verification logic exclusively (as opposed to any specific curve implementation), so that the same code runs over
//! Ristretto in production and over a small modular group in tests.

use core::{
    fmt::Debug,
    ops::{Add, Mul, Neg, Sub},
};

/// An integer modulo the group order `q`. All protocol arithmetic happens in this type, so every scalar that reaches a
/// group multiplication is already reduced.
pub trait GroupScalar:
    Copy
    + Debug
    + PartialEq
    + Eq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity
    fn zero() -> Self;

    /// The multiplicative identity
    fn one() -> Self;

    /// Reduce a machine integer modulo `q`
    fn from_u64(value: u64) -> Self;

    /// The multiplicative inverse, or `None` if the scalar has no inverse modulo `q`
    fn invert(&self) -> Option<Self>;

    /// Map uniformly random bytes (typically a 64-byte hash output) to a scalar modulo `q`
    fn from_hash_bytes(bytes: &[u8; 64]) -> Self;

    /// The canonical byte encoding of the scalar, as fed into challenge derivation
    fn to_bytes(&self) -> Vec<u8>;

    /// Raise the scalar to a machine integer power using square-and-multiply
    fn pow(&self, exponent: u64) -> Self {
        let mut result = Self::one();
        let mut base = *self;
        let mut e = exponent;
        while e > 0 {
            if e & 1 == 1 {
                result = result * base;
            }
            base = base * base;
            e >>= 1;
        }
        result
    }

    /// Compute `2^exponent` modulo `q`
    fn pow2(exponent: usize) -> Self {
        Self::from_u64(2).pow(exponent as u64)
    }
}

/// An element of a cyclic group of prime order `q`, written additively.
pub trait GroupElement:
    Copy
    + Debug
    + PartialEq
    + Eq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<<Self as GroupElement>::Scalar, Output = Self>
{
    /// The scalars this group is multiplied by
    type Scalar: GroupScalar;

    /// The group identity
    fn identity() -> Self;

    /// The canonical byte encoding of the element, as fed into challenge derivation and shown in diagnostics
    fn to_bytes(&self) -> Vec<u8>;

    /// Multiplies each of the items in `scalars` by their respective item in `points` and then adds the results.
    /// Both slices must have the same length; callers check this.
    ///
    /// Backends with a dedicated multiscalar multiplication should override this.
    fn multiscalar_mul(scalars: &[Self::Scalar], points: &[Self]) -> Self {
        debug_assert_eq!(scalars.len(), points.len());
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            scalars
                .par_iter()
                .zip(points.par_iter())
                .map(|(s, p)| *p * *s)
                .reduce(Self::identity, |acc, p| acc + p)
        }
        #[cfg(not(feature = "parallel"))]
        {
            scalars
                .iter()
                .zip(points.iter())
                .fold(Self::identity(), |acc, (s, p)| acc + *p * *s)
        }
    }
}
