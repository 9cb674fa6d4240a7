// Copyright 2019 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! A toy group: the multiplicative group of integers modulo a small prime `P`, with exponents reduced modulo `Q`.
//!
//! The group operation is multiplication mod `P` and "multiplying" an element by a scalar is exponentiation, so
//! everything the verifiers do can be checked by hand. It offers no security whatsoever. `Q` should be the order of
//! the subgroup the generators live in (e.g. `Q = P - 1` for the whole group, or the prime `(P - 1) / 2` for the
//! quadratic residues of a safe prime).

use core::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::group::{GroupElement, GroupScalar};

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

fn pow_mod(base: u64, mut exponent: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    let mut base = base % m;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exponent >>= 1;
    }
    result
}

/// An integer modulo `Q`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModularScalar<const Q: u64>(u64);

impl<const Q: u64> ModularScalar<Q> {
    /// Reduce `value` modulo `Q`
    pub fn new(value: u64) -> Self {
        Self(value % Q)
    }

    /// The canonical representative in `[0, Q)`
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl<const Q: u64> Add for ModularScalar<Q> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(((u128::from(self.0) + u128::from(rhs.0)) % u128::from(Q)) as u64)
    }
}

impl<const Q: u64> Sub for ModularScalar<Q> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<const Q: u64> Mul for ModularScalar<Q> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(mul_mod(self.0, rhs.0, Q))
    }
}

impl<const Q: u64> Neg for ModularScalar<Q> {
    type Output = Self;

    fn neg(self) -> Self {
        Self((Q - self.0) % Q)
    }
}

impl<const Q: u64> GroupScalar for ModularScalar<Q> {
    fn zero() -> Self {
        Self(0)
    }

    fn one() -> Self {
        Self(1 % Q)
    }

    fn from_u64(value: u64) -> Self {
        Self::new(value)
    }

    /// Extended Euclid. `Q` need not be prime, so a non-zero scalar may still have no inverse.
    fn invert(&self) -> Option<Self> {
        let (mut old_r, mut r) = (i128::from(self.0), i128::from(Q));
        let (mut old_s, mut s) = (1i128, 0i128);
        while r != 0 {
            let quotient = old_r / r;
            let next_r = old_r - quotient * r;
            old_r = r;
            r = next_r;
            let next_s = old_s - quotient * s;
            old_s = s;
            s = next_s;
        }
        if old_r != 1 {
            return None;
        }
        Some(Self(old_s.rem_euclid(i128::from(Q)) as u64))
    }

    fn from_hash_bytes(bytes: &[u8; 64]) -> Self {
        let q = u128::from(Q);
        let reduced = bytes.iter().fold(0u128, |acc, b| (acc * 256 + u128::from(*b)) % q);
        Self(reduced as u64)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_le_bytes().to_vec()
    }
}

/// An integer modulo the prime `P`, viewed as an element of the multiplicative group, with exponents taken mod `Q`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModularElement<const P: u64, const Q: u64>(u64);

impl<const P: u64, const Q: u64> ModularElement<P, Q> {
    /// Reduce `value` modulo `P`
    pub fn new(value: u64) -> Self {
        Self(value % P)
    }

    /// The canonical representative in `[0, P)`
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl<const P: u64, const Q: u64> Add for ModularElement<P, Q> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(mul_mod(self.0, rhs.0, P))
    }
}

impl<const P: u64, const Q: u64> Neg for ModularElement<P, Q> {
    type Output = Self;

    /// Fermat inverse, valid because `P` is prime
    fn neg(self) -> Self {
        Self(pow_mod(self.0, P - 2, P))
    }
}

impl<const P: u64, const Q: u64> Sub for ModularElement<P, Q> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<const P: u64, const Q: u64> Mul<ModularScalar<Q>> for ModularElement<P, Q> {
    type Output = Self;

    fn mul(self, rhs: ModularScalar<Q>) -> Self {
        Self(pow_mod(self.0, rhs.0, P))
    }
}

impl<const P: u64, const Q: u64> GroupElement for ModularElement<P, Q> {
    type Scalar = ModularScalar<Q>;

    fn identity() -> Self {
        Self(1 % P)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_le_bytes().to_vec()
    }
}
