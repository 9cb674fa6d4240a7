// Copyright 2019. The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! The group traits for [Ristretto](https://ristretto.group), implemented directly on the curve25519-dalek types.

use curve25519_dalek::{
    ristretto::RistrettoPoint,
    scalar::Scalar,
    traits::{Identity, VartimeMultiscalarMul},
};

use crate::group::{GroupElement, GroupScalar};

impl GroupScalar for Scalar {
    fn zero() -> Self {
        Scalar::ZERO
    }

    fn one() -> Self {
        Scalar::ONE
    }

    fn from_u64(value: u64) -> Self {
        Scalar::from(value)
    }

    fn invert(&self) -> Option<Self> {
        if *self == Scalar::ZERO {
            return None;
        }
        Some(Scalar::invert(self))
    }

    fn from_hash_bytes(bytes: &[u8; 64]) -> Self {
        Scalar::from_bytes_mod_order_wide(bytes)
    }

    /// The 32-byte little-endian encoding
    fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl GroupElement for RistrettoPoint {
    type Scalar = Scalar;

    fn identity() -> Self {
        <RistrettoPoint as Identity>::identity()
    }

    /// The 32-byte compressed encoding
    fn to_bytes(&self) -> Vec<u8> {
        self.compress().to_bytes().to_vec()
    }

    /// Variable time: every input to verification is public
    fn multiscalar_mul(scalars: &[Scalar], points: &[RistrettoPoint]) -> Self {
        RistrettoPoint::vartime_multiscalar_mul(scalars, points)
    }
}
