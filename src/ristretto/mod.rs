// Copyright 2019 The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! The Ristretto group backend, built on `curve25519-dalek`.

pub mod generators;
mod group;

// Re-export
pub use curve25519_dalek::{ristretto::RistrettoPoint, scalar::Scalar};

pub use self::generators::{generator_params, nums_point, pedersen_base};
