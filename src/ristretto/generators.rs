// Copyright 2019. The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! Nothing-up-my-sleeve generators for Ristretto range proof parameters.
//!
//! Every generator is produced by hashing a domain separated label and index with Blake2b-512 and using the output as
//! input to [`RistrettoPoint::from_uniform_bytes`], so nobody knows a discrete log relation between any two of them.
//! The Pedersen blinding generator is the Ristretto base point.

use blake2::Blake2b;
use curve25519_dalek::{constants::RISTRETTO_BASEPOINT_POINT, ristretto::RistrettoPoint};
use digest::consts::U64;
use log::*;

use crate::{
    errors::ProofError,
    generators::{GeneratorParams, PedersenBase, VectorBase},
    hashing::DomainSeparatedHasher,
    vectors::GeneratorVector,
};

const LOG_TARGET: &str = "ct_verifier::ristretto::generators";

crate::hash_domain!(GeneratorDomain, "com.ctverifier.generators");

/// Derive the `index`th NUMS point for `label`
pub fn nums_point(label: &'static str, index: u64) -> RistrettoPoint {
    let hash = DomainSeparatedHasher::<Blake2b<U64>, GeneratorDomain>::new_with_label(label)
        .chain(index.to_le_bytes())
        .finalize();
    let mut wide = [0u8; 64];
    wide.copy_from_slice(hash.as_ref());
    RistrettoPoint::from_uniform_bytes(&wide)
}

fn nums_vector(label: &'static str, len: usize) -> GeneratorVector<RistrettoPoint> {
    GeneratorVector::new((0..len as u64).map(|i| nums_point(label, i)).collect())
}

/// The Pedersen base: a NUMS value generator `g` and the Ristretto base point as blinding generator `h`
pub fn pedersen_base() -> PedersenBase<RistrettoPoint> {
    PedersenBase::new(nums_point("pedersen_g", 0), RISTRETTO_BASEPOINT_POINT)
}

/// Generator parameters for range proofs over `bit_length` bits. `bit_length` must be a power of two.
pub fn generator_params(bit_length: usize) -> Result<GeneratorParams<RistrettoPoint>, ProofError> {
    let vector_base = VectorBase::new(
        nums_vector("vector_gs", bit_length),
        nums_vector("vector_hs", bit_length),
        nums_point("vector_h", 0),
    )?;
    debug!(target: LOG_TARGET, "Derived range proof generators for {} bits", bit_length);
    Ok(GeneratorParams::new(vector_base, pedersen_base()))
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;
    use crate::group::GroupElement;

    #[test]
    fn generators_are_distinct() {
        let params = generator_params(16).unwrap();
        let mut seen = HashSet::new();
        let vb = params.vector_base();
        let singles = [*vb.H(), params.base().g, params.base().h];
        let all = vb
            .gs()
            .as_slice()
            .iter()
            .chain(vb.hs().as_slice().iter())
            .chain(singles.iter());
        for p in all {
            assert!(seen.insert(p.to_bytes()), "duplicate generator");
        }
        assert_eq!(seen.len(), 16 + 16 + 3);
    }

    #[test]
    fn generators_are_reproducible_and_nested() {
        let small = generator_params(4).unwrap();
        let large = generator_params(8).unwrap();
        assert_eq!(small, generator_params(4).unwrap());
        assert_eq!(small.vector_base().gs().as_slice(), &large.vector_base().gs().as_slice()[..4]);
        assert_eq!(small.bit_length(), 4);
    }

    #[test]
    fn bit_length_must_be_a_power_of_two() {
        assert!(generator_params(12).unwrap_err().is_malformed());
        assert!(generator_params(0).unwrap_err().is_malformed());
        assert!(generator_params(1).is_ok());
    }
}
