//! Verification of Bulletproofs range proofs and of the inner product arguments they reduce to, generic over the
//! prime-order group and the Fiat-Shamir challenge derivation.

#[macro_use]
pub mod hashing;
pub mod errors;
pub mod generators;
pub mod group;
pub mod inner_product;
pub mod range_proof;
pub mod transcript;
pub mod vectors;
pub mod verifier;

// Implementations
pub mod modular;
#[allow(clippy::op_ref)]
pub mod ristretto;

// test modules
#[cfg(test)]
mod test_common;

pub use self::{
    errors::ProofError,
    generators::{GeneratorParams, PedersenBase, VectorBase},
    group::{GroupElement, GroupScalar},
    inner_product::{InnerProductProof, InnerProductVerifier},
    range_proof::{RangeProof, RangeProofVerifier},
    transcript::{ChallengeOracle, DefaultChallenges, DomainSeparatedChallenges, MerlinChallenges},
    vectors::{FieldVector, GeneratorVector},
    verifier::Verifier,
};
