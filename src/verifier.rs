// Copyright 2019. The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use log::*;
use tari_utilities::hex::to_hex;

use crate::{
    errors::ProofError,
    group::{GroupElement, GroupScalar},
};

const LOG_TARGET: &str = "ct_verifier::verifier";

/// A verifier accepts or rejects a proof about a public input, relative to some public parameters.
pub trait Verifier {
    /// The public parameters, e.g. generators
    type Params;
    /// The public statement, e.g. a commitment
    type Input;
    /// The proof
    type Proof;

    /// Verify `proof` against `input`. Returns `Ok(())` if the proof is accepted,
    /// [`ProofError::VerificationFailed`] if it is rejected, and [`ProofError::MalformedInput`] if the parameters or
    /// proof do not have the shape the protocol requires.
    fn verify(&self, params: &Self::Params, input: &Self::Input, proof: &Self::Proof) -> Result<(), ProofError>;
}

/// Fail with [`ProofError::VerificationFailed`] naming `check` unless `lhs == rhs`
pub(crate) fn ensure_equal<G: GroupElement>(check: &str, lhs: &G, rhs: &G) -> Result<(), ProofError> {
    if lhs == rhs {
        return Ok(());
    }
    let lhs = to_hex(&lhs.to_bytes());
    let rhs = to_hex(&rhs.to_bytes());
    debug!(target: LOG_TARGET, "{} check failed, LHS: {}, RHS: {}", check, lhs, rhs);
    Err(ProofError::failed_check(check, lhs, rhs))
}

/// Invert a Fiat-Shamir challenge. A challenge without an inverse rejects the proof.
pub(crate) fn invert_challenge<G: GroupElement>(label: &str, x: G::Scalar) -> Result<G::Scalar, ProofError> {
    x.invert().ok_or_else(|| {
        debug!(target: LOG_TARGET, "Challenge {} ({:?}) is not invertible", label, x);
        ProofError::failed_check("challenge inversion", format!("{} = {:?}", label, x), "an invertible scalar")
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::modular::{ModularElement, ModularScalar};

    type G = ModularElement<23, 22>;

    #[test]
    fn equal_values_pass() {
        assert!(ensure_equal("test", &G::new(13), &G::new(13)).is_ok());
    }

    #[test]
    fn unequal_values_carry_both_sides() {
        let err = ensure_equal("test", &G::new(13), &G::new(14)).unwrap_err();
        assert_eq!(err, ProofError::VerificationFailed {
            check: "test".to_string(),
            lhs: "0d00000000000000".to_string(),
            rhs: "0e00000000000000".to_string(),
        });
    }

    #[test]
    fn zero_challenge_is_rejected() {
        let err = invert_challenge::<G>("x", ModularScalar::new(0)).unwrap_err();
        assert!(!err.is_malformed());
        assert_eq!(invert_challenge::<G>("x", ModularScalar::new(3)), Ok(ModularScalar::new(15)));
    }
}
