// Copyright 2019. The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! Errors used in the range proof verifier crate

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors encountered when verifying range proofs and inner product arguments
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum ProofError {
    /// One of the protocol's equality checks did not hold. The two sides are rendered for diagnostics only.
    #[error("Verification failed: {check} check, LHS: `{lhs}`, RHS: `{rhs}`")]
    VerificationFailed {
        /// The check that failed
        check: String,
        /// The value the verifier computed
        lhs: String,
        /// The value the check required
        rhs: String,
    },
    /// The parameters or proof do not have the shape the protocol requires
    #[error("Malformed input: `{0}`")]
    MalformedInput(String),
}

impl ProofError {
    /// True if the error is a precondition violation rather than a rejected proof
    pub fn is_malformed(&self) -> bool {
        matches!(self, ProofError::MalformedInput(_))
    }

    pub(crate) fn failed_check<L: ToString, R: ToString>(check: &str, lhs: L, rhs: R) -> Self {
        ProofError::VerificationFailed {
            check: check.to_string(),
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
        }
    }
}
