// Copyright 2019. The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

use ::merlin::Transcript;

use crate::{
    group::{GroupElement, GroupScalar},
    transcript::ChallengeOracle,
};

const DEFAULT_TRANSCRIPT_LABEL: &[u8] = b"ct_verifier challenges";

/// Challenges computed with a fresh [merlin](https://merlin.cool) transcript per challenge. The call-site label, the
/// input count and each input are appended as messages; 64 challenge bytes are reduced modulo the group order.
///
/// Every challenge starts from an empty transcript: the chaining between protocol steps comes from the verifier
/// feeding earlier values into later challenges, not from transcript state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MerlinChallenges {
    transcript_label: &'static [u8],
}

impl MerlinChallenges {
    pub fn new() -> Self {
        Self {
            transcript_label: DEFAULT_TRANSCRIPT_LABEL,
        }
    }

    /// Use a custom domain separated transcript label
    pub fn with_transcript_label(transcript_label: &'static [u8]) -> Self {
        Self { transcript_label }
    }

    fn start(&self, label: &'static str, count: usize) -> Transcript {
        let mut transcript = Transcript::new(self.transcript_label);
        transcript.append_message(b"dom-sep", label.as_bytes());
        transcript.append_u64(b"n", count as u64);
        transcript
    }

    fn finish<S: GroupScalar>(mut transcript: Transcript) -> S {
        let mut wide = [0u8; 64];
        transcript.challenge_bytes(b"challenge", &mut wide);
        S::from_hash_bytes(&wide)
    }
}

impl Default for MerlinChallenges {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GroupElement> ChallengeOracle<G> for MerlinChallenges {
    fn challenge_from_points(&self, label: &'static str, points: &[G]) -> G::Scalar {
        let mut transcript = self.start(label, points.len());
        for p in points {
            transcript.append_message(b"point", &p.to_bytes());
        }
        Self::finish(transcript)
    }

    fn challenge_from_scalars(&self, label: &'static str, scalars: &[G::Scalar]) -> G::Scalar {
        let mut transcript = self.start(label, scalars.len());
        for s in scalars {
            transcript.append_message(b"scalar", &s.to_bytes());
        }
        Self::finish(transcript)
    }
}

#[cfg(test)]
mod test {
    use curve25519_dalek::{constants::RISTRETTO_BASEPOINT_POINT, ristretto::RistrettoPoint, scalar::Scalar};

    use super::*;
    use crate::transcript::{DefaultChallenges, INNER_PRODUCT_ROUND_LABEL, RANGE_X_LABEL};

    #[test]
    fn merlin_challenges_are_deterministic_and_labelled() {
        let g = RISTRETTO_BASEPOINT_POINT;
        let points = [g, g * Scalar::from(5u64)];
        let oracle = MerlinChallenges::new();
        let a: Scalar = oracle.challenge_from_points(RANGE_X_LABEL, &points);
        let b: Scalar = MerlinChallenges::default().challenge_from_points(RANGE_X_LABEL, &points);
        let c: Scalar = oracle.challenge_from_points(INNER_PRODUCT_ROUND_LABEL, &points);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn transcript_label_and_backend_separate_challenges() {
        let g = RISTRETTO_BASEPOINT_POINT;
        let points: [RistrettoPoint; 1] = [g];
        let a: Scalar = MerlinChallenges::new().challenge_from_points(RANGE_X_LABEL, &points);
        let b: Scalar =
            MerlinChallenges::with_transcript_label(b"other protocol").challenge_from_points(RANGE_X_LABEL, &points);
        let c: Scalar = DefaultChallenges::new().challenge_from_points(RANGE_X_LABEL, &points);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
