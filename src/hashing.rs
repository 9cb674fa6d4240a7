// Copyright 2019. The Tari Project
// SPDX-License-Identifier: BSD-3-Clause

//! # Domain separated hashing
//!
//! Every Fiat-Shamir challenge in the range proof protocol is produced by hashing public protocol messages. A prover
//! and a verifier only agree on a challenge if they hash exactly the same bytes, and two different call sites must
//! never produce related challenges from related inputs. Both requirements are met by hashing with a single
//! high-quality digest `D` that is prefixed with a domain separation tag:
//!
//! ```text
//! D_y = D("com.ctverifier.challenges.v1.range_y", msg)
//! D_z = D("com.ctverifier.challenges.v1.range_z", msg)
//! ```
//!
//! The domain, version and label are each tagged and length-prefixed, and so is every piece of data passed to
//! [`DomainSeparatedHasher::update`], so that no two distinct sequences of updates hash the same preimage.

use core::marker::PhantomData;

use digest::{Digest, Output};

/// Tags prepended to everything that enters the hasher.
///
/// Each input is encoded as the tag byte, then (for variable length inputs) a little-endian 64-bit length, then the
/// bytes themselves.
#[repr(u8)]
enum Tag {
    /// An initial domain separator indicating the general purpose of the hasher
    DomainSeparator = 0,
    /// The version of the hasher, which MUST be a single byte
    Version = 1,
    /// A label that differentiates specific uses of the hasher
    Label = 2,
    /// Arbitrary byte data added to the hasher via `update` or `chain`
    Data = 3,
}

/// Injects domain separation tags into a [`DomainSeparatedHasher`]. Implement it with the [`hash_domain!`] macro.
pub trait DomainSeparation {
    /// Returns the version number for the metadata tag
    fn version() -> u8;

    /// Returns the category label for the metadata tag, e.g. `com.ctverifier.challenges`
    fn domain() -> &'static str;

    /// The human readable form of the full tag, e.g. `com.ctverifier.challenges.v1.range_y`
    fn domain_separation_tag<S: AsRef<str>>(label: S) -> String {
        if !label.as_ref().is_empty() {
            return format!("{}.v{}.{}", Self::domain(), Self::version(), label.as_ref());
        }
        format!("{}.v{}", Self::domain(), Self::version())
    }

    /// Performs complete domain separation by including a domain separator, version, and (optional) label.
    fn add_domain_separation_tag<S: AsRef<[u8]>, D: Digest>(digest: &mut D, label: Option<S>) {
        let domain_bytes = Self::domain().as_bytes();
        let domain_length = domain_bytes.len() as u64;
        digest.update([Tag::DomainSeparator as u8]);
        digest.update(domain_length.to_le_bytes());
        digest.update(domain_bytes);

        // Fixed length, so no length prefix
        digest.update([Tag::Version as u8]);
        digest.update([Self::version()]);

        if let Some(label) = label {
            let label_length = label.as_ref().len() as u64;
            digest.update([Tag::Label as u8]);
            digest.update(label_length.to_le_bytes());
            digest.update(label);
        }
    }
}

/// The output of a [`DomainSeparatedHasher`]. It cannot be constructed any other way, so holding one means the bytes
/// were produced under a domain separation tag.
pub struct DomainSeparatedHash<D: Digest> {
    output: Output<D>,
}

impl<D: Digest> DomainSeparatedHash<D> {
    fn new(output: Output<D>) -> Self {
        Self { output }
    }
}

impl<D: Digest> AsRef<[u8]> for DomainSeparatedHash<D> {
    fn as_ref(&self) -> &[u8] {
        self.output.as_slice()
    }
}

/// A wrapper around a digest that applies the domain separation tag of `M` on construction and length-prefixes all
/// subsequent input.
///
/// ```
/// # use blake2::Blake2b;
/// # use digest::consts::U64;
/// # use ct_verifier::{hash_domain, hashing::{DomainSeparatedHasher, DomainSeparation}};
/// hash_domain!(AuditDomain, "com.example.audit");
///
/// let hash = DomainSeparatedHasher::<Blake2b<U64>, AuditDomain>::new_with_label("proof_id")
///     .chain(b"commitment bytes")
///     .finalize();
/// assert_eq!(hash.as_ref().len(), 64);
/// assert_eq!(AuditDomain::domain_separation_tag("proof_id"), "com.example.audit.v1.proof_id");
/// ```
#[derive(Debug, Clone)]
pub struct DomainSeparatedHasher<D, M> {
    inner: D,
    _dst: PhantomData<M>,
}

impl<D: Digest, M: DomainSeparation> DomainSeparatedHasher<D, M> {
    /// Create a hasher without a label. Prefer `new_with_label` for anything protocol specific.
    pub fn new() -> Self {
        Self::new_internal(None)
    }

    /// Create a hasher for the given label. Each distinct use of the hasher should get its own label.
    pub fn new_with_label(label: &'static str) -> Self {
        Self::new_internal(Some(label))
    }

    fn new_internal(label: Option<&'static str>) -> Self {
        let mut inner = D::new();
        M::add_domain_separation_tag(&mut inner, label);
        Self {
            inner,
            _dst: PhantomData,
        }
    }

    /// Adds tagged, length-prefixed data to the digest.
    ///
    /// Chaining updates is NOT the same as a single update with the concatenated data.
    pub fn update(&mut self, data: impl AsRef<[u8]>) {
        let data_length = (data.as_ref().len() as u64).to_le_bytes();
        self.inner.update([Tag::Data as u8]);
        self.inner.update(data_length);
        self.inner.update(data);
    }

    /// Same as [`Self::update`], returning the hasher for fluent use.
    #[must_use]
    pub fn chain(mut self, data: impl AsRef<[u8]>) -> Self {
        self.update(data);
        self
    }

    /// Finalize the hasher and return the hash result.
    pub fn finalize(self) -> DomainSeparatedHash<D> {
        DomainSeparatedHash::new(self.inner.finalize())
    }

    /// Update, then finalize.
    pub fn digest(mut self, data: &[u8]) -> DomainSeparatedHash<D> {
        self.update(data);
        self.finalize()
    }
}

impl<D: Digest, M: DomainSeparation> Default for DomainSeparatedHasher<D, M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a DomainSeparation struct for a given domain.
#[macro_export]
macro_rules! hash_domain {
    ($name:ident, $domain:expr, $version: expr) => {
        /// A hashing domain instance
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name;

        impl $crate::hashing::DomainSeparation for $name {
            fn version() -> u8 {
                $version
            }

            fn domain() -> &'static str {
                $domain
            }
        }
    };
    ($name:ident, $domain:expr) => {
        $crate::hash_domain!($name, $domain, 1);
    };
}
