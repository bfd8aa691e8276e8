//! Opaque 32-byte identifiers for registry entries, assets, and accounts
//!
//! Identifiers are chosen by the caller (or derived deterministically by the
//! registry) and carry no structure the engine depends on beyond byte
//! equality and byte ordering. They render as lowercase hex so log lines and
//! journaled quotes stay grep-able.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when constructing an identifier from external input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Input was not valid hex
    #[error("invalid identifier hex: {0}")]
    InvalidHex(String),

    /// Input decoded to the wrong number of bytes
    #[error("identifier must be 32 bytes, got {got}")]
    InvalidLength { got: usize },
}

macro_rules! impl_id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name([u8; 32]);

        impl $name {
            /// Wrap raw identifier bytes.
            pub const fn new(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            /// Borrow the raw bytes.
            pub const fn as_bytes(&self) -> &[u8; 32] {
                &self.0
            }

            /// Parse a 64-character hex string.
            pub fn from_hex(s: &str) -> Result<Self, IdentifierError> {
                let raw = hex::decode(s)
                    .map_err(|e| IdentifierError::InvalidHex(e.to_string()))?;
                let bytes: [u8; 32] = raw
                    .as_slice()
                    .try_into()
                    .map_err(|_| IdentifierError::InvalidLength { got: raw.len() })?;
                Ok(Self(bytes))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self)
            }
        }

        impl From<[u8; 32]> for $name {
            fn from(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }
    };
}

impl_id_type!(
    /// Identifier of one market-maker deployment (one fee policy), chosen by
    /// its creator and unique within a registry.
    AmmId
);

impl_id_type!(
    /// Identifier of one asset type (token mint). `Ord` is byte-lexicographic
    /// and defines the canonical ordering of a pool's pair.
    MintId
);

impl_id_type!(
    /// Identity of a ledger account: registry admins and derived pool
    /// authorities. Derived authorities have no private key.
    AccountId
);
