//! Commitment for the commit-reveal scheme.

use super::key::SecretKey;
use crate::error::{HexError, PlatformFault};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

/// Digest length in bytes
pub const COMMITMENT_LEN: usize = 32;

/// Commitment = HMAC-SHA256(key, message)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Commitment(#[serde(serialize_with = "hex_serde::serialize")] [u8; COMMITMENT_LEN]);

mod hex_serde {
    use super::COMMITMENT_LEN;
    use serde::{Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; COMMITMENT_LEN], s: S) -> Result<S::Ok, S::Error> {
        hex::encode_upper(bytes).serialize(s)
    }
}

fn keyed(key: &SecretKey, message: &[u8]) -> Result<HmacSha256, PlatformFault> {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|_| PlatformFault::Mac(key.as_bytes().len()))?;
    mac.update(message);
    Ok(mac)
}

impl Commitment {
    /// Create a commitment over arbitrary message bytes
    pub fn new(key: &SecretKey, message: &[u8]) -> Result<Self, PlatformFault> {
        let digest = keyed(key, message)?.finalize().into_bytes();
        Ok(Self(digest.into()))
    }

    /// Commit to a move by the UTF-8 bytes of its name
    pub fn for_move(key: &SecretKey, name: &str) -> Result<Self, PlatformFault> {
        Self::new(key, name.as_bytes())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; COMMITMENT_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse an announced commitment, case-insensitive
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let bytes = hex::decode(s.trim())?;
        let actual = bytes.len();
        let bytes: [u8; COMMITMENT_LEN] = bytes.try_into().map_err(|_| HexError::Length {
            expected: COMMITMENT_LEN,
            actual,
        })?;
        Ok(Self(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; COMMITMENT_LEN] {
        &self.0
    }

    /// Uppercase hex, no separators
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    /// Verify that the given key and message produce this commitment
    pub fn verify(&self, key: &SecretKey, message: &[u8]) -> bool {
        keyed(key, message)
            .map(|mac| mac.verify_slice(&self.0).is_ok())
            .unwrap_or(false)
    }

    /// Verify against a move name
    pub fn verify_move(&self, key: &SecretKey, name: &str) -> bool {
        self.verify(key, name.as_bytes())
    }
}

/// Check a disclosed key against an announced move and commitment, all as
/// printed by the game.
pub fn verify_hex(key_hex: &str, name: &str, commitment_hex: &str) -> Result<bool, HexError> {
    let key = SecretKey::from_hex(key_hex)?;
    let commitment = Commitment::from_hex(commitment_hex)?;
    Ok(commitment.verify_move(&key, name))
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode_upper(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
