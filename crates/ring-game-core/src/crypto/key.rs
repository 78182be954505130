//! Per-round secret key for the keyed-hash commitment.

use crate::error::{HexError, PlatformFault};
use rand::{CryptoRng, RngCore};
use std::fmt;

/// Secret key length in bytes
pub const KEY_LEN: usize = 16;

/// Fresh keys drawn before a source is declared degenerate
const MAX_KEY_ATTEMPTS: usize = 64;

/// HMAC key held back until the round is resolved
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Draw a key with no zero byte from a cryptographically secure source.
    ///
    /// A key containing a zero byte is discarded and redrawn as a whole.
    pub fn generate<K>(source: &mut K) -> Result<Self, PlatformFault>
    where
        K: RngCore + CryptoRng + ?Sized,
    {
        let mut bytes = [0u8; KEY_LEN];
        for _ in 0..MAX_KEY_ATTEMPTS {
            source.try_fill_bytes(&mut bytes)?;
            if !bytes.contains(&0) {
                return Ok(Self(bytes));
            }
        }
        Err(PlatformFault::DegenerateKey {
            attempts: MAX_KEY_ATTEMPTS,
        })
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a disclosed key, case-insensitive
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let bytes = hex::decode(s.trim())?;
        let actual = bytes.len();
        let bytes: [u8; KEY_LEN] = bytes.try_into().map_err(|_| HexError::Length {
            expected: KEY_LEN,
            actual,
        })?;
        Ok(Self(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Uppercase hex, no separators
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(..)")
    }
}
