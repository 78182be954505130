//! Cryptographic primitives for the commit-reveal round.
//!
//! This module provides:
//! - SecretKey, drawn per round from a secure source with no zero byte
//! - Commitment, an HMAC-SHA256 digest over a move name

mod commitment;
mod key;

pub use commitment::{verify_hex, Commitment, COMMITMENT_LEN};
pub use key::{SecretKey, KEY_LEN};
