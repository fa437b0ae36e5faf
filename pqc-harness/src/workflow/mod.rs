//! Workflows that drive session pairs through a fixed operation sequence
//!
//! Each run acquires its own sessions, times the sequence, checks the
//! correctness invariant and returns a [`RunReport`](crate::types::RunReport).
//! Sessions are dropped before the report reaches the caller.

pub mod key_exchange;
pub mod signature;

pub use key_exchange::run_key_exchange;
pub use signature::run_signature;

use sha3::{Digest, Sha3_256};

/// Number of digest bytes shown in a fingerprint
const FINGERPRINT_LEN: usize = 8;

/// Short SHA3-256 fingerprint of secret material, safe to print
pub fn fingerprint(secret: &[u8]) -> String {
    let digest = Sha3_256::digest(secret);
    hex::encode(&digest[..FINGERPRINT_LEN])
}
