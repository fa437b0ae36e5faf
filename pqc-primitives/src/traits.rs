//! Capability sets exposed by the primitive provider
//!
//! KEM and signature contexts share nothing beyond keypair generation, so they
//! are two independent traits rather than a common base.

use crate::error::Result;
use zeroize::Zeroizing;

/// Shared secret bytes, wiped on drop
pub type SharedSecret = Zeroizing<Vec<u8>>;

/// Key encapsulation capability set
pub trait KeyEncapsulation {
    /// Generate a keypair, keep the secret key and return the public key
    fn generate_keypair(&mut self) -> Result<Vec<u8>>;

    /// Encapsulate against a peer public key, returning `(ciphertext, shared_secret)`
    fn encapsulate(&self, peer_public_key: &[u8]) -> Result<(Vec<u8>, SharedSecret)>;

    /// Recover the shared secret from a ciphertext with the held secret key
    fn decapsulate(&self, ciphertext: &[u8]) -> Result<SharedSecret>;

    /// Algorithm name
    fn algorithm_name(&self) -> &str;

    /// Static size information
    fn algorithm_info(&self) -> AlgorithmInfo;
}

/// Signature capability set
pub trait SignatureScheme {
    /// Generate a keypair, keep the secret key and return the public key
    fn generate_keypair(&mut self) -> Result<Vec<u8>>;

    /// Produce a detached signature over `message`
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>>;

    /// Verify a detached signature against an explicit public key
    ///
    /// - `Ok(true)`: signature is valid
    /// - `Ok(false)`: signature is well-formed but does not verify
    /// - `Err`: inputs could not be parsed
    fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool>;

    /// Algorithm name
    fn algorithm_name(&self) -> &str;

    /// Static size information
    fn algorithm_info(&self) -> AlgorithmInfo;
}

/// Opens native contexts by algorithm identifier
pub trait PrimitiveProvider {
    /// Open a KEM context, `UnsupportedAlgorithm` if the identifier is unknown
    fn key_encapsulation(&self, algorithm: &str) -> Result<Box<dyn KeyEncapsulation>>;

    /// Open a signature context, `UnsupportedAlgorithm` if the identifier is unknown
    fn signature_scheme(&self, algorithm: &str) -> Result<Box<dyn SignatureScheme>>;
}

/// Algorithm information structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    /// Algorithm name
    pub name: &'static str,
    /// NIST security level
    pub nist_level: u8,
    /// Public key size (bytes)
    pub public_key_size: usize,
    /// Secret key size (bytes)
    pub secret_key_size: usize,
    /// Ciphertext size for KEMs, signature size for signature schemes (bytes)
    pub output_size: usize,
}
