//! Post-quantum primitive provider
//!
//! Wraps the NIST post-quantum standards behind two capability sets:
//! ML-KEM (FIPS 203) for key encapsulation, and ML-DSA (FIPS 204) plus
//! SLH-DSA / SPHINCS+ (FIPS 205) for signatures.
//!
//! # Quick Start
//!
//! ```rust
//! use pqc_primitives::{PqcryptoProvider, PrimitiveProvider};
//!
//! let provider = PqcryptoProvider::new();
//!
//! // Key encapsulation
//! let mut initiator = provider.key_encapsulation("ML-KEM-768").unwrap();
//! let responder = provider.key_encapsulation("ML-KEM-768").unwrap();
//! let public_key = initiator.generate_keypair().unwrap();
//! let (ciphertext, secret_b) = responder.encapsulate(&public_key).unwrap();
//! let secret_a = initiator.decapsulate(&ciphertext).unwrap();
//! assert_eq!(*secret_a, *secret_b);
//!
//! // Signatures
//! let mut signer = provider.signature_scheme("ML-DSA-44").unwrap();
//! let public_key = signer.generate_keypair().unwrap();
//! let signature = signer.sign(b"message").unwrap();
//! assert!(signer.verify(b"message", &signature, &public_key).unwrap());
//! ```

pub mod error;
pub mod mldsa;
pub mod mlkem;
pub mod provider;
pub mod slhdsa;
pub mod traits;

// Re-export commonly used types
pub use error::{PqcError, Result};
pub use provider::PqcryptoProvider;
pub use slhdsa::SLH_DSA_SHA2_128F_SIMPLE;
pub use traits::{AlgorithmInfo, KeyEncapsulation, PrimitiveProvider, SharedSecret, SignatureScheme};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_algorithm_opens() {
        let provider = PqcryptoProvider::new();

        for name in PqcryptoProvider::supported_algorithms() {
            let opened = provider.key_encapsulation(name).is_ok()
                || provider.signature_scheme(name).is_ok();
            assert!(opened, "{} should open in one family", name);
        }
    }
}
