//! SLH-DSA (SPHINCS+) stateless hash-based signatures
//!
//! Only the SHA2-128f "simple" variant is offered: 32-byte public key,
//! 64-byte secret key and 17,088-byte signatures. Signing is slow compared to
//! ML-DSA (the "f" variant trades signature size for speed).

use crate::error::{PqcError, Result};
use crate::traits::{AlgorithmInfo, SignatureScheme};
use pqcrypto_sphincsplus::sphincssha2128fsimple as sphincs;
use pqcrypto_traits::sign::{DetachedSignature as _, PublicKey as _, SecretKey as _};
use zeroize::Zeroizing;

/// Canonical identifier of the supported variant
pub const SLH_DSA_SHA2_128F_SIMPLE: &str = "SPHINCS+-SHA2-128f-simple";

/// SPHINCS+-SHA2-128f-simple signer / verifier context
pub struct SlhDsa {
    public_key: Vec<u8>,
    secret_key: Zeroizing<Vec<u8>>,
}

impl SlhDsa {
    pub fn new() -> Self {
        Self {
            public_key: Vec::new(),
            secret_key: Zeroizing::new(Vec::new()),
        }
    }

    pub fn info() -> AlgorithmInfo {
        AlgorithmInfo {
            name: SLH_DSA_SHA2_128F_SIMPLE,
            nist_level: 1,
            public_key_size: sphincs::public_key_bytes(),
            secret_key_size: sphincs::secret_key_bytes(),
            output_size: sphincs::signature_bytes(),
        }
    }
}

impl Default for SlhDsa {
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureScheme for SlhDsa {
    fn generate_keypair(&mut self) -> Result<Vec<u8>> {
        let (pk, sk) = sphincs::keypair();

        self.public_key = pk.as_bytes().to_vec();
        self.secret_key = Zeroizing::new(sk.as_bytes().to_vec());

        tracing::debug!(
            "Generated {} keypair: pk_len={} bytes, sk_len={} bytes",
            SLH_DSA_SHA2_128F_SIMPLE,
            self.public_key.len(),
            self.secret_key.len()
        );

        Ok(self.public_key.clone())
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        if self.secret_key.is_empty() {
            return Err(PqcError::SigningError(
                "Secret key not initialized. Call generate_keypair() first.".to_string(),
            ));
        }

        let sk = sphincs::SecretKey::from_bytes(&self.secret_key)
            .map_err(|e| PqcError::SigningError(format!("Failed to parse secret key: {:?}", e)))?;

        let signature = sphincs::detached_sign(message, &sk);

        tracing::debug!(
            "Signed message with {}: msg_len={} bytes, sig_len={} bytes",
            SLH_DSA_SHA2_128F_SIMPLE,
            message.len(),
            signature.as_bytes().len()
        );

        Ok(signature.as_bytes().to_vec())
    }

    fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        let pk = sphincs::PublicKey::from_bytes(public_key).map_err(|e| {
            PqcError::VerificationError(format!("Failed to parse public key: {:?}", e))
        })?;
        let sig = sphincs::DetachedSignature::from_bytes(signature).map_err(|e| {
            PqcError::VerificationError(format!("Failed to parse signature: {:?}", e))
        })?;

        match sphincs::verify_detached_signature(&sig, message, &pk) {
            Ok(()) => Ok(true),
            Err(_) => {
                tracing::debug!("{} signature verification failed", SLH_DSA_SHA2_128F_SIMPLE);
                Ok(false)
            }
        }
    }

    fn algorithm_name(&self) -> &str {
        SLH_DSA_SHA2_128F_SIMPLE
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        Self::info()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_and_verify() {
        let mut signer = SlhDsa::new();
        let verifier = SlhDsa::new();
        let pk = signer.generate_keypair().unwrap();
        assert_eq!(pk.len(), 32);

        let signature = signer.sign(b"").unwrap();
        assert_eq!(signature.len(), 17088);
        assert!(verifier.verify(b"", &signature, &pk).unwrap());
        assert!(!verifier.verify(b"x", &signature, &pk).unwrap());
    }

    #[test]
    fn test_sign_without_keypair() {
        let signer = SlhDsa::new();
        assert!(matches!(signer.sign(b"m"), Err(PqcError::SigningError(_))));
    }
}
