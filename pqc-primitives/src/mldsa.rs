//! ML-DSA (FIPS 204) digital signatures
//!
//! Signatures are detached: `sign()` returns only the signature bytes and
//! `verify()` takes the message separately.
//!
//! | Parameter set | Public key | Secret key | Signature | NIST level |
//! |---------------|-----------:|-----------:|----------:|-----------:|
//! | ML-DSA-44     |       1312 |       2560 |      2420 |          2 |
//! | ML-DSA-65     |       1952 |       4032 |      3309 |          3 |
//! | ML-DSA-87     |       2592 |       4896 |      4627 |          5 |

use crate::error::{PqcError, Result};
use crate::traits::{AlgorithmInfo, SignatureScheme};
use pqcrypto_traits::sign::{DetachedSignature as _, PublicKey as _, SecretKey as _};
use zeroize::Zeroizing;

/// Runs `$body` with `$m` bound to the pqcrypto module of the parameter set
macro_rules! with_parameter_set {
    ($level:expr, $m:ident => $body:block) => {
        match $level {
            MlDsaLevel::MlDsa44 => {
                use pqcrypto_mldsa::mldsa44 as $m;
                $body
            }
            MlDsaLevel::MlDsa65 => {
                use pqcrypto_mldsa::mldsa65 as $m;
                $body
            }
            MlDsaLevel::MlDsa87 => {
                use pqcrypto_mldsa::mldsa87 as $m;
                $body
            }
        }
    };
}

/// ML-DSA parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MlDsaLevel {
    /// ML-DSA-44 (formerly Dilithium2)
    MlDsa44,
    /// ML-DSA-65 (formerly Dilithium3)
    MlDsa65,
    /// ML-DSA-87 (formerly Dilithium5)
    MlDsa87,
}

impl MlDsaLevel {
    /// Parse a canonical identifier such as `"ML-DSA-65"`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ML-DSA-44" => Some(Self::MlDsa44),
            "ML-DSA-65" => Some(Self::MlDsa65),
            "ML-DSA-87" => Some(Self::MlDsa87),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::MlDsa44 => "ML-DSA-44",
            Self::MlDsa65 => "ML-DSA-65",
            Self::MlDsa87 => "ML-DSA-87",
        }
    }

    pub fn nist_level(&self) -> u8 {
        match self {
            Self::MlDsa44 => 2,
            Self::MlDsa65 => 3,
            Self::MlDsa87 => 5,
        }
    }

    pub fn info(&self) -> AlgorithmInfo {
        let (public_key_size, secret_key_size, output_size) = with_parameter_set!(*self, dsa => {
            (dsa::public_key_bytes(), dsa::secret_key_bytes(), dsa::signature_bytes())
        });

        AlgorithmInfo {
            name: self.name(),
            nist_level: self.nist_level(),
            public_key_size,
            secret_key_size,
            output_size,
        }
    }
}

/// ML-DSA signer / verifier context
///
/// # Example
///
/// ```rust
/// use pqc_primitives::mldsa::{MlDsa, MlDsaLevel};
/// use pqc_primitives::traits::SignatureScheme;
///
/// let mut signer = MlDsa::new(MlDsaLevel::MlDsa65);
/// let verifier = MlDsa::new(MlDsaLevel::MlDsa65);
///
/// let public_key = signer.generate_keypair().unwrap();
/// let signature = signer.sign(b"hello").unwrap();
///
/// assert!(verifier.verify(b"hello", &signature, &public_key).unwrap());
/// ```
pub struct MlDsa {
    level: MlDsaLevel,
    public_key: Vec<u8>,
    secret_key: Zeroizing<Vec<u8>>,
}

impl MlDsa {
    /// Create a context with no key material
    ///
    /// A context that never generates a keypair can still verify against an
    /// explicit public key.
    pub fn new(level: MlDsaLevel) -> Self {
        Self {
            level,
            public_key: Vec::new(),
            secret_key: Zeroizing::new(Vec::new()),
        }
    }
}

impl SignatureScheme for MlDsa {
    fn generate_keypair(&mut self) -> Result<Vec<u8>> {
        let (public_key, secret_key) = with_parameter_set!(self.level, dsa => {
            let (pk, sk) = dsa::keypair();
            (pk.as_bytes().to_vec(), Zeroizing::new(sk.as_bytes().to_vec()))
        });

        self.public_key = public_key;
        self.secret_key = secret_key;

        tracing::debug!(
            "Generated {} keypair: pk_len={} bytes, sk_len={} bytes",
            self.level.name(),
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

        with_parameter_set!(self.level, dsa => {
            let sk = dsa::SecretKey::from_bytes(&self.secret_key).map_err(|e| {
                PqcError::SigningError(format!("Failed to parse secret key: {:?}", e))
            })?;

            let signature = dsa::detached_sign(message, &sk);

            tracing::debug!(
                "Signed message with {}: msg_len={} bytes, sig_len={} bytes",
                self.level.name(),
                message.len(),
                signature.as_bytes().len()
            );

            Ok(signature.as_bytes().to_vec())
        })
    }

    fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        with_parameter_set!(self.level, dsa => {
            let pk = dsa::PublicKey::from_bytes(public_key).map_err(|e| {
                PqcError::VerificationError(format!(
                    "Invalid {} public key ({} bytes): {:?}",
                    self.level.name(),
                    public_key.len(),
                    e
                ))
            })?;
            let sig = dsa::DetachedSignature::from_bytes(signature).map_err(|e| {
                PqcError::VerificationError(format!(
                    "Invalid {} signature ({} bytes): {:?}",
                    self.level.name(),
                    signature.len(),
                    e
                ))
            })?;

            match dsa::verify_detached_signature(&sig, message, &pk) {
                Ok(()) => Ok(true),
                Err(_) => {
                    tracing::debug!("{} signature verification failed", self.level.name());
                    Ok(false)
                }
            }
        })
    }

    fn algorithm_name(&self) -> &str {
        self.level.name()
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        self.level.info()
    }
}
