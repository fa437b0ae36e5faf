//! ML-KEM (FIPS 203) key encapsulation
//!
//! One context type covers the three standardized parameter sets. The secret
//! key lives in a `Zeroizing` buffer and is wiped when the context is dropped.
//!
//! | Parameter set | Public key | Secret key | Ciphertext | NIST level |
//! |---------------|-----------:|-----------:|-----------:|-----------:|
//! | ML-KEM-512    |        800 |       1632 |        768 |          1 |
//! | ML-KEM-768    |       1184 |       2400 |       1088 |          3 |
//! | ML-KEM-1024   |       1568 |       3168 |       1568 |          5 |

use crate::error::{PqcError, Result};
use crate::traits::{AlgorithmInfo, KeyEncapsulation, SharedSecret};
use pqcrypto_traits::kem::{Ciphertext as _, PublicKey as _, SecretKey as _, SharedSecret as _};
use zeroize::Zeroizing;

/// Runs `$body` with `$m` bound to the pqcrypto module of the parameter set
macro_rules! with_parameter_set {
    ($level:expr, $m:ident => $body:block) => {
        match $level {
            MlKemLevel::MlKem512 => {
                use pqcrypto_mlkem::mlkem512 as $m;
                $body
            }
            MlKemLevel::MlKem768 => {
                use pqcrypto_mlkem::mlkem768 as $m;
                $body
            }
            MlKemLevel::MlKem1024 => {
                use pqcrypto_mlkem::mlkem1024 as $m;
                $body
            }
        }
    };
}

/// ML-KEM parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MlKemLevel {
    MlKem512,
    MlKem768,
    MlKem1024,
}

impl MlKemLevel {
    /// Parse a canonical identifier such as `"ML-KEM-768"`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ML-KEM-512" => Some(Self::MlKem512),
            "ML-KEM-768" => Some(Self::MlKem768),
            "ML-KEM-1024" => Some(Self::MlKem1024),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::MlKem512 => "ML-KEM-512",
            Self::MlKem768 => "ML-KEM-768",
            Self::MlKem1024 => "ML-KEM-1024",
        }
    }

    pub fn nist_level(&self) -> u8 {
        match self {
            Self::MlKem512 => 1,
            Self::MlKem768 => 3,
            Self::MlKem1024 => 5,
        }
    }

    /// Size information for this parameter set
    pub fn info(&self) -> AlgorithmInfo {
        let (public_key_size, secret_key_size, output_size) = with_parameter_set!(*self, kem => {
            (kem::public_key_bytes(), kem::secret_key_bytes(), kem::ciphertext_bytes())
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

/// ML-KEM context
///
/// # Example
///
/// ```rust
/// use pqc_primitives::mlkem::{MlKem, MlKemLevel};
/// use pqc_primitives::traits::KeyEncapsulation;
///
/// let mut initiator = MlKem::new(MlKemLevel::MlKem768);
/// let responder = MlKem::new(MlKemLevel::MlKem768);
///
/// let public_key = initiator.generate_keypair().unwrap();
/// let (ciphertext, responder_secret) = responder.encapsulate(&public_key).unwrap();
/// let initiator_secret = initiator.decapsulate(&ciphertext).unwrap();
///
/// assert_eq!(*initiator_secret, *responder_secret);
/// ```
pub struct MlKem {
    level: MlKemLevel,
    public_key: Vec<u8>,
    secret_key: Zeroizing<Vec<u8>>,
}

impl MlKem {
    /// Create a context with no key material
    pub fn new(level: MlKemLevel) -> Self {
        Self {
            level,
            public_key: Vec::new(),
            secret_key: Zeroizing::new(Vec::new()),
        }
    }
}

impl KeyEncapsulation for MlKem {
    fn generate_keypair(&mut self) -> Result<Vec<u8>> {
        let (public_key, secret_key) = with_parameter_set!(self.level, kem => {
            let (pk, sk) = kem::keypair();
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

    fn encapsulate(&self, peer_public_key: &[u8]) -> Result<(Vec<u8>, SharedSecret)> {
        with_parameter_set!(self.level, kem => {
            let pk = kem::PublicKey::from_bytes(peer_public_key).map_err(|e| {
                PqcError::EncapsulationError(format!(
                    "Invalid {} public key ({} bytes): {:?}",
                    self.level.name(),
                    peer_public_key.len(),
                    e
                ))
            })?;

            let (ss, ct) = kem::encapsulate(&pk);

            tracing::debug!(
                "Encapsulated with {}: ct_len={} bytes",
                self.level.name(),
                ct.as_bytes().len()
            );

            Ok((ct.as_bytes().to_vec(), Zeroizing::new(ss.as_bytes().to_vec())))
        })
    }

    fn decapsulate(&self, ciphertext: &[u8]) -> Result<SharedSecret> {
        if self.secret_key.is_empty() {
            return Err(PqcError::DecapsulationError(
                "Secret key not initialized. Call generate_keypair() first.".to_string(),
            ));
        }

        with_parameter_set!(self.level, kem => {
            let sk = kem::SecretKey::from_bytes(&self.secret_key).map_err(|e| {
                PqcError::DecapsulationError(format!("Failed to parse secret key: {:?}", e))
            })?;
            let ct = kem::Ciphertext::from_bytes(ciphertext).map_err(|e| {
                PqcError::DecapsulationError(format!(
                    "Invalid {} ciphertext ({} bytes): {:?}",
                    self.level.name(),
                    ciphertext.len(),
                    e
                ))
            })?;

            let ss = kem::decapsulate(&ct, &sk);
            Ok(Zeroizing::new(ss.as_bytes().to_vec()))
        })
    }

    fn algorithm_name(&self) -> &str {
        self.level.name()
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        self.level.info()
    }
}
