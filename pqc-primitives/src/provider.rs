/// Algorithm-name dispatch onto the pqcrypto backends
use crate::error::{PqcError, Result};
use crate::mldsa::{MlDsa, MlDsaLevel};
use crate::mlkem::{MlKem, MlKemLevel};
use crate::slhdsa::{SlhDsa, SLH_DSA_SHA2_128F_SIMPLE};
use crate::traits::{KeyEncapsulation, PrimitiveProvider, SignatureScheme};

/// Provider backed by the `pqcrypto` crate family
///
/// Every call opens a fresh context; nothing is cached between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct PqcryptoProvider;

impl PqcryptoProvider {
    pub fn new() -> Self {
        Self
    }

    /// Every identifier this provider accepts
    pub fn supported_algorithms() -> &'static [&'static str] {
        &[
            "ML-KEM-512",
            "ML-KEM-768",
            "ML-KEM-1024",
            "ML-DSA-44",
            "ML-DSA-65",
            "ML-DSA-87",
            SLH_DSA_SHA2_128F_SIMPLE,
        ]
    }
}

impl PrimitiveProvider for PqcryptoProvider {
    fn key_encapsulation(&self, algorithm: &str) -> Result<Box<dyn KeyEncapsulation>> {
        let level = MlKemLevel::from_name(algorithm)
            .ok_or_else(|| PqcError::UnsupportedAlgorithm(algorithm.to_string()))?;

        tracing::trace!("Opening KEM context: {}", algorithm);
        Ok(Box::new(MlKem::new(level)))
    }

    fn signature_scheme(&self, algorithm: &str) -> Result<Box<dyn SignatureScheme>> {
        if algorithm == SLH_DSA_SHA2_128F_SIMPLE {
            tracing::trace!("Opening signature context: {}", algorithm);
            return Ok(Box::new(SlhDsa::new()));
        }

        let level = MlDsaLevel::from_name(algorithm)
            .ok_or_else(|| PqcError::UnsupportedAlgorithm(algorithm.to_string()))?;

        tracing::trace!("Opening signature context: {}", algorithm);
        Ok(Box::new(MlDsa::new(level)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_algorithm_is_distinct_error() {
        let provider = PqcryptoProvider::new();

        match provider.key_encapsulation("Kyber-768") {
            Err(PqcError::UnsupportedAlgorithm(name)) => assert_eq!(name, "Kyber-768"),
            _ => panic!("Expected UnsupportedAlgorithm"),
        }
        assert!(matches!(
            provider.signature_scheme(""),
            Err(PqcError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_families_do_not_cross() {
        let provider = PqcryptoProvider::new();
        assert!(provider.key_encapsulation("ML-DSA-44").is_err());
        assert!(provider.signature_scheme("ML-KEM-512").is_err());
    }

    #[test]
    fn test_opened_context_reports_its_name() {
        let provider = PqcryptoProvider::new();
        let kem = provider.key_encapsulation("ML-KEM-1024").unwrap();
        assert_eq!(kem.algorithm_name(), "ML-KEM-1024");

        let sig = provider.signature_scheme(SLH_DSA_SHA2_128F_SIMPLE).unwrap();
        assert_eq!(sig.algorithm_name(), SLH_DSA_SHA2_128F_SIMPLE);
        assert_eq!(sig.algorithm_info().public_key_size, 32);
    }
}
