//! Scoped primitive sessions
//!
//! A session owns exactly one native context from the provider for one
//! algorithm parameter and one role. Dropping the session releases the
//! context, and the context's key buffers are zeroized as it goes. Because
//! release happens in `Drop`, it runs on normal return, on early return and
//! while a `?` propagates an error out of the workflow.

use crate::error::{HarnessError, Result};
use crate::types::{AlgorithmParameter, Family, Role};
use pqc_primitives::{AlgorithmInfo, KeyEncapsulation, PrimitiveProvider, SharedSecret, SignatureScheme};
use tracing::debug;

fn check_family(parameter: AlgorithmParameter, role: Role, expected: Family) -> Result<()> {
    if parameter.family() != expected || role.family() != expected {
        return Err(HarnessError::FamilyMismatch {
            algorithm: format!("{} ({})", parameter, role),
            expected: expected.label(),
        });
    }
    Ok(())
}

/// KEM session (initiator or responder)
pub struct KemSession {
    parameter: AlgorithmParameter,
    role: Role,
    context: Box<dyn KeyEncapsulation>,
}

impl KemSession {
    /// Open a KEM context for `parameter`
    ///
    /// # Errors
    /// - `FamilyMismatch` if the parameter or role is not a KEM one
    /// - `Primitive` if the provider cannot open the algorithm
    pub fn acquire<P>(provider: &P, parameter: AlgorithmParameter, role: Role) -> Result<Self>
    where
        P: PrimitiveProvider + ?Sized,
    {
        check_family(parameter, role, Family::Kem)?;
        let context = provider.key_encapsulation(parameter.name())?;

        debug!("Acquired {} session for {}", role, parameter);
        Ok(Self {
            parameter,
            role,
            context,
        })
    }

    pub fn parameter(&self) -> AlgorithmParameter {
        self.parameter
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn algorithm_info(&self) -> AlgorithmInfo {
        self.context.algorithm_info()
    }

    /// Generate a keypair, returning only the public key
    pub fn generate_keypair(&mut self) -> Result<Vec<u8>> {
        Ok(self.context.generate_keypair()?)
    }

    /// Encapsulate against a peer public key, returning `(ciphertext, shared_secret)`
    pub fn encapsulate(&self, peer_public_key: &[u8]) -> Result<(Vec<u8>, SharedSecret)> {
        Ok(self.context.encapsulate(peer_public_key)?)
    }

    pub fn decapsulate(&self, ciphertext: &[u8]) -> Result<SharedSecret> {
        Ok(self.context.decapsulate(ciphertext)?)
    }
}

impl Drop for KemSession {
    fn drop(&mut self) {
        debug!("Released {} session for {}", self.role, self.parameter);
    }
}

/// Signature session (signer or verifier)
pub struct SignatureSession {
    parameter: AlgorithmParameter,
    role: Role,
    context: Box<dyn SignatureScheme>,
}

impl SignatureSession {
    /// Open a signature context for `parameter`
    ///
    /// # Errors
    /// - `FamilyMismatch` if the parameter or role is not a signature one
    /// - `Primitive` if the provider cannot open the algorithm
    pub fn acquire<P>(provider: &P, parameter: AlgorithmParameter, role: Role) -> Result<Self>
    where
        P: PrimitiveProvider + ?Sized,
    {
        check_family(parameter, role, Family::Signature)?;
        let context = provider.signature_scheme(parameter.name())?;

        debug!("Acquired {} session for {}", role, parameter);
        Ok(Self {
            parameter,
            role,
            context,
        })
    }

    pub fn parameter(&self) -> AlgorithmParameter {
        self.parameter
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn algorithm_info(&self) -> AlgorithmInfo {
        self.context.algorithm_info()
    }

    pub fn generate_keypair(&mut self) -> Result<Vec<u8>> {
        Ok(self.context.generate_keypair()?)
    }

    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        Ok(self.context.sign(message)?)
    }

    /// `Ok(false)` is a normal negative verdict, not an error
    pub fn verify(&self, message: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        Ok(self.context.verify(message, signature, public_key)?)
    }
}

impl Drop for SignatureSession {
    fn drop(&mut self) {
        debug!("Released {} session for {}", self.role, self.parameter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use pqc_primitives::PqcryptoProvider;

    #[test]
    fn test_acquire_kem_session() {
        let provider = PqcryptoProvider::new();
        let param = catalog::resolve(Family::Kem, 2).unwrap();

        let mut session = KemSession::acquire(&provider, param, Role::Initiator).unwrap();
        assert_eq!(session.role(), Role::Initiator);
        assert_eq!(session.parameter().name(), "ML-KEM-768");

        let pk = session.generate_keypair().unwrap();
        assert_eq!(pk.len(), session.algorithm_info().public_key_size);
    }

    #[test]
    fn test_family_mismatch_is_rejected() {
        let provider = PqcryptoProvider::new();
        let kem = catalog::resolve(Family::Kem, 1).unwrap();
        let sig = catalog::resolve(Family::Signature, 1).unwrap();

        assert!(matches!(
            SignatureSession::acquire(&provider, kem, Role::Signer),
            Err(HarnessError::FamilyMismatch { .. })
        ));
        assert!(matches!(
            KemSession::acquire(&provider, sig, Role::Initiator),
            Err(HarnessError::FamilyMismatch { .. })
        ));
        // Right parameter, wrong role
        assert!(matches!(
            KemSession::acquire(&provider, kem, Role::Verifier),
            Err(HarnessError::FamilyMismatch { .. })
        ));
    }

    #[test]
    fn test_signature_session_roundtrip() {
        let provider = PqcryptoProvider::new();
        let param = catalog::fixed_slh_dsa();

        let mut signer = SignatureSession::acquire(&provider, param, Role::Signer).unwrap();
        let verifier = SignatureSession::acquire(&provider, param, Role::Verifier).unwrap();

        let pk = signer.generate_keypair().unwrap();
        let signature = signer.sign(b"scoped").unwrap();
        assert!(verifier.verify(b"scoped", &signature, &pk).unwrap());
    }
}
