//! Key exchange workflow: generate → encapsulate → decapsulate

use super::fingerprint;
use crate::error::Result;
use crate::session::KemSession;
use crate::types::{AlgorithmParameter, Artifacts, Measurement, Operation, Outcome, Role, RunReport};
use pqc_primitives::PrimitiveProvider;
use std::time::Instant;
use tracing::{debug, info};

/// Run one key exchange between a fresh initiator and responder
///
/// The timed window runs from keypair generation to the end of
/// decapsulation. The outcome is exact byte equality of both parties' shared
/// secrets. Provider failures are returned as-is; there are no retries.
///
/// # Errors
/// - `FamilyMismatch` if `parameter` is not a KEM parameter
/// - `Primitive` if any provider call fails
pub fn run_key_exchange<P>(provider: &P, parameter: AlgorithmParameter) -> Result<RunReport>
where
    P: PrimitiveProvider + ?Sized,
{
    info!("Running key exchange with {}", parameter);

    let mut initiator = KemSession::acquire(provider, parameter, Role::Initiator)?;
    let responder = KemSession::acquire(provider, parameter, Role::Responder)?;

    let start = Instant::now();

    let public_key = initiator.generate_keypair()?;
    let (ciphertext, responder_secret) = responder.encapsulate(&public_key)?;
    let initiator_secret = initiator.decapsulate(&ciphertext)?;

    let duration = start.elapsed();

    let matched = initiator_secret.as_slice() == responder_secret.as_slice();
    if matched {
        debug!("{} shared secrets agree ({} bytes)", parameter, initiator_secret.len());
    } else {
        debug!("{} shared secrets differ", parameter);
    }

    let artifacts = Artifacts {
        public_key_len: public_key.len(),
        output_len: ciphertext.len(),
        message_len: None,
        secret_fingerprints: Some((fingerprint(&initiator_secret), fingerprint(&responder_secret))),
    };

    info!(
        "Key exchange with {} finished in {:.6}s (match={})",
        parameter,
        duration.as_secs_f64(),
        matched
    );

    Ok(RunReport {
        algorithm: parameter,
        measurement: Measurement {
            operation: Operation::KeyExchange,
            duration,
            timing: None,
        },
        outcome: Outcome::shared_secret_match(matched),
        artifacts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, KEM_ENTRIES};
    use crate::error::HarnessError;
    use crate::types::{Family, OutcomeDetail};
    use pqc_primitives::PqcryptoProvider;

    #[test]
    fn test_every_kem_parameter_agrees() {
        let provider = PqcryptoProvider::new();

        for parameter in KEM_ENTRIES {
            let report = run_key_exchange(&provider, parameter).unwrap();

            assert!(report.outcome.success, "{} should agree", parameter);
            assert_eq!(report.outcome.detail, OutcomeDetail::SharedSecretMatch);
            assert_eq!(report.measurement.operation, Operation::KeyExchange);
            assert!(report.measurement.seconds().is_finite());
            assert!(report.measurement.seconds() >= 0.0);

            let (a, b) = report.artifacts.secret_fingerprints.clone().unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_artifact_sizes() {
        let provider = PqcryptoProvider::new();
        let parameter = catalog::resolve(Family::Kem, 3).unwrap();
        let report = run_key_exchange(&provider, parameter).unwrap();

        assert_eq!(report.artifacts.public_key_len, 1568);
        assert_eq!(report.artifacts.output_len, 1568);
    }

    #[test]
    fn test_signature_parameter_is_rejected() {
        let provider = PqcryptoProvider::new();
        let result = run_key_exchange(&provider, catalog::fixed_slh_dsa());
        assert!(matches!(result, Err(HarnessError::FamilyMismatch { .. })));
    }
}
