//! Signature workflow: generate → sign → verify

use crate::error::Result;
use crate::session::SignatureSession;
use crate::types::{
    AlgorithmParameter, Artifacts, Measurement, Operation, Outcome, Role, RunReport,
    SignatureTiming,
};
use pqc_primitives::PrimitiveProvider;
use std::time::Instant;
use tracing::{debug, info};

/// Run one sign/verify cycle with a fresh signer and verifier
///
/// With [`SignatureTiming::SigningOnly`] the timer stops after signing and
/// verification runs untimed. With [`SignatureTiming::IncludeVerification`]
/// the timer stops after verification. A signature that fails to verify is a
/// negative outcome, not an error.
///
/// # Errors
/// - `FamilyMismatch` if `parameter` is not a signature parameter
/// - `Primitive` if any provider call fails
pub fn run_signature<P>(
    provider: &P,
    parameter: AlgorithmParameter,
    message: &[u8],
    timing: SignatureTiming,
) -> Result<RunReport>
where
    P: PrimitiveProvider + ?Sized,
{
    info!(
        "Running signature workflow with {} (msg_len={} bytes, timing={:?})",
        parameter,
        message.len(),
        timing
    );

    let mut signer = SignatureSession::acquire(provider, parameter, Role::Signer)?;
    let verifier = SignatureSession::acquire(provider, parameter, Role::Verifier)?;

    let start = Instant::now();

    let public_key = signer.generate_keypair()?;
    let signature = signer.sign(message)?;

    let (is_valid, duration) = match timing {
        SignatureTiming::SigningOnly => {
            let duration = start.elapsed();
            (verifier.verify(message, &signature, &public_key)?, duration)
        }
        SignatureTiming::IncludeVerification => {
            let is_valid = verifier.verify(message, &signature, &public_key)?;
            (is_valid, start.elapsed())
        }
    };

    if !is_valid {
        debug!("{} signature did not verify", parameter);
    }

    info!(
        "Signature workflow with {} finished in {:.6}s (valid={})",
        parameter,
        duration.as_secs_f64(),
        is_valid
    );

    Ok(RunReport {
        algorithm: parameter,
        measurement: Measurement {
            operation: Operation::SignAndVerify,
            duration,
            timing: Some(timing),
        },
        outcome: Outcome::signature_valid(is_valid),
        artifacts: Artifacts {
            public_key_len: public_key.len(),
            output_len: signature.len(),
            message_len: Some(message.len()),
            secret_fingerprints: None,
        },
    })
}
