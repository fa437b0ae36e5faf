//! Shared data types
//!
//! Parameters, measurements and outcomes that flow between the catalog, the
//! workflows and the dispatcher.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::time::Duration;

/// Primitive family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Kem,
    Signature,
}

impl Family {
    pub fn label(&self) -> &'static str {
        match self {
            Family::Kem => "KEM",
            Family::Signature => "signature",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolved catalog entry
///
/// Only the catalog constructs these, so every value names a known algorithm
/// of exactly one family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AlgorithmParameter {
    family: Family,
    name: &'static str,
}

impl AlgorithmParameter {
    pub(crate) const fn new(family: Family, name: &'static str) -> Self {
        Self { family, name }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Canonical identifier understood by the primitive provider
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for AlgorithmParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Role a session plays inside one workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Initiator,
    Responder,
    Signer,
    Verifier,
}

impl Role {
    pub fn family(&self) -> Family {
        match self {
            Role::Initiator | Role::Responder => Family::Kem,
            Role::Signer | Role::Verifier => Family::Signature,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Initiator => "initiator",
            Role::Responder => "responder",
            Role::Signer => "signer",
            Role::Verifier => "verifier",
        };
        f.write_str(s)
    }
}

/// Operation sequence a measurement covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    KeyExchange,
    SignAndVerify,
}

/// Which steps of the signature workflow fall inside the timed window
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SignatureTiming {
    /// Keypair generation and signing; verification runs after the timer stops
    #[default]
    SigningOnly,
    /// Keypair generation, signing and verification
    IncludeVerification,
}

/// Elapsed time of one workflow run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    pub operation: Operation,
    #[serde(rename = "duration_secs", serialize_with = "serialize_secs")]
    pub duration: Duration,
    /// Set for signature runs only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing: Option<SignatureTiming>,
}

impl Measurement {
    /// Duration in seconds, always finite and non-negative
    pub fn seconds(&self) -> f64 {
        self.duration.as_secs_f64()
    }
}

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

/// What an outcome asserts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeDetail {
    SharedSecretMatch,
    SignatureValid,
}

/// Correctness verdict of one workflow run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub success: bool,
    pub detail: OutcomeDetail,
}

impl Outcome {
    pub fn shared_secret_match(success: bool) -> Self {
        Self {
            success,
            detail: OutcomeDetail::SharedSecretMatch,
        }
    }

    pub fn signature_valid(success: bool) -> Self {
        Self {
            success,
            detail: OutcomeDetail::SignatureValid,
        }
    }
}

/// Byte lengths and fingerprints observed during a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Artifacts {
    pub public_key_len: usize,
    /// Ciphertext length for KEM runs, signature length for signature runs
    pub output_len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_len: Option<usize>,
    /// SHA3-256 fingerprints of (initiator, responder) shared secrets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_fingerprints: Option<(String, String)>,
}

/// Everything one workflow run reports back to the dispatcher
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub algorithm: AlgorithmParameter,
    pub measurement: Measurement,
    pub outcome: Outcome,
    pub artifacts: Artifacts,
}
