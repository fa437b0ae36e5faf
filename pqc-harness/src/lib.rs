//! Post-quantum primitive harness
//!
//! Selects an algorithm from a fixed catalog, drives it through a standard
//! operation sequence, times the run and checks its correctness invariant:
//! 1. ML-KEM: generate → encapsulate → decapsulate, shared secrets must match
//! 2. ML-DSA / SLH-DSA: generate → sign → verify, signature must be valid
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  Dispatcher  │  ← menu loop (MenuState)
//! └──────┬───────┘
//!        │ resolve
//!   ┌────┴─────┐    run      ┌───────────┐   calls   ┌──────────────────┐
//!   │ Catalog  │ ──────────▶ │ Workflows │ ────────▶ │ Sessions         │
//!   └──────────┘             └───────────┘           │  (KEM/Signature) │
//!                                                    └────────┬─────────┘
//!                                                             ▼
//!                                                   pqc_primitives provider
//! ```
//!
//! # Example
//!
//! ```no_run
//! use pqc_harness::{catalog, workflow, Family};
//! use pqc_primitives::PqcryptoProvider;
//!
//! let provider = PqcryptoProvider::new();
//! let parameter = catalog::resolve(Family::Kem, 2)?;
//! let report = workflow::run_key_exchange(&provider, parameter)?;
//!
//! println!("{}: match={} in {:.6}s", parameter, report.outcome.success, report.measurement.seconds());
//! # Ok::<(), pqc_harness::HarnessError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod render;
pub mod session;
pub mod types;
pub mod workflow;

// Re-export commonly used types
pub use config::{HarnessSettings, OutputFormat};
pub use dispatcher::{Dispatcher, MenuState};
pub use error::{HarnessError, Result};
pub use types::{
    AlgorithmParameter, Family, Measurement, Operation, Outcome, OutcomeDetail, Role, RunReport,
    SignatureTiming,
};
