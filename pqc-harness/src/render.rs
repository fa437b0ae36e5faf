//! Console text: menus, prompts and run reports

use crate::catalog;
use crate::config::{HarnessSettings, OutputFormat};
use crate::error::Result;
use crate::types::{Family, OutcomeDetail, RunReport, SignatureTiming};
use std::io::Write;

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const MESSAGE_PROMPT: &str = "Enter the test message: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const FAREWELL: &str = "Exiting the program...";

/// Top-level menu
pub fn main_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Select an option:")?;
    writeln!(out, "1. ML-KEM")?;
    writeln!(out, "2. ML-DSA Signature")?;
    writeln!(out, "3. SLH-DSA Signature")?;
    writeln!(out, "4. Exit")?;
    Ok(())
}

/// Parameter-set menu of a family, numbered from the catalog
pub fn submenu<W: Write>(out: &mut W, family: Family) -> Result<()> {
    writeln!(out, "Select the parameter set to use:")?;
    for (i, parameter) in catalog::entries(family).iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, parameter)?;
    }
    Ok(())
}

pub fn prompt<W: Write>(out: &mut W, text: &str) -> Result<()> {
    write!(out, "{}", text)?;
    out.flush()?;
    Ok(())
}

/// Print a run report in the configured format
pub fn report<W: Write>(out: &mut W, report: &RunReport, settings: &HarnessSettings) -> Result<()> {
    match settings.output_format {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => text_report(out, report, settings)?,
    }
    out.flush()?;
    Ok(())
}

fn text_report<W: Write>(out: &mut W, report: &RunReport, settings: &HarnessSettings) -> Result<()> {
    writeln!(
        out,
        "Elapsed time: {:.*} seconds",
        settings.precision,
        report.measurement.seconds()
    )?;

    if settings.show_details {
        let artifacts = &report.artifacts;
        writeln!(out, "  public key: {} bytes", artifacts.public_key_len)?;
        match report.outcome.detail {
            OutcomeDetail::SharedSecretMatch => {
                writeln!(out, "  ciphertext: {} bytes", artifacts.output_len)?;
            }
            OutcomeDetail::SignatureValid => {
                writeln!(out, "  signature: {} bytes", artifacts.output_len)?;
            }
        }
        if let Some(len) = artifacts.message_len {
            writeln!(out, "  message: {} bytes", len)?;
        }
        if let Some((initiator, responder)) = &artifacts.secret_fingerprints {
            writeln!(out, "  initiator secret fingerprint: {}", initiator)?;
            writeln!(out, "  responder secret fingerprint: {}", responder)?;
        }
        if let Some(timing) = report.measurement.timing {
            let policy = match timing {
                SignatureTiming::SigningOnly => "keygen + sign",
                SignatureTiming::IncludeVerification => "keygen + sign + verify",
            };
            writeln!(out, "  timed steps: {}", policy)?;
        }
    }

    match report.outcome.detail {
        OutcomeDetail::SharedSecretMatch => {
            writeln!(out, "shared secret match: {}", report.outcome.success)?;
        }
        OutcomeDetail::SignatureValid => {
            writeln!(out, "signature valid: {}", report.outcome.success)?;
        }
    }
    writeln!(out)?;

    Ok(())
}
