//! Error handling and display for the CLI.

use colored::Colorize;
use smbios_serial::{MlbError, SerialError};
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Serial {serial} is not valid: {reason}")]
    InvalidSerial { serial: String, reason: String },

    #[error("Invalid MLB length: {len}")]
    InvalidMlbLength { len: usize },

    #[error("Invalid {name} value '{value}' in environment")]
    InvalidEnv { name: &'static str, value: String },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = hint(err) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

fn hint(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return match cli_err {
            CliError::InvalidSerial { .. } => {
                Some("Run `smbios-keygen info <serial>` to see which fields are wrong.")
            }
            CliError::InvalidMlbLength { .. } => {
                Some("Board serials are 13 (legacy) or 17 (modern) characters long.")
            }
            CliError::InvalidEnv { .. } => None,
        };
    }

    if let Some(serial_err) = err.downcast_ref::<SerialError>() {
        return match serial_err {
            SerialError::LooksLikeMlb => Some("Use `smbios-keygen verify <mlb>` for board serials."),
            SerialError::UnknownModelIndex { .. } => {
                Some("Run `smbios-keygen list` to see the available models.")
            }
            SerialError::AmbiguousYear { .. } => {
                Some("The model code decides the decade of a modern year symbol. Pick a year in that decade.")
            }
            SerialError::YearNotProduced { .. } => {
                Some("Run `smbios-keygen list` to see the production years of each model.")
            }
            _ => None,
        };
    }

    if let Some(MlbError::Exhausted { .. }) = err.downcast_ref::<MlbError>() {
        return Some("Raise SMBIOS_KEYGEN_MLB_ATTEMPTS to search longer.");
    }

    None
}
