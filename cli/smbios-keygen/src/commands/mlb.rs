//! Board serial commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use smbios_serial::{verify_mlb_checksum, MlbFormat};

use crate::error::CliError;
use crate::output::{
    format_json, print_info, print_success, print_value, print_warning, OutputFormat,
};

use super::CommandContext;

/// Generate a board serial for a serial number.
#[derive(Debug, Args)]
pub struct MlbCommand {
    /// Serial number (11 or 12 characters).
    serial: String,
}

/// Verify a board serial.
#[derive(Debug, Args)]
pub struct VerifyCommand {
    /// Board serial (13 or 17 characters).
    mlb: String,
}

#[derive(Debug, Serialize)]
struct MlbOutput<'a> {
    serial: &'a str,
    mlb: &'a str,
}

#[derive(Debug, Serialize)]
struct VerifyOutput<'a> {
    mlb: &'a str,
    format: MlbFormat,
    checksum_valid: bool,
}

impl MlbCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let serial = ctx.decode_valid(&self.serial)?;
        let mut rng = rand::rng();
        let mlb = ctx.codec.mlb(&serial, &mut rng)?;

        let output = MlbOutput {
            serial: &self.serial,
            mlb: &mlb,
        };
        print_value(&mlb, &output, ctx.format);
        Ok(())
    }
}

impl VerifyCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let output = verify(&self.mlb)?;

        match ctx.format {
            OutputFormat::Table => {
                print_info(&format!("Valid {} MLB length", output.format));
                if output.checksum_valid {
                    print_success("MLB checksum is valid");
                } else {
                    print_warning("Invalid MLB checksum");
                }
            }
            OutputFormat::Json => println!("{}", format_json(&output, "{}")),
        }

        Ok(())
    }
}

fn verify(mlb: &str) -> Result<VerifyOutput<'_>, CliError> {
    let format = MlbFormat::from_len(mlb.len())
        .ok_or(CliError::InvalidMlbLength { len: mlb.len() })?;

    Ok(VerifyOutput {
        mlb,
        format,
        checksum_valid: verify_mlb_checksum(mlb),
    })
}
