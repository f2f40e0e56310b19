//! Serial number inspection commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use smbios_serial::{Decoded, Finding, Serial};
use tabled::Tabled;

use crate::output::{print_output, print_single, print_warning, FieldRow, OutputFormat};

use super::CommandContext;

/// Decode a serial number.
#[derive(Debug, Args)]
pub struct InfoCommand {
    /// Serial number (11 or 12 characters).
    serial: String,
}

/// List the other copies of a serial's production line.
#[derive(Debug, Args)]
pub struct DeriveCommand {
    /// Serial number (11 or 12 characters).
    serial: String,
}

#[derive(Debug, Serialize)]
struct InfoOutput<'a> {
    serial: &'a Serial,
    valid: bool,
    findings: &'a [Finding],
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct DerivativeRow {
    #[tabled(rename = "Serial")]
    serial: String,

    #[tabled(rename = "Copy")]
    copy: u32,
}

impl InfoCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let decoded = ctx.codec.decode(&self.serial)?;

        let output = InfoOutput {
            serial: &decoded.serial,
            valid: decoded.is_valid(),
            findings: &decoded.findings,
        };
        print_single(&output, &info_rows(&decoded), ctx.format);

        if ctx.format == OutputFormat::Table {
            for finding in &decoded.findings {
                print_warning(&finding.to_string());
            }
        }

        Ok(())
    }
}

impl DeriveCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let serial = ctx.decode_valid(&self.serial)?;
        let rows: Vec<_> = ctx
            .codec
            .derivatives(&serial)
            .map(|d| DerivativeRow {
                serial: d.serial,
                copy: d.copy,
            })
            .collect();

        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn info_rows(decoded: &Decoded) -> Vec<FieldRow> {
    let serial = &decoded.serial;
    let details = &serial.details;

    let week = match (serial.decoded_week, details.week_start, details.week_end) {
        (Some(week), Some(start), Some(end)) => format!(
            "{} ({week}: {} - {})",
            serial.week,
            start.format("%d.%m.%Y"),
            end.format("%d.%m.%Y")
        ),
        (Some(week), _, _) => format!("{} ({week})", serial.week),
        _ => unknown(&serial.week),
    };

    let line = match (serial.decoded_line, serial.copy()) {
        (Some(line), Some(copy)) => format!("{} ({line} copy {copy})", serial.line),
        _ => unknown(&serial.line),
    };

    vec![
        FieldRow::new("Country", described(&serial.country, details.location)),
        FieldRow::new(
            "Year",
            match serial.decoded_year {
                Some(year) => format!("{} ({year})", serial.year),
                None => unknown(&serial.year.to_string()),
            },
        ),
        FieldRow::new("Week", week),
        FieldRow::new("Line", line),
        FieldRow::new("Model", described(&serial.model, details.model_description)),
        FieldRow::new("SystemProductName", details.product.unwrap_or("Unknown")),
        FieldRow::new(
            "Valid",
            if decoded.is_valid() { "Possibly" } else { "Unlikely" },
        ),
    ]
}

fn described(raw: &str, description: Option<&str>) -> String {
    format!("{raw} ({})", description.unwrap_or("Unknown"))
}

fn unknown(raw: &str) -> String {
    format!("{raw} (Unknown)")
}
