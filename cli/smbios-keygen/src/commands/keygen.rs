//! Full SMBIOS identity generation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use smbios_serial::generate_rom;
use uuid::Uuid;

use crate::output::{print_single, print_value, FieldRow};

use super::{CommandContext, ModelArgs};

/// Generate a serial, board serial, system UUID and ROM.
#[derive(Debug, Args)]
pub struct KeygenCommand {
    #[command(flatten)]
    model: ModelArgs,
}

#[derive(Debug, Serialize)]
struct KeygenOutput {
    product: String,
    serial: String,
    mlb: String,
    uuid: String,
    rom: String,
}

impl KeygenCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let request = ctx.request(&self.model)?;
        let mut rng = rand::rng();

        let decoded = ctx.codec.generate(&request, &mut rng)?;
        let mlb = ctx.codec.mlb(&decoded.serial, &mut rng)?;
        let output = KeygenOutput {
            product: decoded.serial.details.product.unwrap_or("Unknown").to_string(),
            serial: decoded.serial.to_string(),
            mlb,
            uuid: system_uuid(),
            rom: generate_rom(&mut rng),
        };

        let rows = [
            FieldRow::new("Type", output.product.clone()),
            FieldRow::new("Serial", output.serial.clone()),
            FieldRow::new("Board Serial", output.mlb.clone()),
            FieldRow::new("SmUUID", output.uuid.clone()),
            FieldRow::new("ROM", output.rom.clone()),
        ];
        print_single(&output, &rows, ctx.format);
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct UuidOutput {
    uuid: String,
}

pub fn print_uuid(ctx: CommandContext) -> Result<()> {
    let uuid = system_uuid();
    print_value(&uuid, &UuidOutput { uuid: uuid.clone() }, ctx.format);
    Ok(())
}

/// Random v4 UUID in the upper-case form firmware tables use.
fn system_uuid() -> String {
    Uuid::new_v4().to_string().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_uuid_is_upper_case_v4() {
        let uuid = system_uuid();
        assert_eq!(uuid.len(), 36);
        assert_eq!(uuid, uuid.to_ascii_uppercase());

        let parsed = Uuid::parse_str(&uuid).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }
}
