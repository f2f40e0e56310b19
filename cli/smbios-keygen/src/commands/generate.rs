//! Serial number generation commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use smbios_catalog::ModelIndex;
use smbios_serial::{Decoded, GenerationRequest};
use tabled::Tabled;
use tracing::debug;

use crate::output::print_output;

use super::{CommandContext, FieldArgs, ModelArgs};

/// Generate serial numbers for one model.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Number of serials to generate.
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub num: u32,
}

/// Generate serial numbers for every model in the catalog.
#[derive(Debug, Args)]
pub struct GenerateAllCommand {
    #[command(flatten)]
    fields: FieldArgs,

    /// Number of serials to generate per model.
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    num: u32,
}

/// A generated serial with its board serial.
#[derive(Debug, Clone, Serialize, Tabled)]
struct GeneratedRow {
    #[tabled(rename = "Product")]
    product: String,

    #[tabled(rename = "Serial")]
    serial: String,

    #[tabled(rename = "MLB")]
    mlb: String,
}

impl GenerateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let request = ctx.request(&self.model)?;
        let rows = generate_rows(&ctx, &request, self.num)?;
        print_output(&rows, ctx.format);
        Ok(())
    }
}

impl GenerateAllCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let catalog = ctx.codec.catalog();
        let mut rows = Vec::new();

        for (i, model) in catalog.models().iter().enumerate() {
            if let Some(year) = self.fields.year {
                if !model.produced_in(year) {
                    debug!(product = model.product, year, "Skipping model not built that year");
                    continue;
                }
            }

            let builder = GenerationRequest::builder().model_index(ModelIndex::new(i));
            let request = self.fields.apply(builder).build()?;
            rows.extend(generate_rows(&ctx, &request, self.num)?);
        }

        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn generate_rows(
    ctx: &CommandContext,
    request: &GenerationRequest,
    count: u32,
) -> Result<Vec<GeneratedRow>> {
    let mut rng = rand::rng();
    let mut rows = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let decoded = ctx.codec.generate(request, &mut rng)?;
        let mlb = ctx.codec.mlb(&decoded.serial, &mut rng)?;
        rows.push(GeneratedRow {
            product: product_name(&decoded),
            serial: decoded.serial.to_string(),
            mlb,
        });
    }

    Ok(rows)
}

fn product_name(decoded: &Decoded) -> String {
    decoded
        .serial
        .details
        .product
        .unwrap_or("Unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::output::OutputFormat;
    use smbios_serial::{verify_mlb_checksum, Codec};

    #[test]
    fn generate_rows_pair_serials_with_board_serials() {
        let ctx = CommandContext {
            config: Config::default(),
            format: OutputFormat::Json,
            codec: Codec::builtin(),
        };
        let index = ctx.codec.catalog().find_product("MacPro6,1").unwrap();
        let request = GenerationRequest::for_model(index);

        let rows = generate_rows(&ctx, &request, 4).unwrap();
        assert_eq!(rows.len(), 4);
        for row in rows {
            assert_eq!(row.product, "MacPro6,1");
            assert!(ctx.codec.decode(&row.serial).unwrap().is_valid());
            assert!(verify_mlb_checksum(&row.mlb));
        }
    }
}
