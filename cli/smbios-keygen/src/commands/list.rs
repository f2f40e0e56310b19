//! Catalog listing commands.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use smbios_catalog::{Location, LocationTable, ModelInfo};
use tabled::Tabled;

use crate::output::{format_json, print_info, print_output, OutputFormat};

use super::CommandContext;

/// List models and factory locations.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Skip the factory location tables.
    #[arg(long)]
    models_only: bool,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct ModelRow {
    #[tabled(rename = "#")]
    index: usize,

    #[tabled(rename = "Product")]
    product: &'static str,

    #[tabled(rename = "Years")]
    years: String,

    #[tabled(rename = "Serial")]
    serial: &'static str,

    #[tabled(rename = "Models")]
    model_codes: String,

    #[tabled(rename = "Boards")]
    board_codes: String,
}

impl ModelRow {
    fn new(index: usize, model: &ModelInfo) -> Self {
        Self {
            index,
            product: model.product,
            years: join(model.years),
            serial: model.serial,
            model_codes: join(model.model_codes),
            board_codes: join(model.board_codes),
        }
    }
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct LocationRow {
    #[tabled(rename = "Code")]
    code: &'static str,

    #[tabled(rename = "Location")]
    name: &'static str,
}

impl From<&Location> for LocationRow {
    fn from(location: &Location) -> Self {
        Self {
            code: location.code,
            name: location.name,
        }
    }
}

#[derive(Debug, Serialize)]
struct ListOutput {
    models: Vec<ModelRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    legacy_locations: Option<Vec<LocationRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    locations: Option<Vec<LocationRow>>,
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct ProductRow {
    #[tabled(rename = "Code")]
    code: &'static str,

    #[tabled(rename = "Name")]
    name: &'static str,
}

impl ListCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let catalog = ctx.codec.catalog();
        let models = catalog
            .models()
            .iter()
            .enumerate()
            .map(|(i, m)| ModelRow::new(i, m))
            .collect();
        let locations = |table: LocationTable| -> Vec<LocationRow> {
            catalog.locations(table).iter().map(LocationRow::from).collect()
        };

        let output = ListOutput {
            models,
            legacy_locations: (!self.models_only).then(|| locations(LocationTable::Legacy)),
            locations: (!self.models_only).then(|| locations(LocationTable::Modern)),
        };

        match ctx.format {
            OutputFormat::Table => {
                print_output(&output.models, ctx.format);
                if let Some(rows) = &output.legacy_locations {
                    print_info("Legacy (11-character) serial locations");
                    print_output(rows, ctx.format);
                }
                if let Some(rows) = &output.locations {
                    print_info("Modern (12-character) serial locations");
                    print_output(rows, ctx.format);
                }
            }
            OutputFormat::Json => println!("{}", format_json(&output, "{}")),
        }

        Ok(())
    }
}

pub fn list_products(ctx: CommandContext) -> Result<()> {
    let rows: Vec<_> = ctx
        .codec
        .catalog()
        .products()
        .iter()
        .map(|p| ProductRow {
            code: p.code,
            name: p.name,
        })
        .collect();

    print_output(&rows, ctx.format);
    Ok(())
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
