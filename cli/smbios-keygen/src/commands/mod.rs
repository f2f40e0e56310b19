//! CLI commands.

mod generate;
mod info;
mod keygen;
mod list;
mod mlb;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use smbios_catalog::Catalog;
use smbios_serial::{Codec, GenerationRequest, GenerationRequestBuilder, Serial};
use tracing::debug;

use crate::config::Config;
use crate::error::CliError;
use crate::output::OutputFormat;

/// smbios-keygen - decode and generate Mac serial numbers and board serials.
#[derive(Debug, Parser)]
#[command(name = "smbios-keygen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, default_value = "table")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decode a serial number and show its fields.
    Info(info::InfoCommand),

    /// Check the length and checksum of a board serial.
    Verify(mlb::VerifyCommand),

    /// Generate serial numbers with matching board serials.
    Generate(generate::GenerateCommand),

    /// Generate serial numbers for every known model.
    GenerateAll(generate::GenerateAllCommand),

    /// Generate a board serial for an existing serial number.
    Mlb(mlb::MlbCommand),

    /// List serials that share the production line of a serial number.
    Derive(info::DeriveCommand),

    /// List known models and factory locations.
    List(list::ListCommand),

    /// List model codes with their marketing names.
    ListProducts,

    /// Generate a system UUID.
    Uuid,

    /// Generate a serial, board serial, system UUID and ROM in one go.
    Keygen(keygen::KeygenCommand),

    /// Show version information.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let format = OutputFormat::parse(&self.format);
        let codec = Codec::new(Catalog::builtin()).with_mlb_attempts(config.mlb_attempts);
        debug!(mlb_attempts = codec.mlb_attempts(), "Codec ready");

        let ctx = CommandContext {
            config,
            format,
            codec,
        };

        match self.command {
            Commands::Info(cmd) => cmd.run(ctx),
            Commands::Verify(cmd) => cmd.run(ctx),
            Commands::Generate(cmd) => cmd.run(ctx),
            Commands::GenerateAll(cmd) => cmd.run(ctx),
            Commands::Mlb(cmd) => cmd.run(ctx),
            Commands::Derive(cmd) => cmd.run(ctx),
            Commands::List(cmd) => cmd.run(ctx),
            Commands::ListProducts => list::list_products(ctx),
            Commands::Uuid => keygen::print_uuid(ctx),
            Commands::Keygen(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("smbios-keygen {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Context passed to all commands.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub codec: Codec<'static>,
}

impl CommandContext {
    /// Build a generation request from the model selection and field flags.
    ///
    /// Falls back to the configured default model when no model is given.
    pub fn request(&self, model: &ModelArgs) -> Result<GenerationRequest> {
        let builder = match (&model.model, &model.platform) {
            (_, Some(code)) => GenerationRequest::builder().model_code(code.to_ascii_uppercase()),
            (Some(selector), None) => GenerationRequest::builder().model_index(
                self.codec
                    .catalog()
                    .resolve_model(selector)
                    .with_context(|| format!("Failed to resolve --model '{selector}'"))?,
            ),
            (None, None) => {
                let selector = &self.config.default_model;
                GenerationRequest::builder().model_index(
                    self.codec
                        .catalog()
                        .resolve_model(selector)
                        .with_context(|| format!("Failed to resolve default model '{selector}'"))?,
                )
            }
        };

        Ok(model.fields.apply(builder).build()?)
    }

    /// Decode a serial number, failing if it does not decode as valid.
    pub fn decode_valid(&self, input: &str) -> Result<Serial> {
        let decoded = self.codec.decode(input)?;
        if let Some(finding) = decoded.errors().next() {
            return Err(CliError::InvalidSerial {
                serial: input.to_string(),
                reason: finding.to_string(),
            }
            .into());
        }
        Ok(decoded.into_serial())
    }
}

// =============================================================================
// Shared arguments
// =============================================================================

/// Model selection for generating commands.
#[derive(Debug, Clone, Default, Args)]
pub struct ModelArgs {
    /// Model index or product name (see `list`).
    #[arg(short, long, conflicts_with = "platform")]
    pub model: Option<String>,

    /// Raw model code, e.g. F8J2. Need not be in the catalog.
    #[arg(short, long)]
    pub platform: Option<String>,

    #[command(flatten)]
    pub fields: FieldArgs,
}

/// Explicit serial fields. Anything omitted is picked at random.
#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
    /// Production year.
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Production week (1-53).
    #[arg(short, long)]
    pub week: Option<u32>,

    /// Factory location code, e.g. C02 or W8.
    #[arg(short, long)]
    pub country: Option<String>,

    /// Production line (0-3399).
    #[arg(short = 'e', long)]
    pub line: Option<u32>,

    /// Copy of the production line (1-34).
    #[arg(short = 'o', long)]
    pub copy: Option<u32>,
}

impl FieldArgs {
    pub fn apply(&self, mut builder: GenerationRequestBuilder) -> GenerationRequestBuilder {
        if let Some(year) = self.year {
            builder = builder.year(year);
        }
        if let Some(week) = self.week {
            builder = builder.week(week);
        }
        if let Some(country) = &self.country {
            builder = builder.country(country.to_ascii_uppercase());
        }
        if let Some(line) = self.line {
            builder = builder.line(line);
        }
        if let Some(copy) = self.copy {
            builder = builder.copy(copy);
        }
        builder
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use smbios_serial::{ModelSelector, SerialError};

    fn ctx() -> CommandContext {
        CommandContext {
            config: Config::default(),
            format: OutputFormat::Table,
            codec: Codec::builtin(),
        }
    }

    fn model_args(args: &[&str]) -> ModelArgs {
        let mut argv = vec!["smbios-keygen", "generate"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Generate(cmd) => cmd.model,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "smbios-keygen",
            "generate",
            "-m",
            "iMac14,1",
            "-y",
            "2013",
            "-w",
            "27",
            "-c",
            "C02",
            "-e",
            "692",
            "-o",
            "4",
            "-n",
            "3",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, "json");

        let Commands::Generate(cmd) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(cmd.num, 3);
        assert_eq!(cmd.model.model.as_deref(), Some("iMac14,1"));
        assert_eq!(cmd.model.fields.year, Some(2013));
        assert_eq!(cmd.model.fields.week, Some(27));
        assert_eq!(cmd.model.fields.country.as_deref(), Some("C02"));
        assert_eq!(cmd.model.fields.line, Some(692));
        assert_eq!(cmd.model.fields.copy, Some(4));
    }

    #[test]
    fn model_conflicts_with_platform() {
        let result =
            Cli::try_parse_from(["smbios-keygen", "generate", "-m", "0", "-p", "F8J2"]);
        assert!(result.is_err());
    }

    #[test]
    fn generate_rejects_zero_count() {
        let result = Cli::try_parse_from(["smbios-keygen", "generate", "-n", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_serial_commands() {
        for argv in [
            ["smbios-keygen", "info", "C02L13ECF8J2"],
            ["smbios-keygen", "mlb", "C02L13ECF8J2"],
            ["smbios-keygen", "derive", "C02L13ECF8J2"],
            ["smbios-keygen", "verify", "C02443500KZG2QDA7"],
        ] {
            assert!(Cli::try_parse_from(argv).is_ok(), "{argv:?}");
        }
        assert!(Cli::try_parse_from(["smbios-keygen", "info"]).is_err());
    }

    #[test]
    fn request_uses_default_model() {
        let request = ctx().request(&ModelArgs::default()).unwrap();
        let expected = Catalog::builtin().find_product("iMacPro1,1").unwrap();
        assert_eq!(request.model(), &ModelSelector::Index(expected));
    }

    #[test]
    fn request_resolves_model_and_platform() {
        let ctx = ctx();

        let request = ctx.request(&model_args(&["-m", "MacPro6,1"])).unwrap();
        let expected = Catalog::builtin().find_product("MacPro6,1").unwrap();
        assert_eq!(request.model(), &ModelSelector::Index(expected));

        let request = ctx.request(&model_args(&["-p", "f8j2", "-c", "c02"])).unwrap();
        assert_eq!(request.model(), &ModelSelector::Code("F8J2".to_string()));
        assert_eq!(request.country(), Some("C02"));
    }

    #[test]
    fn request_reports_bad_input() {
        let ctx = ctx();
        assert!(ctx.request(&model_args(&["-m", "Nope1,1"])).is_err());

        let err = ctx.request(&model_args(&["-w", "54"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SerialError>(),
            Some(SerialError::WeekOutOfRange { week: 54 })
        ));
    }

    #[test]
    fn decode_valid_rejects_invalid_serial() {
        let ctx = ctx();
        assert!(ctx.decode_valid("C02L13ECF8J2").is_ok());

        let err = ctx.decode_valid("W8840123IAX").unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());

        let err = ctx.decode_valid("C02443500KZG2QDA7").unwrap_err();
        assert_eq!(
            err.downcast_ref::<SerialError>(),
            Some(&SerialError::LooksLikeMlb)
        );
    }
}
