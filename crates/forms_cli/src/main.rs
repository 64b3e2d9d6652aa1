mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "formcheck")]
#[command(version, about = "Form validation engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a set of form values against a schema
    Validate {
        /// Path to the schema file (YAML, TOML or JSON)
        schema: String,

        /// Path to the values file (JSON, YAML or TOML)
        values: String,

        /// Validate a single field instead of the whole form
        #[arg(long)]
        field: Option<String>,

        /// Override a value, as NAME=VALUE (VALUE is read as JSON, else text)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        overrides: Vec<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Check a schema file without validating any values
    Check {
        /// Path to the schema file (YAML, TOML or JSON)
        schema: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Look up message catalog copy
    Message {
        /// Catalog category (e.g. age, otp, general); lists categories if omitted
        category: Option<String>,

        /// Failure kind (e.g. required, min); lists kinds if omitted
        kind: Option<String>,

        /// Template parameters; numeric text is passed as a number
        params: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG takes precedence over --verbose
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            schema,
            values,
            field,
            overrides,
            format,
        } => commands::validate::execute(&schema, &values, field.as_deref(), &overrides, &format),

        Commands::Check { schema, format } => commands::check::execute(&schema, &format),

        Commands::Message {
            category,
            kind,
            params,
        } => commands::message::execute(category.as_deref(), kind.as_deref(), &params),
    }
}
