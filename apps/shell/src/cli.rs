//! Command-line interface of the `digiurban` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "digiurban")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "DigiUrban module registry and entity lifecycle toolkit")]
pub(crate) struct Cli {
    /// Config file (TOML/JSON/YAML). Defaults to `./digiurban.*` when present.
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List every module type with its department and handler
    Modules {},
    /// Print registered handler counts per department as JSON
    Stats {},
    /// Validate a JSON form against the handler of a module type
    Validate {
        /// Module type code, e.g. `CADASTRO_PACIENTE`
        module_type: String,
        /// JSON file holding the form object
        file: PathBuf,
    },
    /// Run create and activate for a form against an in-memory store
    Simulate {
        /// Module type code, e.g. `SOLICITACAO_BENEFICIO`
        module_type: String,
        /// JSON file holding the form object
        file: PathBuf,
        /// Citizen owning the protocol; seeded as active
        #[arg(long, default_value = "citizen-1")]
        citizen: String,
        #[arg(long, default_value = "PROT-0001")]
        protocol: String,
    },
}
