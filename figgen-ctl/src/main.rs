//! figgen
//!
//! Reads a Figma file, picks out the components whose names carry a known
//! keyword, and renders each one through a template into UI source code.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use figgen_ctl::settings::{
    ACCESS_TOKEN_ENV, API_BASE_URL_ENV, FILE_KEY_ENV, OUTPUT_PATH_ENV, TEMPLATE_PATH_ENV,
};
use figgen_ctl::RawSettings;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "figgen", version, about, styles = output::clap_styles())]
pub(crate) struct Cli {
    /// Log pipeline decisions at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Fetch the document and generate component sources
    Generate(GenerateArgs),
    /// Print the nodes that would be translated and the keyword each resolves to
    List(SourceArgs),
}

#[derive(Args, Debug)]
pub(crate) struct GenerateArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Don't write the fetched document to <output>/figma.json
    #[arg(long)]
    no_snapshot: bool,
}

#[derive(Args, Debug, Clone)]
pub(crate) struct SourceArgs {
    /// Figma file key
    #[arg(long, env = FILE_KEY_ENV)]
    file_key: Option<String>,

    /// Figma personal access token
    #[arg(long, env = ACCESS_TOKEN_ENV, hide_env_values = true)]
    access_token: Option<String>,

    /// Figma REST API base URL
    #[arg(long, env = API_BASE_URL_ENV)]
    api_base_url: Option<String>,

    /// Directory holding component templates and the Models directory
    #[arg(long, env = TEMPLATE_PATH_ENV)]
    template_path: Option<PathBuf>,

    /// Directory generated files are written to
    #[arg(long, env = OUTPUT_PATH_ENV)]
    output_path: Option<PathBuf>,

    /// Keyword pattern matched case-insensitively against node names (repeatable)
    #[arg(short, long = "keyword")]
    keywords: Vec<String>,

    /// Node type to collect, e.g. COMPONENT or INSTANCE
    #[arg(long)]
    node_kind: Option<String>,

    /// Read the document from a saved snapshot instead of the API
    #[arg(long, value_name = "FILE")]
    from_snapshot: Option<PathBuf>,
}

impl SourceArgs {
    pub(crate) fn into_raw(self, write_snapshot: bool) -> RawSettings {
        RawSettings {
            file_key: self.file_key,
            access_token: self.access_token.map(SecretString::from),
            api_base_url: self.api_base_url,
            template_path: self.template_path,
            output_path: self.output_path,
            keywords: self.keywords,
            node_kind: self.node_kind,
            from_snapshot: self.from_snapshot,
            write_snapshot,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("figgen={level}").parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate(args) => commands::handle_generate_command(args).await,
        Commands::List(args) => commands::handle_list_command(args).await,
    };

    if let Err(err) = result {
        output::error(format!("{err:#}"));
        std::process::exit(1);
    }
    Ok(())
}
