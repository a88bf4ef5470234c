use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use deployment_manifest::{load_interface, ContractRecord, Manifest};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "deployment-manifest",
    version,
    about = "Record and verify deployed platform contract addresses"
)]
struct Cli {
    /// Path of the manifest JSON file.
    #[arg(long, short, default_value = "deployment.json")]
    manifest: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add or replace one contract entry. Creates the manifest if needed.
    Record {
        /// Contract name, e.g. `dao`.
        name: String,
        /// Deployed contract id (C... strkey).
        address: String,
        /// Network name; required when the manifest does not exist yet.
        #[arg(long)]
        network: Option<String>,
        /// Wasm file the contract was deployed from.
        #[arg(long)]
        wasm: Option<String>,
        /// Contract interface JSON, from `stellar contract info interface --output json-formatted`.
        #[arg(long)]
        spec: Option<PathBuf>,
        /// Constructor parameter as key=value. Repeatable.
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Check that every platform contract is recorded with a distinct valid address and an interface.
    Verify,
    /// Print the manifest.
    Show,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err(format!("expected key=value, got `{raw}`")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Record {
            name,
            address,
            network,
            wasm,
            spec,
            params,
        } => {
            let mut manifest = if cli.manifest.exists() {
                let manifest = Manifest::load(&cli.manifest)?;
                if let Some(network) = &network {
                    if network != &manifest.network {
                        bail!(
                            "manifest {} is for network `{}`, not `{}`",
                            cli.manifest.display(),
                            manifest.network,
                            network
                        );
                    }
                }
                manifest
            } else {
                let network = network.context("--network is required for a new manifest")?;
                Manifest::new(network)
            };

            let interface = spec
                .map(|path| {
                    load_interface(&path)
                        .with_context(|| format!("reading interface for `{name}`"))
                })
                .transpose()?;
            if interface.is_none() {
                warn!(contract = %name, "no --spec given; verify will report a missing interface");
            }

            let record = ContractRecord {
                address,
                wasm,
                interface,
                params: params.into_iter().collect::<BTreeMap<_, _>>(),
            };
            manifest.record(&name, record)?;
            manifest.save(&cli.manifest)?;
            info!(contract = %name, "recorded");
        }
        Command::Verify => {
            let manifest = Manifest::load(&cli.manifest)?;
            let problems = manifest.verify();
            for problem in &problems {
                error!("{problem}");
            }
            manifest.ensure_complete()?;
            info!(network = %manifest.network, "deployment complete");
        }
        Command::Show => {
            let manifest = Manifest::load(&cli.manifest)?;
            println!("{}", manifest.to_json()?);
        }
    }

    Ok(())
}
