use std::{io, process};

use clap::Parser;
use log::*;
use program_id::errors::ProgramIdResult;
use program_id_config::{KeySlice, ProgramIdConfig, ProgramKeypairConfig};

#[derive(Debug, Parser)]
#[command(name = "program-id")]
#[command(
    about = "Prints the program ID stored in deploy keypair files",
    long_about = "Example: program-id ./target/deploy/deposit_pda-keypair.json"
)]
struct Cli {
    /// Keypair files, defaults to ./target/deploy/deposit_pda-keypair.json
    keypairs: Vec<String>,

    /// Decode every `*-keypair.json` file in this directory
    #[arg(long)]
    deploy_dir: Option<String>,

    /// Which 32 entries of the keypair hold the program key (head | tail)
    #[arg(long)]
    slice: Option<KeySlice>,

    /// Fail unless the program ID matches, requires a single keypair
    #[arg(long)]
    expect: Option<String>,

    /// TOML config file
    #[arg(long, short)]
    config: Option<String>,
}

fn init_logger() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    )
    .format_timestamp_micros()
    .try_init();
}

fn load_config(cli: &Cli) -> ProgramIdResult<ProgramIdConfig> {
    let config = match &cli.config {
        Some(file) => {
            info!("Loading config from '{}'.", file);
            ProgramIdConfig::try_load_from_file(file)?
        }
        None => ProgramIdConfig::default(),
    };
    let mut config = config.override_from_envs()?;

    if let Some(slice) = cli.slice {
        config.slice = slice;
    }
    // Targets given on the command line replace configured ones
    if !cli.keypairs.is_empty() || cli.deploy_dir.is_some() {
        config.programs = cli
            .keypairs
            .iter()
            .map(|keypair| ProgramKeypairConfig::new(keypair.as_str()))
            .collect();
        config.deploy_dir = cli.deploy_dir.clone();
    }
    debug!("Using config:\n{}", config);
    Ok(config)
}

fn run(cli: &Cli) -> ProgramIdResult<()> {
    let config = load_config(cli)?;
    let mut stdout = io::stdout().lock();
    program_id::run(&config, cli.expect.as_deref(), &mut stdout)
}

fn main() {
    init_logger();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        error!("{}", err);
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
