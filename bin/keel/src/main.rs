use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use keel_network_spec::{
    cli::append_help_text,
    selector::{current_network, select_network},
};
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, NodeCommand};

mod cli;

const APP_NAME: &str = "keel";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Node(cmd) => run_node(cmd),
        Commands::ChainHelp(cmd) => {
            let mut usage = String::new();
            append_help_text(&mut usage, cmd.debug);
            print!("{usage}");
            Ok(())
        }
    }
}

fn run_node(cmd: NodeCommand) -> anyhow::Result<()> {
    init_tracing(cmd.verbosity);

    info!("keel v{} starting...", env!("CARGO_PKG_VERSION"));

    let name = cmd.chain.network_name().map_err(|err| {
        error!("Failed to resolve network: {err}");
        anyhow!("Failed to resolve network: {err}")
    })?;
    select_network(name).map_err(|err| {
        error!("Failed to select network: {err}");
        anyhow!("Failed to select network: {err}")
    })?;

    let network = current_network();
    let base = cmd.datadir.unwrap_or_else(default_data_dir);
    let data_dir = network.data_dir_in(&base);
    info!(
        network = network.name(),
        rpc_port = network.rpc_port(),
        data_dir = %data_dir.display(),
        "Network selected"
    );

    println!("network:  {}", network.name());
    println!("rpc port: {}", network.rpc_port());
    println!("data dir: {}", data_dir.display());
    Ok(())
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_NAME))
        .unwrap_or_else(|| PathBuf::from("./data"))
}

fn init_tracing(verbosity: u8) {
    let mut filter = EnvFilter::from_default_env();

    // Only apply defaults if RUST_LOG is not set
    if std::env::var("RUST_LOG").is_err() {
        let level = match verbosity {
            0 => LevelFilter::OFF,
            1 => LevelFilter::ERROR,
            2 => LevelFilter::WARN,
            3 => LevelFilter::INFO,
            4 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        filter = filter.add_directive(level.into());
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
