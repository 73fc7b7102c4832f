use std::{path::PathBuf, sync::Arc};

use clap::{Args, Parser, Subcommand};
use keel_network_spec::{cli::network_parser, ChainFlags, NetworkSpec, NetworkSpecError};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Select the network and report its parameters
    #[command(name = "node")]
    Node(NodeCommand),

    /// Print the chain selection options
    #[command(name = "chain-help")]
    ChainHelp(ChainHelpCommand),
}

#[derive(Debug, Parser)]
pub struct NodeCommand {
    /// Verbosity level
    #[arg(short, long, default_value_t = 3)]
    pub verbosity: u8,

    #[command(flatten)]
    pub chain: ChainArgs,

    /// Base data directory; the network's suffix is appended to it
    #[arg(long, value_name = "DIR")]
    pub datadir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ChainArgs {
    /// Enter regression test mode
    #[arg(long)]
    pub regtest: bool,

    /// Use the test chain
    #[arg(long)]
    pub testnet: bool,

    /// Use the Scaling Test Network
    #[arg(long, hide = true)]
    pub stn: bool,

    #[arg(
        long,
        help = "Choose main, test, regtest, or stn",
        value_parser = network_parser,
        conflicts_with_all = ["regtest", "testnet", "stn"]
    )]
    pub network: Option<Arc<NetworkSpec>>,
}

impl ChainArgs {
    pub fn flags(&self) -> ChainFlags {
        ChainFlags {
            regtest: self.regtest,
            testnet: self.testnet,
            stn: self.stn,
        }
    }

    /// Canonical name of the requested network. An explicit `--network` wins,
    /// otherwise the boolean flags are resolved.
    pub fn network_name(&self) -> Result<&'static str, NetworkSpecError> {
        match &self.network {
            Some(spec) => Ok(spec.name()),
            None => Ok(self.flags().resolve()?.as_str()),
        }
    }
}

#[derive(Debug, Parser)]
pub struct ChainHelpCommand {
    /// Include debug-only options
    #[arg(long)]
    pub debug: bool,
}
