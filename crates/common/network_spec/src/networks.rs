use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
    sync::{Arc, LazyLock},
};

use crate::error::NetworkSpecError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Main,
    Testnet,
    Regtest,
    /// Scaling test network
    Stn,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::Main,
        Network::Testnet,
        Network::Regtest,
        Network::Stn,
    ];

    /// Canonical chain name, as accepted by [`Network::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
            Network::Stn => "stn",
        }
    }

    pub fn spec(&self) -> Arc<NetworkSpec> {
        match self {
            Network::Main => MAIN.clone(),
            Network::Testnet => TESTNET.clone(),
            Network::Regtest => REGTEST.clone(),
            Network::Stn => STN.clone(),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = NetworkSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Network::Main),
            "test" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            "stn" => Ok(Network::Stn),
            _ => Err(NetworkSpecError::InvalidNetwork(s.to_string())),
        }
    }
}

/// Parameters shared by the node and client tools that identify a network
/// before the full chain configuration is loaded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NetworkSpec {
    network: Network,
    rpc_port: u16,
    data_dir: &'static str,
}

impl NetworkSpec {
    pub fn network(&self) -> Network {
        self.network
    }

    pub fn name(&self) -> &'static str {
        self.network.as_str()
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    /// Path segment appended to the base data directory. Empty for main.
    pub fn data_dir(&self) -> &'static str {
        self.data_dir
    }

    pub fn data_dir_in(&self, base: impl AsRef<Path>) -> PathBuf {
        let base = base.as_ref();
        if self.data_dir.is_empty() {
            base.to_path_buf()
        } else {
            base.join(self.data_dir)
        }
    }
}

pub static MAIN: LazyLock<Arc<NetworkSpec>> = LazyLock::new(|| {
    NetworkSpec {
        network: Network::Main,
        rpc_port: 8332,
        data_dir: "",
    }
    .into()
});

pub static TESTNET: LazyLock<Arc<NetworkSpec>> = LazyLock::new(|| {
    NetworkSpec {
        network: Network::Testnet,
        rpc_port: 18332,
        data_dir: "testnet3",
    }
    .into()
});

pub static REGTEST: LazyLock<Arc<NetworkSpec>> = LazyLock::new(|| {
    NetworkSpec {
        network: Network::Regtest,
        rpc_port: 18443,
        data_dir: "regtest",
    }
    .into()
});

pub static STN: LazyLock<Arc<NetworkSpec>> = LazyLock::new(|| {
    NetworkSpec {
        network: Network::Stn,
        rpc_port: 9332,
        data_dir: "stn",
    }
    .into()
});
