use std::{
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use tracing::{debug, warn};

use crate::{
    cli::create_network_spec,
    error::NetworkSpecError,
    networks::{Network, NetworkSpec},
};

/// Maps the `-regtest` / `-testnet` flags to a canonical chain name, `main` when
/// neither is given. Both at once is rejected.
pub fn resolve_network_name(regtest: bool, testnet: bool) -> Result<&'static str, NetworkSpecError> {
    match (regtest, testnet) {
        (true, true) => Err(NetworkSpecError::ConflictingOptions(
            "-regtest and -testnet".to_string(),
        )),
        (true, false) => Ok(Network::Regtest.as_str()),
        (false, true) => Ok(Network::Testnet.as_str()),
        (false, false) => Ok(Network::Main.as_str()),
    }
}

/// Chain selection flags as extracted from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChainFlags {
    pub regtest: bool,
    pub testnet: bool,
    pub stn: bool,
}

impl ChainFlags {
    /// At most one flag may be set; none selects main.
    pub fn resolve(&self) -> Result<Network, NetworkSpecError> {
        let requested: Vec<&str> = [
            (self.regtest, "-regtest"),
            (self.testnet, "-testnet"),
            (self.stn, "-stn"),
        ]
        .into_iter()
        .filter_map(|(set, flag)| set.then_some(flag))
        .collect();

        if requested.len() > 1 {
            return Err(NetworkSpecError::ConflictingOptions(requested.join(" and ")));
        }

        if self.stn {
            return Ok(Network::Stn);
        }
        resolve_network_name(self.regtest, self.testnet)?.parse()
    }
}

/// Handle to the selected network. Only obtainable from a successful selection,
/// so holding one proves startup has picked a network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkContext {
    spec: Arc<NetworkSpec>,
}

impl NetworkContext {
    /// Resolves `flags` without touching any process-wide state.
    pub fn from_flags(flags: &ChainFlags) -> Result<Self, NetworkSpecError> {
        Ok(Self {
            spec: flags.resolve()?.spec(),
        })
    }

    pub fn spec(&self) -> &Arc<NetworkSpec> {
        &self.spec
    }

    pub fn network(&self) -> Network {
        self.spec.network()
    }

    pub fn name(&self) -> &'static str {
        self.spec.name()
    }

    pub fn rpc_port(&self) -> u16 {
        self.spec.rpc_port()
    }

    pub fn data_dir(&self) -> &'static str {
        self.spec.data_dir()
    }

    pub fn data_dir_in(&self, base: impl AsRef<Path>) -> PathBuf {
        self.spec.data_dir_in(base)
    }
}

/// Slot holding the network chosen at startup.
///
/// Production code selects once before spawning any worker; tests may select
/// again to simulate a different run. There is no way back to unselected.
#[derive(Debug, Default)]
pub struct NetworkSelector {
    selected: RwLock<Option<Arc<NetworkSpec>>>,
}

impl NetworkSelector {
    pub const fn new() -> Self {
        Self {
            selected: RwLock::new(None),
        }
    }

    /// Selects `name`, replacing any previous selection. On error the slot is
    /// left as it was.
    pub fn select(&self, name: &str) -> Result<NetworkContext, NetworkSpecError> {
        let spec = create_network_spec(name).inspect_err(|err| warn!("Rejected network: {err}"))?;

        // The slot only ever holds a complete Arc, so a poisoned lock is still consistent.
        let mut selected = self.selected.write().unwrap_or_else(|err| err.into_inner());
        if let Some(previous) = selected
            .as_ref()
            .filter(|previous| previous.network() != spec.network())
        {
            debug!("Replacing selected network {} with {}", previous.name(), spec.name());
        }
        *selected = Some(spec.clone());
        debug!("Selected network {} (rpc port {})", spec.name(), spec.rpc_port());

        Ok(NetworkContext { spec })
    }

    /// Returns the selected network.
    ///
    /// # Panics
    ///
    /// Panics if nothing has been selected yet. Querying the network before
    /// startup selects one is a bug in the caller.
    pub fn current(&self) -> NetworkContext {
        match self.try_current() {
            Some(context) => context,
            None => panic!("network queried before selection: call select() during startup"),
        }
    }

    pub fn try_current(&self) -> Option<NetworkContext> {
        self.selected
            .read()
            .unwrap_or_else(|err| err.into_inner())
            .clone()
            .map(|spec| NetworkContext { spec })
    }

    pub fn is_selected(&self) -> bool {
        self.try_current().is_some()
    }
}

static SELECTOR: NetworkSelector = NetworkSelector::new();

/// Selects the process-wide network. See [`NetworkSelector::select`].
pub fn select_network(name: &str) -> Result<NetworkContext, NetworkSpecError> {
    SELECTOR.select(name)
}

/// Returns the process-wide network. See [`NetworkSelector::current`].
pub fn current_network() -> NetworkContext {
    SELECTOR.current()
}

pub fn try_current_network() -> Option<NetworkContext> {
    SELECTOR.try_current()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::networks::{MAIN, REGTEST};

    #[test]
    fn test_resolve_network_name() {
        assert_eq!(resolve_network_name(false, false), Ok("main"));
        assert_eq!(resolve_network_name(true, false), Ok("regtest"));
        assert_eq!(resolve_network_name(false, true), Ok("test"));
        assert!(matches!(
            resolve_network_name(true, true),
            Err(NetworkSpecError::ConflictingOptions(_))
        ));
    }

    #[test]
    fn test_chain_flags_agree_without_stn() {
        for (regtest, testnet) in [(false, false), (true, false), (false, true), (true, true)] {
            let flags = ChainFlags {
                regtest,
                testnet,
                stn: false,
            };
            assert_eq!(
                flags.resolve().map(|network| network.as_str()),
                resolve_network_name(regtest, testnet)
            );
        }
    }

    #[test]
    fn test_chain_flags_stn() {
        let flags = ChainFlags {
            stn: true,
            ..Default::default()
        };
        assert_eq!(flags.resolve(), Ok(Network::Stn));

        for flags in [
            ChainFlags { regtest: true, testnet: false, stn: true },
            ChainFlags { regtest: false, testnet: true, stn: true },
            ChainFlags { regtest: true, testnet: true, stn: true },
        ] {
            assert!(matches!(flags.resolve(), Err(NetworkSpecError::ConflictingOptions(_))));
        }
    }

    #[test]
    fn test_conflict_names_flags() {
        let flags = ChainFlags {
            testnet: true,
            stn: true,
            ..Default::default()
        };
        assert_eq!(
            flags.resolve(),
            Err(NetworkSpecError::ConflictingOptions("-testnet and -stn".to_string()))
        );
    }

    #[test]
    fn test_context_from_flags() {
        let context = NetworkContext::from_flags(&ChainFlags::default()).unwrap();
        assert_eq!(context.network(), Network::Main);
        assert_eq!(context.data_dir(), "");
    }

    #[test]
    fn test_select_regtest() {
        let selector = NetworkSelector::new();
        let context = selector.select("regtest").unwrap();
        assert_eq!(context.rpc_port(), REGTEST.rpc_port());
        assert_ne!(selector.current().rpc_port(), MAIN.rpc_port());
        assert_eq!(selector.current(), context);
    }

    #[test]
    fn test_unselected() {
        let selector = NetworkSelector::new();
        assert!(!selector.is_selected());
        assert_eq!(selector.try_current(), None);
    }

    #[test]
    #[should_panic(expected = "network queried before selection")]
    fn test_current_before_select_panics() {
        NetworkSelector::new().current();
    }

    #[test]
    fn test_reselect_overwrites() {
        let selector = NetworkSelector::new();
        selector.select("test").unwrap();
        selector.select("stn").unwrap();

        let current = selector.current();
        assert_eq!(current.network(), Network::Stn);
        assert_eq!(current.rpc_port(), 9332);
        assert_eq!(current.data_dir(), "stn");
    }

    #[test]
    fn test_invalid_select_keeps_state() {
        let selector = NetworkSelector::new();
        assert_eq!(
            selector.select("mainnet"),
            Err(NetworkSpecError::InvalidNetwork("mainnet".to_string()))
        );
        assert!(!selector.is_selected());

        selector.select("regtest").unwrap();
        assert!(selector.select("bogus").is_err());
        assert_eq!(selector.current().network(), Network::Regtest);
    }
}
