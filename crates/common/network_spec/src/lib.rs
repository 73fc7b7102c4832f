//! Network identity for the node and client tools.
//!
//! Resolves which chain (`main`, `test`, `regtest` or `stn`) a process runs against
//! and exposes the parameters needed before the full chain configuration is
//! loaded: the default RPC port and the data directory suffix.

pub mod cli;
pub mod error;
pub mod networks;
pub mod selector;

pub use error::NetworkSpecError;
pub use networks::{Network, NetworkSpec};
pub use selector::{ChainFlags, NetworkContext, NetworkSelector};
