use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkSpecError {
    #[error("invalid network name: {0}, try main, test, regtest, or stn")]
    InvalidNetwork(String),
    #[error("conflicting network options: {0}")]
    ConflictingOptions(String),
}
