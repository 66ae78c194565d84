use thiserror::Error;

/// Errors from the network parameter registry.
///
/// Both variants are operator-facing configuration errors; corrupted
/// constant tables are a build defect and abort instead (see
/// `config::params`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("unknown chain: {0}")]
    UnknownChain(String),

    #[error("network parameters already selected for this process")]
    AlreadySelected,
}
