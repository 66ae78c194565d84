use crate::errors::ParamsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The chain a node is operating on.
///
/// A closed set: every variant has a fully populated parameter table in
/// `config::params`, and selection is a pure mapping from this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChainType {
    /// Main network
    Main,
    /// Test network
    Test,
    /// Regression test network
    Regtest,
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainType::Main => write!(f, "main"),
            ChainType::Test => write!(f, "test"),
            ChainType::Regtest => write!(f, "regtest"),
        }
    }
}

impl FromStr for ChainType {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(ChainType::Main),
            "test" => Ok(ChainType::Test),
            "regtest" => Ok(ChainType::Regtest),
            other => Err(ParamsError::UnknownChain(other.to_string())),
        }
    }
}

impl ChainType {
    /// Returns an iterator over all ChainType variants
    pub fn iter() -> impl Iterator<Item = ChainType> {
        [ChainType::Main, ChainType::Test, ChainType::Regtest].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_names() {
        assert_eq!("main".parse::<ChainType>().unwrap(), ChainType::Main);
        assert_eq!("test".parse::<ChainType>().unwrap(), ChainType::Test);
        assert_eq!("regtest".parse::<ChainType>().unwrap(), ChainType::Regtest);
    }

    #[test]
    fn parse_rejects_unknown_name() {
        let err = "bogus".parse::<ChainType>().unwrap_err();
        assert_eq!(err, ParamsError::UnknownChain("bogus".to_string()));
    }

    #[test]
    fn display_round_trips() {
        for chain in ChainType::iter() {
            assert_eq!(chain.to_string().parse::<ChainType>().unwrap(), chain);
        }
    }
}
