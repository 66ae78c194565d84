use consensus_core::network::ChainType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Chain the node runs against ("main", "test", "regtest")
    pub chain: String,
}

impl Config {
    /// Load configuration from file if it exists, otherwise use defaults
    pub fn load(path: &Path) -> Result<Self, String> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read config file: {}", e))?;

            let config: Config = toml::from_str(&content)
                .map_err(|e| format!("Failed to parse config: {}", e))?;

            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Load default configuration for a named network
    pub fn for_network(network: &str) -> Result<Self, String> {
        // reject unknown names here, before anything selects a chain
        let chain: ChainType = network.parse().map_err(|e| format!("{}", e))?;

        let mut config = Config::default();
        config.network.chain = chain.to_string();
        Ok(config)
    }

    /// Override config with CLI arguments
    pub fn apply_cli_overrides(&mut self, args: &crate::cli::Args) {
        if let Some(network) = &args.network {
            self.network.chain = network.clone();
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { network: NetworkConfig { chain: ChainType::Main.to_string() } }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_on_main() {
        assert_eq!(Config::default().network.chain, "main");
    }

    #[test]
    fn for_network_accepts_the_three_chains() {
        for name in ["main", "test", "regtest"] {
            assert_eq!(Config::for_network(name).unwrap().network.chain, name);
        }
    }

    #[test]
    fn for_network_rejects_unknown_names() {
        let err = Config::for_network("signet").unwrap_err();
        assert!(err.contains("unknown chain"));
    }

    #[test]
    fn cli_network_overrides_config() {
        let args = crate::cli::Args {
            config_path: None,
            network: Some("regtest".to_string()),
            log_level: "info".to_string(),
        };
        let mut config = Config::default();
        config.apply_cli_overrides(&args);
        assert_eq!(config.network.chain, "regtest");
    }

    #[test]
    fn toml_round_trip() {
        let rendered = toml::to_string(&Config::for_network("test").unwrap()).unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.network.chain, "test");
    }
}
