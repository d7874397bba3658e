use crate::catalog::REGIONS;
use crate::error::{AgriOpsError, Result};
use dialoguer::{Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub farm: FarmConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FarmConfig {
    pub name: String,
    /// Default region for recommendation queries; changeable per
    /// session in Settings.
    pub region: String,
    /// Startup value for the alert toggle when the store has no
    /// persisted preference yet.
    #[serde(default = "default_alerts")]
    pub alerts_enabled: bool,
}

fn default_alerts() -> bool {
    true
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(AgriOpsError::Config(format!(
                "Config file not found at {:?}. Run `agriops init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AgriOpsError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| AgriOpsError::Config(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("agriops").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        // Return XDG path as the default (will trigger "not found" in load)
        let default_path = dirs::config_dir()
            .ok_or_else(|| AgriOpsError::Config("Cannot determine config directory".into()))?
            .join("agriops")
            .join("config.yaml");
        Ok(default_path)
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/agriops/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgriOpsError::Config("Cannot determine config directory".into()))?
            .join("agriops");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("No configuration found. Let's set up AgriOps!");
        println!();

        println!("Farm Profile");
        let farm_name: String = Input::new()
            .with_prompt("  Farm name")
            .default("My Farm".into())
            .interact_text()
            .map_err(|e| AgriOpsError::Config(format!("Input error: {}", e)))?;

        let region_idx = Select::new()
            .with_prompt("  Region")
            .items(REGIONS)
            .default(0)
            .interact()
            .map_err(|e| AgriOpsError::Config(format!("Input error: {}", e)))?;

        let alerts_enabled = Confirm::new()
            .with_prompt("  Enable risk alerts?")
            .default(true)
            .interact()
            .map_err(|e| AgriOpsError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            farm: FarmConfig {
                name: farm_name,
                region: REGIONS[region_idx].to_string(),
                alerts_enabled,
            },
        };

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AgriOpsError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# AgriOps Configuration\n# Generated by `agriops init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }

    pub fn data_dir(data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        // CLI override takes priority
        if let Some(dir) = data_dir_override {
            std::fs::create_dir_all(dir)?;
            return Ok(dir.clone());
        }

        // Then check env var
        if let Ok(dir) = std::env::var("AGRIOPS_DATA_DIR") {
            let p = PathBuf::from(dir);
            std::fs::create_dir_all(&p)?;
            return Ok(p);
        }

        // Use XDG data directory
        let data_dir = dirs::data_dir()
            .ok_or_else(|| AgriOpsError::Config("Cannot determine data directory".into()))?
            .join("agriops");

        std::fs::create_dir_all(&data_dir)?;
        Ok(data_dir)
    }

    pub fn db_path(data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        Ok(Self::data_dir(data_dir_override)?.join("agriops.db"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            farm: FarmConfig {
                name: "My Farm".into(),
                region: "Western Maharashtra".into(),
                alerts_enabled: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_yaml() {
        let yaml = "farm:\n  name: Test Farm\n  region: Vidarbha\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.farm.name, "Test Farm");
        assert_eq!(config.farm.region, "Vidarbha");
        assert!(config.farm.alerts_enabled); // defaulted
    }

    #[test]
    fn parses_alerts_flag() {
        let yaml = "farm:\n  name: F\n  region: Vidarbha\n  alerts_enabled: false\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(!config.farm.alerts_enabled);
    }

    #[test]
    fn default_region_is_listed() {
        let config = Config::default();
        assert!(REGIONS.contains(&config.farm.region.as_str()));
    }
}
