//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const APP_DIR: &str = "domain-scout";
const PROJECT_FILES: [&str; 2] = ["domain-scout.toml", ".domain-scout.toml"];

/// Variables read without the `DOMAIN_SCOUT_` prefix for compatibility with
/// existing deployments.
const RAW_ENV_KEYS: [&str; 4] = ["AI_ENDPOINT", "AI_API_KEY", "AI_MODEL", "PRICE_SERVICE_ADDR"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `DOMAIN_SCOUT_*` variables (`DOMAIN_SCOUT_LLM__MODEL=...`)
    /// 2. `AI_ENDPOINT`, `AI_API_KEY`, `AI_MODEL`, `PRICE_SERVICE_ADDR`
    /// 3. Explicit config path (if provided)
    /// 4. Project root: `./domain-scout.toml` or `./.domain-scout.toml`
    /// 5. Global: `<config dir>/domain-scout/config.toml`
    /// 6. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::with_env(figment).extract().map_err(Box::new)
    }

    /// Load defaults and environment variables, skipping every file (for --no-config)
    pub fn load_env_only() -> Result<FileConfig, Box<figment::Error>> {
        Self::with_env(Figment::new().merge(Serialized::defaults(FileConfig::default())))
            .extract()
            .map_err(Box::new)
    }

    fn with_env(figment: Figment) -> Figment {
        figment
            .merge(
                Env::raw()
                    .only(&RAW_ENV_KEYS)
                    .map(|key| raw_env_target(key.as_str()).into()),
            )
            .merge(Env::prefixed("DOMAIN_SCOUT_").split("__"))
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] DOMAIN_SCOUT_* and {}", RAW_ENV_KEYS.join(", "));

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./domain-scout.toml or ./.domain-scout.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

fn raw_env_target(key: &str) -> String {
    match key.to_ascii_uppercase().as_str() {
        "AI_ENDPOINT" => "llm.endpoint",
        "AI_API_KEY" => "llm.api_key",
        "AI_MODEL" => "llm.model",
        "PRICE_SERVICE_ADDR" => "pricing.endpoint",
        other => return other.to_ascii_lowercase(),
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("domain-scout"));
    }

    #[test]
    fn test_raw_env_target() {
        assert_eq!(raw_env_target("AI_MODEL"), "llm.model");
        assert_eq!(raw_env_target("ai_api_key"), "llm.api_key");
        assert_eq!(raw_env_target("PRICE_SERVICE_ADDR"), "pricing.endpoint");
    }

    #[test]
    fn test_project_file_and_env_precedence() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "domain-scout.toml",
                r#"
[llm]
model = "from-file"
temperature = 0.2

[pricing]
currency = "EUR"
"#,
            )?;
            jail.set_env("AI_MODEL", "from-raw-env");
            jail.set_env("PRICE_SERVICE_ADDR", "http://prices.local:9090");
            jail.set_env("DOMAIN_SCOUT_PRICING__CURRENCY", "GBP");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.llm.model, "from-raw-env");
            assert_eq!(config.llm.temperature, 0.2);
            assert_eq!(
                config.pricing.endpoint.as_deref(),
                Some("http://prices.local:9090")
            );
            assert_eq!(config.pricing.currency, "GBP");
            Ok(())
        });
    }

    #[test]
    fn test_explicit_path_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".domain-scout.toml", "[llm]\nmodel = \"project\"\n")?;
            jail.create_file("custom.toml", "[llm]\nmodel = \"explicit\"\n")?;

            let explicit = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.llm.model, "explicit");
            Ok(())
        });
    }

    #[test]
    fn test_env_only_ignores_files() {
        Jail::expect_with(|jail| {
            jail.create_file("domain-scout.toml", "[llm]\nmodel = \"from-file\"\n")?;
            jail.set_env("AI_API_KEY", "sk-test");

            let config = ConfigLoader::load_env_only().map_err(|e| *e)?;
            assert_eq!(config.llm.model, crate::config::DEFAULT_LLM_MODEL);
            assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
            Ok(())
        });
    }

    #[test]
    fn test_prefixed_env_overrides_raw() {
        Jail::expect_with(|jail| {
            jail.set_env("AI_MODEL", "raw");
            jail.set_env("DOMAIN_SCOUT_LLM__MODEL", "prefixed");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.llm.model, "prefixed");
            Ok(())
        });
    }
}
