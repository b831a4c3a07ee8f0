use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use scheduler_core::recurrence::SearchLimits;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "scheduler.toml";
pub const ENV_PREFIX: &str = "SCHEDULER_";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Dates shown by `preview` when `--count` is not given
    pub preview_count: usize,
    /// Years past the later of start and now that a search may run
    pub horizon_years: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preview_count: 5,
            horizon_years: SearchLimits::default().horizon_years,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            horizon_years: self.horizon_years,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = Config::new()?;
            assert_eq!(config, Config::default());
            assert_eq!(config.search_limits(), SearchLimits::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(CONFIG_FILE, "preview_count = 12\nhorizon_years = 4")?;
            let config = Config::new()?;
            assert_eq!(config.preview_count, 12);
            assert_eq!(config.horizon_years, 4);

            jail.set_env("SCHEDULER_HORIZON_YEARS", "20");
            let config = Config::new()?;
            assert_eq!(config.preview_count, 12);
            assert_eq!(config.search_limits().horizon_years, 20);
            Ok(())
        });
    }

    #[test]
    fn test_bad_value_is_an_error() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("SCHEDULER_PREVIEW_COUNT", "many");
            assert!(Config::new().is_err());
            Ok(())
        });
    }
}
