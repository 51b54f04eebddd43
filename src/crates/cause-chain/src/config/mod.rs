//! Capture configuration
//!
//! Controls whether constructing an error also captures a resolved call stack,
//! and how many frames are kept. The process-wide config is resolved once,
//! from the environment unless [`install`] ran first.
//!
//! # Environment
//!
//! - `CAUSE_CHAIN_BACKTRACE` - `true`/`false` (also `1`/`0`, `yes`/`no`, `on`/`off`)
//! - `CAUSE_CHAIN_MAX_FRAMES` - maximum frames kept per error
//!
//! When `CAUSE_CHAIN_BACKTRACE` is unset, `RUST_LIB_BACKTRACE` and then
//! `RUST_BACKTRACE` decide, enabling capture for any value other than `0`.
//!
//! # Example
//!
//! ```rust,no_run
//! use cause_chain::config::{self, ChainConfig};
//!
//! config::install(ChainConfig::default().with_backtrace(true))?;
//! # Ok::<(), cause_chain::ChainError>(())
//! ```

mod builder;

pub use builder::ConfigBuilder;

use crate::{ChainError, Result};
use std::env;
use std::sync::OnceLock;

/// Environment prefix read by [`current`]
pub const ENV_PREFIX: &str = "CAUSE_CHAIN_";

/// Frames kept per error unless configured otherwise
pub const DEFAULT_MAX_FRAMES: usize = 64;

static CONFIG: OnceLock<ChainConfig> = OnceLock::new();

/// Stack capture settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    /// Capture a resolved call stack for every constructed error
    pub backtrace: bool,
    /// Maximum frames kept per error
    pub max_frames: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            backtrace: false,
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }
}

impl ChainConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable call-stack capture
    pub fn with_backtrace(mut self, backtrace: bool) -> Self {
        self.backtrace = backtrace;
        self
    }

    /// Set the maximum frames kept per error
    pub fn with_max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = max_frames;
        self
    }
}

impl ConfigBuilder for ChainConfig {
    fn validate(&self) -> Result<()> {
        if self.max_frames == 0 {
            return Err(ChainError::Config("max_frames must be non-zero".into()));
        }
        Ok(())
    }

    fn from_env(prefix: &str) -> Result<Self> {
        let mut config = Self::default();

        let key = format!("{prefix}BACKTRACE");
        let backtrace = match var(&key)? {
            Some(value) => Some(parse_switch(&key, &value)?),
            None => std_backtrace_switch()?,
        };
        if let Some(backtrace) = backtrace {
            config.backtrace = backtrace;
        }

        let key = format!("{prefix}MAX_FRAMES");
        if let Some(value) = var(&key)? {
            config.max_frames = value.trim().parse::<usize>().map_err(|e| {
                ChainError::Config(format!("{key} is not a frame count: {e}"))
            })?;
        }

        Ok(config)
    }

    fn merge(&mut self, other: Self) -> &mut Self {
        self.backtrace = other.backtrace;
        self.max_frames = other.max_frames;
        self
    }
}

fn var(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(ChainError::Config(format!("{key} contains invalid UTF-8")))
        }
    }
}

/// Parse an on/off switch such as `true`, `1`, `yes` or `on`
fn parse_switch(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ChainError::Config(format!("{key} is not an on/off switch: {other}"))),
    }
}

/// `RUST_LIB_BACKTRACE`, then `RUST_BACKTRACE`; anything but `0` enables
fn std_backtrace_switch() -> Result<Option<bool>> {
    for key in ["RUST_LIB_BACKTRACE", "RUST_BACKTRACE"] {
        if let Some(value) = var(key)? {
            return Ok(Some(value.trim() != "0"));
        }
    }
    Ok(None)
}

/// Install the process-wide configuration
///
/// Must run before the first error is constructed. Fails when the config is
/// invalid or was already resolved.
pub fn install(config: ChainConfig) -> Result<()> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| ChainError::Config("configuration already resolved".into()))
}

/// The process-wide configuration, resolving it from the environment on first use
///
/// An unreadable environment falls back to defaults.
pub fn current() -> &'static ChainConfig {
    CONFIG.get_or_init(|| match ChainConfig::load(ENV_PREFIX) {
        Ok(config) => {
            tracing::debug!(
                backtrace = config.backtrace,
                max_frames = config.max_frames,
                "Resolved error capture configuration"
            );
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "Invalid error capture configuration, using defaults");
            ChainConfig::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChainConfig::default();
        assert!(!config.backtrace);
        assert_eq!(config.max_frames, DEFAULT_MAX_FRAMES);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = ChainConfig::new().with_backtrace(true).with_max_frames(8);
        assert!(config.backtrace);
        assert_eq!(config.max_frames, 8);
    }

    #[test]
    fn test_zero_frames_is_invalid() {
        let config = ChainConfig::new().with_max_frames(0);
        assert!(matches!(config.validate(), Err(ChainError::Config(_))));
    }

    #[test]
    fn test_from_env_with_prefix() {
        std::env::set_var("CC_TEST_A_BACKTRACE", "yes");
        std::env::set_var("CC_TEST_A_MAX_FRAMES", "5");
        let config = ChainConfig::from_env("CC_TEST_A_").unwrap();
        assert!(config.backtrace);
        assert_eq!(config.max_frames, 5);
        std::env::remove_var("CC_TEST_A_BACKTRACE");
        std::env::remove_var("CC_TEST_A_MAX_FRAMES");
    }

    #[test]
    fn test_load_rejects_zero_frames() {
        std::env::set_var("CC_TEST_B_BACKTRACE", "off");
        std::env::set_var("CC_TEST_B_MAX_FRAMES", "0");
        assert!(ChainConfig::load("CC_TEST_B_").is_err());
        std::env::remove_var("CC_TEST_B_BACKTRACE");
        std::env::remove_var("CC_TEST_B_MAX_FRAMES");
    }

    #[test]
    fn test_merge_takes_other() {
        let mut config = ChainConfig::default();
        config.merge(ChainConfig::new().with_backtrace(true).with_max_frames(3));
        assert_eq!(config, ChainConfig::new().with_backtrace(true).with_max_frames(3));
    }

    #[test]
    fn test_parse_switch_values() {
        for (value, expected) in [("true", true), ("ON", true), (" 1 ", true), ("no", false), ("0", false)] {
            assert_eq!(parse_switch("KEY", value).unwrap(), expected);
        }
        assert!(matches!(parse_switch("KEY", "maybe"), Err(ChainError::Config(_))));
    }

    #[test]
    fn test_from_env_rejects_bad_values() {
        std::env::set_var("CC_TEST_C_BACKTRACE", "sometimes");
        assert!(ChainConfig::from_env("CC_TEST_C_").is_err());
        std::env::set_var("CC_TEST_C_BACKTRACE", "off");
        std::env::set_var("CC_TEST_C_MAX_FRAMES", "many");
        assert!(ChainConfig::from_env("CC_TEST_C_").is_err());
        std::env::remove_var("CC_TEST_C_BACKTRACE");
        std::env::remove_var("CC_TEST_C_MAX_FRAMES");
    }

    #[test]
    fn test_missing_var_is_none() {
        assert_eq!(var("CC_TEST_NONEXISTENT_VAR_12345").unwrap(), None);
    }

    #[test]
    fn test_install_after_resolution_fails() {
        let _ = current();
        assert!(install(ChainConfig::default()).is_err());
    }
}
