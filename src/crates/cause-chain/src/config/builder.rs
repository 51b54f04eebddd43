//! Configuration builder trait
//!
//! Common shape for configuration structures: defaults, validation,
//! environment loading and merging.

use crate::Result;

/// Trait for configuration structures that support building, validation, and merging
pub trait ConfigBuilder: Default + Clone {
    /// Validate the configuration
    ///
    /// Returns an error if the configuration is invalid.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Load configuration from environment variables
    ///
    /// Variables follow the pattern `{PREFIX}{FIELD_NAME}` where FIELD_NAME is
    /// the uppercased field name. Unset variables keep their default.
    fn from_env(prefix: &str) -> Result<Self>;

    /// Merge another configuration into this one
    ///
    /// Scalar fields take `other`'s value. Returns self for chaining.
    fn merge(&mut self, other: Self) -> &mut Self;

    /// Create, validate, and return the default configuration
    fn build() -> Result<Self> {
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Load from environment and validate the result
    fn load(prefix: &str) -> Result<Self> {
        let config = Self::from_env(prefix)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChainError;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct TestConfig {
        depth: Option<i32>,
    }

    impl ConfigBuilder for TestConfig {
        fn validate(&self) -> Result<()> {
            match self.depth {
                Some(d) if d < 0 => Err(ChainError::Config("depth must be non-negative".into())),
                _ => Ok(()),
            }
        }

        fn from_env(_prefix: &str) -> Result<Self> {
            Ok(Self { depth: Some(-1) })
        }

        fn merge(&mut self, other: Self) -> &mut Self {
            if other.depth.is_some() {
                self.depth = other.depth;
            }
            self
        }
    }

    #[test]
    fn test_build_returns_default() {
        assert_eq!(TestConfig::build().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_load_validates() {
        assert!(matches!(TestConfig::load("TEST_"), Err(ChainError::Config(_))));
    }

    #[test]
    fn test_merge_overwrites_set_fields() {
        let mut config = TestConfig { depth: Some(1) };
        config.merge(TestConfig { depth: None });
        assert_eq!(config.depth, Some(1));
        config.merge(TestConfig { depth: Some(3) });
        assert_eq!(config.depth, Some(3));
    }
}
