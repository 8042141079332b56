//! Infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "SOUQ";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "souq.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "souq";

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "SOUQ_LOG";
