//! Configuration for cakewrap
//!
//! Everything is driven by environment variables, read exactly once at startup
//! into an explicit `Config` that is handed to the pipeline. The core never
//! touches the process environment itself, so tests can construct a `Config`
//! directly.
//!
//! Variables:
//! - `CAKE` - transformer executable override (default `cake`, resolved on PATH)
//! - `DEBUG_CAKE_WRAPPER` - when set, print every derived command to stderr
//! - `CAKE_WRAPPER_DISABLE_CAKE` - when set, skip the transformer stage entirely

use std::env;

/// Environment variable naming the transformer executable.
pub const TRANSFORMER_ENV: &str = "CAKE";

/// Environment variable enabling command tracing on stderr.
pub const DEBUG_ENV: &str = "DEBUG_CAKE_WRAPPER";

/// Environment variable that bypasses the transformer stage.
pub const DISABLE_ENV: &str = "CAKE_WRAPPER_DISABLE_CAKE";

/// Default transformer executable name, resolved via PATH.
pub const DEFAULT_TRANSFORMER: &str = "cake";

/// Wrapper configuration, fixed for the lifetime of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Print every derived subprocess command to stderr.
    pub debug: bool,
    /// Transformer executable name or path.
    pub transformer: String,
    /// Skip the transformer and feed the original source to the compiler.
    pub disable_transform: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            transformer: DEFAULT_TRANSFORMER.to_string(),
            disable_transform: false,
        }
    }
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// An empty `CAKE` value counts as unset.
    pub fn from_env() -> Self {
        Self {
            debug: env::var_os(DEBUG_ENV).is_some(),
            transformer: env::var(TRANSFORMER_ENV)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_TRANSFORMER.to_string()),
            disable_transform: env::var_os(DISABLE_ENV).is_some(),
        }
    }
}
