pub mod env;
pub mod io;
pub mod schema;

pub use env::{substitute_env_vars, substitute_env_vars_with, MissingEnvVarError};
pub use io::{default_config_path, load, load_with_env, ConfigError};
pub use schema::{
    DatabaseSettings, GatewaySettings, LendForgeConfig, OcrSettings, VerificationSettings,
};
