use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
pub mod models;
pub use models::*;

pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "MEDBOOK".to_string());
    tracing::debug!("loading configuration for RUN_ENV '{run_env}' with prefix '{prefix}'");

    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_env)).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(raw_config)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is loaded at most once per process. `DOTENV_OVERRIDE` names an
/// alternative file; otherwise `.env` in the working directory is used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = std::env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
